//! Diesel table definitions matching `migrations/`.
//!
//! Keep in step with the migrations by hand or with `diesel print-schema`.

diesel::table! {
    /// Users owned by the user-management subsystem; read-only here.
    users (id) {
        id -> Uuid,
        first_name -> Text,
        last_name -> Text,
        email -> Text,
        phone -> Nullable<Text>,
        status -> Text,
        role -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    families (id) {
        id -> Uuid,
        /// Nullable for rows created before names were required.
        name -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Closed role vocabulary, seeded by migration.
    family_roles (id) {
        id -> Uuid,
        name -> Text,
        description -> Nullable<Text>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::table! {
    /// Memberships; `(user_id, family_id)` is unique.
    family_members (id) {
        id -> Uuid,
        user_id -> Uuid,
        family_id -> Uuid,
        family_role_id -> Nullable<Uuid>,
        created_at -> Timestamptz,
        updated_at -> Timestamptz,
    }
}

diesel::joinable!(family_members -> users (user_id));
diesel::joinable!(family_members -> families (family_id));

diesel::allow_tables_to_appear_in_same_query!(users, families, family_roles, family_members);
