//! Internal Diesel row structs and their domain mappings.
//!
//! Rows never leave the persistence layer. Each `*_from_row` function maps
//! every column explicitly so a schema change fails to compile here rather
//! than silently dropping a field.

use chrono::{DateTime, Utc};
use diesel::prelude::*;
use uuid::Uuid;

use super::schema::{families, family_members, family_roles, users};
use crate::domain::{
    Family, FamilyId, FamilyMembership, FamilyRole, FamilyRoleId, MembershipId, User, UserId,
};

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

/// Row struct for reading from the users table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = users)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct UserRow {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub(crate) fn user_from_row(row: UserRow) -> User {
    let UserRow {
        id,
        first_name,
        last_name,
        email,
        phone,
        status,
        role,
        created_at,
        updated_at,
    } = row;
    User {
        id: UserId::from_uuid(id),
        first_name,
        last_name,
        email,
        phone,
        status,
        role,
        created_at,
        updated_at,
    }
}

// ---------------------------------------------------------------------------
// Families
// ---------------------------------------------------------------------------

/// Row struct for reading from the families table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = families)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FamilyRow {
    pub id: Uuid,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating family records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = families)]
pub(crate) struct NewFamilyRow<'a> {
    pub id: Uuid,
    pub name: Option<&'a str>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> From<&'a Family> for NewFamilyRow<'a> {
    fn from(family: &'a Family) -> Self {
        Self {
            id: *family.id.as_uuid(),
            name: family.name.as_deref(),
            created_at: family.created_at,
            updated_at: family.updated_at,
        }
    }
}

pub(crate) fn family_from_row(row: FamilyRow) -> Family {
    let FamilyRow {
        id,
        name,
        created_at,
        updated_at,
    } = row;
    Family {
        id: FamilyId::from_uuid(id),
        name,
        created_at,
        updated_at,
    }
}

// ---------------------------------------------------------------------------
// Family roles
// ---------------------------------------------------------------------------

/// Row struct for the family_roles table.
///
/// Loaded by name from hand-written SQL and by column position from joins,
/// so it derives both `QueryableByName` and `Queryable`.
#[derive(Debug, Clone, Queryable, QueryableByName, Selectable)]
#[diesel(table_name = family_roles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct FamilyRoleRow {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

pub(crate) fn family_role_from_row(row: FamilyRoleRow) -> FamilyRole {
    let FamilyRoleRow {
        id,
        name,
        description,
        created_at,
        updated_at,
    } = row;
    FamilyRole {
        id: FamilyRoleId::from_uuid(id),
        name,
        description,
        created_at,
        updated_at,
    }
}

// ---------------------------------------------------------------------------
// Memberships
// ---------------------------------------------------------------------------

/// Row struct for reading from the family_members table.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = family_members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub(crate) struct MembershipRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub family_role_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Insertable struct for creating membership records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = family_members)]
pub(crate) struct NewMembershipRow {
    pub id: Uuid,
    pub user_id: Uuid,
    pub family_id: Uuid,
    pub family_role_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<&FamilyMembership> for NewMembershipRow {
    fn from(membership: &FamilyMembership) -> Self {
        Self {
            id: *membership.id.as_uuid(),
            user_id: *membership.user_id.as_uuid(),
            family_id: *membership.family_id.as_uuid(),
            family_role_id: membership.family_role_id.map(|id| *id.as_uuid()),
            created_at: membership.created_at,
            updated_at: membership.updated_at,
        }
    }
}

/// Changeset for reassigning a membership's role.
///
/// `None` must write `NULL`, so absent values are not skipped.
#[derive(Debug, Clone, AsChangeset)]
#[diesel(table_name = family_members)]
#[diesel(treat_none_as_null = true)]
pub(crate) struct MembershipRoleUpdate {
    pub family_role_id: Option<Uuid>,
    pub updated_at: DateTime<Utc>,
}

pub(crate) fn membership_from_row(row: MembershipRow) -> FamilyMembership {
    let MembershipRow {
        id,
        user_id,
        family_id,
        family_role_id,
        created_at,
        updated_at,
    } = row;
    FamilyMembership {
        id: MembershipId::from_uuid(id),
        user_id: UserId::from_uuid(user_id),
        family_id: FamilyId::from_uuid(family_id),
        family_role_id: family_role_id.map(FamilyRoleId::from_uuid),
        created_at,
        updated_at,
    }
}
