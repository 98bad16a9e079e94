//! PostgreSQL-backed `MembershipRepository`.
//!
//! Both nested reads are resolved with a single join each; the role side is
//! a left join so members without a role are kept. Uniqueness and foreign-key
//! violations raised by the database are translated into the port's
//! dedicated variants by constraint name.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use diesel_async::RunQueryDsl;
use tracing::warn;

use crate::domain::ports::{MembershipRepository, MembershipRepositoryError};
use crate::domain::{
    FamilyId, FamilyMember, FamilyMembership, FamilyRoleId, UserFamily, UserId,
};

use super::diesel_basic_error_mapping::{
    log_diesel_error, map_basic_diesel_error, map_basic_pool_error,
};
use super::models::{
    FamilyRoleRow, FamilyRow, MembershipRoleUpdate, MembershipRow, NewMembershipRow, UserRow,
    family_from_row, family_role_from_row, membership_from_row, user_from_row,
};
use super::pool::{DbPool, PoolError};
use super::schema::{families, family_members, family_roles, users};

const UNIQUE_USER_FAMILY: &str = "family_members_user_family_key";
const USER_FKEY: &str = "family_members_user_id_fkey";
const FAMILY_FKEY: &str = "family_members_family_id_fkey";
const ROLE_FKEY: &str = "family_members_family_role_id_fkey";

/// Diesel-backed implementation of the membership repository port.
#[derive(Clone)]
pub struct DieselMembershipRepository {
    pool: DbPool,
}

impl DieselMembershipRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> MembershipRepositoryError {
    map_basic_pool_error(error, MembershipRepositoryError::connection)
}

fn map_diesel_error(error: DieselError, operation: &str) -> MembershipRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        MembershipRepositoryError::query,
        MembershipRepositoryError::connection,
    )
}

/// Pick the constraint a violation refers to, falling back to the message
/// when the driver did not report a constraint name.
fn violated_constraint<'a>(
    candidates: &[&'a str],
    constraint_name: Option<&str>,
    message: &str,
) -> Option<&'a str> {
    candidates.iter().copied().find(|candidate| {
        constraint_name.map_or_else(|| message.contains(candidate), |name| name == *candidate)
    })
}

/// Classify a constraint violation raised on `family_members`.
fn classify_violation(
    kind: &DatabaseErrorKind,
    constraint: Option<&str>,
    message: &str,
) -> Option<MembershipRepositoryError> {
    match kind {
        DatabaseErrorKind::UniqueViolation => {
            violated_constraint(&[UNIQUE_USER_FAMILY], constraint, message)
                .map(|_| MembershipRepositoryError::duplicate_membership())
        }
        DatabaseErrorKind::ForeignKeyViolation => {
            match violated_constraint(&[USER_FKEY, FAMILY_FKEY, ROLE_FKEY], constraint, message) {
                Some(USER_FKEY) => Some(MembershipRepositoryError::unknown_user()),
                Some(FAMILY_FKEY) => Some(MembershipRepositoryError::unknown_family()),
                Some(ROLE_FKEY) => Some(MembershipRepositoryError::unknown_role()),
                _ => {
                    warn!(?constraint, "unrecognised foreign key violation on family_members");
                    None
                }
            }
        }
        _ => None,
    }
}

/// Map write failures, recognising the membership constraints.
fn map_write_error(error: DieselError, operation: &str) -> MembershipRepositoryError {
    let mapped = match &error {
        DieselError::DatabaseError(kind, info) => {
            classify_violation(kind, info.constraint_name(), info.message())
        }
        _ => None,
    };
    match mapped {
        Some(mapped) => {
            log_diesel_error(&error, operation);
            mapped
        }
        None => map_diesel_error(error, operation),
    }
}

#[async_trait]
impl MembershipRepository for DieselMembershipRepository {
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserFamily>, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(FamilyRow, Option<FamilyRoleRow>)> = family_members::table
            .inner_join(families::table)
            .left_join(
                family_roles::table
                    .on(family_members::family_role_id.eq(family_roles::id.nullable())),
            )
            .filter(family_members::user_id.eq(user_id.as_uuid()))
            .order((families::created_at.asc(), families::id.asc()))
            .select((FamilyRow::as_select(), Option::<FamilyRoleRow>::as_select()))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list families for user"))?;

        Ok(rows
            .into_iter()
            .map(|(family, role)| UserFamily {
                family: family_from_row(family),
                family_role: role.map(family_role_from_row),
            })
            .collect())
    }

    async fn list_for_family(
        &self,
        family_id: &FamilyId,
    ) -> Result<Vec<FamilyMember>, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<(UserRow, Option<FamilyRoleRow>)> = family_members::table
            .inner_join(users::table)
            .left_join(
                family_roles::table
                    .on(family_members::family_role_id.eq(family_roles::id.nullable())),
            )
            .filter(family_members::family_id.eq(family_id.as_uuid()))
            .order((family_members::created_at.asc(), family_members::id.asc()))
            .select((UserRow::as_select(), Option::<FamilyRoleRow>::as_select()))
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list family members"))?;

        Ok(rows
            .into_iter()
            .map(|(user, role)| FamilyMember {
                user: user_from_row(user),
                family_role: role.map(family_role_from_row),
            })
            .collect())
    }

    async fn insert(
        &self,
        membership: &FamilyMembership,
    ) -> Result<FamilyMembership, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: MembershipRow = diesel::insert_into(family_members::table)
            .values(NewMembershipRow::from(membership))
            .returning(MembershipRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_write_error(err, "insert membership"))?;

        Ok(membership_from_row(row))
    }

    async fn update_role(
        &self,
        user_id: &UserId,
        family_id: &FamilyId,
        family_role_id: Option<FamilyRoleId>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<FamilyMembership>, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let changes = MembershipRoleUpdate {
            family_role_id: family_role_id.map(|id| *id.as_uuid()),
            updated_at,
        };
        let row = diesel::update(
            family_members::table
                .filter(family_members::user_id.eq(user_id.as_uuid()))
                .filter(family_members::family_id.eq(family_id.as_uuid())),
        )
        .set(&changes)
        .returning(MembershipRow::as_returning())
        .get_result::<MembershipRow>(&mut conn)
        .await
        .optional()
        .map_err(|err| map_write_error(err, "update membership role"))?;

        Ok(row.map(membership_from_row))
    }

    async fn delete(
        &self,
        user_id: &UserId,
        family_id: &FamilyId,
    ) -> Result<bool, MembershipRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let deleted = diesel::delete(
            family_members::table
                .filter(family_members::user_id.eq(user_id.as_uuid()))
                .filter(family_members::family_id.eq(family_id.as_uuid())),
        )
        .execute(&mut conn)
        .await
        .map_err(|err| map_diesel_error(err, "delete membership"))?;

        Ok(deleted > 0)
    }
}
