//! PostgreSQL-backed `FamilyRoleRepository`.
//!
//! Roles are read with a hand-written statement and decoded by column name
//! into [`FamilyRoleRow`], which names every column of the table.

use async_trait::async_trait;
use diesel::sql_query;
use diesel_async::RunQueryDsl;

use crate::domain::FamilyRole;
use crate::domain::ports::{FamilyRoleRepository, FamilyRoleRepositoryError};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{FamilyRoleRow, family_role_from_row};
use super::pool::DbPool;

const LIST_ROLES_SQL: &str = "\
SELECT id, name, description, created_at, updated_at \
FROM family_roles \
ORDER BY name ASC";

/// Diesel-backed implementation of the family role repository port.
#[derive(Clone)]
pub struct DieselFamilyRoleRepository {
    pool: DbPool,
}

impl DieselFamilyRoleRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FamilyRoleRepository for DieselFamilyRoleRepository {
    async fn list_roles(&self) -> Result<Vec<FamilyRole>, FamilyRoleRepositoryError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|err| map_basic_pool_error(err, FamilyRoleRepositoryError::connection))?;

        let rows: Vec<FamilyRoleRow> = sql_query(LIST_ROLES_SQL)
            .load(&mut conn)
            .await
            .map_err(|err| {
                map_basic_diesel_error(
                    err,
                    "list family roles",
                    FamilyRoleRepositoryError::query,
                    FamilyRoleRepositoryError::connection,
                )
            })?;

        Ok(rows.into_iter().map(family_role_from_row).collect())
    }
}
