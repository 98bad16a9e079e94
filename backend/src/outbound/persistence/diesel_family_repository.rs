//! PostgreSQL-backed `FamilyRepository`.

use async_trait::async_trait;
use diesel::prelude::*;
use diesel_async::RunQueryDsl;

use crate::domain::ports::{FamilyRepository, FamilyRepositoryError};
use crate::domain::{Family, FamilyId};

use super::diesel_basic_error_mapping::{map_basic_diesel_error, map_basic_pool_error};
use super::models::{FamilyRow, NewFamilyRow, family_from_row};
use super::pool::{DbPool, PoolError};
use super::schema::families;

/// Diesel-backed implementation of the family repository port.
#[derive(Clone)]
pub struct DieselFamilyRepository {
    pool: DbPool,
}

impl DieselFamilyRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn map_pool_error(error: PoolError) -> FamilyRepositoryError {
    map_basic_pool_error(error, FamilyRepositoryError::connection)
}

fn map_diesel_error(error: diesel::result::Error, operation: &str) -> FamilyRepositoryError {
    map_basic_diesel_error(
        error,
        operation,
        FamilyRepositoryError::query,
        FamilyRepositoryError::connection,
    )
}

#[async_trait]
impl FamilyRepository for DieselFamilyRepository {
    async fn list_families(&self) -> Result<Vec<Family>, FamilyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let rows: Vec<FamilyRow> = families::table
            .order((families::created_at.asc(), families::id.asc()))
            .select(FamilyRow::as_select())
            .load(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "list families"))?;

        Ok(rows.into_iter().map(family_from_row).collect())
    }

    async fn find_by_id(&self, id: &FamilyId) -> Result<Option<Family>, FamilyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row = families::table
            .filter(families::id.eq(id.as_uuid()))
            .select(FamilyRow::as_select())
            .first::<FamilyRow>(&mut conn)
            .await
            .optional()
            .map_err(|err| map_diesel_error(err, "find family"))?;

        Ok(row.map(family_from_row))
    }

    async fn insert(&self, family: &Family) -> Result<Family, FamilyRepositoryError> {
        let mut conn = self.pool.get().await.map_err(map_pool_error)?;

        let row: FamilyRow = diesel::insert_into(families::table)
            .values(NewFamilyRow::from(family))
            .returning(FamilyRow::as_returning())
            .get_result(&mut conn)
            .await
            .map_err(|err| map_diesel_error(err, "insert family"))?;

        Ok(family_from_row(row))
    }
}
