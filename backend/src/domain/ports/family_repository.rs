//! Port for persisting and reading families.

use async_trait::async_trait;

use crate::domain::{Family, FamilyId};

use super::define_port_error;

define_port_error! {
    /// Errors raised by family repository adapters.
    pub enum FamilyRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "family repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } => "family repository query failed: {message}",
    }
}

/// Storage for the `families` table.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FamilyRepository: Send + Sync {
    /// Every family, oldest first. No pagination.
    async fn list_families(&self) -> Result<Vec<Family>, FamilyRepositoryError>;

    /// Fetch one family; `None` when no row matches.
    async fn find_by_id(&self, id: &FamilyId) -> Result<Option<Family>, FamilyRepositoryError>;

    /// Insert a fully built family and return the stored row.
    async fn insert(&self, family: &Family) -> Result<Family, FamilyRepositoryError>;
}
