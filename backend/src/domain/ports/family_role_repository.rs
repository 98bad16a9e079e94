//! Port for the read-only family role lookup table.

use async_trait::async_trait;

use crate::domain::FamilyRole;

use super::define_port_error;

define_port_error! {
    /// Errors raised by family role repository adapters.
    pub enum FamilyRoleRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } => "family role repository connection failed: {message}",
        /// Query failed during execution, including a missing table.
        Query { message: String } => "family role repository query failed: {message}",
    }
}

/// Read access to `family_roles`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FamilyRoleRepository: Send + Sync {
    /// All roles ordered by name.
    async fn list_roles(&self) -> Result<Vec<FamilyRole>, FamilyRoleRepositoryError>;
}
