//! Driving port for creating families.

use async_trait::async_trait;

use crate::domain::{Error, Family};

/// Family write use-cases.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FamiliesCommand: Send + Sync {
    /// Create a family from untrusted input.
    ///
    /// Blank or whitespace-only names fail with
    /// [`ErrorCode::InvalidRequest`](crate::domain::ErrorCode::InvalidRequest).
    async fn create_family(&self, name: String) -> Result<Family, Error>;
}
