//! Driving port for family, role and membership reads.

use async_trait::async_trait;

use crate::domain::{Error, Family, FamilyId, FamilyMember, FamilyRole, UserFamily, UserId};

/// Read use-cases consumed by inbound adapters.
///
/// Failure policy differs per operation:
/// - [`get_family_roles`](Self::get_family_roles) and
///   [`get_families_for_user`](Self::get_families_for_user) are fail-soft:
///   they log the failure and return an empty list.
/// - Every other operation propagates a domain [`Error`].
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait FamiliesQuery: Send + Sync {
    /// All families.
    async fn get_families(&self) -> Result<Vec<Family>, Error>;

    /// A single family, `None` when absent.
    async fn get_family(&self, family_id: &FamilyId) -> Result<Option<Family>, Error>;

    /// Family role vocabulary ordered by name. Fail-soft.
    async fn get_family_roles(&self) -> Vec<FamilyRole>;

    /// Families the user belongs to. Fail-soft.
    async fn get_families_for_user(&self, user_id: &UserId) -> Vec<UserFamily>;

    /// Members of a family with their roles.
    async fn get_family_members(&self, family_id: &FamilyId) -> Result<Vec<FamilyMember>, Error>;
}
