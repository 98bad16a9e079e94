//! Port for the `family_members` join table and its nested read models.
//!
//! Adapters must report the database's uniqueness and foreign-key
//! violations through the dedicated error variants below; the membership
//! service relies on them instead of checking for existing rows first.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::{
    FamilyId, FamilyMember, FamilyMembership, FamilyRoleId, UserFamily, UserId,
};

use super::define_port_error;

define_port_error! {
    /// Errors raised by membership repository adapters.
    pub enum MembershipRepositoryError {
        /// Repository connection could not be established.
        Connection { message: String } =>
            "membership repository connection failed: {message}",
        /// Query or mutation failed during execution.
        Query { message: String } =>
            "membership repository query failed: {message}",
        /// The `(user_id, family_id)` pair already has a membership row.
        DuplicateMembership =>
            "user is already a member of this family",
        /// The referenced user does not exist.
        UnknownUser => "referenced user does not exist",
        /// The referenced family does not exist.
        UnknownFamily => "referenced family does not exist",
        /// The referenced family role does not exist.
        UnknownRole => "referenced family role does not exist",
    }
}

/// Storage and joined reads for memberships.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipRepository: Send + Sync {
    /// Families the user belongs to with the role held in each, resolved in
    /// a single join. Ordered by family creation time.
    async fn list_for_user(
        &self,
        user_id: &UserId,
    ) -> Result<Vec<UserFamily>, MembershipRepositoryError>;

    /// Members of the family with the role each holds, resolved in a single
    /// join. Ordered by membership creation time.
    async fn list_for_family(
        &self,
        family_id: &FamilyId,
    ) -> Result<Vec<FamilyMember>, MembershipRepositoryError>;

    /// Insert a new membership row.
    ///
    /// Returns [`MembershipRepositoryError::DuplicateMembership`] when the
    /// pair is already present.
    async fn insert(
        &self,
        membership: &FamilyMembership,
    ) -> Result<FamilyMembership, MembershipRepositoryError>;

    /// Set the role and `updated_at` of the membership for the pair.
    ///
    /// Returns `None` when no membership matched.
    async fn update_role(
        &self,
        user_id: &UserId,
        family_id: &FamilyId,
        family_role_id: Option<FamilyRoleId>,
        updated_at: DateTime<Utc>,
    ) -> Result<Option<FamilyMembership>, MembershipRepositoryError>;

    /// Delete the membership for the pair, returning whether a row was removed.
    async fn delete(
        &self,
        user_id: &UserId,
        family_id: &FamilyId,
    ) -> Result<bool, MembershipRepositoryError>;
}
