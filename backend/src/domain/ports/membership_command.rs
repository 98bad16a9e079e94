//! Driving port for membership mutations.

use async_trait::async_trait;

use crate::domain::{Error, FamilyId, FamilyMembership, FamilyRoleId, UserId};

/// Request to add a user to a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AddFamilyMemberRequest {
    pub user_id: UserId,
    pub family_id: FamilyId,
    /// `None` adds the user without a specific role.
    pub family_role_id: Option<FamilyRoleId>,
}

/// Request to reassign the role of an existing member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateFamilyMemberRoleRequest {
    pub user_id: UserId,
    pub family_id: FamilyId,
    /// `None` clears the role.
    pub family_role_id: Option<FamilyRoleId>,
}

/// Request to remove a user from a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoveFamilyMemberRequest {
    pub user_id: UserId,
    pub family_id: FamilyId,
}

/// Membership lifecycle: `absent -> active -> active (role change) -> absent`.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MembershipCommand: Send + Sync {
    /// Create a membership.
    ///
    /// Fails with `Conflict` when the user already belongs to the family.
    async fn add_user_to_family(
        &self,
        request: AddFamilyMemberRequest,
    ) -> Result<FamilyMembership, Error>;

    /// Change the role of a membership.
    ///
    /// Fails with `NotFound` when no membership exists for the pair.
    async fn update_family_member_role(
        &self,
        request: UpdateFamilyMemberRoleRequest,
    ) -> Result<FamilyMembership, Error>;

    /// Hard-delete a membership.
    ///
    /// Removing an absent membership succeeds; the returned flag is `false`
    /// in that case.
    async fn remove_user_from_family(&self, request: RemoveFamilyMemberRequest)
    -> Result<bool, Error>;
}
