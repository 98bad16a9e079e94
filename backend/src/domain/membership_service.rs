//! Membership mutation service.
//!
//! Every operation is a single repository call. Uniqueness and referential
//! checks are left to the database; the adapter reports violations through
//! dedicated error variants which are mapped here to client-facing codes.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{debug, error, info, warn};

use crate::domain::ports::{
    AddFamilyMemberRequest, MembershipCommand, MembershipRepository, MembershipRepositoryError,
    RemoveFamilyMemberRequest, UpdateFamilyMemberRoleRequest,
};
use crate::domain::{Error, FamilyMembership};

const DUPLICATE_MEMBERSHIP: &str = "User is already a member of this family.";
const USER_NOT_FOUND: &str = "User not found.";
const FAMILY_NOT_FOUND: &str = "Family not found.";
const ROLE_NOT_FOUND: &str = "Family role not found.";
const MEMBERSHIP_NOT_FOUND: &str = "Membership not found.";
const ADD_FAILED: &str = "Failed to add user to family.";
const UPDATE_FAILED: &str = "Failed to update family member role.";
const REMOVE_FAILED: &str = "Failed to remove user from family.";

/// Service backing membership add, role change and removal.
#[derive(Clone)]
pub struct MembershipService<M> {
    memberships: Arc<M>,
    clock: Arc<dyn Clock>,
}

impl<M> MembershipService<M> {
    /// Create a service over the membership repository.
    pub fn new(memberships: Arc<M>, clock: Arc<dyn Clock>) -> Self {
        Self { memberships, clock }
    }
}

/// Map a repository failure onto a client-facing error.
///
/// Constraint violations keep a specific message and log at `warn`;
/// anything else logs at `error` and is replaced with `fallback`.
fn map_repository_error(error: MembershipRepositoryError, fallback: &'static str) -> Error {
    if !matches!(
        error,
        MembershipRepositoryError::Connection { .. } | MembershipRepositoryError::Query { .. }
    ) {
        warn!(%error, "membership change rejected");
    }
    match error {
        MembershipRepositoryError::DuplicateMembership => Error::conflict(DUPLICATE_MEMBERSHIP),
        MembershipRepositoryError::UnknownUser => Error::not_found(USER_NOT_FOUND),
        MembershipRepositoryError::UnknownFamily => Error::not_found(FAMILY_NOT_FOUND),
        MembershipRepositoryError::UnknownRole => {
            Error::invalid_request(ROLE_NOT_FOUND).with_details(serde_json::json!({
                "field": "familyRoleId",
                "code": "unknown_family_role",
            }))
        }
        MembershipRepositoryError::Connection { .. } => {
            error!(%error, "{fallback}");
            Error::service_unavailable(fallback)
        }
        MembershipRepositoryError::Query { .. } => {
            error!(%error, "{fallback}");
            Error::internal(fallback)
        }
    }
}

#[async_trait]
impl<M> MembershipCommand for MembershipService<M>
where
    M: MembershipRepository,
{
    async fn add_user_to_family(
        &self,
        request: AddFamilyMemberRequest,
    ) -> Result<FamilyMembership, Error> {
        let AddFamilyMemberRequest {
            user_id,
            family_id,
            family_role_id,
        } = request;
        let membership =
            FamilyMembership::new(user_id, family_id, family_role_id, self.clock.utc());
        let stored = self
            .memberships
            .insert(&membership)
            .await
            .map_err(|err| map_repository_error(err, ADD_FAILED))?;
        info!(%user_id, %family_id, membership_id = %stored.id, "user added to family");
        Ok(stored)
    }

    async fn update_family_member_role(
        &self,
        request: UpdateFamilyMemberRoleRequest,
    ) -> Result<FamilyMembership, Error> {
        let UpdateFamilyMemberRoleRequest {
            user_id,
            family_id,
            family_role_id,
        } = request;
        let updated = self
            .memberships
            .update_role(&user_id, &family_id, family_role_id, self.clock.utc())
            .await
            .map_err(|err| map_repository_error(err, UPDATE_FAILED))?;
        updated.ok_or_else(|| {
            debug!(%user_id, %family_id, "no membership to update");
            Error::not_found(MEMBERSHIP_NOT_FOUND)
        })
    }

    async fn remove_user_from_family(
        &self,
        request: RemoveFamilyMemberRequest,
    ) -> Result<bool, Error> {
        let RemoveFamilyMemberRequest { user_id, family_id } = request;
        let removed = self
            .memberships
            .delete(&user_id, &family_id)
            .await
            .map_err(|err| map_repository_error(err, REMOVE_FAILED))?;
        if removed {
            info!(%user_id, %family_id, "user removed from family");
        } else {
            debug!(%user_id, %family_id, "no membership to remove");
        }
        Ok(removed)
    }
}
