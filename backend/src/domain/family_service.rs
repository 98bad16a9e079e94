//! Family, role and membership read services.
//!
//! Implements [`FamiliesQuery`] and [`FamiliesCommand`]. Two reads are
//! fail-soft: role listing and a user's family list feed optional UI
//! sections, so a failure is logged and an empty list returned. All other
//! operations log the repository failure and replace it with a fixed
//! message so database detail never reaches callers.

use std::sync::Arc;

use async_trait::async_trait;
use mockable::Clock;
use tracing::{error, warn};

use crate::domain::ports::{
    FamiliesCommand, FamiliesQuery, FamilyRepository, FamilyRepositoryError,
    FamilyRoleRepository, MembershipRepository, MembershipRepositoryError,
};
use crate::domain::{
    Error, Family, FamilyId, FamilyMember, FamilyName, FamilyRole, UserFamily, UserId,
};

const FETCH_FAMILIES_FAILED: &str = "Failed to fetch families.";
const FETCH_FAMILY_FAILED: &str = "Failed to fetch family.";
const CREATE_FAMILY_FAILED: &str = "Failed to create family.";
const FETCH_MEMBERS_FAILED: &str = "Failed to fetch family members.";

/// Service backing the family read and create use-cases.
#[derive(Clone)]
pub struct FamilyService<F, R, M> {
    families: Arc<F>,
    roles: Arc<R>,
    memberships: Arc<M>,
    clock: Arc<dyn Clock>,
}

impl<F, R, M> FamilyService<F, R, M> {
    /// Create a service over the given repositories.
    pub fn new(
        families: Arc<F>,
        roles: Arc<R>,
        memberships: Arc<M>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        Self {
            families,
            roles,
            memberships,
            clock,
        }
    }
}

fn map_family_error(error: FamilyRepositoryError, message: &'static str) -> Error {
    error!(%error, "{message}");
    match error {
        FamilyRepositoryError::Connection { .. } => Error::service_unavailable(message),
        FamilyRepositoryError::Query { .. } => Error::internal(message),
    }
}

fn map_members_error(error: MembershipRepositoryError) -> Error {
    error!(%error, "{FETCH_MEMBERS_FAILED}");
    match error {
        MembershipRepositoryError::Connection { .. } => {
            Error::service_unavailable(FETCH_MEMBERS_FAILED)
        }
        _ => Error::internal(FETCH_MEMBERS_FAILED),
    }
}

#[async_trait]
impl<F, R, M> FamiliesQuery for FamilyService<F, R, M>
where
    F: FamilyRepository,
    R: FamilyRoleRepository,
    M: MembershipRepository,
{
    async fn get_families(&self) -> Result<Vec<Family>, Error> {
        self.families
            .list_families()
            .await
            .map_err(|err| map_family_error(err, FETCH_FAMILIES_FAILED))
    }

    async fn get_family(&self, family_id: &FamilyId) -> Result<Option<Family>, Error> {
        self.families
            .find_by_id(family_id)
            .await
            .map_err(|err| map_family_error(err, FETCH_FAMILY_FAILED))
    }

    async fn get_family_roles(&self) -> Vec<FamilyRole> {
        match self.roles.list_roles().await {
            Ok(roles) => roles,
            Err(error) => {
                error!(%error, "failed to fetch family roles; returning none");
                Vec::new()
            }
        }
    }

    async fn get_families_for_user(&self, user_id: &UserId) -> Vec<UserFamily> {
        match self.memberships.list_for_user(user_id).await {
            Ok(families) => families,
            Err(error) => {
                error!(%error, %user_id, "failed to fetch families for user; returning none");
                Vec::new()
            }
        }
    }

    async fn get_family_members(&self, family_id: &FamilyId) -> Result<Vec<FamilyMember>, Error> {
        self.memberships
            .list_for_family(family_id)
            .await
            .map_err(map_members_error)
    }
}

#[async_trait]
impl<F, R, M> FamiliesCommand for FamilyService<F, R, M>
where
    F: FamilyRepository,
    R: FamilyRoleRepository,
    M: MembershipRepository,
{
    async fn create_family(&self, name: String) -> Result<Family, Error> {
        let name = FamilyName::new(name).map_err(|err| {
            warn!(error = %err, "rejected family name");
            Error::invalid_request(err.to_string()).with_details(serde_json::json!({
                "field": "name",
                "code": "invalid_family_name",
            }))
        })?;
        let family = Family::new(name, self.clock.utc());
        self.families
            .insert(&family)
            .await
            .map_err(|err| map_family_error(err, CREATE_FAMILY_FAILED))
    }
}
