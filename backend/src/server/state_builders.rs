//! Wire Diesel adapters into the domain services behind the HTTP state.

use std::sync::Arc;

use actix_web::web;
use mockable::DefaultClock;

use family_office::domain::{FamilyService, MembershipService};
use family_office::inbound::http::state::HttpState;
use family_office::outbound::persistence::{
    DbPool, DieselFamilyRepository, DieselFamilyRoleRepository, DieselMembershipRepository,
};

/// Build the HTTP state from a shared connection pool.
pub(crate) fn build_http_state(pool: &DbPool) -> web::Data<HttpState> {
    let memberships = Arc::new(DieselMembershipRepository::new(pool.clone()));
    let families = Arc::new(FamilyService::new(
        Arc::new(DieselFamilyRepository::new(pool.clone())),
        Arc::new(DieselFamilyRoleRepository::new(pool.clone())),
        memberships.clone(),
        Arc::new(DefaultClock),
    ));
    let membership_service = Arc::new(MembershipService::new(memberships, Arc::new(DefaultClock)));

    web::Data::new(HttpState::new(
        families.clone(),
        families,
        membership_service,
    ))
}
