//! Domain ports and supporting types for the hexagonal boundary.
//!
//! Driven ports (`*Repository`) are implemented by outbound adapters;
//! driving ports (`*Query`, `*Command`) are implemented by domain services
//! and called by inbound adapters.

mod macros;
pub(crate) use macros::define_port_error;

mod families_command;
mod families_query;
mod family_repository;
mod family_role_repository;
mod membership_command;
mod membership_repository;

#[cfg(test)]
pub use families_command::MockFamiliesCommand;
pub use families_command::FamiliesCommand;
#[cfg(test)]
pub use families_query::MockFamiliesQuery;
pub use families_query::FamiliesQuery;
#[cfg(test)]
pub use family_repository::MockFamilyRepository;
pub use family_repository::{FamilyRepository, FamilyRepositoryError};
#[cfg(test)]
pub use family_role_repository::MockFamilyRoleRepository;
pub use family_role_repository::{FamilyRoleRepository, FamilyRoleRepositoryError};
#[cfg(test)]
pub use membership_command::MockMembershipCommand;
pub use membership_command::{
    AddFamilyMemberRequest, MembershipCommand, RemoveFamilyMemberRequest,
    UpdateFamilyMemberRoleRequest,
};
#[cfg(test)]
pub use membership_repository::MockMembershipRepository;
pub use membership_repository::{MembershipRepository, MembershipRepositoryError};
