//! Domain primitives, ports and services for family membership.
//!
//! Purpose: Define strongly typed entities shared by the HTTP and
//! persistence layers, the ports those layers plug into, and the services
//! that apply the membership rules.
//!
//! Public surface:
//! - Error / ErrorCode: transport-neutral failure with a stable code.
//! - Family, FamilyRole, FamilyMembership: stored rows.
//! - UserFamily, FamilyMember: joined read models.
//! - FamilyService, MembershipService: driving-port implementations.

pub mod error;
pub mod ports;

mod family;
mod family_service;
mod identifier;
mod membership_service;
#[cfg(test)]
pub(crate) mod test_support;
mod trace_id;
mod user;

pub use self::error::{Error, ErrorCode};
pub use self::family::{
    Family, FamilyId, FamilyMember, FamilyMembership, FamilyName, FamilyRole,
    FamilyRoleId, FamilyValidationError, MembershipId, UserFamily,
};
pub use self::family_service::FamilyService;
pub use self::identifier::IdentifierError;
pub use self::membership_service::MembershipService;
pub use self::trace_id::TraceId;
pub use self::user::{User, UserId};

/// Convenient API result alias.
///
/// # Examples
/// ```
/// use family_office::domain::{ApiResult, Error};
///
/// fn lookup() -> ApiResult<()> {
///     Err(Error::not_found("Family not found."))
/// }
/// assert!(lookup().is_err());
/// ```
pub type ApiResult<T> = Result<T, Error>;
