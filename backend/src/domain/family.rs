//! Families, family roles and the memberships joining users to families.
//!
//! ## Invariants
//! - A user holds at most one [`FamilyMembership`] per family. The database
//!   enforces this with a unique constraint; adapters report a violation as
//!   a duplicate-membership error.
//! - `family_role_id = None` means "member with no specific role".
//! - Only the role and `updated_at` of a membership change after creation.

use chrono::{DateTime, Utc};
use thiserror::Error;

use super::User;
use super::UserId;
use super::identifier::uuid_identifier;

uuid_identifier! {
    /// Identifier of a family.
    FamilyId => "family id"
}

uuid_identifier! {
    /// Identifier of a family role in the lookup table.
    FamilyRoleId => "family role id"
}

uuid_identifier! {
    /// Identifier of a membership row.
    MembershipId => "membership id"
}

/// Validation errors for [`FamilyName`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FamilyValidationError {
    #[error("family name must not be empty")]
    EmptyName,
}

/// Trimmed, non-empty family name.
///
/// # Examples
/// ```
/// use family_office::domain::FamilyName;
///
/// let name = FamilyName::new("  Doe Family ").expect("valid name");
/// assert_eq!(name.as_ref(), "Doe Family");
/// assert!(FamilyName::new("   ").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyName(String);

impl FamilyName {
    /// Validate and normalise a family name.
    pub fn new(name: impl Into<String>) -> Result<Self, FamilyValidationError> {
        let raw = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(FamilyValidationError::EmptyName);
        }
        Ok(Self(trimmed.to_owned()))
    }
}

impl AsRef<str> for FamilyName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl From<FamilyName> for String {
    fn from(value: FamilyName) -> Self {
        value.0
    }
}

/// Household or client grouping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Family {
    pub id: FamilyId,
    /// Rows created through this layer always carry a name; older rows may not.
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Family {
    /// Build a new family with a fresh identifier stamped at `now`.
    #[must_use]
    pub fn new(name: FamilyName, now: DateTime<Utc>) -> Self {
        Self {
            id: FamilyId::random(),
            name: Some(name.into()),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Entry in the closed vocabulary of family roles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyRole {
    pub id: FamilyRoleId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Join row associating a user with a family.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMembership {
    pub id: MembershipId,
    pub user_id: UserId,
    pub family_id: FamilyId,
    pub family_role_id: Option<FamilyRoleId>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl FamilyMembership {
    /// Build a new membership with a fresh identifier stamped at `now`.
    #[must_use]
    pub fn new(
        user_id: UserId,
        family_id: FamilyId,
        family_role_id: Option<FamilyRoleId>,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            id: MembershipId::random(),
            user_id,
            family_id,
            family_role_id,
            created_at: now,
            updated_at: now,
        }
    }
}

/// A family the user belongs to, with the role held in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserFamily {
    pub family: Family,
    pub family_role: Option<FamilyRole>,
}

/// A member of a family, with the role held in it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FamilyMember {
    pub user: User,
    pub family_role: Option<FamilyRole>,
}
