//! Request and response payloads for the family and membership endpoints.
//!
//! Domain entities carry no serde or `ToSchema` derives; only the
//! identifier newtypes serialise, as bare UUID strings. These camelCase
//! mirrors own the wire format.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::{Family, FamilyMember, FamilyMembership, FamilyRole, User, UserFamily};

/// Body of `POST /families`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateFamilyRequest {
    #[schema(example = "Doe Family")]
    pub name: Option<String>,
}

/// Body of `POST /family-members` and `PUT /family-members`.
///
/// `familyRoleId` may be omitted, `null`, `""` or `"none"` to mean no role.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberRequest {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub user_id: Option<String>,
    #[schema(example = "6b1f2d0a-3c4e-4f5a-8b9c-0d1e2f3a4b5c")]
    pub family_id: Option<String>,
    #[schema(example = "none")]
    pub family_role_id: Option<String>,
}

/// Body of `DELETE /family-members`.
#[derive(Debug, Default, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFamilyMemberBody {
    pub user_id: Option<String>,
    pub family_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyResponse {
    pub id: String,
    pub name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Family> for FamilyResponse {
    fn from(value: Family) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyRoleResponse {
    pub id: String,
    #[schema(example = "Parent")]
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FamilyRole> for FamilyRoleResponse {
    fn from(value: FamilyRole) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            description: value.description,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub status: String,
    pub role: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(value: User) -> Self {
        let full_name = value.full_name();
        Self {
            id: value.id.to_string(),
            first_name: value.first_name,
            last_name: value.last_name,
            full_name,
            email: value.email,
            phone: value.phone,
            status: value.status,
            role: value.role,
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// A family the user belongs to, with the role held there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserFamilyResponse {
    pub family: FamilyResponse,
    pub family_role: Option<FamilyRoleResponse>,
}

impl From<UserFamily> for UserFamilyResponse {
    fn from(value: UserFamily) -> Self {
        Self {
            family: value.family.into(),
            family_role: value.family_role.map(Into::into),
        }
    }
}

/// A member of a family, with the role held there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct FamilyMemberResponse {
    pub user: UserResponse,
    pub family_role: Option<FamilyRoleResponse>,
}

impl From<FamilyMember> for FamilyMemberResponse {
    fn from(value: FamilyMember) -> Self {
        Self {
            user: value.user.into(),
            family_role: value.family_role.map(Into::into),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MembershipResponse {
    pub id: String,
    pub user_id: String,
    pub family_id: String,
    pub family_role_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<FamilyMembership> for MembershipResponse {
    fn from(value: FamilyMembership) -> Self {
        Self {
            id: value.id.to_string(),
            user_id: value.user_id.to_string(),
            family_id: value.family_id.to_string(),
            family_role_id: value.family_role_id.map(|id| id.to_string()),
            created_at: value.created_at,
            updated_at: value.updated_at,
        }
    }
}

/// Result of `DELETE /family-members`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFamilyMemberResponse {
    pub success: bool,
    /// `false` when no membership existed for the pair.
    pub removed: bool,
}
