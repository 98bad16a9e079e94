//! Membership mutation handlers.
//!
//! ```text
//! POST   /api/v1/family-members
//! PUT    /api/v1/family-members
//! DELETE /api/v1/family-members
//! ```
//!
//! The `"none"` role sentinel is resolved here, before the domain sees the
//! request.

use actix_web::{HttpResponse, delete, post, put, web};

use crate::domain::ports::{
    AddFamilyMemberRequest, RemoveFamilyMemberRequest, UpdateFamilyMemberRoleRequest,
};
use crate::inbound::http::ApiResult;
use crate::inbound::http::families_dto::{
    FamilyMemberRequest, MembershipResponse, RemoveFamilyMemberBody, RemoveFamilyMemberResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FAMILY_ID, USER_ID, normalize_family_role_id, parse_required_id,
};

fn parse_add_request(payload: FamilyMemberRequest) -> ApiResult<AddFamilyMemberRequest> {
    Ok(AddFamilyMemberRequest {
        user_id: parse_required_id(payload.user_id, USER_ID)?,
        family_id: parse_required_id(payload.family_id, FAMILY_ID)?,
        family_role_id: normalize_family_role_id(payload.family_role_id)?,
    })
}

fn parse_update_request(payload: FamilyMemberRequest) -> ApiResult<UpdateFamilyMemberRoleRequest> {
    let AddFamilyMemberRequest {
        user_id,
        family_id,
        family_role_id,
    } = parse_add_request(payload)?;
    Ok(UpdateFamilyMemberRoleRequest {
        user_id,
        family_id,
        family_role_id,
    })
}

fn parse_remove_request(payload: RemoveFamilyMemberBody) -> ApiResult<RemoveFamilyMemberRequest> {
    Ok(RemoveFamilyMemberRequest {
        user_id: parse_required_id(payload.user_id, USER_ID)?,
        family_id: parse_required_id(payload.family_id, FAMILY_ID)?,
    })
}

/// Add a user to a family.
#[utoipa::path(
    post,
    path = "/api/v1/family-members",
    request_body = FamilyMemberRequest,
    responses(
        (status = 201, description = "Membership created", body = MembershipResponse),
        (status = 400, description = "Invalid identifiers or unknown role", body = ErrorSchema),
        (status = 404, description = "User or family not found", body = ErrorSchema),
        (status = 409, description = "Already a member", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["memberships"],
    operation_id = "addFamilyMember"
)]
#[post("/family-members")]
pub async fn add_family_member(
    state: web::Data<HttpState>,
    payload: web::Json<FamilyMemberRequest>,
) -> ApiResult<HttpResponse> {
    let request = parse_add_request(payload.into_inner())?;
    let membership = state.memberships.add_user_to_family(request).await?;
    Ok(HttpResponse::Created().json(MembershipResponse::from(membership)))
}

/// Change the role of an existing member.
#[utoipa::path(
    put,
    path = "/api/v1/family-members",
    request_body = FamilyMemberRequest,
    responses(
        (status = 200, description = "Membership updated", body = MembershipResponse),
        (status = 400, description = "Invalid identifiers or unknown role", body = ErrorSchema),
        (status = 404, description = "Membership not found", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["memberships"],
    operation_id = "updateFamilyMemberRole"
)]
#[put("/family-members")]
pub async fn update_family_member_role(
    state: web::Data<HttpState>,
    payload: web::Json<FamilyMemberRequest>,
) -> ApiResult<web::Json<MembershipResponse>> {
    let request = parse_update_request(payload.into_inner())?;
    let membership = state.memberships.update_family_member_role(request).await?;
    Ok(web::Json(membership.into()))
}

/// Remove a user from a family. Removing an absent membership succeeds.
#[utoipa::path(
    delete,
    path = "/api/v1/family-members",
    request_body = RemoveFamilyMemberBody,
    responses(
        (status = 200, description = "Membership removed or already absent", body = RemoveFamilyMemberResponse),
        (status = 400, description = "Invalid identifiers", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["memberships"],
    operation_id = "removeFamilyMember"
)]
#[delete("/family-members")]
pub async fn remove_family_member(
    state: web::Data<HttpState>,
    payload: web::Json<RemoveFamilyMemberBody>,
) -> ApiResult<web::Json<RemoveFamilyMemberResponse>> {
    let request = parse_remove_request(payload.into_inner())?;
    let removed = state.memberships.remove_user_from_family(request).await?;
    Ok(web::Json(RemoveFamilyMemberResponse {
        success: true,
        removed,
    }))
}

#[cfg(test)]
#[path = "memberships_tests.rs"]
mod tests;
