//! Family, family role and membership read handlers.
//!
//! ```text
//! GET  /api/v1/families
//! POST /api/v1/families
//! GET  /api/v1/families/{familyId}
//! GET  /api/v1/families/{familyId}/members
//! GET  /api/v1/family-roles
//! GET  /api/v1/users/{userId}/families
//! ```

use actix_web::{HttpResponse, get, post, web};

use crate::domain::{Error, FamilyId, UserId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::families_dto::{
    CreateFamilyRequest, FamilyMemberResponse, FamilyResponse, FamilyRoleResponse,
    UserFamilyResponse,
};
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;
use crate::inbound::http::validation::{
    FAMILY_ID, NAME, USER_ID, missing_field_error, parse_required_id,
};

/// List every family, oldest first.
#[utoipa::path(
    get,
    path = "/api/v1/families",
    responses(
        (status = 200, description = "All families", body = [FamilyResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema),
        (status = 503, description = "Database unavailable", body = ErrorSchema)
    ),
    tags = ["families"],
    operation_id = "listFamilies"
)]
#[get("/families")]
pub async fn list_families(state: web::Data<HttpState>) -> ApiResult<web::Json<Vec<FamilyResponse>>> {
    let families = state.families.get_families().await?;
    Ok(web::Json(families.into_iter().map(Into::into).collect()))
}

/// Create a family.
#[utoipa::path(
    post,
    path = "/api/v1/families",
    request_body = CreateFamilyRequest,
    responses(
        (status = 201, description = "Family created", body = FamilyResponse),
        (status = 400, description = "Invalid name", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["families"],
    operation_id = "createFamily"
)]
#[post("/families")]
pub async fn create_family(
    state: web::Data<HttpState>,
    payload: web::Json<CreateFamilyRequest>,
) -> ApiResult<HttpResponse> {
    let name = payload
        .into_inner()
        .name
        .ok_or_else(|| missing_field_error(NAME))?;
    let family = state.families_command.create_family(name).await?;
    Ok(HttpResponse::Created().json(FamilyResponse::from(family)))
}

/// Fetch one family.
#[utoipa::path(
    get,
    path = "/api/v1/families/{familyId}",
    params(("familyId" = String, Path, description = "Family UUID")),
    responses(
        (status = 200, description = "Family", body = FamilyResponse),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 404, description = "No such family", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["families"],
    operation_id = "getFamily"
)]
#[get("/families/{family_id}")]
pub async fn get_family(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<FamilyResponse>> {
    let family_id: FamilyId = parse_required_id(Some(path.into_inner()), FAMILY_ID)?;
    let family = state
        .families
        .get_family(&family_id)
        .await?
        .ok_or_else(|| Error::not_found("Family not found."))?;
    Ok(web::Json(family.into()))
}

/// Members of a family with their roles.
#[utoipa::path(
    get,
    path = "/api/v1/families/{familyId}/members",
    params(("familyId" = String, Path, description = "Family UUID")),
    responses(
        (status = 200, description = "Members with optional role", body = [FamilyMemberResponse]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["families"],
    operation_id = "listFamilyMembers"
)]
#[get("/families/{family_id}/members")]
pub async fn list_family_members(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<FamilyMemberResponse>>> {
    let family_id: FamilyId = parse_required_id(Some(path.into_inner()), FAMILY_ID)?;
    let members = state.families.get_family_members(&family_id).await?;
    Ok(web::Json(members.into_iter().map(Into::into).collect()))
}

/// The family role vocabulary. Empty when the lookup is unavailable.
#[utoipa::path(
    get,
    path = "/api/v1/family-roles",
    responses((status = 200, description = "Roles ordered by name", body = [FamilyRoleResponse])),
    tags = ["families"],
    operation_id = "listFamilyRoles"
)]
#[get("/family-roles")]
pub async fn list_family_roles(state: web::Data<HttpState>) -> web::Json<Vec<FamilyRoleResponse>> {
    let roles = state.families.get_family_roles().await;
    web::Json(roles.into_iter().map(Into::into).collect())
}

/// Families a user belongs to. Empty when the lookup fails.
#[utoipa::path(
    get,
    path = "/api/v1/users/{userId}/families",
    params(("userId" = String, Path, description = "User UUID")),
    responses(
        (status = 200, description = "Families with the user's role", body = [UserFamilyResponse]),
        (status = 400, description = "Malformed identifier", body = ErrorSchema)
    ),
    tags = ["families"],
    operation_id = "listUserFamilies"
)]
#[get("/users/{user_id}/families")]
pub async fn list_user_families(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<Vec<UserFamilyResponse>>> {
    let user_id: UserId = parse_required_id(Some(path.into_inner()), USER_ID)?;
    let families = state.families.get_families_for_user(&user_id).await;
    Ok(web::Json(families.into_iter().map(Into::into).collect()))
}

#[cfg(test)]
#[path = "families_tests.rs"]
mod tests;
