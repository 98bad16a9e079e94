//! OpenAPI documentation configuration.
//!
//! [`ApiDoc`] registers every family, membership and health endpoint along
//! with the request/response payloads and the shared error schema. Swagger
//! UI serves it in debug builds and `cargo run --bin openapi-dump` exports
//! it for external tooling.

use crate::inbound::http::families_dto::{
    CreateFamilyRequest, FamilyMemberRequest, FamilyMemberResponse, FamilyResponse,
    FamilyRoleResponse, MembershipResponse, RemoveFamilyMemberBody, RemoveFamilyMemberResponse,
    UserFamilyResponse, UserResponse,
};
use crate::inbound::http::schemas::{ErrorCodeSchema, ErrorSchema};
use utoipa::OpenApi;

/// OpenAPI document for the REST API.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Family office backend API",
        description = "Families, family roles and family memberships.",
        license(
            name = "Apache-2.0",
            url = "https://www.apache.org/licenses/LICENSE-2.0.html"
        )
    ),
    servers(
        (url = "/", description = "Relative to the deployment base URL")
    ),
    paths(
        crate::inbound::http::families::list_families,
        crate::inbound::http::families::create_family,
        crate::inbound::http::families::get_family,
        crate::inbound::http::families::list_family_members,
        crate::inbound::http::families::list_family_roles,
        crate::inbound::http::families::list_user_families,
        crate::inbound::http::memberships::add_family_member,
        crate::inbound::http::memberships::update_family_member_role,
        crate::inbound::http::memberships::remove_family_member,
        crate::inbound::http::health::ready,
        crate::inbound::http::health::live,
    ),
    components(schemas(
        ErrorSchema,
        ErrorCodeSchema,
        CreateFamilyRequest,
        FamilyMemberRequest,
        RemoveFamilyMemberBody,
        FamilyResponse,
        FamilyRoleResponse,
        UserResponse,
        UserFamilyResponse,
        FamilyMemberResponse,
        MembershipResponse,
        RemoveFamilyMemberResponse,
    )),
    tags(
        (name = "families", description = "Families, roles and member listings"),
        (name = "memberships", description = "Adding, re-roling and removing family members"),
        (name = "health", description = "Endpoints for health checks")
    )
)]
pub struct ApiDoc;
