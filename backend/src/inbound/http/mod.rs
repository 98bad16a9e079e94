//! HTTP inbound adapter exposing the family endpoints.

pub mod error;
pub mod families;
pub mod families_dto;
pub mod health;
pub mod memberships;
pub mod schemas;
pub mod state;
pub mod validation;

use actix_web::{error::JsonPayloadError, web};
use serde_json::json;
use tracing::debug;

use crate::domain::Error;

pub use error::ApiResult;

/// Map malformed JSON bodies onto the standard error payload.
fn json_error_handler(err: JsonPayloadError, _req: &actix_web::HttpRequest) -> actix_web::Error {
    debug!(error = %err, "rejected request body");
    Error::invalid_request("request body must be valid JSON")
        .with_details(json!({ "code": "invalid_json" }))
        .into()
}

/// Register every `/api/v1` route on `cfg`.
///
/// # Examples
/// ```
/// use actix_web::{App, web};
/// use family_office::inbound::http::api_v1;
///
/// let _app = App::new().service(web::scope("/api/v1").configure(api_v1));
/// ```
pub fn api_v1(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(families::list_families)
        .service(families::create_family)
        .service(families::list_family_members)
        .service(families::get_family)
        .service(families::list_family_roles)
        .service(families::list_user_families)
        .service(memberships::add_family_member)
        .service(memberships::update_family_member_role)
        .service(memberships::remove_family_member);
}
