//! Tests for family read and create handlers.

use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{App, test as actix_test, web};
use serde_json::{Value, json};

use crate::domain::ports::{MockFamiliesCommand, MockFamiliesQuery, MockMembershipCommand};
use crate::domain::test_support::{sample_family, sample_role, sample_user};
use crate::domain::{Error, Family, FamilyMember, UserFamily};
use crate::inbound::http::api_v1;
use crate::inbound::http::state::HttpState;

fn state_with(query: MockFamiliesQuery, command: MockFamiliesCommand) -> HttpState {
    HttpState::new(
        Arc::new(query),
        Arc::new(command),
        Arc::new(MockMembershipCommand::new()),
    )
}

async fn call(state: HttpState, req: actix_test::TestRequest) -> (StatusCode, Value) {
    let app = actix_test::init_service(
        App::new()
            .app_data(web::Data::new(state))
            .service(web::scope("/api/v1").configure(api_v1)),
    )
    .await;
    let res = actix_test::call_service(&app, req.to_request()).await;
    let status = res.status();
    let body = actix_test::read_body(res).await;
    let value = if body.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body).expect("json body")
    };
    (status, value)
}

#[actix_web::test]
async fn list_families_returns_camel_case_rows() {
    let family = sample_family("Doe Family");
    let expected_id = family.id.to_string();
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_families()
        .times(1)
        .return_once(move || Ok(vec![family]));

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri("/api/v1/families"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["id"], json!(expected_id));
    assert_eq!(body[0]["name"], json!("Doe Family"));
    assert!(body[0].get("createdAt").is_some());
}

#[actix_web::test]
async fn list_families_surfaces_fixed_failure_message() {
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_families()
        .times(1)
        .return_once(|| Err(Error::internal("Failed to fetch families.")));

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri("/api/v1/families"),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["error"], json!("Failed to fetch families."));
    assert_eq!(body["code"], json!("internal_error"));
}

#[actix_web::test]
async fn create_family_returns_created() {
    let mut command = MockFamiliesCommand::new();
    command
        .expect_create_family()
        .withf(|name: &String| name == "Doe Family")
        .times(1)
        .returning(|name| Ok(sample_family(&name)));

    let (status, body) = call(
        state_with(MockFamiliesQuery::new(), command),
        actix_test::TestRequest::post()
            .uri("/api/v1/families")
            .set_json(json!({ "name": "Doe Family" })),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["name"], json!("Doe Family"));
}

#[actix_web::test]
async fn create_family_requires_name_field() {
    let mut command = MockFamiliesCommand::new();
    command.expect_create_family().times(0);

    let (status, body) = call(
        state_with(MockFamiliesQuery::new(), command),
        actix_test::TestRequest::post()
            .uri("/api/v1/families")
            .set_json(json!({})),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], json!("name"));
    assert_eq!(body["details"]["code"], json!("missing_field"));
}

#[actix_web::test]
async fn malformed_json_is_a_bad_request() {
    let (status, body) = call(
        state_with(MockFamiliesQuery::new(), MockFamiliesCommand::new()),
        actix_test::TestRequest::post()
            .uri("/api/v1/families")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], json!("invalid_request"));
}

#[actix_web::test]
async fn get_family_maps_absence_to_not_found() {
    let mut query = MockFamiliesQuery::new();
    query.expect_get_family().times(1).return_once(|_| Ok(None));

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri(&format!("/api/v1/families/{}", uuid::Uuid::new_v4())),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], json!("Family not found."));
}

#[actix_web::test]
async fn get_family_returns_row() {
    let family = sample_family("Doe Family");
    let path = format!("/api/v1/families/{}", family.id);
    let expected = family.clone();
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_family()
        .withf(move |id| *id == expected.id)
        .times(1)
        .return_once(move |_| Ok(Some(family)));

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri(&path),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], json!("Doe Family"));
}

#[actix_web::test]
async fn get_family_rejects_malformed_id() {
    let mut query = MockFamiliesQuery::new();
    query.expect_get_family().times(0);

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri("/api/v1/families/not-a-uuid"),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["code"], json!("invalid_uuid"));
    assert_eq!(body["details"]["field"], json!("familyId"));
}

#[actix_web::test]
async fn members_render_nested_user_and_optional_role() {
    let members = vec![
        FamilyMember {
            user: sample_user("Jane"),
            family_role: Some(sample_role("Parent")),
        },
        FamilyMember {
            user: sample_user("John"),
            family_role: None,
        },
    ];
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_family_members()
        .times(1)
        .return_once(move |_| Ok(members));

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri(&format!(
            "/api/v1/families/{}/members",
            uuid::Uuid::new_v4()
        )),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["user"]["fullName"], json!("Jane Doe"));
    assert_eq!(body[0]["familyRole"]["name"], json!("Parent"));
    assert_eq!(body[1]["familyRole"], Value::Null);
}

#[actix_web::test]
async fn family_roles_endpoint_always_succeeds() {
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_family_roles()
        .times(1)
        .return_once(Vec::new);

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri("/api/v1/family-roles"),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[actix_web::test]
async fn user_families_render_family_and_role() {
    let families = vec![UserFamily {
        family: sample_family("Doe Family"),
        family_role: Some(sample_role("Trustee")),
    }];
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_families_for_user()
        .times(1)
        .return_once(move |_| families);

    let (status, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri(&format!(
            "/api/v1/users/{}/families",
            uuid::Uuid::new_v4()
        )),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body[0]["family"]["name"], json!("Doe Family"));
    assert_eq!(body[0]["familyRole"]["name"], json!("Trustee"));
}

#[actix_web::test]
async fn family_response_carries_unnamed_rows() {
    let mut family: Family = sample_family("ignored");
    family.name = None;
    let mut query = MockFamiliesQuery::new();
    query
        .expect_get_families()
        .times(1)
        .return_once(move || Ok(vec![family]));

    let (_, body) = call(
        state_with(query, MockFamiliesCommand::new()),
        actix_test::TestRequest::get().uri("/api/v1/families"),
    )
    .await;

    assert_eq!(body[0]["name"], Value::Null);
}
