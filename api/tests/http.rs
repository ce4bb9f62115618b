use std::sync::Arc;

use axum::http::StatusCode;
use axum_test::TestServer;
use chrono::Utc;
use clap::Parser;
use jsonwebtoken::{EncodingKey, Header, encode};
use larder_api::{
    application::http::server::{app_state::AppState, http_server::router},
    args::Args,
};
use larder_core::{
    application::build_service,
    domain::{authentication::entities::JwtClaim, common::LarderConfig},
};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use test_context::{AsyncTestContext, test_context};
use uuid::Uuid;

const SECRET: &str = "integration-secret";

/// Router backed by a disconnected database: every request exercised here
/// must be settled before a repository is reached.
struct ApiContext {
    server: TestServer,
}

impl AsyncTestContext for ApiContext {
    async fn setup() -> Self {
        let args = Args::parse_from(["larder", "--auth-jwt-secret", SECRET]);
        let config = LarderConfig::from(args.clone());
        let service = build_service(DatabaseConnection::Disconnected, &config.auth);
        let state = AppState::new(Arc::new(args), service);

        let server = TestServer::new(router(state).unwrap()).unwrap();
        ApiContext { server }
    }
}

fn token(secret: &str, exp: i64) -> String {
    let claims = JwtClaim {
        sub: Uuid::new_v4(),
        exp,
        email: Some("cook@example.com".to_string()),
        aud: None,
        role: None,
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn valid_token() -> String {
    token(SECRET, Utc::now().timestamp() + 3600)
}

fn message(body: &Value) -> &str {
    body["message"].as_str().unwrap_or_default()
}

#[test_context(ApiContext)]
#[tokio::test]
async fn liveness_is_always_ok(ctx: &mut ApiContext) {
    ctx.server.get("/health/live").await.assert_status_ok();
}

#[test_context(ApiContext)]
#[tokio::test]
async fn readiness_fails_without_database(ctx: &mut ApiContext) {
    ctx.server
        .get("/health/ready")
        .await
        .assert_status(StatusCode::INTERNAL_SERVER_ERROR);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn publishing_requires_a_token(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .json(&json!({ "title": "Dal" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    let body: Value = response.json();
    assert_eq!(body["code"], "E_UNAUTHORIZED");
    assert_eq!(message(&body), "Token not found");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn foreign_token_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/meal-plans")
        .authorization_bearer(token("not-the-secret", Utc::now().timestamp() + 3600))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(message(&response.json()), "Invalid token");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn expired_token_is_reported(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .get("/shopping-lists")
        .authorization_bearer(token(SECRET, Utc::now().timestamp() - 3600))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    assert_eq!(message(&response.json()), "Token expired");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn recipe_without_title_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .authorization_bearer(valid_token())
        .json(&json!({ "title": "", "servings": 0 }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(
        message(&response.json()),
        "servings must be at least 1, title is required"
    );
}

#[test_context(ApiContext)]
#[tokio::test]
async fn blank_recipe_title_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/recipes")
        .authorization_bearer(valid_token())
        .json(&json!({ "title": "   " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
    assert_eq!(message(&response.json()), "title is required");
}

#[test_context(ApiContext)]
#[tokio::test]
async fn blank_comment_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&format!("/recipes/{}/comments", Uuid::new_v4()))
        .authorization_bearer(valid_token())
        .json(&json!({ "content": "  " }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn inverted_meal_plan_range_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post("/meal-plans")
        .authorization_bearer(valid_token())
        .json(&json!({
            "title": "Week 12",
            "start_date": "2026-03-20",
            "end_date": "2026-03-16"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn unknown_meal_slot_is_rejected(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .post(&format!("/meal-plans/{}/items", Uuid::new_v4()))
        .authorization_bearer(valid_token())
        .json(&json!({
            "recipe_id": Uuid::new_v4(),
            "scheduled_for": "2026-03-17",
            "meal": "brunch"
        }))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn checking_an_item_needs_a_flag(ctx: &mut ApiContext) {
    let response = ctx
        .server
        .put(&format!(
            "/shopping-lists/{}/items/{}",
            Uuid::new_v4(),
            Uuid::new_v4()
        ))
        .authorization_bearer(valid_token())
        .json(&json!({}))
        .await;

    response.assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn negative_time_filter_is_rejected(ctx: &mut ApiContext) {
    ctx.server
        .get("/recipes")
        .add_query_param("max_total_time", -5)
        .await
        .assert_status(StatusCode::BAD_REQUEST);
}

#[test_context(ApiContext)]
#[tokio::test]
async fn openapi_document_lists_routes(ctx: &mut ApiContext) {
    let response = ctx.server.get("/api-docs/openapi.json").await;

    response.assert_status_ok();
    let body: Value = response.json();
    let paths = body["paths"].as_object().unwrap();
    assert!(paths.contains_key("/recipes"));
    assert!(paths.contains_key("/meal-plans/{meal_plan_id}/shopping-list"));
    assert!(paths.contains_key("/shopping-lists/{shopping_list_id}/items/{item_id}"));
}
