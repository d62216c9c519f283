use crate::auth::responses::{LoginResponse, ProfileResponse, RegisterResponse};
use crate::errors::{ErrorCode, ErrorResponse};
use crate::http::tests::{test_context, test_server, test_server_with};
use crate::storage::interface::PlayerRepo;
use axum::http::header::AUTHORIZATION;
use axum::http::{HeaderValue, StatusCode};
use axum_test::TestServer;
use pretty_assertions::assert_eq;
use serde_json::json;

async fn register(server: &TestServer, nickname: &str, password: &str) -> RegisterResponse {
    let response = server
        .post("/register")
        .json(&json!({ "nickname": nickname, "password": password }))
        .await;
    response.assert_status_ok();
    response.json::<RegisterResponse>()
}

fn bearer(token: &str) -> HeaderValue {
    HeaderValue::from_str(&format!("Bearer {token}")).expect("Token should be a valid header.")
}

#[tokio::test]
async fn test_register_assigns_a_traveler_id() {
    let server = test_server();

    let registered = register(&server, "nomad", "secret").await;

    assert_eq!(registered.message, "User registered successfully");
    assert!(uuid::Uuid::parse_str(&registered.traveler_id).is_ok());
}

#[tokio::test]
async fn test_duplicate_nickname_is_a_conflict() {
    let app_context = test_context();
    let players = app_context.players.clone();
    let server = test_server_with(app_context);
    register(&server, "nomad", "secret").await;

    let response = server
        .post("/register")
        .json(&json!({ "username": "nomad", "password": "another" }))
        .await;

    response.assert_status(StatusCode::CONFLICT);
    response.assert_json(&ErrorResponse {
        error: true,
        error_code: ErrorCode::Conflict,
        message: String::from("Username already exists"),
    });
    assert_eq!(players.list_all().await.len(), 1);
}

#[tokio::test]
async fn test_register_rejects_blank_nickname_and_password() {
    let server = test_server();

    let blank_nickname = server
        .post("/register")
        .json(&json!({ "nickname": "   ", "password": "secret" }))
        .await;
    let blank_password = server
        .post("/register")
        .json(&json!({ "nickname": "nomad", "password": "" }))
        .await;

    blank_nickname.assert_status(StatusCode::BAD_REQUEST);
    blank_password.assert_status(StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_then_fetch_profile() {
    let server = test_server();
    let registered = register(&server, "nomad", "secret").await;

    let login = server
        .post("/login")
        .json(&json!({ "username": "nomad", "password": "secret" }))
        .await;
    login.assert_status_ok();
    let login = login.json::<LoginResponse>();
    assert_eq!(login.message, "Login successful");
    assert_eq!(login.traveler_id, registered.traveler_id);

    let profile = server
        .get("/me")
        .add_header(AUTHORIZATION, bearer(&login.access_token))
        .await;

    profile.assert_status_ok();
    profile.assert_json(&ProfileResponse {
        nickname: String::from("nomad"),
        traveler_id: registered.traveler_id,
        total_score: 0,
        correct_locations: 0,
    });
}

#[tokio::test]
async fn test_login_with_wrong_password() {
    let server = test_server();
    register(&server, "nomad", "secret").await;

    let response = server
        .post("/login")
        .json(&json!({ "nickname": "nomad", "password": "guess" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
    response.assert_json(&ErrorResponse {
        error: true,
        error_code: ErrorCode::Unauthorized,
        message: String::from("Invalid credentials"),
    });
}

#[tokio::test]
async fn test_login_with_unknown_nickname() {
    let server = test_server();

    let response = server
        .post("/login")
        .json(&json!({ "nickname": "nobody", "password": "secret" }))
        .await;

    response.assert_status(StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_profile_requires_a_valid_token() {
    let server = test_server();

    let missing = server.get("/me").await;
    let garbage = server
        .get("/me")
        .add_header(AUTHORIZATION, bearer("notReallyAToken"))
        .await;
    let wrong_scheme = server
        .get("/me")
        .add_header(AUTHORIZATION, HeaderValue::from_static("Basic bm9tYWQ6c2VjcmV0"))
        .await;

    missing.assert_status(StatusCode::UNAUTHORIZED);
    missing.assert_json(&ErrorResponse {
        error: true,
        error_code: ErrorCode::Unauthorized,
        message: String::from("No `Authorization` header provided."),
    });
    garbage.assert_status(StatusCode::UNAUTHORIZED);
    wrong_scheme.assert_status(StatusCode::UNAUTHORIZED);
}
