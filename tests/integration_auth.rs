mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TestApp, get, jwt_config, post, token_for, unique_email};
use happyhomes_auth::{Claims, IdentityPayload, issue_token, issue_token_at};
use happyhomes_config::JwtConfig;
use jsonwebtoken::{DecodingKey, Validation, decode};
use serde_json::json;

#[tokio::test]
async fn test_liveness() {
    let app = TestApp::new();
    let (status, body) = app.send(get("/", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Happy homes running"));
}

#[tokio::test]
async fn test_issue_token_carries_identity() {
    let app = TestApp::new();
    let email = unique_email();

    let (status, body) = app
        .send(post(
            "/jwt",
            None,
            json!({ "email": email, "name": "Ada", "photo": "https://img/ada.png" }),
        ))
        .await;

    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap();

    let claims = decode::<Claims>(
        token,
        &DecodingKey::from_secret(common::TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims;

    assert_eq!(claims.email, email);
    assert_eq!(claims.extra["name"], json!("Ada"));
    assert_eq!(claims.extra["photo"], json!("https://img/ada.png"));
    assert_eq!(claims.exp - claims.iat, 3600);
}

#[tokio::test]
async fn test_issued_token_opens_authenticated_routes() {
    let app = TestApp::new();
    let email = unique_email();

    let (_, body) = app.send(post("/jwt", None, json!({ "email": email }))).await;
    let token = body["token"].as_str().unwrap().to_string();

    let (status, body) = app
        .send(get(&format!("/pets/email/{email}"), Some(&token)))
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn test_issue_token_rejects_malformed_body() {
    let app = TestApp::new();

    let request = Request::builder()
        .method("POST")
        .uri("/jwt")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn test_issue_token_requires_email() {
    let app = TestApp::new();
    let (status, _) = app.send(post("/jwt", None, json!({ "name": "Ada" }))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = TestApp::new();
    let (status, body) = app.send(get("/pets/email/a@x.com", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "error": "unauthorized access" }));
}

#[tokio::test]
async fn test_non_bearer_authorization_header() {
    let app = TestApp::new();
    let request = Request::builder()
        .uri("/pets/email/a@x.com")
        .header("authorization", "Basic dXNlcjpwYXNz")
        .body(Body::empty())
        .unwrap();
    let (status, body) = app.send(request).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized access");
}

#[tokio::test]
async fn test_garbage_token() {
    let app = TestApp::new();
    let (status, body) = app
        .send(get("/pets/email/a@x.com", Some("not.a.token")))
        .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized access");
}

#[tokio::test]
async fn test_expired_token() {
    let app = TestApp::new();
    let issued_two_hours_ago = chrono::Utc::now().timestamp() - 7200;
    let token = issue_token_at(
        &IdentityPayload::new("a@x.com"),
        issued_two_hours_ago,
        &jwt_config(),
    )
    .unwrap();

    let (status, _) = app.send(get("/pets/email/a@x.com", Some(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_token_rejected_right_after_expiry() {
    let app = TestApp::new();
    let issued_just_over_an_hour_ago = chrono::Utc::now().timestamp() - 3630;
    let token = issue_token_at(
        &IdentityPayload::new("a@x.com"),
        issued_just_over_an_hour_ago,
        &jwt_config(),
    )
    .unwrap();

    let (status, body) = app.send(get("/pets/email/a@x.com", Some(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], "unauthorized access");
}

#[tokio::test]
async fn test_token_signed_with_other_secret() {
    let app = TestApp::new();
    let foreign = JwtConfig {
        secret: "some-other-secret".to_string(),
        access_token_expiry: 3600,
    };
    let token = issue_token(&IdentityPayload::new("a@x.com"), &foreign).unwrap();

    let (status, _) = app.send(get("/pets/email/a@x.com", Some(&token))).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_public_routes_ignore_bad_tokens() {
    let app = TestApp::new();
    let (status, _) = app.send(get("/pets", Some("not.a.token"))).await;

    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_valid_token_for_unknown_user_is_authenticated() {
    let app = TestApp::new();
    let token = token_for("nobody@example.com");

    let (status, _) = app
        .send(get("/createDonation/nobody@example.com", Some(&token)))
        .await;

    assert_eq!(status, StatusCode::OK);
}
