#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use happyhomes::payments::{MockPaymentGateway, SharedPaymentGateway};
use happyhomes::router::init_router;
use happyhomes::state::AppState;
use happyhomes_auth::{IdentityPayload, issue_token};
use happyhomes_config::{CorsConfig, JwtConfig};
use happyhomes_db::{DocumentStore, MemoryStore, collections};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;
use uuid::Uuid;

pub const TEST_SECRET: &str = "integration-test-secret";

pub fn jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        access_token_expiry: 3600,
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: Arc<MemoryStore>,
}

impl TestApp {
    /// App over an empty memory store with no payment processor.
    pub fn new() -> Self {
        Self::build(None)
    }

    pub fn with_gateway(gateway: SharedPaymentGateway) -> Self {
        Self::build(Some(gateway))
    }

    fn build(gateway: Option<SharedPaymentGateway>) -> Self {
        let store = Arc::new(MemoryStore::new());
        let mut state = AppState::new(store.clone(), jwt_config(), CorsConfig::parse("*"));
        if let Some(gateway) = gateway {
            state = state.with_payments(gateway);
        }

        Self {
            router: init_router(state),
            store,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes)
                .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()))
        };

        (status, body)
    }

    /// Inserts a user document directly; `role` is stored verbatim when given.
    pub async fn seed_user(&self, email: &str, role: Option<&str>) -> String {
        let mut user = json!({ "name": "Test User", "email": email });
        if let Some(role) = role {
            user["role"] = json!(role);
        }

        self.store
            .insert_one(collections::USERS, user.as_object().cloned().unwrap())
            .await
            .unwrap()
            .inserted_id
    }
}

pub fn mock_gateway() -> Arc<MockPaymentGateway> {
    Arc::new(MockPaymentGateway::new())
}

pub fn unique_email() -> String {
    format!("user-{}@example.com", Uuid::new_v4().simple())
}

pub fn token_for(email: &str) -> String {
    issue_token(&IdentityPayload::new(email), &jwt_config()).unwrap()
}

pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    request("GET", uri, token, None)
}

pub fn delete(uri: &str, token: Option<&str>) -> Request<Body> {
    request("DELETE", uri, token, None)
}

pub fn post(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request("POST", uri, token, Some(body))
}

pub fn patch(uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    request("PATCH", uri, token, Some(body))
}

fn request(method: &str, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }

    match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    }
}
