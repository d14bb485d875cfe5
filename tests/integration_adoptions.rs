mod common;

use axum::http::StatusCode;
use common::{TestApp, get, patch, post, token_for, unique_email};
use serde_json::json;

#[tokio::test]
async fn test_adoption_request_flow() {
    let app = TestApp::new();
    let owner = unique_email();
    let requester = unique_email();

    let (status, body) = app
        .send(post(
            "/adoptPets",
            Some(&token_for(&requester)),
            json!({
                "petId": "pet-1",
                "petName": "Rex",
                "ownerEmail": owner,
                "requesterName": "Grace",
                "phone": "+2348000000000",
                "address": "12 Marina Road"
            }),
        ))
        .await;
    assert_eq!(status, StatusCode::CREATED);
    let id = body["insertedId"].as_str().unwrap().to_string();

    let owner_token = token_for(&owner);
    let (status, requests) = app
        .send(get(&format!("/adoptPets/{owner}"), Some(&owner_token)))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(requests.as_array().unwrap().len(), 1);
    assert_eq!(requests[0]["_id"], id.as_str());
    assert_eq!(requests[0]["requesterEmail"], requester.as_str());
    assert_eq!(requests[0]["status"], "pending");

    let (status, body) = app
        .send(patch(
            &format!("/adoptPets/{id}"),
            Some(&owner_token),
            json!({ "status": "accepted" }),
        ))
        .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["modifiedCount"], 1);

    let (_, requests) = app
        .send(get(&format!("/adoptPets/{owner}"), Some(&owner_token)))
        .await;
    assert_eq!(requests[0]["status"], "accepted");
}

#[tokio::test]
async fn test_requests_are_listed_for_owner_only() {
    let app = TestApp::new();
    let owner = unique_email();
    let other_owner = unique_email();
    let token = token_for(&unique_email());

    for owner_email in [&owner, &owner, &other_owner] {
        app.send(post(
            "/adoptPets",
            Some(&token),
            json!({ "petId": "pet-1", "ownerEmail": owner_email }),
        ))
        .await;
    }

    let (_, requests) = app
        .send(get(&format!("/adoptPets/{owner}"), Some(&token)))
        .await;
    assert_eq!(requests.as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_unknown_status_is_rejected() {
    let app = TestApp::new();
    let token = token_for(&unique_email());

    let (status, _) = app
        .send(patch(
            "/adoptPets/some-id",
            Some(&token),
            json!({ "status": "maybe" }),
        ))
        .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_adoption_routes_require_token() {
    let app = TestApp::new();

    let (status, _) = app.send(get("/adoptPets/a@x.com", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);

    let (status, _) = app
        .send(post(
            "/adoptPets",
            None,
            json!({ "petId": "pet-1", "ownerEmail": "a@x.com" }),
        ))
        .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}
