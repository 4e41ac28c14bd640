//! End-to-end tests driving the full router in-process.

use admin_server::db::repository::user;
use admin_server::utils::password::verify_password;
use admin_server::{Config, ServerState, Store, build_app};
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

fn seeded_app() -> Router {
    build_app(ServerState::new(Config::with_overrides(0, true), Store::seeded()))
}

fn empty_app() -> Router {
    build_app(ServerState::new(Config::with_overrides(0, false), Store::new()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(json) => {
            builder = builder.header("content-type", "application/json");
            Body::from(json.to_string())
        }
        None => Body::empty(),
    };
    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    send(app, Method::GET, uri, None).await
}

#[tokio::test]
async fn health_reports_counts() {
    let app = seeded_app();
    let (status, body) = get(&app, "/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["counts"]["complaints"], 3);
    assert_eq!(body["counts"]["servicePlans"], 4);
    assert!(body["uptimeSeconds"].is_u64());
    assert!(body["startedAt"].is_string());
    assert!(body.get("uptime_seconds").is_none());
}

#[tokio::test]
async fn seeded_complaint_stats() {
    let app = seeded_app();
    let (status, stats) = get(&app, "/api/complaints/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["pending"], 0);
    assert_eq!(stats["assigned"], 1);
    assert_eq!(stats["inProgress"], 1);
    assert_eq!(stats["resolved"], 1);
    assert_eq!(stats["avgResolutionHours"], 24.0);
}

#[tokio::test]
async fn empty_store_stats_are_zero() {
    let app = empty_app();
    let (_, stats) = get(&app, "/api/complaints/stats").await;
    assert_eq!(stats["total"], 0);
    assert_eq!(stats["avgResolutionHours"], 0.0);
}

#[tokio::test]
async fn out_of_range_resolved_at_is_rejected() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/complaints",
        Some(json!({
            "customerId": 1,
            "title": "Backdated",
            "description": "Resolved before it was filed",
            "location": "North Zone",
            "resolvedAt": i64::MIN
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8);
    assert_eq!(body["details"]["field"], "resolvedAt");

    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/complaints/1",
        Some(json!({ "resolvedAt": i64::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["details"]["field"], "resolvedAt");

    let (status, stats) = get(&app, "/api/complaints/stats").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(stats["total"], 3);
    assert_eq!(stats["avgResolutionHours"], 24.0);
}

#[tokio::test]
async fn engineer_defaults_applied() {
    let app = empty_app();
    let (status, engineer) = send(
        &app,
        Method::POST,
        "/api/engineers",
        Some(json!({
            "name": "Kavya Menon",
            "email": "kavya@example.com",
            "phone": "555-0301",
            "location": "East Zone",
            "specialization": "Fiber splicing"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(engineer["id"], 1);
    assert_eq!(engineer["isActive"], true);
    assert_eq!(engineer["rating"], 0);
    assert_eq!(engineer["completedJobs"], 0);
    assert_eq!(engineer["activeJobs"], 0);

    let (_, fetched) = get(&app, "/api/engineers/1").await;
    assert_eq!(fetched, engineer);
}

#[tokio::test]
async fn update_unknown_complaint_is_not_found() {
    let app = seeded_app();
    let (status, body) = send(
        &app,
        Method::PUT,
        "/api/complaints/999",
        Some(json!({ "status": "resolved" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 4001);
    assert_eq!(body["details"]["id"], 999);

    let (_, list) = get(&app, "/api/complaints").await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn delete_unknown_returns_false() {
    let app = seeded_app();
    let (status, body) = send(&app, Method::DELETE, "/api/customers/999", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!(false));

    let (_, list) = get(&app, "/api/customers").await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn complaint_lifecycle() {
    let app = empty_app();
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/complaints",
        Some(json!({
            "customerId": 7,
            "title": "Router blinking red",
            "description": "No connection since the storm",
            "location": "West Zone"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(created["status"], "pending");
    assert_eq!(created["priority"], "medium");
    assert_eq!(created["createdAt"], created["updatedAt"]);

    let (status, updated) = send(
        &app,
        Method::PUT,
        "/api/complaints/1",
        Some(json!({ "status": "in-progress", "engineerId": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["status"], "in-progress");
    assert_eq!(updated["engineerId"], 2);
    assert_eq!(updated["title"], "Router blinking red");
    assert!(updated["updatedAt"].as_i64() >= created["updatedAt"].as_i64());

    let (_, by_engineer) = get(&app, "/api/complaints?engineerId=2").await;
    assert_eq!(by_engineer.as_array().unwrap().len(), 1);
    let (_, by_status) = get(&app, "/api/complaints?status=pending").await;
    assert!(by_status.as_array().unwrap().is_empty());

    let (_, deleted) = send(&app, Method::DELETE, "/api/complaints/1", None).await;
    assert_eq!(deleted, json!(true));
    let (status, _) = get(&app, "/api/complaints/1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn validation_rejects_bad_payloads() {
    let app = empty_app();
    let (status, body) = send(
        &app,
        Method::POST,
        "/api/customers",
        Some(json!({
            "name": "",
            "email": "x@y.com",
            "phone": "555",
            "address": "1 Main St",
            "location": "North Zone"
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 2);
    assert_eq!(body["details"]["field"], "name");

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/engineers",
        Some(json!({
            "name": "Too Good",
            "email": "a@b.com",
            "phone": "555",
            "location": "North Zone",
            "specialization": "Everything",
            "rating": 60
        })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 5002);

    let (_, list) = get(&app, "/api/engineers").await;
    assert!(list.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn users_never_expose_password() {
    let app = seeded_app();
    let (status, users) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);
    let users = users.as_array().unwrap();
    assert_eq!(users.len(), 3);
    assert!(users.iter().all(|u| u.get("password").is_none()));

    let (status, admin) = get(&app, "/api/users/by-email/admin@wifinet.local").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(admin["role"], "admin");

    let (status, body) = get(&app, "/api/users/by-email/nobody@wifinet.local").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
}

#[tokio::test]
async fn user_passwords_are_hashed_at_rest() {
    let state = ServerState::new(Config::with_overrides(0, false), Store::new());
    let app = build_app(state.clone());
    let (status, created) = send(
        &app,
        Method::POST,
        "/api/users",
        Some(json!({ "username": "ops", "email": "ops@wifinet.local", "password": "hunter22" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(created.get("password").is_none());
    assert!(created.get("hashPass").is_none());

    let stored = user::find_by_id(&state.store, 1).unwrap();
    assert_ne!(stored.hash_pass, "hunter22");
    assert!(verify_password("hunter22", &stored.hash_pass));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/api/users/1",
        Some(json!({ "password": "rotated-pass" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let rotated = user::find_by_id(&state.store, 1).unwrap();
    assert!(verify_password("rotated-pass", &rotated.hash_pass));
    assert!(!verify_password("hunter22", &rotated.hash_pass));
}

#[tokio::test]
async fn list_filters() {
    let app = seeded_app();
    let (_, airlink) = get(&app, "/api/customers?provider=AirLink").await;
    assert_eq!(airlink.as_array().unwrap().len(), 2);
    let (_, north) = get(&app, "/api/customers?provider=AirLink&location=North%20Zone").await;
    assert_eq!(north.as_array().unwrap().len(), 2);
    let (_, fiber) = get(&app, "/api/service-plans?provider=FiberNet").await;
    assert_eq!(fiber.as_array().unwrap().len(), 2);
    let (_, open) = get(&app, "/api/support-tickets?status=open").await;
    assert_eq!(open.as_array().unwrap().len(), 1);
    let (_, for_customer) = get(&app, "/api/support-tickets?customerId=2&status=open").await;
    assert!(for_customer.as_array().unwrap().is_empty());
}

#[tokio::test]
async fn mutations_bump_versions() {
    let app = empty_app();
    let (_, before) = get(&app, "/api/sync/versions").await;
    assert!(before.as_array().unwrap().iter().all(|v| v["version"] == 0));

    send(
        &app,
        Method::POST,
        "/api/notifications",
        Some(json!({ "title": "Outage", "message": "Fiber cut on Ring Road", "sentBy": 1 })),
    )
    .await;
    // Failed mutations leave versions untouched
    send(&app, Method::DELETE, "/api/notifications/42", None).await;

    let (_, after) = get(&app, "/api/sync/versions").await;
    let notifications = after
        .as_array()
        .unwrap()
        .iter()
        .find(|v| v["resource"] == "notifications")
        .unwrap();
    assert_eq!(notifications["version"], 1);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = seeded_app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert!(response.headers().contains_key("x-request-id"));
}
