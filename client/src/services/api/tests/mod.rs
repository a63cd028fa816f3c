//! # Gateway Tests
//!
//! Exercises [`ApiClient`] against an in-process axum stand-in for the supply API.


use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde_json::{json, Value};

use super::*;
use crate::config::AppConfig;
use crate::services::session::SessionStore;

pub const VALID_TOKEN: &str = "abc123";
/// Token for which the stub answers `/Supply` with an HTML maintenance page
pub const BROKEN_TOKEN: &str = "broken";

/// Shared recorder for what the stub server received
#[derive(Clone, Default)]
pub struct Stub {
    pub hits: Arc<AtomicUsize>,
    pub last_auth: Arc<Mutex<Option<String>>>,
    pub last_body: Arc<Mutex<Option<Value>>>,
    pub last_query: Arc<Mutex<Option<HashMap<String, String>>>>,
    pub last_path_id: Arc<Mutex<Option<String>>>,
}

impl Stub {
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    fn record(&self, headers: &HeaderMap) -> Option<String> {
        self.hits.fetch_add(1, Ordering::SeqCst);
        let auth = headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        *self.last_auth.lock() = auth.clone();
        auth.and_then(|v| v.strip_prefix("Bearer ").map(str::to_string))
    }
}

fn unauthorized() -> Response {
    (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Token expired" }))).into_response()
}

fn is_valid(token: &Option<String>) -> bool {
    matches!(token.as_deref(), Some(VALID_TOKEN) | Some(BROKEN_TOKEN))
}

async fn login(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    stub.record(&headers);
    *stub.last_body.lock() = Some(body.clone());

    if body["PhoneNumber"] == json!(9999999999u64) && body["password"] == "secret" {
        Json(json!({ "token": VALID_TOKEN, "message": "Login successful" })).into_response()
    } else {
        (StatusCode::UNAUTHORIZED, Json(json!({ "message": "Invalid credentials" }))).into_response()
    }
}

async fn register(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    let token = stub.record(&headers);
    *stub.last_body.lock() = Some(body);
    if !is_valid(&token) {
        return unauthorized();
    }
    (StatusCode::CREATED, Json(json!({ "message": "Registered" }))).into_response()
}

async fn get_rate(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    Json(json!({ "_id": "r1", "rate": 30, "specialRate": 35, "__v": 0 })).into_response()
}

async fn update_rate(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Path(id): Path<String>,
    Json(body): Json<Value>,
) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    *stub.last_path_id.lock() = Some(id);
    *stub.last_body.lock() = Some(body);
    Json(json!({ "message": "Rate updated" })).into_response()
}

async fn get_users(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    Json(json!({
        "sellerData": [
            { "_id": "a1", "sellerId": 7, "name": "Asha", "PhoneNumber": 9999999999u64, "role": "ROLE_ADMIN" },
            { "_id": "b2", "sellerId": 9, "name": "Bala", "PhoneNumber": 8888888888u64, "role": "ROLE_SELLER" }
        ],
        "sellerIds": [7, 9]
    }))
    .into_response()
}

async fn get_supply(State(stub): State<Stub>, headers: HeaderMap) -> Response {
    let token = stub.record(&headers);
    if !is_valid(&token) {
        return unauthorized();
    }
    if token.as_deref() == Some(BROKEN_TOKEN) {
        return "<html>maintenance</html>".into_response();
    }
    Json(json!({
        "currentPage": 1,
        "totalPages": 1,
        "totalSupplies": 1,
        "supplies": [{
            "_id": "s1", "sellerId": 7, "quantity": 10, "fat": 4.0,
            "rate": 30, "amount": 1200, "status": "Pending",
            "createAt": "2025-01-05T06:30:00.000Z"
        }],
        "distinctUserIds": [7]
    }))
    .into_response()
}

async fn post_supply(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    *stub.last_body.lock() = Some(body);
    (StatusCode::CREATED, Json(json!({ "message": "Supply added" }))).into_response()
}

async fn get_range(
    State(stub): State<Stub>,
    headers: HeaderMap,
    Query(query): Query<HashMap<String, String>>,
) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    *stub.last_query.lock() = Some(query);
    Json(json!({
        "supplies": [
            { "_id": "s1", "sellerId": 7, "quantity": 10, "fat": 4.0, "rate": 30, "amount": 1200, "status": "Pending" },
            { "_id": "s2", "sellerId": 7, "quantity": 5, "fat": 5.0, "rate": 30, "amount": 750, "status": "Completed" }
        ],
        "totalAmount": 1950
    }))
    .into_response()
}

async fn mark_completed(State(stub): State<Stub>, headers: HeaderMap, Json(body): Json<Value>) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    *stub.last_body.lock() = Some(body);
    // Empty 200 body, as some deployments answer
    StatusCode::OK.into_response()
}

async fn delete_supply(State(stub): State<Stub>, headers: HeaderMap, Path(id): Path<String>) -> Response {
    if !is_valid(&stub.record(&headers)) {
        return unauthorized();
    }
    *stub.last_path_id.lock() = Some(id.clone());
    if id == "missing" {
        return StatusCode::NOT_FOUND.into_response();
    }
    Json(json!({ "message": "Deleted" })).into_response()
}

fn router(stub: Stub) -> Router {
    Router::new()
        .route("/api/v0.1/login", post(login))
        .route("/api/v0.1/register", post(register))
        .route("/api/v0.1/getRate", get(get_rate))
        .route("/api/v0.1/updateRate/{id}", put(update_rate))
        .route("/api/v0.1/user", get(get_users))
        .route("/api/v0.1/Supply", get(get_supply))
        .route("/api/v0.1/Supply/add", post(post_supply))
        .route("/api/v0.1/Supply/addSpecial", post(post_supply))
        .route("/api/v0.1/Supply/Range", get(get_range))
        .route("/api/v0.1/Supply/markCompleted", put(mark_completed))
        .route("/api/v0.1/Supply/{id}", delete(delete_supply))
        .with_state(stub)
}

/// Start the stub on an ephemeral port and return its base URL
pub async fn spawn_stub(stub: Stub) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Stub listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router(stub)).await.expect("Stub server failed");
    });
    format!("http://{}", addr)
}

/// Gateway pointed at `base_url`, optionally already logged in
pub async fn client_for(base_url: &str, token: Option<&str>) -> ApiClient {
    let session = SessionStore::in_memory();
    if let Some(token) = token {
        session.set(token).await.expect("In-memory session write should succeed");
    }
    let config = AppConfig {
        api_base_url: base_url.to_string(),
        ..AppConfig::default()
    };
    ApiClient::new(&config, session).expect("Client should build in test")
}
