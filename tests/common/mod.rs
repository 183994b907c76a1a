#![allow(dead_code, clippy::unwrap_used, clippy::expect_used)]

use axum::{
    extract::State,
    http::{header::AUTHORIZATION, HeaderMap, StatusCode},
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// Authorization headers seen by the mock service, one entry per request.
#[derive(Clone, Default)]
pub struct Seen {
    headers: Arc<Mutex<Vec<Option<String>>>>,
}

impl Seen {
    fn record(&self, headers: &HeaderMap) {
        let value = headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .map(str::to_string);
        self.headers.lock().unwrap().push(value);
    }

    pub fn authorization(&self) -> Vec<Option<String>> {
        self.headers.lock().unwrap().clone()
    }
}

pub fn ada() -> Value {
    json!({
        "_id": "65f1a",
        "name": "Ada Lovelace",
        "email": "a@b.com",
        "role": "Admin",
        "status": "active",
        "createdAt": "2024-02-01T09:00:00.000Z",
        "__v": 0
    })
}

async fn list_users(State(seen): State<Seen>, headers: HeaderMap) -> (StatusCode, Json<Value>) {
    seen.record(&headers);
    (
        StatusCode::OK,
        Json(json!({
            "success": true,
            "count": 2,
            "users": [
                ada(),
                {
                    "_id": "65f1b",
                    "name": "Paula Wilson",
                    "email": "paula@example.com",
                    "status": "suspended"
                }
            ]
        })),
    )
}

async fn login(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    seen.record(&headers);
    if body["email"] == "a@b.com" && body["password"] == "x" {
        (
            StatusCode::OK,
            Json(json!({"success": true, "user": ada(), "token": "t"})),
        )
    } else {
        (
            StatusCode::UNAUTHORIZED,
            Json(json!({"success": false, "message": "bad creds"})),
        )
    }
}

async fn register(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    seen.record(&headers);
    if body["email"] == "taken@b.com" {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"success": false, "message": "User already exists"})),
        );
    }
    let user = json!({
        "_id": "65f1c",
        "name": body["name"],
        "email": body["email"],
        "dateOfBirth": body["dateOfBirth"]
    });
    (
        StatusCode::CREATED,
        Json(json!({"success": true, "user": user, "token": "fresh"})),
    )
}

/// Mock of the remote user-management service.
pub fn service(seen: Seen) -> Router {
    Router::new()
        .route("/api/users", get(list_users))
        .route("/api/users/login", post(login))
        .route("/api/users/register", post(register))
        .with_state(seen)
}

/// Serves `app` on an ephemeral port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// Base URL of a port that was just released, so connections are refused.
pub async fn closed_port() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{addr}")
}
