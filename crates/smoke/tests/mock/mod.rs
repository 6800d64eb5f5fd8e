//! In-process mock of the EvHub REST API
//!
//! Serves the same resource paths and status contract as the real API:
//! 2xx with JSON bodies, 400 with a field-error map on validation failure,
//! 404 with `{"detail": ...}`, 204 on DELETE. Rows live in a shared
//! in-memory store; subscriber deletion is a soft opt-out.
//!
//! A lenient mode disables the contact-form and duplicate-email validation
//! so tests can prove the harness reports missing rejections as
//! regressions.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use chrono::Utc;
use serde_json::{json, Value};

use evhub_smoke::HarnessConfig;

#[derive(Default)]
struct Store {
    next_id: i64,
    events: Vec<Value>,
    registrations: Vec<Value>,
    subscribers: Vec<Value>,
    lenient: bool,
}

impl Store {
    fn allocate_id(&mut self) -> i64 {
        self.next_id += 1;
        self.next_id
    }
}

type Shared = Arc<Mutex<Store>>;

/// Handle to a running mock API.
pub struct MockApi {
    pub base_url: String,
}

impl MockApi {
    pub async fn spawn() -> Self {
        Self::spawn_with(false).await
    }

    /// Mock with validation rules switched off, for regression-detection
    /// tests.
    pub async fn spawn_lenient() -> Self {
        Self::spawn_with(true).await
    }

    async fn spawn_with(lenient: bool) -> Self {
        let state: Shared = Arc::new(Mutex::new(Store {
            lenient,
            ..Default::default()
        }));

        let api = Router::new()
            .route("/contact/", post(submit_contact))
            .route("/events/", post(create_event).get(list_events))
            .route(
                "/events/:id/",
                get(get_event).put(update_event).delete(delete_event),
            )
            .route(
                "/registrations/",
                post(create_registration).get(list_registrations),
            )
            .route(
                "/subscribers/",
                post(create_subscriber).get(list_subscribers),
            )
            .route("/subscribers/:id/", delete(delete_subscriber))
            .with_state(state);

        let app = Router::new().nest("/api", api);

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind mock listener");
        let addr = listener.local_addr().expect("mock local addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve mock API");
        });

        Self {
            base_url: format!("http://{addr}/api"),
        }
    }

    pub fn config(&self) -> HarnessConfig {
        HarnessConfig {
            base_url: self.base_url.clone(),
            ..Default::default()
        }
    }
}

fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({"detail": "Not found."}))).into_response()
}

// Contact form

async fn submit_contact(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let lenient = store.lock().unwrap().lenient;
    if !lenient {
        let mut errors = serde_json::Map::new();
        if body["name"].as_str().unwrap_or("").is_empty() {
            errors.insert("name".into(), json!(["This field may not be blank."]));
        }
        let email = body["email"].as_str().unwrap_or("");
        if !email.contains('@') || !email.contains('.') {
            errors.insert("email".into(), json!(["Enter a valid email address."]));
        }
        if body["message"].as_str().unwrap_or("").is_empty() {
            errors.insert("message".into(), json!(["This field may not be blank."]));
        }
        if !errors.is_empty() {
            return (StatusCode::BAD_REQUEST, Json(Value::Object(errors))).into_response();
        }
    }
    (
        StatusCode::OK,
        Json(json!({"message": "Your message has been sent successfully!"})),
    )
        .into_response()
}

// Events

fn event_row(id: i64, body: &Value) -> Value {
    let now = Utc::now().to_rfc3339();
    json!({
        "id": id,
        "title": body["title"],
        "description": body["description"],
        "eventdatetime": body["eventdatetime"],
        "address": body["address"],
        "price": body["price"],
        "cancelled": false,
        "created_at": now,
        "updated_at": now,
        "registrations_count": 0,
    })
}

async fn create_event(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut store = store.lock().unwrap();
    let id = store.allocate_id();
    let row = event_row(id, &body);
    store.events.push(row.clone());
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn list_events(State(store): State<Shared>) -> Response {
    let store = store.lock().unwrap();
    Json(Value::Array(store.events.clone())).into_response()
}

async fn get_event(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let store = store.lock().unwrap();
    match store.events.iter().find(|e| e["id"] == json!(id)) {
        Some(event) => Json(event.clone()).into_response(),
        None => not_found(),
    }
}

async fn update_event(
    State(store): State<Shared>,
    Path(id): Path<i64>,
    Json(body): Json<Value>,
) -> Response {
    let mut store = store.lock().unwrap();
    match store.events.iter_mut().find(|e| e["id"] == json!(id)) {
        Some(event) => {
            let mut row = event_row(id, &body);
            row["created_at"] = event["created_at"].clone();
            *event = row.clone();
            Json(row).into_response()
        }
        None => not_found(),
    }
}

async fn delete_event(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    let before = store.events.len();
    store.events.retain(|e| e["id"] != json!(id));
    if store.events.len() == before {
        return not_found();
    }
    StatusCode::NO_CONTENT.into_response()
}

// Registrations

async fn create_registration(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut store = store.lock().unwrap();
    let event_title = store
        .events
        .iter()
        .find(|e| e["id"] == body["event"])
        .map(|e| e["title"].clone())
        .unwrap_or(Value::Null);
    let id = store.allocate_id();
    let now = Utc::now().to_rfc3339();
    let row = json!({
        "id": id,
        "date_registered": body["date_registered"],
        "cancelled": false,
        "email": body["email"],
        "event": body["event"],
        "event_title": event_title,
        "created_at": now,
        "updated_at": now,
    });
    store.registrations.push(row.clone());
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn list_registrations(
    State(store): State<Shared>,
    Query(params): Query<HashMap<String, String>>,
) -> Response {
    let store = store.lock().unwrap();
    let rows: Vec<Value> = match params.get("event") {
        Some(event_id) => store
            .registrations
            .iter()
            .filter(|r| r["event"].to_string() == *event_id)
            .cloned()
            .collect(),
        None => store.registrations.clone(),
    };
    Json(Value::Array(rows)).into_response()
}

// Subscribers

async fn create_subscriber(State(store): State<Shared>, Json(body): Json<Value>) -> Response {
    let mut store = store.lock().unwrap();
    if !store.lenient {
        let duplicate = store
            .subscribers
            .iter()
            .any(|s| s["email"] == body["email"] && s["opted_out"] == json!(false));
        if duplicate {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({"email": ["This email is already subscribed."]})),
            )
                .into_response();
        }
    }
    let id = store.allocate_id();
    let now = Utc::now().to_rfc3339();
    let row = json!({
        "id": id,
        "name": body["name"],
        "email": body["email"],
        "opted_out": false,
        "created_at": now,
        "updated_at": now,
    });
    store.subscribers.push(row.clone());
    (StatusCode::CREATED, Json(row)).into_response()
}

async fn list_subscribers(State(store): State<Shared>) -> Response {
    let store = store.lock().unwrap();
    let rows: Vec<Value> = store
        .subscribers
        .iter()
        .filter(|s| s["opted_out"] == json!(false))
        .cloned()
        .collect();
    Json(Value::Array(rows)).into_response()
}

async fn delete_subscriber(State(store): State<Shared>, Path(id): Path<i64>) -> Response {
    let mut store = store.lock().unwrap();
    match store.subscribers.iter_mut().find(|s| s["id"] == json!(id)) {
        Some(subscriber) => {
            subscriber["opted_out"] = json!(true);
            StatusCode::NO_CONTENT.into_response()
        }
        None => not_found(),
    }
}
