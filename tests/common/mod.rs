//! In-process fake of the schema-management service

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Map, Value};
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

/// One request as the fake saw it
#[derive(Debug, Clone, PartialEq)]
pub struct Seen {
    pub method: &'static str,
    pub path: String,
    pub body: Option<Value>,
}

#[derive(Clone, Default)]
struct FakeState {
    schemas: Arc<Mutex<Map<String, Value>>>,
    seen: Arc<Mutex<Vec<Seen>>>,
}

impl FakeState {
    fn record(&self, method: &'static str, path: String, body: Option<Value>) {
        self.seen.lock().unwrap().push(Seen { method, path, body });
    }
}

pub struct FakeSchemaService {
    pub addr: SocketAddr,
    pub base_url: String,
    state: FakeState,
}

impl FakeSchemaService {
    /// Start on a random port, seeded with `(name, schema document)` pairs
    pub async fn start(seed: Vec<(&str, Value)>) -> Self {
        let state = FakeState::default();
        {
            let mut schemas = state.schemas.lock().unwrap();
            for (name, doc) in seed {
                schemas.insert(name.to_string(), doc);
            }
        }

        let app = Router::new()
            .route("/api/schemas", get(list_schemas).post(create_schema))
            .route("/api/schemas/:name", get(get_schema))
            .route("/api/schemas/:name/properties", get(get_properties))
            .route("/api/schemas/:name/fields", post(add_field))
            .with_state(state.clone());

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        let base_url = format!("http://{}/api", addr);

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        FakeSchemaService { addr, base_url, state }
    }

    pub fn seen(&self) -> Vec<Seen> {
        self.state.seen.lock().unwrap().clone()
    }

    pub fn document(&self, name: &str) -> Option<Value> {
        self.state.schemas.lock().unwrap().get(name).cloned()
    }
}

async fn list_schemas(State(state): State<FakeState>) -> Json<Vec<String>> {
    state.record("GET", "/api/schemas".to_string(), None);
    let schemas = state.schemas.lock().unwrap();
    Json(schemas.keys().cloned().collect())
}

async fn create_schema(State(state): State<FakeState>, Json(body): Json<Value>) -> StatusCode {
    state.record("POST", "/api/schemas".to_string(), Some(body.clone()));
    let Some(name) = body.get("name").and_then(Value::as_str) else {
        return StatusCode::BAD_REQUEST;
    };
    state
        .schemas
        .lock()
        .unwrap()
        .entry(name.to_string())
        .or_insert_with(|| json!({ "type": "object", "properties": {} }));
    StatusCode::CREATED
}

async fn get_schema(
    State(state): State<FakeState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state.record("GET", format!("/api/schemas/{}", name), None);
    state
        .schemas
        .lock()
        .unwrap()
        .get(&name)
        .cloned()
        .map(Json)
        .ok_or((StatusCode::NOT_FOUND, format!("no schema {}", name)))
}

async fn get_properties(
    State(state): State<FakeState>,
    Path(name): Path<String>,
) -> Result<Json<Value>, (StatusCode, String)> {
    state.record("GET", format!("/api/schemas/{}/properties", name), None);
    state
        .schemas
        .lock()
        .unwrap()
        .get(&name)
        .map(|doc| Json(doc.get("properties").cloned().unwrap_or_else(|| json!({}))))
        .ok_or((StatusCode::NOT_FOUND, format!("no schema {}", name)))
}

async fn add_field(
    State(state): State<FakeState>,
    Path(name): Path<String>,
    Json(body): Json<Value>,
) -> StatusCode {
    state.record("POST", format!("/api/schemas/{}/fields", name), Some(body.clone()));

    let mut schemas = state.schemas.lock().unwrap();
    let Some(doc) = schemas.get_mut(&name) else {
        return StatusCode::NOT_FOUND;
    };
    let Some(field) = body.get("fieldName").and_then(Value::as_str) else {
        return StatusCode::BAD_REQUEST;
    };

    let property = match (body.get("ref"), body.get("type")) {
        (Some(Value::String(target)), _) => json!({ "$ref": target }),
        (_, Some(Value::String(kind))) => json!({ "type": kind }),
        _ => json!({}),
    };

    if let Some(props) = doc.get_mut("properties").and_then(Value::as_object_mut) {
        props.insert(field.to_string(), property);
    }
    StatusCode::OK
}
