use axum::Json;
use serde_json::{Value, json};

/// Liveness probe for load balancers and container orchestrators.
///
/// ## Route
/// `GET /health` → `{ "status": "ok" }`
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
