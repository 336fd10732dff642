use axum::Json;
use serde_json::{json, Value};

/// Liveness only; the vendor is not contacted.
pub async fn health_check() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
