use axum::Json;
use serde_json::{json, Value};

/// GET /api/
/// Root status for API consumers.
pub async fn api_root() -> Json<Value> {
    Json(json!({
        "message": "CareerPath API is running",
        "status": "healthy"
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "careerpath-api"
    }))
}
