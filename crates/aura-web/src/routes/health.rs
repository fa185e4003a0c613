//! Liveness route handlers.

use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_TITLE: &str = "Sentiment Aura API";

pub async fn root() -> Json<Value> {
    Json(json!({
        "message": format!("{} is running", SERVICE_TITLE),
        "service": SERVICE_TITLE,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "healthy" }))
}
