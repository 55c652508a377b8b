use axum::Json;
use serde_json::{json, Value};

pub async fn root() -> Json<Value> {
    Json(json!({"message": "Report directory API is running"}))
}

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": "reportdir",
        "version": env!("CARGO_PKG_VERSION"),
        "git_hash": option_env!("GIT_HASH"),
        "built_at": option_env!("BUILD_TIMESTAMP"),
    }))
}
