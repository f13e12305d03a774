use axum::Json;
use serde_json::{json, Value};

/// GET / - 存活探测
pub async fn home() -> Json<Value> {
    Json(json!({ "message": "API is running!" }))
}

/// GET /api/health - 健康检查
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "build_time": env!("BUILD_TIME"),
    }))
}
