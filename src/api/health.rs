use crate::state::AppState;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::sync::Arc;

/// 存活探针: 只反映本进程与配置状态，不探测上游
pub async fn health_check(State(state): State<Arc<AppState>>) -> Response {
    if state.config.has_token() {
        Json(json!({
            "ok": true,
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION"),
        }))
        .into_response()
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "ok": false,
                "service": env!("CARGO_PKG_NAME"),
                "error": "XGODO_TOKEN is not set",
            })),
        )
            .into_response()
    }
}
