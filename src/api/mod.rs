use crate::state::AppState;
use axum::{routing::get, Router};
use std::path::Path;
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::services::{ServeDir, ServeFile};

pub mod common;
mod health;
mod tasks;

pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Forwarding
        .route("/apply", get(tasks::apply_task))
        .route("/submit", get(tasks::submit_task))
        .route("/tasks", get(tasks::task_details))
        // Health
        .route("/health", get(health::health_check))
        .with_state(state)
}

/// 完整应用: 路由 + CORS + 请求日志，未命中的路径兜底到静态页面
pub fn build_app(state: Arc<AppState>, static_dir: &Path) -> Router {
    let app = build_routes(state)
        .layer(CorsLayer::permissive())
        .layer(axum::middleware::from_fn(common::request_logger));

    let index_path = static_dir.join("index.html");
    if static_dir.exists() && index_path.exists() {
        tracing::info!("Serving static files from {:?}", static_dir);
        // 未匹配的路径返回 index.html，状态保持 200
        let serve_dir = ServeDir::new(static_dir)
            .append_index_html_on_directories(true)
            .fallback(ServeFile::new(&index_path));
        app.fallback_service(serve_dir)
    } else {
        tracing::warn!("Static directory {:?} or index.html not found", static_dir);
        app
    }
}
