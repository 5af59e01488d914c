use crate::metrics::{
    exposition,
    Registry,
};
use axum::{
    extract::State,
    http::header,
    response::IntoResponse,
    routing::get,
    Router,
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<Registry>,
}

pub fn create_router(registry: Arc<Registry>) -> Router {
    let state = AppState { registry };

    Router::new()
        .route("/metrics", get(metrics))
        .route("/healthz", get(healthz))
        .with_state(state)
}

async fn metrics(State(state): State<AppState>) -> impl IntoResponse {
    let families = state.registry.gather().await;
    ([(header::CONTENT_TYPE, exposition::CONTENT_TYPE)], exposition::render(&families))
}

async fn healthz() -> &'static str {
    "ok"
}
