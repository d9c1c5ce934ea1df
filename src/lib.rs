use std::sync::Arc;

use axum::{middleware, routing::get, Router};

pub mod config;
pub mod domain;
pub mod errors;
pub mod http;
pub mod logging;
pub mod source;

use source::DocumentProvider;

#[derive(Clone)]
pub struct AppState {
    pub document_provider: Arc<dyn DocumentProvider>,
}

impl AppState {
    pub fn new(document_provider: Arc<dyn DocumentProvider>) -> Self {
        Self { document_provider }
    }
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(http::handlers::root))
        .route("/health", get(http::handlers::health))
        .route("/api/quotes", get(http::handlers::list_quotes))
        .route("/api/categories", get(http::handlers::list_categories))
        .route(
            "/api/prayers/category/{category_id}",
            get(http::handlers::list_quotes_by_category),
        )
        .layer(middleware::from_fn(logging::request_logging_middleware))
        .with_state(state)
}
