use std::sync::Arc;

use axum::{
    http::{header, HeaderValue},
    routing::{get, post},
    Router,
};
use tower_http::compression::CompressionLayer;
use tower_http::set_header::SetResponseHeaderLayer;

use verity_common::Predictor;

pub mod explain;
pub mod pages;
pub mod rest;
pub mod templates;

use explain::Explainer;

// --- App State ---

/// Shared, read-only request state. The classifier inside the predictor is
/// loaded once at startup and never mutated.
pub struct AppState {
    pub predictor: Predictor,
    pub explainer: Option<Arc<dyn Explainer>>,
}

impl AppState {
    pub fn new(predictor: Predictor) -> Self {
        Self {
            predictor,
            explainer: None,
        }
    }

    pub fn with_explainer(mut self, explainer: Arc<dyn Explainer>) -> Self {
        self.explainer = Some(explainer);
        self
    }

    pub fn explanations_enabled(&self) -> bool {
        self.explainer.is_some()
    }
}

// --- Router ---

pub fn app(state: Arc<AppState>) -> Router {
    Router::new()
        // Page
        .route("/", get(pages::index_page).post(pages::analyze_page))
        // REST API
        .route("/api/predict", post(rest::api_predict))
        // Health check
        .route("/health", get(|| async { "ok" }))
        .with_state(state)
        // CORS
        .layer(
            tower_http::cors::CorsLayer::new()
                .allow_origin(tower_http::cors::Any)
                .allow_methods(tower_http::cors::Any)
                .allow_headers(tower_http::cors::Any),
        )
        .layer(CompressionLayer::new())
        // Privacy headers: submitted text must not be cached anywhere
        .layer(SetResponseHeaderLayer::overriding(
            header::CACHE_CONTROL,
            HeaderValue::from_static("no-store"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::PRAGMA,
            HeaderValue::from_static("no-cache"),
        ))
        // Logging layer: method + path only, never the submitted text
        .layer(
            tower_http::trace::TraceLayer::new_for_http().make_span_with(
                |request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        path = %request.uri().path(),
                    )
                },
            ),
        )
}
