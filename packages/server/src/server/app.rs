//! Application setup and server configuration.

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::predictor::PricePredictor;
use crate::server::routes::{health_handler, predict_handler};
use crate::server::static_files::serve_form;

/// Shared application state
pub type AppState = Arc<PricePredictor>;

/// Build the Axum application router
pub fn build_app(predictor: AppState) -> Router {
    // CORS configuration - allow any origin for the form and API
    let cors = CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([CONTENT_TYPE]);

    Router::new()
        .route("/", get(serve_form))
        .route("/predict", post(predict_handler))
        .route("/health", get(health_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(predictor))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}
