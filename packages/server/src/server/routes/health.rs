use axum::{extract::Extension, Json};
use chrono::{DateTime, Utc};
use price_model::RegressionMetrics;
use serde::Serialize;

use crate::server::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    status: String,
    model: ModelHealth,
}

#[derive(Serialize)]
pub struct ModelHealth {
    trained_at: DateTime<Utc>,
    features: usize,
    holdout: RegressionMetrics,
    #[serde(skip_serializing_if = "Option::is_none")]
    cv_r2: Option<f64>,
}

/// Health check endpoint
///
/// The model is loaded before the server binds, so a running server is
/// always healthy; the body reports which artifact it serves.
pub async fn health_handler(Extension(predictor): Extension<AppState>) -> Json<HealthResponse> {
    let artifact = predictor.artifact();

    Json(HealthResponse {
        status: "healthy".to_string(),
        model: ModelHealth {
            trained_at: artifact.trained_at,
            features: artifact.n_features(),
            holdout: artifact.metrics.holdout,
            cv_r2: artifact.metrics.cv_r2_mean(),
        },
    })
}
