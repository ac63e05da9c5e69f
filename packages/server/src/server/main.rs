// Main entry point for the prediction server

use std::sync::Arc;

use anyhow::{Context, Result};
use car_data_prep::PrepConfig;
use server_core::{server::build_app, Config, PricePredictor};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,server_core=debug,car_data_prep=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting car price prediction server");

    // Load configuration
    let config = Config::from_env().context("Failed to load configuration")?;
    tracing::info!("Configuration loaded");

    // Load the trained model; ages are measured against its reference year
    tracing::info!(path = %config.model_path.display(), "Loading model artifact...");
    let predictor = PricePredictor::load(&config.model_path, PrepConfig::default())
        .context("Failed to load model artifact")?;
    tracing::info!(
        reference_year = predictor.artifact().feature_stats.reference_year,
        "Model loaded"
    );

    let app = build_app(Arc::new(predictor));

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("Starting server on {}", addr);
    tracing::info!("Prediction form: http://localhost:{}/", config.port);
    tracing::info!("Health check: http://localhost:{}/health", config.port);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .context("Failed to bind to address")?;

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
