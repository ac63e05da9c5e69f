//! Single-listing price prediction against a loaded model artifact.

use std::path::Path;

use car_data_prep::{CarDataPrep, PrepConfig, PrepError, RawRecord};
use price_model::{ModelArtifact, ModelError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PredictError {
    /// The submission could not be cleaned into a feature record
    #[error("{0}")]
    Normalize(#[from] PrepError),

    #[error("{0}")]
    Estimate(#[from] ModelError),

    #[error("model returned no prediction")]
    Empty,
}

/// Normalizer plus fitted pipeline, shared read-only across requests.
pub struct PricePredictor {
    prep: CarDataPrep,
    artifact: ModelArtifact,
}

impl PricePredictor {
    pub fn new(artifact: ModelArtifact, config: PrepConfig) -> Self {
        Self {
            prep: CarDataPrep::new(config),
            artifact,
        }
    }

    pub fn load(path: impl AsRef<Path>, config: PrepConfig) -> Result<Self, ModelError> {
        Ok(Self::new(ModelArtifact::load(path)?, config))
    }

    pub fn artifact(&self) -> &ModelArtifact {
        &self.artifact
    }

    /// Predict the price of one submitted listing.
    pub fn predict(&self, listing: RawRecord) -> Result<f64, PredictError> {
        let records = self
            .prep
            .transform(vec![listing], &self.artifact.feature_stats)?;
        let prices = self.artifact.predict(&records)?;
        let price = prices.first().copied().ok_or(PredictError::Empty)?;

        tracing::debug!(
            price,
            manufacturer = ?records[0].manufacturer,
            year = records[0].year,
            km = records[0].km,
            "Predicted price"
        );
        Ok(price)
    }
}
