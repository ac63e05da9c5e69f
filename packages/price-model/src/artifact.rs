//! Persisted model: fitted pipeline plus the preparation statistics it was
//! trained against.

use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use car_data_prep::{FeatureStats, NormalizedRecord};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::pipeline::PricePipeline;
use crate::training::EvaluationReport;

pub const DEFAULT_ARTIFACT_PATH: &str = "trained_model.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub pipeline: PricePipeline,
    pub feature_stats: FeatureStats,
    pub metrics: EvaluationReport,
    pub trained_at: DateTime<Utc>,
}

impl ModelArtifact {
    pub fn new(
        pipeline: PricePipeline,
        feature_stats: FeatureStats,
        metrics: EvaluationReport,
    ) -> Self {
        Self {
            pipeline,
            feature_stats,
            metrics,
            trained_at: Utc::now(),
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer(writer, self)?;
        tracing::info!(path = %path.as_ref().display(), "Saved model artifact");
        Ok(())
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let reader = BufReader::new(File::open(path.as_ref())?);
        let artifact: Self = serde_json::from_reader(reader)?;
        tracing::info!(
            path = %path.as_ref().display(),
            trained_at = %artifact.trained_at,
            "Loaded model artifact"
        );
        Ok(artifact)
    }

    pub fn predict(&self, records: &[NormalizedRecord]) -> Result<Vec<f64>> {
        self.pipeline.predict(records)
    }

    pub fn n_features(&self) -> usize {
        self.pipeline.transformer.n_features()
    }
}
