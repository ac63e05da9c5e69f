//! Used-Car Price Model
//!
//! Fits and applies the price estimator on normalized listings produced by
//! `car-data-prep`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use price_model::{train, ModelArtifact, TrainOptions};
//!
//! let (records, stats) = prep.fit_transform(raw)?;
//! let artifact = train(&records, stats, &TrainOptions::default())?;
//! artifact.save("trained_model.json")?;
//!
//! let artifact = ModelArtifact::load("trained_model.json")?;
//! let prices = artifact.predict(&live_records)?;
//! ```
//!
//! # Modules
//!
//! - [`transform`] - Imputation, scaling and one-hot encoding
//! - [`elastic_net`] - Coordinate-descent ElasticNet regressor
//! - [`pipeline`] - Transform and regressor fitted together
//! - [`training`] - Holdout split, cross-validation and metrics
//! - [`artifact`] - JSON persistence of the fitted model

pub mod artifact;
pub mod elastic_net;
pub mod error;
pub mod metrics;
pub mod pipeline;
pub mod split;
pub mod training;
pub mod transform;

pub use artifact::{ModelArtifact, DEFAULT_ARTIFACT_PATH};
pub use elastic_net::{ElasticNet, ElasticNetParams};
pub use error::{ModelError, Result};
pub use metrics::RegressionMetrics;
pub use pipeline::PricePipeline;
pub use training::{train, EvaluationReport, TrainOptions};
pub use transform::ColumnTransformer;
