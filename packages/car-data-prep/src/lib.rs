//! Used-Car Listing Preparation
//!
//! Turns noisy car listings (scraped rows or form submissions) into clean,
//! fully-populated feature records for price estimation.
//!
//! # Usage
//!
//! ```rust,ignore
//! use car_data_prep::{CarDataPrep, PrepConfig, RawRecord};
//!
//! let prep = CarDataPrep::new(PrepConfig::default());
//!
//! // Training: learn statistics from the dataset and keep them
//! let (records, stats) = prep.fit_transform(RawRecord::read_csv(file)?)?;
//!
//! // Serving: clean one submission with the training statistics
//! let live = prep.transform(vec![submission], &stats)?;
//! ```
//!
//! # Modules
//!
//! - [`types`] - Raw and normalized records, categorical vocabularies, frozen statistics
//! - [`pipeline`] - The ordered cleaning and imputation steps
//! - [`error`] - Batch-level failures

pub mod error;
pub mod pipeline;
pub mod types;

pub use error::{PrepError, Result};
pub use pipeline::extract::{extract, Extracted};
pub use pipeline::CarDataPrep;
pub use types::{
    AgeStats, CapacityStats, EngineType, EngineTypeStats, FeatureStats, Gear, GearStats,
    NormalizedRecord, OdometerPolicy, OdometerStats, OptionalColumn, Ownership, OwnershipStats,
    PrepConfig, RawRecord, Vocabulary,
};
