use chrono::Datelike;
use serde::{Deserialize, Serialize};

/// How the odometer column is finalized once readings are cleaned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum OdometerPolicy {
    /// Keep each record's cleaned reading; only missing or zero readings are
    /// estimated from the batch km-per-year rate.
    #[default]
    KeepObserved,
    /// Replace every reading with `km_per_year * years_since_year`, discarding
    /// the record's own reading. Matches models trained on the legacy
    /// preparation.
    BatchRate,
}

/// Normalizer settings.
#[derive(Debug, Clone, PartialEq)]
pub struct PrepConfig {
    /// Year that "years since model year" is measured from when fitting;
    /// frozen statistics carry their own.
    pub reference_year: i32,
    /// Policy used when fitting; frozen statistics carry their own too.
    pub odometer_policy: OdometerPolicy,
    /// Missing-value rate above which an optional column is dropped.
    pub sparse_threshold: f64,
}

impl Default for PrepConfig {
    fn default() -> Self {
        Self {
            reference_year: chrono::Local::now().year(),
            odometer_policy: OdometerPolicy::default(),
            sparse_threshold: 0.5,
        }
    }
}

impl PrepConfig {
    pub fn with_reference_year(mut self, year: i32) -> Self {
        self.reference_year = year;
        self
    }

    pub fn with_odometer_policy(mut self, policy: OdometerPolicy) -> Self {
        self.odometer_policy = policy;
        self
    }
}
