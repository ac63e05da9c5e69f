//! Statistics learned from a training batch.
//!
//! Fitting produces a [`FeatureStats`]; serving injects it back so a single
//! live record is cleaned with the same numbers the model was trained on.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::categories::{EngineType, Gear, Ownership};
use super::config::OdometerPolicy;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureStats {
    /// Year that ages were measured against; serving reuses it.
    pub reference_year: i32,
    pub vocabulary: Vocabulary,
    pub retained_columns: Vec<OptionalColumn>,
    pub age: AgeStats,
    pub gear: GearStats,
    pub capacity: CapacityStats,
    pub engine_type: EngineTypeStats,
    pub odometer: OdometerStats,
    pub ownership: OwnershipStats,
}

/// Manufacturer and model names searched for in descriptions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Vocabulary {
    pub manufacturers: Vec<String>,
    pub models: Vec<String>,
}

/// Passthrough columns that may be removed when too sparse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionalColumn {
    Test,
    SupplyScore,
}

impl OptionalColumn {
    pub const ALL: [OptionalColumn; 2] = [OptionalColumn::Test, OptionalColumn::SupplyScore];
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeStats {
    /// Mean of `years_since_year / hand` over rows with both known.
    pub mean_ratio: f64,
    /// Used when a record has neither year nor hand.
    pub median_years_since: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GearStats {
    pub by_year: BTreeMap<i32, Gear>,
    pub fallback: Gear,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CapacityStats {
    pub median: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineTypeStats {
    pub by_manufacturer: BTreeMap<String, EngineType>,
    pub fallback: EngineType,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OdometerStats {
    pub policy: OdometerPolicy,
    pub km_per_year: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OwnershipStats {
    pub most_frequent: Ownership,
}
