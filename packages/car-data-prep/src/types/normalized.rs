use serde::{Deserialize, Serialize};

use super::categories::{EngineType, Gear, Ownership};

/// A listing after cleaning, ready for the price estimator.
///
/// Gear, engine type, ownership and every numeric field are always present.
/// Manufacturer and model are free-form and may still be missing; the
/// estimator imputes them with its own most-frequent rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedRecord {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year: f64,
    pub hand: f64,
    pub gear: Gear,
    pub capacity_engine: f64,
    pub engine_type: EngineType,
    pub km: f64,
    pub ownership: Ownership,
    /// Sale price, present on training rows only.
    pub price: Option<f64>,
    /// Inspection date, kept only when the column survived the sparse-column
    /// drop. Passthrough only: the estimator never reads it.
    pub test: Option<String>,
    /// Kept only when the column survived the sparse-column drop; the
    /// estimator uses it as an extra numeric feature when retained.
    pub supply_score: Option<f64>,
}
