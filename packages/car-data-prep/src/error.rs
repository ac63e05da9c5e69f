//! Typed errors for the listing normalizer.
//!
//! Malformed individual fields never produce an error: they degrade to
//! missing values and are imputed. Errors are reserved for batches that
//! cannot be normalized as a whole.

use thiserror::Error;

/// Errors that can occur while normalizing a batch of listings.
#[derive(Debug, Error)]
pub enum PrepError {
    /// No records were supplied
    #[error("batch is empty")]
    EmptyBatch,

    /// Every record was removed by the odometer cleanup
    #[error("all {dropped} records were dropped during odometer cleanup")]
    AllRecordsDropped { dropped: usize },

    /// A batch statistic had no valid rows to be computed from
    #[error("cannot compute {statistic}: no valid rows in batch")]
    DegenerateBatch { statistic: &'static str },

    /// A field was left empty by every imputation step
    #[error("{field} is still missing after imputation")]
    Unresolved { field: &'static str },

    /// Reading listings from CSV failed
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type alias for normalizer operations.
pub type Result<T> = std::result::Result<T, PrepError>;
