//! Ownership combination and most-frequent fill.

use super::aggregate::mode;
use super::canonical::Candidate;
use crate::error::{PrepError, Result};
use crate::types::{Ownership, OwnershipStats};

impl Candidate {
    pub fn with_combined_ownership(mut self) -> Self {
        self.ownership = Ownership::combine(self.prev_ownership, self.curr_ownership);
        self
    }
}

pub fn fit(candidates: &[Candidate]) -> Result<OwnershipStats> {
    let most_frequent = mode(candidates.iter().filter_map(|c| c.ownership)).ok_or(
        PrepError::DegenerateBatch {
            statistic: "most frequent ownership",
        },
    )?;
    Ok(OwnershipStats { most_frequent })
}

pub fn impute(mut candidate: Candidate, stats: &OwnershipStats) -> Candidate {
    candidate.ownership = candidate.ownership.or(Some(stats.most_frequent));
    candidate
}
