//! Joint imputation of model year and hand (ownership count).
//!
//! The link between the two is the batch mean of `years_since_year / hand`.

use super::aggregate::{mean, median};
use super::canonical::Candidate;
use crate::error::{PrepError, Result};
use crate::types::AgeStats;

impl Candidate {
    pub fn with_years_since(mut self, reference_year: i32) -> Self {
        self.years_since = self.year.map(|year| f64::from(reference_year) - year);
        self
    }
}

pub fn fit(candidates: &[Candidate]) -> Result<AgeStats> {
    let ratios: Vec<f64> = candidates
        .iter()
        .filter_map(|c| match (c.years_since, c.hand) {
            (Some(years), Some(hand)) if hand > 0.0 => Some(years / hand),
            _ => None,
        })
        .collect();

    let mean_ratio = mean(&ratios)
        .filter(|r| r.is_finite() && *r > 0.0)
        .ok_or(PrepError::DegenerateBatch {
            statistic: "mean years-since-year to hand ratio",
        })?;

    let known_years: Vec<f64> = candidates.iter().filter_map(|c| c.years_since).collect();
    let median_years_since = median(&known_years).ok_or(PrepError::DegenerateBatch {
        statistic: "median years since model year",
    })?;

    Ok(AgeStats {
        mean_ratio,
        median_years_since,
    })
}

/// Fill hand from years-since-year and vice versa, then back out the year.
pub fn impute(candidate: Candidate, stats: &AgeStats, reference_year: i32) -> Candidate {
    let (years_since, hand) = match (candidate.years_since, candidate.hand) {
        (Some(years), Some(hand)) => (years, hand),
        (Some(years), None) => (years, years / stats.mean_ratio),
        (None, Some(hand)) => (hand * stats.mean_ratio, hand),
        (None, None) => (
            stats.median_years_since,
            stats.median_years_since / stats.mean_ratio,
        ),
    };

    Candidate {
        year: candidate
            .year
            .or(Some(f64::from(reference_year) - years_since)),
        hand: Some(hand),
        years_since: Some(years_since),
        ..candidate
    }
}
