//! Group-mode imputation for gear (by model year) and engine type (by
//! manufacturer).

use super::aggregate::{mode, mode_by};
use super::canonical::Candidate;
use crate::error::{PrepError, Result};
use crate::types::{EngineTypeStats, GearStats};

fn year_key(year: Option<f64>) -> Option<i32> {
    year.map(|y| y.round() as i32)
}

pub fn fit_gear(candidates: &[Candidate]) -> Result<GearStats> {
    let by_year = mode_by(
        candidates
            .iter()
            .filter_map(|c| Some((year_key(c.year)?, c.gear?))),
    );
    let fallback = mode(candidates.iter().filter_map(|c| c.gear)).ok_or(
        PrepError::DegenerateBatch {
            statistic: "most frequent gear",
        },
    )?;
    Ok(GearStats { by_year, fallback })
}

pub fn impute_gear(mut candidate: Candidate, stats: &GearStats) -> Candidate {
    if candidate.gear.is_none() {
        let by_year = year_key(candidate.year).and_then(|y| stats.by_year.get(&y));
        candidate.gear = Some(by_year.copied().unwrap_or(stats.fallback));
    }
    candidate
}

pub fn fit_engine_type(candidates: &[Candidate]) -> Result<EngineTypeStats> {
    let by_manufacturer = mode_by(
        candidates
            .iter()
            .filter_map(|c| Some((c.manufacturer.clone()?, c.engine_type?))),
    );
    let fallback = mode(candidates.iter().filter_map(|c| c.engine_type)).ok_or(
        PrepError::DegenerateBatch {
            statistic: "most frequent engine type",
        },
    )?;
    Ok(EngineTypeStats {
        by_manufacturer,
        fallback,
    })
}

pub fn impute_engine_type(mut candidate: Candidate, stats: &EngineTypeStats) -> Candidate {
    if candidate.engine_type.is_none() {
        let by_manufacturer = candidate
            .manufacturer
            .as_ref()
            .and_then(|m| stats.by_manufacturer.get(m));
        candidate.engine_type = Some(by_manufacturer.copied().unwrap_or(stats.fallback));
    }
    candidate
}
