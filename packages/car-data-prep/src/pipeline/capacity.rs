//! Engine displacement cleanup: numeric coercion, median fill and IQR clipping.

use super::aggregate::{median, quantile};
use super::canonical::Candidate;
use crate::error::{PrepError, Result};
use crate::types::CapacityStats;

fn parse_capacity(text: &str) -> Option<f64> {
    text.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

impl Candidate {
    /// Coerce the displacement text to a number; unparseable text is missing.
    pub fn with_parsed_capacity(mut self) -> Self {
        self.capacity_engine = self.capacity_text.as_deref().and_then(parse_capacity);
        self
    }
}

/// Median of the known values, then quartile bounds over the median-filled
/// distribution.
pub fn fit(candidates: &[Candidate]) -> Result<CapacityStats> {
    let known: Vec<f64> = candidates.iter().filter_map(|c| c.capacity_engine).collect();
    let median = median(&known).ok_or(PrepError::DegenerateBatch {
        statistic: "median engine displacement",
    })?;

    let filled: Vec<f64> = candidates
        .iter()
        .map(|c| c.capacity_engine.unwrap_or(median))
        .collect();
    let q1 = quantile(&filled, 0.25).unwrap_or(median);
    let q3 = quantile(&filled, 0.75).unwrap_or(median);
    let iqr = q3 - q1;

    Ok(CapacityStats {
        median,
        lower_bound: q1 - 1.5 * iqr,
        upper_bound: q3 + 1.5 * iqr,
    })
}

pub fn impute(mut candidate: Candidate, stats: &CapacityStats) -> Candidate {
    let value = candidate.capacity_engine.unwrap_or(stats.median);
    candidate.capacity_engine = Some(value.clamp(stats.lower_bound, stats.upper_bound));
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_capacity(text: Option<&str>) -> Candidate {
        Candidate {
            capacity_text: text.map(str::to_string),
            ..Default::default()
        }
        .with_parsed_capacity()
    }

    #[test]
    fn non_numeric_text_is_missing() {
        assert_eq!(with_capacity(Some("1.6 ליטר")).capacity_engine, None);
        assert_eq!(with_capacity(Some(" 1600 ")).capacity_engine, Some(1600.0));
    }

    #[test]
    fn fills_with_median_and_clips_outliers() {
        let batch: Vec<Candidate> = ["1200", "1400", "1600", "1600", "1800", "20000"]
            .into_iter()
            .map(|t| with_capacity(Some(t)))
            .chain(std::iter::once(with_capacity(None)))
            .collect();

        let stats = fit(&batch).unwrap();
        assert_eq!(stats.median, 1600.0);

        let cleaned: Vec<f64> = batch
            .into_iter()
            .map(|c| impute(c, &stats).capacity_engine.unwrap())
            .collect();

        assert_eq!(cleaned[6], 1600.0);
        assert!(cleaned[5] <= stats.upper_bound);
        assert!(cleaned[5] < 20000.0);
        assert!(cleaned
            .iter()
            .all(|v| *v >= stats.lower_bound && *v <= stats.upper_bound));
    }

    #[test]
    fn all_missing_is_degenerate() {
        let batch = vec![with_capacity(None), with_capacity(Some("abc"))];
        assert!(fit(&batch).is_err());
    }
}
