//! Odometer (Km) cleanup.
//!
//! Readings are cleaned one by one ([`clean_reading`]), records with unusable
//! readings are removed, and the final value is settled by the
//! [`OdometerPolicy`] using the batch km-per-year rate.

use super::canonical::Candidate;
use crate::error::{PrepError, Result};
use crate::types::{OdometerPolicy, OdometerStats};

/// Placeholder reading used by sellers who did not know the mileage.
pub const PLACEHOLDER_KM: f64 = 1_000_000.0;

/// Readings below this were entered in thousands of kilometers.
pub const THOUSANDS_CUTOFF: f64 = 500.0;

/// Outcome of cleaning a single odometer cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Reading {
    /// Blank or negative: imputed later.
    Missing,
    Km(f64),
    /// Non-numeric text or the placeholder value: the record is dropped.
    Reject,
}

pub fn clean_reading(text: Option<&str>) -> Reading {
    let Some(text) = text else {
        return Reading::Missing;
    };
    let stripped = text.replace(',', "");
    let stripped = stripped.trim();
    if stripped.is_empty() {
        return Reading::Missing;
    }

    let km = match stripped.parse::<f64>() {
        Ok(value) if value.is_finite() => value.trunc(),
        _ => return Reading::Reject,
    };
    if km < 0.0 {
        return Reading::Missing;
    }
    if km == PLACEHOLDER_KM {
        return Reading::Reject;
    }
    if km < THOUSANDS_CUTOFF {
        return Reading::Km(km * 1000.0);
    }
    Reading::Km(km)
}

/// Parse every reading and drop the records whose reading is rejected.
pub fn clean(candidates: Vec<Candidate>) -> Result<Vec<Candidate>> {
    let total = candidates.len();
    let kept: Vec<Candidate> = candidates
        .into_iter()
        .filter_map(|mut c| match clean_reading(c.km_text.as_deref()) {
            Reading::Missing => {
                c.km = None;
                Some(c)
            }
            Reading::Km(km) => {
                c.km = Some(km);
                Some(c)
            }
            Reading::Reject => None,
        })
        .collect();

    let dropped = total - kept.len();
    if dropped > 0 {
        tracing::debug!(dropped, "Dropped records with unusable odometer readings");
    }
    if kept.is_empty() {
        return Err(PrepError::AllRecordsDropped { dropped });
    }
    Ok(kept)
}

/// Sum of nonzero readings over the sum of years since model year.
pub fn fit(candidates: &[Candidate], policy: OdometerPolicy) -> Result<OdometerStats> {
    let total_km: f64 = candidates
        .iter()
        .filter_map(|c| c.km)
        .filter(|km| *km != 0.0)
        .sum();
    let total_years: f64 = candidates.iter().filter_map(|c| c.years_since).sum();

    let km_per_year = total_km / total_years;
    if total_km == 0.0 || !km_per_year.is_finite() || km_per_year <= 0.0 {
        return Err(PrepError::DegenerateBatch {
            statistic: "km per year rate",
        });
    }

    Ok(OdometerStats {
        policy,
        km_per_year,
    })
}

pub fn impute(mut candidate: Candidate, stats: &OdometerStats) -> Candidate {
    let estimate = stats.km_per_year * candidate.years_since.unwrap_or(0.0);
    candidate.km = Some(match (stats.policy, candidate.km) {
        (OdometerPolicy::KeepObserved, Some(km)) if km != 0.0 => km,
        _ => estimate,
    });
    candidate
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_km(km: Option<&str>, years_since: f64) -> Candidate {
        Candidate {
            km_text: km.map(str::to_string),
            years_since: Some(years_since),
            ..Default::default()
        }
    }

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(clean_reading(Some("120,000")), Reading::Km(120_000.0));
        assert_eq!(clean_reading(Some("85000.7")), Reading::Km(85_000.0));
    }

    #[test]
    fn small_readings_are_thousands() {
        assert_eq!(clean_reading(Some("120")), Reading::Km(120_000.0));
        assert_eq!(clean_reading(Some("499")), Reading::Km(499_000.0));
        assert_eq!(clean_reading(Some("500")), Reading::Km(500.0));
    }

    #[test]
    fn placeholder_and_text_are_rejected() {
        assert_eq!(clean_reading(Some("1,000,000")), Reading::Reject);
        assert_eq!(clean_reading(Some("לא ידוע")), Reading::Reject);
        assert_eq!(clean_reading(None), Reading::Missing);
        assert_eq!(clean_reading(Some(" ")), Reading::Missing);
    }

    #[test]
    fn negative_readings_are_missing() {
        assert_eq!(clean_reading(Some("-10000000000000000000")), Reading::Missing);
        assert_eq!(clean_reading(Some("-120")), Reading::Missing);
        assert_eq!(clean_reading(Some("-0.5")), Reading::Km(0.0));
    }

    #[test]
    fn huge_readings_do_not_overflow() {
        assert_eq!(clean_reading(Some("1e300")), Reading::Km(1e300));
    }

    #[test]
    fn clean_drops_rejected_records() {
        let batch = vec![
            with_km(Some("1000000"), 5.0),
            with_km(Some("60,000"), 5.0),
            with_km(None, 3.0),
        ];
        let kept = clean(batch).unwrap();
        assert_eq!(kept.len(), 2);
        assert_eq!(kept[0].km, Some(60_000.0));
        assert_eq!(kept[1].km, None);
    }

    #[test]
    fn all_rejected_is_an_error() {
        let batch = vec![with_km(Some("1000000"), 5.0)];
        assert!(matches!(
            clean(batch),
            Err(PrepError::AllRecordsDropped { dropped: 1 })
        ));
    }

    #[test]
    fn batch_rate_recomputes_every_record() {
        let batch = clean(vec![
            with_km(Some("100,000"), 5.0),
            with_km(Some("20,000"), 5.0),
        ])
        .unwrap();
        let stats = fit(&batch, OdometerPolicy::BatchRate).unwrap();
        assert_eq!(stats.km_per_year, 12_000.0);

        let km: Vec<f64> = batch
            .into_iter()
            .map(|c| impute(c, &stats).km.unwrap())
            .collect();
        assert_eq!(km, vec![60_000.0, 60_000.0]);
    }

    #[test]
    fn keep_observed_only_fills_missing() {
        let batch = clean(vec![
            with_km(Some("100,000"), 5.0),
            with_km(Some("20,000"), 5.0),
            with_km(None, 2.0),
        ])
        .unwrap();
        let stats = fit(&batch, OdometerPolicy::KeepObserved).unwrap();
        // 120,000 km over 12 years
        assert_eq!(stats.km_per_year, 10_000.0);

        let km: Vec<f64> = batch
            .into_iter()
            .map(|c| impute(c, &stats).km.unwrap())
            .collect();
        assert_eq!(km, vec![100_000.0, 20_000.0, 20_000.0]);
    }
}
