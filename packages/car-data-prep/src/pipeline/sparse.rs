//! Sparse-column drop.

use super::listing::Listing;
use crate::types::OptionalColumn;

fn is_missing(listing: &Listing, column: OptionalColumn) -> bool {
    match column {
        OptionalColumn::Test => listing.test.is_none(),
        OptionalColumn::SupplyScore => listing.supply_score.is_none(),
    }
}

fn missing_rate(listings: &[Listing], missing: impl Fn(&Listing) -> bool) -> f64 {
    if listings.is_empty() {
        return 1.0;
    }
    listings.iter().filter(|l| missing(l)).count() as f64 / listings.len() as f64
}

/// Optional columns whose missing rate stays at or below `threshold`.
///
/// Columns the estimator needs are never dropped here; a warning is logged
/// when one of them is that sparse, and imputation fills it later.
pub fn retained_columns(listings: &[Listing], threshold: f64) -> Vec<OptionalColumn> {
    let required: [(&str, fn(&Listing) -> bool); 7] = [
        ("manufactor", |l| l.manufacturer.is_none()),
        ("model", |l| l.model.is_none()),
        ("Year", |l| l.year.is_none()),
        ("Hand", |l| l.hand.is_none()),
        ("Gear", |l| l.gear.is_none()),
        ("capacity_Engine", |l| l.capacity_engine.is_none()),
        ("Engine_type", |l| l.engine_type.is_none()),
    ];
    for (name, missing) in required {
        let rate = missing_rate(listings, missing);
        if rate > threshold {
            tracing::warn!(column = name, rate, "Required column is mostly missing");
        }
    }

    OptionalColumn::ALL
        .into_iter()
        .filter(|column| {
            let rate = missing_rate(listings, |l| is_missing(l, *column));
            if rate > threshold {
                tracing::debug!(?column, rate, "Dropping sparse column");
                false
            } else {
                true
            }
        })
        .collect()
}
