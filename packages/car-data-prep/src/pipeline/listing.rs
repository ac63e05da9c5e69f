//! Column pruning and model-name canonication.

use lazy_static::lazy_static;
use regex::Regex;

use crate::types::raw::present;
use crate::types::RawRecord;

lazy_static! {
    static ref YEAR_IN_PARENS: Regex = Regex::new(r"\([0-9]{4}\)").unwrap();
}

/// A listing with the unused columns removed and every text field trimmed.
///
/// Fields stay in their scraped text form until canonicalization.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Listing {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year: Option<f64>,
    pub hand: Option<f64>,
    pub gear: Option<String>,
    pub capacity_engine: Option<String>,
    pub engine_type: Option<String>,
    pub prev_ownership: Option<String>,
    pub curr_ownership: Option<String>,
    pub description: Option<String>,
    pub km: Option<String>,
    pub price: Option<f64>,
    pub test: Option<String>,
    pub supply_score: Option<f64>,
}

/// Drops area, city, photo count, creation/republish dates and color.
impl From<RawRecord> for Listing {
    fn from(raw: RawRecord) -> Self {
        Self {
            manufacturer: present(raw.manufacturer),
            model: present(raw.model),
            year: raw.year.filter(|v| v.is_finite()),
            hand: raw.hand.filter(|v| v.is_finite()),
            gear: present(raw.gear),
            capacity_engine: present(raw.capacity_engine),
            engine_type: present(raw.engine_type),
            prev_ownership: present(raw.prev_ownership),
            curr_ownership: present(raw.curr_ownership),
            description: present(raw.description),
            km: present(raw.km),
            price: raw.price.filter(|v| v.is_finite()),
            test: present(raw.test),
            supply_score: raw.supply_score.filter(|v| v.is_finite()),
        }
    }
}

impl Listing {
    /// Strip the manufacturer name and any parenthesised year from the model.
    pub fn with_canonical_model(mut self) -> Self {
        if let Some(model) = self.model.take() {
            let model = match self.manufacturer.as_deref() {
                Some(manufacturer) => model.replace(manufacturer, ""),
                None => model,
            };
            let model = YEAR_IN_PARENS.replace_all(model.trim(), "");
            self.model = present(Some(model.into_owned()));
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing(manufacturer: &str, model: &str) -> Listing {
        Listing {
            manufacturer: Some(manufacturer.to_string()),
            model: Some(model.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn strips_manufacturer_and_year() {
        let canonical = listing("טויוטה", "טויוטה קורולה (2018)").with_canonical_model();
        assert_eq!(canonical.model.as_deref(), Some("קורולה"));
    }

    #[test]
    fn keeps_model_without_decorations() {
        let canonical = listing("מאזדה", "3").with_canonical_model();
        assert_eq!(canonical.model.as_deref(), Some("3"));
    }

    #[test]
    fn model_equal_to_manufacturer_becomes_missing() {
        let canonical = listing("מיני", "מיני").with_canonical_model();
        assert_eq!(canonical.model, None);
    }

    #[test]
    fn pruning_discards_unused_columns_and_blanks() {
        let raw = RawRecord {
            manufacturer: Some("פורד".to_string()),
            gear: Some("".to_string()),
            area: Some("מרכז".to_string()),
            color: Some("כחול".to_string()),
            ..Default::default()
        };
        let listing = Listing::from(raw);
        assert_eq!(listing.manufacturer.as_deref(), Some("פורד"));
        assert_eq!(listing.gear, None);
    }
}
