//! Categorical value canonicalization.
//!
//! Folds known misspellings onto one spelling and turns gear, engine type
//! and ownership text into their closed enumerations.

use super::listing::Listing;
use crate::types::{EngineType, Gear, Ownership};

const MODEL_REWRITES: [(&str, &str); 7] = [
    ("קאונטרימן", "קאנטרימן"),
    ("גראנד, וויאגר", "גראנד, וויאג'ר"),
    ("גטה", "ג'טה"),
    ("גאז", "ג'אז"),
    ("C-Class קופה", "C-CLASS קופה"),
    ("E-CLASS", "E-Class"),
    ("E- CLASS", "E-Class"),
];

const MANUFACTURER_REWRITES: [(&str, &str); 1] = [("Lexsus", "לקסוס")];

fn rewrite(value: Option<String>, table: &[(&str, &str)]) -> Option<String> {
    value.map(|v| {
        table
            .iter()
            .find(|(from, _)| *from == v)
            .map(|(_, to)| to.to_string())
            .unwrap_or(v)
    })
}

/// A listing whose categorical fields are typed. Numeric text columns are
/// parsed by their own cleanup steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Candidate {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year: Option<f64>,
    pub hand: Option<f64>,
    pub years_since: Option<f64>,
    pub gear: Option<Gear>,
    pub capacity_text: Option<String>,
    pub capacity_engine: Option<f64>,
    pub engine_type: Option<EngineType>,
    pub km_text: Option<String>,
    pub km: Option<f64>,
    pub prev_ownership: Option<Ownership>,
    pub curr_ownership: Option<Ownership>,
    pub ownership: Option<Ownership>,
    pub price: Option<f64>,
    pub test: Option<String>,
    pub supply_score: Option<f64>,
}

impl From<Listing> for Candidate {
    fn from(listing: Listing) -> Self {
        Self {
            manufacturer: rewrite(listing.manufacturer, &MANUFACTURER_REWRITES),
            model: rewrite(listing.model, &MODEL_REWRITES),
            year: listing.year,
            hand: listing.hand,
            years_since: None,
            gear: listing.gear.as_deref().and_then(Gear::parse),
            capacity_text: listing.capacity_engine,
            capacity_engine: None,
            engine_type: listing.engine_type.as_deref().and_then(EngineType::parse),
            km_text: listing.km,
            km: None,
            prev_ownership: listing.prev_ownership.as_deref().and_then(Ownership::parse),
            curr_ownership: listing.curr_ownership.as_deref().and_then(Ownership::parse),
            ownership: None,
            price: listing.price,
            test: listing.test,
            supply_score: listing.supply_score,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn folds_model_and_manufacturer_variants() {
        let candidate = Candidate::from(Listing {
            manufacturer: Some("Lexsus".to_string()),
            model: Some("E- CLASS".to_string()),
            ..Default::default()
        });
        assert_eq!(candidate.manufacturer.as_deref(), Some("לקסוס"));
        assert_eq!(candidate.model.as_deref(), Some("E-Class"));
    }

    #[test]
    fn rewrites_match_whole_values_only() {
        let candidate = Candidate::from(Listing {
            model: Some("גטה GLI".to_string()),
            ..Default::default()
        });
        assert_eq!(candidate.model.as_deref(), Some("גטה GLI"));
    }

    #[test]
    fn types_categorical_fields() {
        let candidate = Candidate::from(Listing {
            gear: Some("אוטומט".to_string()),
            engine_type: Some("היבריד".to_string()),
            prev_ownership: Some("אחר".to_string()),
            curr_ownership: Some("פרטית".to_string()),
            ..Default::default()
        });
        assert_eq!(candidate.gear, Some(Gear::Automatic));
        assert_eq!(candidate.engine_type, Some(EngineType::Hybrid));
        assert_eq!(candidate.prev_ownership, None);
        assert_eq!(candidate.curr_ownership, Some(Ownership::Private));
    }
}
