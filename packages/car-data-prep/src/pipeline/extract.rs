//! Field extraction from free-text listing descriptions.
//!
//! [`extract`] is pure: it reads a description and returns what it found.
//! [`Listing::fill_from`] merges the result into a listing without touching
//! fields that are already present.

use lazy_static::lazy_static;
use regex::Regex;

use super::listing::Listing;
use crate::types::{Ownership, Vocabulary};

/// Gear tokens in match priority order.
const GEAR_TOKENS: [&str; 6] = [
    "אוטומטית",
    "טיפטרוניק",
    "ידנית",
    "רובוטית",
    "אוטומט",
    "לא מוגדר",
];

/// Engine type tokens in match priority order.
const ENGINE_TYPE_TOKENS: [&str; 7] = [
    "בנזין",
    "דיזל",
    "גז",
    "היברידי",
    "היבריד",
    "טורבו דיזל",
    "חשמלי",
];

lazy_static! {
    static ref YEAR_REGEX: Regex =
        Regex::new(r"שנה\s(198[0-9]|199[0-9]|200[0-9]|201[0-9]|202[0-4])\b").unwrap();

    static ref HAND_REGEX: Regex = Regex::new(r"\b([0-9]+)\s*יד\b").unwrap();

    static ref CAPACITY_REGEX: Regex =
        Regex::new(r"(?:נפח מנוע|נפח|מנוע)\s*([0-9]+)").unwrap();

    static ref OWNERSHIP_REGEX: Regex = Regex::new(
        &Ownership::RANKED
            .iter()
            .map(|o| regex::escape(o.as_str()))
            .collect::<Vec<_>>()
            .join("|")
    )
    .unwrap();
}

/// Values found in one description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extracted {
    pub manufacturer: Option<String>,
    pub model: Option<String>,
    pub year: Option<f64>,
    pub hand: Option<f64>,
    pub gear: Option<String>,
    pub capacity_engine: Option<String>,
    pub engine_type: Option<String>,
    pub ownership: Option<Ownership>,
}

pub fn extract(description: &str, vocabulary: &Vocabulary) -> Extracted {
    Extracted {
        manufacturer: longest_match(description, &vocabulary.manufacturers, false),
        model: longest_match(description, &vocabulary.models, true),
        year: YEAR_REGEX
            .captures(description)
            .and_then(|c| c[1].parse::<f64>().ok()),
        hand: HAND_REGEX
            .captures(description)
            .and_then(|c| c[1].parse::<f64>().ok()),
        gear: first_token(description, &GEAR_TOKENS),
        capacity_engine: CAPACITY_REGEX
            .captures(description)
            .map(|c| c[1].to_string()),
        engine_type: first_token(description, &ENGINE_TYPE_TOKENS),
        ownership: find_ownership(description),
    }
}

/// Leftmost ownership category mentioned in the text.
pub fn find_ownership(description: &str) -> Option<Ownership> {
    OWNERSHIP_REGEX
        .find(description)
        .and_then(|m| Ownership::parse(m.as_str()))
}

/// Longest vocabulary entry contained in the text. Equal lengths resolve to
/// the entry that sorts first.
fn longest_match(text: &str, vocabulary: &[String], ignore_case: bool) -> Option<String> {
    let haystack = if ignore_case {
        text.to_lowercase()
    } else {
        text.to_string()
    };

    vocabulary
        .iter()
        .filter(|entry| !entry.is_empty())
        .filter(|entry| {
            if ignore_case {
                haystack.contains(&entry.to_lowercase())
            } else {
                haystack.contains(entry.as_str())
            }
        })
        .min_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        })
        .cloned()
}

fn first_token(text: &str, tokens: &[&str]) -> Option<String> {
    tokens
        .iter()
        .find(|token| text.contains(*token))
        .map(|token| token.to_string())
}

impl Listing {
    /// Fill missing fields from the description. Present values always win.
    pub fn fill_from(self, found: Extracted) -> Self {
        let ownership = found.ownership.map(|o| o.as_str().to_string());
        Self {
            manufacturer: self.manufacturer.or(found.manufacturer),
            model: self.model.or(found.model),
            year: self.year.or(found.year),
            hand: self.hand.or(found.hand),
            gear: self.gear.or(found.gear),
            capacity_engine: self.capacity_engine.or(found.capacity_engine),
            engine_type: self.engine_type.or(found.engine_type),
            prev_ownership: self.prev_ownership.or_else(|| ownership.clone()),
            curr_ownership: self.curr_ownership.or(ownership),
            ..self
        }
    }

    /// Run description extraction when the listing has a description.
    pub fn with_description_fields(self, vocabulary: &Vocabulary) -> Self {
        match self.description.clone() {
            Some(description) => {
                let found = extract(&description, vocabulary);
                self.fill_from(found)
            }
            None => self,
        }
    }
}
