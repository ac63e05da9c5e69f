//! Closed categorical vocabularies for gear, engine type and ownership.
//!
//! Parsing folds known spelling variants onto one canonical label and maps
//! placeholder values ("לא מוגדר", "אחר") to `None`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Placeholder the listings use for an unknown value.
pub const UNDEFINED: &str = "לא מוגדר";

/// Placeholder for an ownership that fits no category.
pub const OTHER: &str = "אחר";

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gear {
    Automatic,
    Manual,
    Tiptronic,
    Robotic,
}

impl Gear {
    pub const ALL: [Gear; 4] = [Gear::Automatic, Gear::Manual, Gear::Tiptronic, Gear::Robotic];

    /// Canonical listing label.
    pub fn as_str(self) -> &'static str {
        match self {
            Gear::Automatic => "אוטומטית",
            Gear::Manual => "ידנית",
            Gear::Tiptronic => "טיפטרוניק",
            Gear::Robotic => "רובוטית",
        }
    }

    /// Parse a listing label. Unknown text and the undefined placeholder are `None`.
    pub fn parse(label: &str) -> Option<Gear> {
        match label.trim() {
            "אוטומטית" | "אוטומט" | "אוטומטי" => Some(Gear::Automatic),
            "ידנית" | "ידני" => Some(Gear::Manual),
            "טיפטרוניק" => Some(Gear::Tiptronic),
            "רובוטית" | "רובוטי" => Some(Gear::Robotic),
            _ => None,
        }
    }
}

impl fmt::Display for Gear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EngineType {
    Gasoline,
    Diesel,
    Gas,
    Hybrid,
    Electric,
}

impl EngineType {
    pub const ALL: [EngineType; 5] = [
        EngineType::Gasoline,
        EngineType::Diesel,
        EngineType::Gas,
        EngineType::Hybrid,
        EngineType::Electric,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            EngineType::Gasoline => "בנזין",
            EngineType::Diesel => "דיזל",
            EngineType::Gas => "גז",
            EngineType::Hybrid => "היברידי",
            EngineType::Electric => "חשמלי",
        }
    }

    pub fn parse(label: &str) -> Option<EngineType> {
        match label.trim() {
            "בנזין" => Some(EngineType::Gasoline),
            "דיזל" | "טורבו דיזל" => Some(EngineType::Diesel),
            "גז" => Some(EngineType::Gas),
            "היברידי" | "היבריד" | "היברידית" => Some(EngineType::Hybrid),
            "חשמלי" | "חשמלית" => Some(EngineType::Electric),
            _ => None,
        }
    }
}

impl fmt::Display for EngineType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ownership category, declared in priority order: when two observations
/// disagree the lower-ranked one wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Ownership {
    Taxi,
    DrivingSchool,
    Rental,
    Leasing,
    Private,
    PersonalImport,
    Government,
    /// Offered by the form but absent from the ranking, so it loses to
    /// every ranked category.
    Company,
}

impl Ownership {
    pub const ALL: [Ownership; 8] = [
        Ownership::Taxi,
        Ownership::DrivingSchool,
        Ownership::Rental,
        Ownership::Leasing,
        Ownership::Private,
        Ownership::PersonalImport,
        Ownership::Government,
        Ownership::Company,
    ];

    /// Categories searched for in free-text descriptions, in rank order.
    pub const RANKED: [Ownership; 7] = [
        Ownership::Taxi,
        Ownership::DrivingSchool,
        Ownership::Rental,
        Ownership::Leasing,
        Ownership::Private,
        Ownership::PersonalImport,
        Ownership::Government,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Ownership::Taxi => "מונית",
            Ownership::DrivingSchool => "לימוד נהיגה",
            Ownership::Rental => "השכרה",
            Ownership::Leasing => "ליסינג",
            Ownership::Private => "פרטית",
            Ownership::PersonalImport => "ייבוא אישי",
            Ownership::Government => "ממשלתי",
            Ownership::Company => "חברה",
        }
    }

    /// Priority rank, 1 being the strongest.
    pub fn rank(self) -> u8 {
        self as u8 + 1
    }

    pub fn parse(label: &str) -> Option<Ownership> {
        let label = label.trim();
        Ownership::ALL.into_iter().find(|o| o.as_str() == label)
    }

    /// Merge a previous and a current ownership observation.
    pub fn combine(prev: Option<Ownership>, curr: Option<Ownership>) -> Option<Ownership> {
        match (prev, curr) {
            (Some(p), Some(c)) => Some(p.min(c)),
            (p, c) => p.or(c),
        }
    }
}

impl fmt::Display for Ownership {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
