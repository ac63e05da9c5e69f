use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// One untransformed listing, as scraped or as submitted through the form.
///
/// Every field is optional. Numeric cells that fail to parse are read as
/// `None` rather than rejecting the row.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "manufactor", default)]
    pub manufacturer: Option<String>,
    #[serde(rename = "Year", default, deserialize_with = "csv::invalid_option")]
    pub year: Option<f64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(rename = "Hand", default, deserialize_with = "csv::invalid_option")]
    pub hand: Option<f64>,
    #[serde(rename = "Gear", default)]
    pub gear: Option<String>,
    #[serde(rename = "capacity_Engine", default)]
    pub capacity_engine: Option<String>,
    #[serde(rename = "Engine_type", default)]
    pub engine_type: Option<String>,
    #[serde(rename = "Prev_ownership", default)]
    pub prev_ownership: Option<String>,
    #[serde(rename = "Curr_ownership", default)]
    pub curr_ownership: Option<String>,
    #[serde(rename = "Area", default)]
    pub area: Option<String>,
    #[serde(rename = "City", default)]
    pub city: Option<String>,
    #[serde(rename = "Price", default, deserialize_with = "csv::invalid_option")]
    pub price: Option<f64>,
    #[serde(rename = "Pic_num", default)]
    pub pic_num: Option<String>,
    #[serde(rename = "Cre_date", default)]
    pub cre_date: Option<String>,
    #[serde(rename = "Repub_date", default)]
    pub repub_date: Option<String>,
    #[serde(rename = "Description", default)]
    pub description: Option<String>,
    #[serde(rename = "Color", default)]
    pub color: Option<String>,
    #[serde(rename = "Km", default)]
    pub km: Option<String>,
    #[serde(rename = "Test", default)]
    pub test: Option<String>,
    #[serde(
        rename = "Supply_score",
        default,
        deserialize_with = "csv::invalid_option"
    )]
    pub supply_score: Option<f64>,
}

impl RawRecord {
    /// Read every listing from a CSV source with the scraped column headers.
    pub fn read_csv<R: Read>(reader: R) -> Result<Vec<RawRecord>> {
        let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);
        let mut records = Vec::new();
        for result in reader.deserialize() {
            records.push(result?);
        }
        Ok(records)
    }
}

/// Treat blank and whitespace-only text as missing.
pub fn present(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
