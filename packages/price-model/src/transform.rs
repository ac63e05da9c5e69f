//! Column-wise feature transform.
//!
//! Numeric columns are median-imputed and standardized. Categorical columns
//! are most-frequent-imputed and one-hot encoded; categories never seen
//! during fitting encode as an all-zero block. `Supply_score` joins the
//! numeric columns when it survived the sparse-column drop; the inspection
//! date never does.

use std::collections::{BTreeMap, BTreeSet};

use car_data_prep::NormalizedRecord;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

pub const NUMERIC_FEATURES: [&str; 4] = ["Year", "Hand", "capacity_Engine", "Km"];

/// Optional numeric column, used only when present in the training records.
pub const SUPPLY_SCORE: &str = "Supply_score";

pub const CATEGORICAL_FEATURES: [&str; 5] =
    ["manufactor", "model", "Gear", "Engine_type", "ownership"];

/// Missing values come back as NaN and are median-imputed.
fn numeric_value(record: &NormalizedRecord, name: &str) -> f64 {
    match name {
        "Year" => record.year,
        "Hand" => record.hand,
        "capacity_Engine" => record.capacity_engine,
        "Km" => record.km,
        SUPPLY_SCORE => record.supply_score.unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

fn categorical_values(record: &NormalizedRecord) -> [Option<String>; 5] {
    [
        record.manufacturer.clone(),
        record.model.clone(),
        Some(record.gear.as_str().to_string()),
        Some(record.engine_type.as_str().to_string()),
        Some(record.ownership.as_str().to_string()),
    ]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericColumn {
    pub name: String,
    pub median: f64,
    pub mean: f64,
    pub scale: f64,
}

impl NumericColumn {
    fn fit(name: &str, values: &[f64]) -> Self {
        let mut known: Vec<f64> = values.iter().copied().filter(|v| v.is_finite()).collect();
        known.sort_by(f64::total_cmp);
        let median = match known.len() {
            0 => 0.0,
            n if n % 2 == 1 => known[n / 2],
            n => (known[n / 2 - 1] + known[n / 2]) / 2.0,
        };

        let filled: Vec<f64> = values
            .iter()
            .map(|v| if v.is_finite() { *v } else { median })
            .collect();
        let n = filled.len().max(1) as f64;
        let mean = filled.iter().sum::<f64>() / n;
        let variance = filled.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n;
        let std = variance.sqrt();

        Self {
            name: name.to_string(),
            median,
            mean,
            scale: if std < 1e-10 { 1.0 } else { std },
        }
    }

    fn apply(&self, value: f64) -> f64 {
        let value = if value.is_finite() { value } else { self.median };
        (value - self.mean) / self.scale
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoricalColumn {
    pub name: String,
    pub most_frequent: Option<String>,
    /// Sorted; one output column per category
    pub categories: Vec<String>,
}

impl CategoricalColumn {
    fn fit(name: &str, values: &[Option<String>]) -> Self {
        let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
        for value in values.iter().flatten() {
            *counts.entry(value.as_str()).or_default() += 1;
        }
        let best = counts.values().copied().max().unwrap_or(0);
        let most_frequent = counts
            .iter()
            .find(|(_, c)| **c == best)
            .map(|(v, _)| v.to_string());

        let categories: BTreeSet<String> = values
            .iter()
            .flatten()
            .cloned()
            .chain(most_frequent.clone())
            .collect();

        Self {
            name: name.to_string(),
            most_frequent,
            categories: categories.into_iter().collect(),
        }
    }

    fn position(&self, value: Option<&str>) -> Option<usize> {
        let value = value.or(self.most_frequent.as_deref())?;
        self.categories
            .binary_search_by(|c| c.as_str().cmp(value))
            .ok()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnTransformer {
    pub numeric: Vec<NumericColumn>,
    pub categorical: Vec<CategoricalColumn>,
}

impl ColumnTransformer {
    pub fn fit(records: &[NormalizedRecord]) -> Result<Self> {
        if records.is_empty() {
            return Err(ModelError::EmptyTrainingSet);
        }

        let mut numeric_names = NUMERIC_FEATURES.to_vec();
        if records.iter().any(|r| r.supply_score.is_some()) {
            numeric_names.push(SUPPLY_SCORE);
        }
        let numeric = numeric_names
            .into_iter()
            .map(|name| {
                let column: Vec<f64> =
                    records.iter().map(|r| numeric_value(r, name)).collect();
                NumericColumn::fit(name, &column)
            })
            .collect();

        let categorical_rows: Vec<[Option<String>; 5]> =
            records.iter().map(categorical_values).collect();
        let categorical = CATEGORICAL_FEATURES
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let column: Vec<Option<String>> =
                    categorical_rows.iter().map(|row| row[i].clone()).collect();
                CategoricalColumn::fit(name, &column)
            })
            .collect();

        Ok(Self {
            numeric,
            categorical,
        })
    }

    /// Width of the transformed feature matrix.
    pub fn n_features(&self) -> usize {
        self.numeric.len()
            + self
                .categorical
                .iter()
                .map(|c| c.categories.len())
                .sum::<usize>()
    }

    /// Output column names, numeric first, then `<column>=<category>`.
    pub fn feature_names(&self) -> Vec<String> {
        self.numeric
            .iter()
            .map(|c| c.name.clone())
            .chain(self.categorical.iter().flat_map(|c| {
                c.categories
                    .iter()
                    .map(move |category| format!("{}={}", c.name, category))
            }))
            .collect()
    }

    pub fn transform(&self, records: &[NormalizedRecord]) -> Array2<f64> {
        let mut matrix = Array2::<f64>::zeros((records.len(), self.n_features()));

        for (row, record) in records.iter().enumerate() {
            for (col, column) in self.numeric.iter().enumerate() {
                matrix[[row, col]] = column.apply(numeric_value(record, &column.name));
            }

            let mut offset = self.numeric.len();
            for (column, value) in self.categorical.iter().zip(categorical_values(record)) {
                if let Some(position) = column.position(value.as_deref()) {
                    matrix[[row, offset + position]] = 1.0;
                }
                offset += column.categories.len();
            }
        }

        matrix
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use car_data_prep::{EngineType, Gear, Ownership};

    fn record(manufacturer: Option<&str>, year: f64, gear: Gear) -> NormalizedRecord {
        NormalizedRecord {
            manufacturer: manufacturer.map(str::to_string),
            model: Some("קורולה".to_string()),
            year,
            hand: 2.0,
            gear,
            capacity_engine: 1600.0,
            engine_type: EngineType::Gasoline,
            km: 50_000.0,
            ownership: Ownership::Private,
            price: None,
            test: None,
            supply_score: None,
        }
    }

    fn fitted() -> ColumnTransformer {
        ColumnTransformer::fit(&[
            record(Some("טויוטה"), 2010.0, Gear::Automatic),
            record(Some("טויוטה"), 2014.0, Gear::Manual),
            record(Some("קיה"), 2018.0, Gear::Automatic),
        ])
        .unwrap()
    }

    #[test]
    fn standardizes_numeric_columns() {
        let transformer = fitted();
        let year = &transformer.numeric[0];
        assert_eq!(year.mean, 2014.0);
        assert_eq!(year.median, 2014.0);

        let matrix = transformer.transform(&[record(Some("קיה"), 2014.0, Gear::Manual)]);
        assert_eq!(matrix[[0, 0]], 0.0);
        // constant hand column keeps unit scale
        assert_eq!(transformer.numeric[1].scale, 1.0);
    }

    #[test]
    fn one_hot_encodes_known_categories() {
        let transformer = fitted();
        let names = transformer.feature_names();
        let matrix = transformer.transform(&[record(Some("קיה"), 2018.0, Gear::Automatic)]);

        let kia = names.iter().position(|n| n == "manufactor=קיה").unwrap();
        let toyota = names.iter().position(|n| n == "manufactor=טויוטה").unwrap();
        assert_eq!(matrix[[0, kia]], 1.0);
        assert_eq!(matrix[[0, toyota]], 0.0);
        assert_eq!(names.len(), transformer.n_features());
    }

    #[test]
    fn unknown_category_encodes_as_zeros() {
        let transformer = fitted();
        let names = transformer.feature_names();
        let matrix = transformer.transform(&[record(Some("פרארי"), 2018.0, Gear::Robotic)]);

        for (i, name) in names.iter().enumerate() {
            if name.starts_with("manufactor=") || name.starts_with("Gear=") {
                assert_eq!(matrix[[0, i]], 0.0, "{name}");
            }
        }
    }

    #[test]
    fn retained_supply_score_becomes_a_numeric_column() {
        let mut records = vec![
            record(Some("טויוטה"), 2010.0, Gear::Automatic),
            record(Some("קיה"), 2018.0, Gear::Manual),
        ];
        records[0].supply_score = Some(4.0);

        let transformer = ColumnTransformer::fit(&records).unwrap();
        let supply = transformer.numeric.last().unwrap();
        assert_eq!(supply.name, SUPPLY_SCORE);
        assert_eq!(supply.median, 4.0);

        // absent at serving time: imputed with the median, so centered at zero
        let matrix = transformer.transform(&[record(Some("קיה"), 2018.0, Gear::Manual)]);
        assert_eq!(matrix[[0, NUMERIC_FEATURES.len()]], 0.0);
    }

    #[test]
    fn inspection_date_is_never_a_feature() {
        let transformer = fitted();
        let plain = record(Some("קיה"), 2018.0, Gear::Manual);
        let dated = NormalizedRecord {
            test: Some("01/01/2025".to_string()),
            ..plain.clone()
        };

        assert_eq!(transformer.numeric.len(), NUMERIC_FEATURES.len());
        assert_eq!(transformer.transform(&[plain]), transformer.transform(&[dated]));
    }

    #[test]
    fn missing_category_uses_most_frequent() {
        let transformer = fitted();
        let names = transformer.feature_names();
        let matrix = transformer.transform(&[record(None, 2018.0, Gear::Automatic)]);

        let toyota = names.iter().position(|n| n == "manufactor=טויוטה").unwrap();
        assert_eq!(matrix[[0, toyota]], 1.0);
    }
}
