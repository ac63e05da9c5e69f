//! The normalization pipeline.
//!
//! Steps run in a fixed order because later steps read fields filled by
//! earlier ones:
//!
//! 1. column pruning and model-name canonication ([`listing`])
//! 2. description extraction and ownership back-fill ([`extract`])
//! 3. sparse-column drop ([`sparse`])
//! 4. categorical canonicalization ([`canonical`])
//! 5. year / hand imputation ([`age`])
//! 6. gear by year ([`categorical`])
//! 7. engine displacement cleanup ([`capacity`])
//! 8. engine type by manufacturer ([`categorical`])
//! 9. odometer cleanup ([`odometer`])
//! 10. ownership combination ([`ownership`])
//!
//! Every statistic is either fitted on the batch or taken from a frozen
//! [`FeatureStats`].

pub mod aggregate;
pub mod age;
pub mod canonical;
pub mod capacity;
pub mod categorical;
pub mod extract;
pub mod listing;
pub mod odometer;
pub mod ownership;
pub mod sparse;

use std::collections::BTreeSet;

use canonical::Candidate;
use listing::Listing;

use crate::error::{PrepError, Result};
use crate::types::{
    FeatureStats, NormalizedRecord, OptionalColumn, PrepConfig, RawRecord, Vocabulary,
};

/// Cleans raw listings into records the estimator accepts.
#[derive(Debug, Clone, Default)]
pub struct CarDataPrep {
    config: PrepConfig,
}

impl CarDataPrep {
    pub fn new(config: PrepConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PrepConfig {
        &self.config
    }

    /// Normalize a batch, learning every statistic from the batch itself.
    ///
    /// Returns the statistics that were used so they can be frozen into a
    /// model artifact.
    pub fn fit_transform(
        &self,
        batch: Vec<RawRecord>,
    ) -> Result<(Vec<NormalizedRecord>, FeatureStats)> {
        self.run(batch, None)
    }

    /// Normalize a batch with statistics learned earlier. Nothing is
    /// computed from the batch, so a single record is handled exactly like
    /// a training row.
    pub fn transform(
        &self,
        batch: Vec<RawRecord>,
        stats: &FeatureStats,
    ) -> Result<Vec<NormalizedRecord>> {
        self.run(batch, Some(stats)).map(|(records, _)| records)
    }

    /// Normalize a batch with batch statistics, discarding them.
    pub fn prepare(&self, batch: Vec<RawRecord>) -> Result<Vec<NormalizedRecord>> {
        self.fit_transform(batch).map(|(records, _)| records)
    }

    fn run(
        &self,
        batch: Vec<RawRecord>,
        frozen: Option<&FeatureStats>,
    ) -> Result<(Vec<NormalizedRecord>, FeatureStats)> {
        if batch.is_empty() {
            return Err(PrepError::EmptyBatch);
        }
        let received = batch.len();
        let reference_year = frozen.map_or(self.config.reference_year, |s| s.reference_year);

        let listings: Vec<Listing> = batch
            .into_iter()
            .map(Listing::from)
            .map(Listing::with_canonical_model)
            .collect();

        let vocabulary = match frozen {
            Some(stats) => stats.vocabulary.clone(),
            None => vocabulary_of(&listings),
        };
        let listings: Vec<Listing> = listings
            .into_iter()
            .map(|l| l.with_description_fields(&vocabulary))
            .collect();

        let retained_columns = match frozen {
            Some(stats) => stats.retained_columns.clone(),
            None => sparse::retained_columns(&listings, self.config.sparse_threshold),
        };

        let candidates: Vec<Candidate> = listings
            .into_iter()
            .map(Candidate::from)
            .map(|c| c.with_years_since(reference_year))
            .collect();

        let age = resolve(frozen.map(|s| s.age), || age::fit(&candidates))?;
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| age::impute(c, &age, reference_year))
            .collect();

        let gear = resolve(frozen.map(|s| s.gear.clone()), || {
            categorical::fit_gear(&candidates)
        })?;
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| categorical::impute_gear(c, &gear))
            .map(Candidate::with_parsed_capacity)
            .collect();

        let capacity = resolve(frozen.map(|s| s.capacity), || capacity::fit(&candidates))?;
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| capacity::impute(c, &capacity))
            .collect();

        let engine_type = resolve(frozen.map(|s| s.engine_type.clone()), || {
            categorical::fit_engine_type(&candidates)
        })?;
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| categorical::impute_engine_type(c, &engine_type))
            .collect();

        let candidates = odometer::clean(candidates)?;
        let odometer = resolve(frozen.map(|s| s.odometer), || {
            odometer::fit(&candidates, self.config.odometer_policy)
        })?;
        if odometer.policy == crate::types::OdometerPolicy::BatchRate {
            tracing::warn!("Odometer readings replaced by the batch km-per-year estimate");
        }
        let candidates: Vec<Candidate> = candidates
            .into_iter()
            .map(|c| odometer::impute(c, &odometer))
            .map(Candidate::with_combined_ownership)
            .collect();

        let ownership = resolve(frozen.map(|s| s.ownership), || ownership::fit(&candidates))?;
        let records = candidates
            .into_iter()
            .map(|c| ownership::impute(c, &ownership))
            .map(|c| finalize(c, &retained_columns))
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            received,
            normalized = records.len(),
            fitted = frozen.is_none(),
            "Normalized listing batch"
        );

        let stats = FeatureStats {
            reference_year,
            vocabulary,
            retained_columns,
            age,
            gear,
            capacity,
            engine_type,
            odometer,
            ownership,
        };
        Ok((records, stats))
    }
}

fn resolve<T>(frozen: Option<T>, fit: impl FnOnce() -> Result<T>) -> Result<T> {
    match frozen {
        Some(stats) => Ok(stats),
        None => fit(),
    }
}

fn vocabulary_of(listings: &[Listing]) -> Vocabulary {
    let manufacturers: BTreeSet<String> = listings
        .iter()
        .filter_map(|l| l.manufacturer.clone())
        .collect();
    let models: BTreeSet<String> = listings.iter().filter_map(|l| l.model.clone()).collect();
    Vocabulary {
        manufacturers: manufacturers.into_iter().collect(),
        models: models.into_iter().collect(),
    }
}

fn required<T>(value: Option<T>, field: &'static str) -> Result<T> {
    value.ok_or(PrepError::Unresolved { field })
}

/// Drop the raw ownership, description and years-since helper fields.
fn finalize(candidate: Candidate, retained: &[OptionalColumn]) -> Result<NormalizedRecord> {
    Ok(NormalizedRecord {
        year: required(candidate.year, "Year")?,
        hand: required(candidate.hand, "Hand")?,
        gear: required(candidate.gear, "Gear")?,
        capacity_engine: required(candidate.capacity_engine, "capacity_Engine")?,
        engine_type: required(candidate.engine_type, "Engine_type")?,
        km: required(candidate.km, "Km")?,
        ownership: required(candidate.ownership, "ownership")?,
        manufacturer: candidate.manufacturer,
        model: candidate.model,
        price: candidate.price,
        test: candidate
            .test
            .filter(|_| retained.contains(&OptionalColumn::Test)),
        supply_score: candidate
            .supply_score
            .filter(|_| retained.contains(&OptionalColumn::SupplyScore)),
    })
}
