//! Holdout training with k-fold cross-validation.

use car_data_prep::{FeatureStats, NormalizedRecord};
use serde::{Deserialize, Serialize};

use crate::artifact::ModelArtifact;
use crate::elastic_net::ElasticNetParams;
use crate::error::{ModelError, Result};
use crate::metrics::{r2_score, RegressionMetrics};
use crate::pipeline::{priced, PricePipeline};
use crate::split::{kfold, select, train_test_split, DEFAULT_SEED};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrainOptions {
    pub params: ElasticNetParams,
    pub test_ratio: f64,
    /// Cross-validation folds; fewer than 2 skips cross-validation
    pub folds: usize,
    pub seed: u64,
}

impl Default for TrainOptions {
    fn default() -> Self {
        Self {
            params: ElasticNetParams::default(),
            test_ratio: 0.2,
            folds: 10,
            seed: DEFAULT_SEED,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub holdout: RegressionMetrics,
    /// R² per fold, computed on the training portion
    pub cv_r2: Vec<f64>,
    pub train_rows: usize,
    pub test_rows: usize,
}

impl EvaluationReport {
    pub fn cv_r2_mean(&self) -> Option<f64> {
        if self.cv_r2.is_empty() {
            None
        } else {
            Some(self.cv_r2.iter().sum::<f64>() / self.cv_r2.len() as f64)
        }
    }
}

/// Fit the price pipeline on normalized training records.
///
/// Records without a price are skipped. The returned artifact carries the
/// preparation statistics so serving can replay the same cleaning.
pub fn train(
    records: &[NormalizedRecord],
    feature_stats: FeatureStats,
    options: &TrainOptions,
) -> Result<ModelArtifact> {
    let (records, targets) = priced(records);
    if records.len() < 2 {
        return Err(ModelError::EmptyTrainingSet);
    }

    let split = train_test_split(records.len(), options.test_ratio, options.seed);
    if split.train.is_empty() || split.test.is_empty() {
        return Err(ModelError::InvalidParameter(format!(
            "test ratio {} leaves an empty side for {} rows",
            options.test_ratio,
            records.len()
        )));
    }

    let train_x = select(&records, &split.train);
    let train_y = select(&targets, &split.train);
    let test_x = select(&records, &split.test);
    let test_y = select(&targets, &split.test);

    let cv_r2 = cross_validate(&train_x, &train_y, options)?;

    let pipeline = PricePipeline::fit(&train_x, &train_y, options.params)?;
    let predicted = pipeline.predict(&test_x)?;
    let holdout = RegressionMetrics::compute(&test_y, &predicted);

    let metrics = EvaluationReport {
        holdout,
        cv_r2,
        train_rows: train_x.len(),
        test_rows: test_x.len(),
    };

    tracing::info!(
        rmse = metrics.holdout.rmse,
        mae = metrics.holdout.mae,
        r2 = metrics.holdout.r2,
        cv_r2 = ?metrics.cv_r2_mean(),
        train_rows = metrics.train_rows,
        test_rows = metrics.test_rows,
        "Training complete"
    );

    Ok(ModelArtifact::new(pipeline, feature_stats, metrics))
}

fn cross_validate(
    records: &[NormalizedRecord],
    targets: &[f64],
    options: &TrainOptions,
) -> Result<Vec<f64>> {
    if options.folds < 2 || records.len() < options.folds {
        tracing::warn!(
            folds = options.folds,
            rows = records.len(),
            "Skipping cross-validation"
        );
        return Ok(Vec::new());
    }

    kfold(records.len(), options.folds, options.seed)
        .into_iter()
        .map(|fold| {
            let pipeline = PricePipeline::fit(
                &select(records, &fold.train),
                &select(targets, &fold.train),
                options.params,
            )?;
            let predicted = pipeline.predict(&select(records, &fold.test))?;
            Ok(r2_score(&select(targets, &fold.test), &predicted))
        })
        .collect()
}
