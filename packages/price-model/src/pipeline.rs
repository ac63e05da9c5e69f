//! Column transform followed by the ElasticNet regressor.

use car_data_prep::NormalizedRecord;
use ndarray::Array1;
use serde::{Deserialize, Serialize};

use crate::elastic_net::{ElasticNet, ElasticNetParams};
use crate::error::{ModelError, Result};
use crate::transform::ColumnTransformer;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePipeline {
    pub transformer: ColumnTransformer,
    pub model: ElasticNet,
}

impl PricePipeline {
    /// Fit the transform and the regressor on the same records.
    pub fn fit(
        records: &[NormalizedRecord],
        targets: &[f64],
        params: ElasticNetParams,
    ) -> Result<Self> {
        if records.len() != targets.len() {
            return Err(ModelError::DimensionMismatch {
                expected: records.len(),
                got: targets.len(),
            });
        }

        let transformer = ColumnTransformer::fit(records)?;
        let x = transformer.transform(records);
        let y = Array1::from_vec(targets.to_vec());

        let mut model = ElasticNet::new(params);
        model.fit(&x, &y)?;

        tracing::debug!(
            rows = records.len(),
            features = transformer.n_features(),
            nonzero = model.n_nonzero(),
            "Fitted price pipeline"
        );

        Ok(Self { transformer, model })
    }

    pub fn predict(&self, records: &[NormalizedRecord]) -> Result<Vec<f64>> {
        let x = self.transformer.transform(records);
        Ok(self.model.predict(&x)?.to_vec())
    }

    /// Train on records that carry a price; unpriced rows are skipped.
    pub fn fit_priced(records: &[NormalizedRecord], params: ElasticNetParams) -> Result<Self> {
        let (priced, targets) = priced(records);
        Self::fit(&priced, &targets, params)
    }
}

/// Split records into the priced subset and its targets.
pub fn priced(records: &[NormalizedRecord]) -> (Vec<NormalizedRecord>, Vec<f64>) {
    records
        .iter()
        .filter_map(|r| r.price.filter(|p| p.is_finite()).map(|p| (r.clone(), p)))
        .unzip()
}
