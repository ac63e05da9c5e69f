//! Elastic Net regression (combined L1 and L2 regularization).
//!
//! Minimizes: (1/2n)||y - Xβ||² + α·ρ·||β||₁ + (α·(1-ρ)/2)·||β||²
//! where ρ is the L1 ratio.

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Hyperparameters used when fitting.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ElasticNetParams {
    /// Overall regularization strength
    pub alpha: f64,
    /// Balance between L1 and L2 (0 = Ridge, 1 = Lasso)
    pub l1_ratio: f64,
    pub max_iter: usize,
    /// Convergence tolerance on the largest coefficient update
    pub tolerance: f64,
}

impl Default for ElasticNetParams {
    fn default() -> Self {
        Self {
            alpha: 0.001,
            l1_ratio: 0.5,
            max_iter: 1000,
            tolerance: 1e-4,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElasticNet {
    params: ElasticNetParams,
    /// Fitted coefficients
    pub coefficients: Option<Array1<f64>>,
    pub intercept: Option<f64>,
}

impl ElasticNet {
    pub fn new(params: ElasticNetParams) -> Self {
        Self {
            params: ElasticNetParams {
                l1_ratio: params.l1_ratio.clamp(0.0, 1.0),
                ..params
            },
            coefficients: None,
            intercept: None,
        }
    }

    pub fn params(&self) -> &ElasticNetParams {
        &self.params
    }

    /// Fit with intercept using cyclic coordinate descent.
    ///
    /// The residual is updated incrementally, so one sweep costs
    /// O(n_samples × n_features).
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<f64>) -> Result<()> {
        if self.params.alpha < 0.0 {
            return Err(ModelError::InvalidParameter(format!(
                "alpha must be non-negative, got {}",
                self.params.alpha
            )));
        }
        if x.nrows() == 0 {
            return Err(ModelError::EmptyTrainingSet);
        }
        if x.nrows() != y.len() {
            return Err(ModelError::DimensionMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }

        let n_samples = x.nrows() as f64;
        let n_features = x.ncols();

        let x_mean = x.mean_axis(Axis(0)).ok_or(ModelError::EmptyTrainingSet)?;
        let y_mean = y.mean().ok_or(ModelError::EmptyTrainingSet)?;
        let x_centered = x - &x_mean;

        let l1_penalty = self.params.alpha * self.params.l1_ratio * n_samples;
        let l2_penalty = self.params.alpha * (1.0 - self.params.l1_ratio) * n_samples;

        let column_norms: Vec<f64> = x_centered
            .columns()
            .into_iter()
            .map(|col| col.dot(&col))
            .collect();

        let mut coef = Array1::<f64>::zeros(n_features);
        let mut residual = y - y_mean;

        for iteration in 0..self.params.max_iter {
            let mut max_update = 0.0_f64;
            let mut max_coef = 0.0_f64;

            for j in 0..n_features {
                if column_norms[j] < 1e-12 {
                    continue;
                }
                let column = x_centered.column(j);
                let rho = column.dot(&residual) + coef[j] * column_norms[j];
                let updated = soft_threshold(rho, l1_penalty) / (column_norms[j] + l2_penalty);

                let delta = updated - coef[j];
                if delta != 0.0 {
                    residual.scaled_add(-delta, &column);
                    coef[j] = updated;
                }
                max_update = max_update.max(delta.abs());
                max_coef = max_coef.max(updated.abs());
            }

            if max_update <= self.params.tolerance * max_coef.max(1.0) {
                tracing::debug!(iterations = iteration + 1, "ElasticNet converged");
                break;
            }
        }

        self.intercept = Some(y_mean - x_mean.dot(&coef));
        self.coefficients = Some(coef);
        Ok(())
    }

    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<f64>> {
        let coef = self.coefficients.as_ref().ok_or(ModelError::NotFitted)?;
        let intercept = self.intercept.ok_or(ModelError::NotFitted)?;
        if x.ncols() != coef.len() {
            return Err(ModelError::DimensionMismatch {
                expected: coef.len(),
                got: x.ncols(),
            });
        }
        Ok(x.dot(coef) + intercept)
    }

    /// Number of non-zero coefficients
    pub fn n_nonzero(&self) -> usize {
        self.coefficients
            .as_ref()
            .map(|c| c.iter().filter(|&&v| v.abs() > 1e-10).count())
            .unwrap_or(0)
    }
}

/// Soft thresholding operator
fn soft_threshold(x: f64, lambda: f64) -> f64 {
    if x > lambda {
        x - lambda
    } else if x < -lambda {
        x + lambda
    } else {
        0.0
    }
}
