use crate::error::AnalyticsError;
use linfa::DatasetBase;
use linfa::traits::Fit;
use linfa_linear::{FittedLinearRegression, LinearRegression};
use ndarray::{Array1, Array2};
use serde::Serialize;

/// A fitted straight line `y = intercept + slope * x`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LinearFit {
    /// Change in units sold per additional visitor ("footfall elasticity").
    pub slope: f64,
    pub intercept: f64,
}

impl LinearFit {
    pub fn predict(&self, x: f64) -> f64 {
        self.intercept + self.slope * x
    }
}

/// Ordinary least squares with an intercept, one predictor.
///
/// If the predictor has zero variance the normal equations are singular; the slope
/// is then 0 and the intercept is the response mean (the minimum-norm solution).
pub fn fit_linear(x: &[f64], y: &[f64]) -> Result<LinearFit, AnalyticsError> {
    if x.len() != y.len() {
        return Err(AnalyticsError::LengthMismatch {
            predictor: x.len(),
            response: y.len(),
        });
    }
    if x.is_empty() {
        return Err(AnalyticsError::NotEnoughData(
            "a linear fit needs at least one observation".to_string(),
        ));
    }

    let n = x.len() as f64;
    let mean_x = x.iter().sum::<f64>() / n;
    if x.iter().all(|&xi| xi == mean_x) {
        return Ok(LinearFit {
            slope: 0.0,
            intercept: y.iter().sum::<f64>() / n,
        });
    }

    let features = Array2::from_shape_vec((x.len(), 1), x.to_vec())
        .map_err(|e| AnalyticsError::Regression(e.to_string()))?;
    let dataset = DatasetBase::from(features).with_targets(Array1::from_vec(y.to_vec()));

    let model: FittedLinearRegression<f64> = LinearRegression::default()
        .fit(&dataset)
        .map_err(|e| AnalyticsError::Regression(e.to_string()))?;

    Ok(LinearFit {
        slope: model.params()[0],
        intercept: model.intercept(),
    })
}
