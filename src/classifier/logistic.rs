//! Logistic regression adapter.

use serde::Deserialize;

use crate::classifier::{validate_feature_names, ClassifierError, ClassifierResult, DelayClassifier};
use crate::models::{FeatureRow, FEATURE_COLUMNS};

/// A serialized logistic model: one weight per feature column plus a bias.
/// Predicts delayed when the sigmoid of the weighted sum exceeds 0.5.
#[derive(Debug, Clone, Deserialize)]
pub struct LogisticModel {
    /// Column names the model was fit on, in order.
    pub feature_names: Vec<String>,
    /// One weight per column.
    pub weights: Vec<f64>,
    /// Intercept term.
    pub bias: f64,
}

impl LogisticModel {
    /// Validate the feature contract and the weight vector length.
    pub fn validate(&self) -> ClassifierResult<()> {
        validate_feature_names(&self.feature_names)?;
        if self.weights.len() != FEATURE_COLUMNS.len() {
            return Err(ClassifierError::InvalidModel {
                reason: format!(
                    "expected {} weights, model has {}",
                    FEATURE_COLUMNS.len(),
                    self.weights.len()
                ),
            });
        }
        Ok(())
    }

    fn score(&self, features: &[f64; 12]) -> f64 {
        let z: f64 = self
            .weights
            .iter()
            .zip(features)
            .map(|(w, x)| w * x)
            .sum::<f64>()
            + self.bias;
        1.0 / (1.0 + (-z).exp())
    }
}

impl DelayClassifier for LogisticModel {
    fn kind(&self) -> &'static str {
        "logistic_regression"
    }

    fn predict(&self, rows: &[FeatureRow]) -> ClassifierResult<Vec<bool>> {
        Ok(rows
            .iter()
            .map(|row| self.score(&row.as_features()) > 0.5)
            .collect())
    }
}
