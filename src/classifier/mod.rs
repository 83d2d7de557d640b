//! Delay classifier interface and model loading.
//!
//! The classifier is opaque to the rest of the crate: it accepts a batch
//! of normalized feature rows in the fixed column order and returns one
//! boolean per row, order preserved. Concrete model types are selected at
//! load time by the `model_type` tag in the model file, each behind a thin
//! adapter implementing [`DelayClassifier`]. Every adapter validates the
//! file's `feature_names` against the column contract before accepting the
//! model, since the predict path has no schema checking of its own.

pub mod decision_tree;
pub mod logistic;

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::models::{FeatureRow, FEATURE_COLUMNS};

pub use decision_tree::DecisionTreeModel;
pub use logistic::LogisticModel;

/// Result type for classifier operations.
pub type ClassifierResult<T> = Result<T, ClassifierError>;

/// Errors raised while loading or applying a model.
#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    /// The model file is absent or unreadable.
    #[error("model file {path:?}: {source}")]
    Io {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The model file is not valid JSON for any supported model type.
    #[error("model file {path:?}: {source}")]
    Parse {
        path: std::path::PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The model content is structurally invalid or does not honor the
    /// feature contract.
    #[error("invalid model: {reason}")]
    InvalidModel { reason: String },
}

/// A pre-trained delay classifier.
///
/// One capability: score a batch of feature rows. Implementations must
/// preserve row order and return exactly one prediction per row, `true`
/// meaning the flight is predicted delayed.
pub trait DelayClassifier: Send + Sync + std::fmt::Debug {
    /// Model kind, for logs and the health endpoint.
    fn kind(&self) -> &'static str;

    /// Predict delay for each row, input order preserved.
    fn predict(&self, rows: &[FeatureRow]) -> ClassifierResult<Vec<bool>>;
}

/// Serialized model file, dispatched on the `model_type` tag.
#[derive(Debug, Deserialize)]
#[serde(tag = "model_type", rename_all = "snake_case")]
enum ModelFile {
    DecisionTree(DecisionTreeModel),
    LogisticRegression(LogisticModel),
}

/// Load a classifier from a JSON model file.
///
/// The adapter is chosen by the file's `model_type` tag; unknown tags and
/// feature-contract mismatches fail here, at load time, never at predict
/// time.
pub fn load_classifier(path: &Path) -> ClassifierResult<Box<dyn DelayClassifier>> {
    let text = fs::read_to_string(path).map_err(|source| ClassifierError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let file: ModelFile =
        serde_json::from_str(&text).map_err(|source| ClassifierError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    match file {
        ModelFile::DecisionTree(model) => {
            model.validate()?;
            Ok(Box::new(model))
        }
        ModelFile::LogisticRegression(model) => {
            model.validate()?;
            Ok(Box::new(model))
        }
    }
}

/// Check a model file's feature list against the column contract.
pub(crate) fn validate_feature_names(names: &[String]) -> ClassifierResult<()> {
    if names.len() != FEATURE_COLUMNS.len()
        || names.iter().zip(FEATURE_COLUMNS).any(|(a, b)| a != b)
    {
        return Err(ClassifierError::InvalidModel {
            reason: format!(
                "feature_names {:?} do not match the expected columns {:?}",
                names, FEATURE_COLUMNS
            ),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_unknown_model_type_fails_at_load() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(br#"{"model_type": "random_forest", "trees": []}"#)
            .unwrap();

        let err = load_classifier(file.path()).unwrap_err();
        assert!(matches!(err, ClassifierError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_classifier(Path::new("/nonexistent/model.json")).unwrap_err();
        assert!(matches!(err, ClassifierError::Io { .. }));
    }

    #[test]
    fn test_feature_name_validation_rejects_reordering() {
        let mut names: Vec<String> = FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect();
        names.swap(0, 1);
        assert!(validate_feature_names(&names).is_err());

        let names: Vec<String> = FEATURE_COLUMNS.iter().map(|s| s.to_string()).collect();
        assert!(validate_feature_names(&names).is_ok());
    }
}
