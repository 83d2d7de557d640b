//! Decision tree adapter.
//!
//! Evaluates a serialized binary decision tree exported from the training
//! pipeline. Nodes live in one flat array; node 0 is the root. Split
//! nodes route left when `features[feature] <= threshold`, matching the
//! convention the tree was exported with.

use serde::Deserialize;

use crate::classifier::{validate_feature_names, ClassifierError, ClassifierResult, DelayClassifier};
use crate::models::{FeatureRow, FEATURE_COLUMNS};

/// One node of the serialized tree.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal split on `features[feature] <= threshold`.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Leaf with the final class.
    Leaf { delayed: bool },
}

/// A serialized decision tree.
#[derive(Debug, Clone, Deserialize)]
pub struct DecisionTreeModel {
    /// Column names the tree was fit on, in order.
    pub feature_names: Vec<String>,
    /// Flat node array; node 0 is the root.
    pub nodes: Vec<TreeNode>,
}

impl DecisionTreeModel {
    /// Validate the feature contract and the tree structure.
    pub fn validate(&self) -> ClassifierResult<()> {
        validate_feature_names(&self.feature_names)?;

        if self.nodes.is_empty() {
            return Err(ClassifierError::InvalidModel {
                reason: "decision tree has no nodes".to_string(),
            });
        }

        for (index, node) in self.nodes.iter().enumerate() {
            if let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            {
                if *feature >= FEATURE_COLUMNS.len() {
                    return Err(ClassifierError::InvalidModel {
                        reason: format!("node {} splits on feature index {}", index, feature),
                    });
                }
                if *left >= self.nodes.len() || *right >= self.nodes.len() {
                    return Err(ClassifierError::InvalidModel {
                        reason: format!("node {} links outside the node array", index),
                    });
                }
                // Children must point forward; a flat export of a tree
                // always satisfies this, and it rules out cycles.
                if *left <= index || *right <= index {
                    return Err(ClassifierError::InvalidModel {
                        reason: format!("node {} links backwards", index),
                    });
                }
            }
        }

        Ok(())
    }

    fn predict_one(&self, features: &[f64; 12]) -> ClassifierResult<bool> {
        let mut index = 0usize;
        // validate() guarantees forward links, so this walk terminates in
        // at most nodes.len() steps.
        for _ in 0..self.nodes.len() {
            match &self.nodes[index] {
                TreeNode::Leaf { delayed } => return Ok(*delayed),
                TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                } => {
                    index = if features[*feature] <= *threshold {
                        *left
                    } else {
                        *right
                    };
                }
            }
        }
        Err(ClassifierError::InvalidModel {
            reason: "decision tree walk did not reach a leaf".to_string(),
        })
    }
}

impl DelayClassifier for DecisionTreeModel {
    fn kind(&self) -> &'static str {
        "decision_tree"
    }

    fn predict(&self, rows: &[FeatureRow]) -> ClassifierResult<Vec<bool>> {
        rows.iter()
            .map(|row| self.predict_one(&row.as_features()))
            .collect()
    }
}
