use serde::{Deserialize, Serialize};

use crate::classifiers::decision_tree::node::{
    GREATER_EQUAL_BRANCH, LESS_BRANCH, SplitKind, TreeNode,
};
use crate::core::TreeError;

/// An immutable decision tree built by
/// [`DecisionTreeLearner`](crate::classifiers::decision_tree::DecisionTreeLearner).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    root: TreeNode,
    node_count: usize,
}

impl DecisionTree {
    pub(crate) fn new(root: TreeNode) -> Self {
        let node_count = root.node_count();
        Self { root, node_count }
    }

    pub fn root(&self) -> &TreeNode {
        &self.root
    }

    /// Number of nodes in the tree, reported alongside accuracy when
    /// comparing criteria and depth limits.
    pub fn node_count(&self) -> usize {
        self.node_count
    }

    /// Classifies one row with the same column layout as the training rows.
    ///
    /// Numeric nodes parse the relevant cell and branch on `< threshold`;
    /// a cell that fails to parse here is a contract violation (the column
    /// was established as numeric at training time) and surfaces as
    /// [`TreeError::NonNumericCell`]. Categorical nodes look up the exact
    /// value; a value never observed during training terminates traversal
    /// immediately with the current node's stored majority class.
    pub fn predict<'a>(&'a self, row: &[String]) -> Result<&'a str, TreeError> {
        let mut current = &self.root;
        loop {
            match current {
                TreeNode::Leaf { label, .. } => return Ok(label),
                TreeNode::Internal {
                    attribute,
                    split,
                    majority,
                    children,
                } => {
                    let cell = row.get(*attribute).ok_or(TreeError::RaggedRow {
                        expected: *attribute + 1,
                        found: row.len(),
                    })?;
                    match split {
                        SplitKind::Numeric { threshold } => {
                            let value: f64 =
                                cell.parse().map_err(|_| TreeError::NonNumericCell {
                                    attribute: *attribute,
                                    value: cell.clone(),
                                })?;
                            let key = if value < *threshold {
                                LESS_BRANCH
                            } else {
                                GREATER_EQUAL_BRANCH
                            };
                            current =
                                children.get(key).ok_or_else(|| TreeError::MissingBranch {
                                    key: key.to_string(),
                                })?;
                        }
                        SplitKind::Categorical => match children.get(cell.as_str()) {
                            Some(child) => current = child,
                            None => return Ok(majority),
                        },
                    }
                }
            }
        }
    }

    /// Serializes the model to pretty-printed JSON.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifiers::decision_tree::builder::DecisionTreeLearner;
    use crate::classifiers::decision_tree::criterion::SplitCriterion;
    use crate::core::{Schema, class_label};
    use crate::testing::dummies;

    fn train(dataset: &crate::core::Dataset) -> DecisionTree {
        let schema = Schema::infer(dataset);
        DecisionTreeLearner::new(SplitCriterion::InformationGain)
            .fit(dataset, &schema)
            .unwrap()
    }

    #[test]
    fn noise_free_training_rows_round_trip_at_full_accuracy() {
        let dataset = dummies::weather_nominal();
        let tree = train(&dataset);
        for row in dataset.rows() {
            assert_eq!(tree.predict(row).unwrap(), class_label(row));
        }
    }

    #[test]
    fn unseen_categorical_value_falls_back_to_the_node_majority() {
        let dataset = dummies::mixed_numeric();
        let tree = train(&dataset);
        // The root splits on attribute 1 and never saw "Z" there.
        let row = vec!["1".to_string(), "Z".to_string(), "?".to_string()];
        let predicted = tree.predict(&row).unwrap();
        assert_eq!(predicted, tree.root().majority());
    }

    #[test]
    fn non_numeric_cell_at_prediction_time_is_fatal() {
        let dataset = dummies::dataset(&[
            &["1", "x"],
            &["2", "x"],
            &["3", "y"],
            &["4", "y"],
        ]);
        let tree = train(&dataset);
        let row = vec!["not-a-number".to_string(), "?".to_string()];
        let err = tree.predict(&row).unwrap_err();
        assert!(matches!(
            err,
            TreeError::NonNumericCell { attribute: 0, value } if value == "not-a-number"
        ));
    }

    #[test]
    fn short_row_is_rejected() {
        let dataset = dummies::mixed_numeric();
        let tree = train(&dataset);
        let row: Vec<String> = vec!["1".to_string()];
        assert!(matches!(
            tree.predict(&row),
            Err(TreeError::RaggedRow { .. })
        ));
    }

    #[test]
    fn json_export_round_trips() {
        let tree = train(&dummies::mixed_numeric());
        let json = tree.to_json().unwrap();
        let back: DecisionTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);
    }
}
