//! Holdout scoring of a built tree against a labeled test split.

use serde::{Deserialize, Serialize};

use crate::classifiers::decision_tree::DecisionTree;
use crate::core::{Dataset, TreeError, class_label};

/// Classification accuracy over a holdout split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccuracyReport {
    correct: usize,
    total: usize,
}

impl AccuracyReport {
    pub fn correct(&self) -> usize {
        self.correct
    }

    pub fn total(&self) -> usize {
        self.total
    }

    /// Fraction of correct predictions, 0.0 for an empty split.
    pub fn accuracy(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.correct as f64 / self.total as f64
        }
    }

    pub fn percent(&self) -> f64 {
        self.accuracy() * 100.0
    }
}

/// Predicted labels for every row of `test`, in row order.
pub fn predict_all<'a>(
    tree: &'a DecisionTree,
    test: &Dataset,
) -> Result<Vec<&'a str>, TreeError> {
    test.rows().iter().map(|row| tree.predict(row)).collect()
}

/// Compares predictions against the ground-truth labels of `test`.
pub fn evaluate(tree: &DecisionTree, test: &Dataset) -> Result<AccuracyReport, TreeError> {
    let mut correct = 0;
    for row in test.rows() {
        if tree.predict(row)? == class_label(row) {
            correct += 1;
        }
    }
    Ok(AccuracyReport {
        correct,
        total: test.len(),
    })
}
