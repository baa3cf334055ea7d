use std::collections::BTreeMap;

use crate::classifiers::decision_tree::criterion::SplitCriterion;
use crate::classifiers::decision_tree::decision_tree::DecisionTree;
use crate::classifiers::decision_tree::node::{
    GREATER_EQUAL_BRANCH, LESS_BRANCH, SplitKind, TreeNode,
};
use crate::classifiers::decision_tree::selector::{SplitChoice, select_attribute};
use crate::core::{Dataset, Schema, TreeError, class_label};
use crate::classifiers::decision_tree::purity;

/// Configurable learner that grows a [`DecisionTree`] from a training
/// dataset by recursive partitioning.
///
/// A `max_depth` of 0 means unbounded depth; depth limiting is the only
/// bound on recursion.
pub struct DecisionTreeLearner {
    criterion: SplitCriterion,
    max_depth: usize,
}

impl DecisionTreeLearner {
    pub fn new(criterion: SplitCriterion) -> Self {
        Self {
            criterion,
            max_depth: 0,
        }
    }

    /// Limits the tree to `depth` levels of internal nodes; 0 removes the
    /// limit.
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    pub fn criterion(mut self, criterion: SplitCriterion) -> Self {
        self.criterion = criterion;
        self
    }

    /// Builds a tree over `dataset`. The dataset is a read-only view; each
    /// recursive step partitions its row set into disjoint subsets.
    pub fn fit(&self, dataset: &Dataset, schema: &Schema) -> Result<DecisionTree, TreeError> {
        if dataset.is_empty() {
            return Err(TreeError::EmptyDataset);
        }
        let rows: Vec<&[String]> = dataset.rows().iter().map(Vec::as_slice).collect();
        let candidates = dataset.attribute_indices();
        let root = self.grow(&rows, &candidates, 0, schema);
        Ok(DecisionTree::new(root))
    }

    /// Grows one node. `rows` is non-empty: the root set is checked in
    /// `fit`, and partitioning never recurses into an empty subset.
    fn grow(
        &self,
        rows: &[&[String]],
        candidates: &[usize],
        depth: usize,
        schema: &Schema,
    ) -> TreeNode {
        let majority = purity::majority_class(rows).unwrap_or_default().to_string();

        let first_label = class_label(rows[0]);
        if rows.iter().all(|row| class_label(row) == first_label) {
            return TreeNode::Leaf {
                label: first_label.to_string(),
                majority,
            };
        }

        let depth_reached = self.max_depth != 0 && depth == self.max_depth;
        if candidates.is_empty() || depth_reached {
            return TreeNode::Leaf {
                label: majority.clone(),
                majority,
            };
        }

        let Some(choice) = select_attribute(rows, candidates, self.criterion, schema) else {
            return TreeNode::Leaf {
                label: majority.clone(),
                majority,
            };
        };

        let children = match choice.kind {
            SplitKind::Numeric { threshold } => {
                self.split_numeric(rows, &choice, threshold, candidates, depth, schema)
            }
            SplitKind::Categorical => self.split_categorical(rows, &choice, candidates, depth, schema),
        };

        TreeNode::Internal {
            attribute: choice.attribute,
            split: choice.kind,
            majority,
            children,
        }
    }

    /// Binary partition on `< threshold`; rows whose cell does not parse
    /// fall on the `>=` side. Both sides are non-empty because thresholds
    /// are only chosen from boundaries between parseable rows.
    fn split_numeric(
        &self,
        rows: &[&[String]],
        choice: &SplitChoice,
        threshold: f64,
        candidates: &[usize],
        depth: usize,
        schema: &Schema,
    ) -> BTreeMap<String, TreeNode> {
        let mut left: Vec<&[String]> = Vec::new();
        let mut right: Vec<&[String]> = Vec::new();
        for &row in rows {
            match row[choice.attribute].parse::<f64>() {
                Ok(value) if value < threshold => left.push(row),
                _ => right.push(row),
            }
        }

        let mut children = BTreeMap::new();
        children.insert(
            LESS_BRANCH.to_string(),
            self.grow(&left, candidates, depth + 1, schema),
        );
        children.insert(
            GREATER_EQUAL_BRANCH.to_string(),
            self.grow(&right, candidates, depth + 1, schema),
        );
        children
    }

    /// Multi-way partition on the exact attribute value. The split
    /// attribute is removed from the candidate set passed to children; a
    /// categorical attribute cannot be split on twice along one path.
    /// Values never observed here simply have no branch.
    fn split_categorical(
        &self,
        rows: &[&[String]],
        choice: &SplitChoice,
        candidates: &[usize],
        depth: usize,
        schema: &Schema,
    ) -> BTreeMap<String, TreeNode> {
        let mut groups: BTreeMap<&str, Vec<&[String]>> = BTreeMap::new();
        for &row in rows {
            groups
                .entry(row[choice.attribute].as_str())
                .or_default()
                .push(row);
        }

        let remaining: Vec<usize> = candidates
            .iter()
            .copied()
            .filter(|&attribute| attribute != choice.attribute)
            .collect();

        groups
            .into_iter()
            .map(|(value, group)| {
                (
                    value.to_string(),
                    self.grow(&group, &remaining, depth + 1, schema),
                )
            })
            .collect()
    }
}
