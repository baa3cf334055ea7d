use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Branch key for the `< threshold` side of a numeric split.
pub const LESS_BRANCH: &str = "<";
/// Branch key for the `>= threshold` side of a numeric split.
pub const GREATER_EQUAL_BRANCH: &str = ">=";

/// How an internal node partitions its rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum SplitKind {
    /// Binary split on a parsed numeric value against a threshold.
    Numeric { threshold: f64 },
    /// Multi-way split on the exact attribute value string.
    Categorical,
}

/// A node of a built decision tree.
///
/// The tree is a strict ownership tree: each child is owned exclusively by
/// its parent. Every node, leaf or internal, stores the majority class of
/// the training rows that reached it; internal nodes use it as the fallback
/// prediction for categorical values never observed during training.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TreeNode {
    Leaf {
        label: String,
        majority: String,
    },
    Internal {
        attribute: usize,
        split: SplitKind,
        majority: String,
        /// Branch key (`"<"` / `">="` or the literal value) to owned child.
        children: BTreeMap<String, TreeNode>,
    },
}

impl TreeNode {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Self::Leaf { .. })
    }

    pub fn majority(&self) -> &str {
        match self {
            Self::Leaf { majority, .. } | Self::Internal { majority, .. } => majority,
        }
    }

    /// Total number of nodes in the subtree rooted here, this node included.
    pub fn node_count(&self) -> usize {
        match self {
            Self::Leaf { .. } => 1,
            Self::Internal { children, .. } => {
                1 + children.values().map(TreeNode::node_count).sum::<usize>()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(label: &str) -> TreeNode {
        TreeNode::Leaf {
            label: label.to_string(),
            majority: label.to_string(),
        }
    }

    #[test]
    fn node_count_includes_every_node() {
        let mut children = BTreeMap::new();
        children.insert("a".to_string(), leaf("Y"));
        children.insert("b".to_string(), leaf("N"));
        let root = TreeNode::Internal {
            attribute: 1,
            split: SplitKind::Categorical,
            majority: "Y".to_string(),
            children,
        };
        assert_eq!(root.node_count(), 3);
        assert_eq!(leaf("Y").node_count(), 1);
    }

    #[test]
    fn serde_round_trip_preserves_the_tree() {
        let mut children = BTreeMap::new();
        children.insert(LESS_BRANCH.to_string(), leaf("Y"));
        children.insert(GREATER_EQUAL_BRANCH.to_string(), leaf("N"));
        let root = TreeNode::Internal {
            attribute: 0,
            split: SplitKind::Numeric { threshold: 2.5 },
            majority: "Y".to_string(),
            children,
        };
        let json = serde_json::to_string(&root).unwrap();
        let back: TreeNode = serde_json::from_str(&json).unwrap();
        assert_eq!(back, root);
    }
}
