mod builder;
mod criterion;
mod decision_tree;
mod node;
mod purity;
mod selector;
mod threshold;

pub use builder::DecisionTreeLearner;
pub use criterion::SplitCriterion;
pub use decision_tree::DecisionTree;
pub use node::{GREATER_EQUAL_BRANCH, LESS_BRANCH, SplitKind, TreeNode};
pub use purity::{entropy, info_gain_ratio, information_gain, majority_class, normalized_weighted_gain};
