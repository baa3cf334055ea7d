pub mod decision_tree;
