use thiserror::Error;

/// Errors surfaced by the decision-tree engine and its collaborators.
#[derive(Debug, Error)]
pub enum TreeError {
    #[error("row has {found} cells, expected {expected}")]
    RaggedRow { expected: usize, found: usize },

    #[error("dataset has no rows")]
    EmptyDataset,

    #[error("unknown split criterion: {0:?}")]
    UnknownCriterion(String),

    #[error("attribute {attribute} is numeric but cell {value:?} does not parse")]
    NonNumericCell { attribute: usize, value: String },

    #[error("internal node has no {key:?} branch")]
    MissingBranch { key: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
