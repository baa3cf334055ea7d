mod holdout;
mod partition;

pub use holdout::{AccuracyReport, evaluate, predict_all};
pub use partition::{TRAIN_FRACTION, split, split_with_rng};
