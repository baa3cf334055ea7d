use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::classifiers::decision_tree::purity;
use crate::core::TreeError;

/// Purity criterion used to rank candidate splits.
///
/// Parses from and displays as the literal configuration strings `"IG"`,
/// `"IGR"` and `"NWIG"`. An unrecognized string is a hard configuration
/// error, never a silently zero-scoring criterion.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
pub enum SplitCriterion {
    /// Information gain.
    #[strum(serialize = "IG")]
    InformationGain,
    /// Information gain ratio.
    #[strum(serialize = "IGR")]
    GainRatio,
    /// Normalized weighted information gain.
    #[strum(serialize = "NWIG")]
    NormalizedWeightedGain,
}

impl SplitCriterion {
    /// Parses a criterion name, mapping failure to [`TreeError`].
    pub fn parse(name: &str) -> Result<Self, TreeError> {
        name.parse()
            .map_err(|_| TreeError::UnknownCriterion(name.to_string()))
    }

    /// Scores a multi-way categorical split on `attribute`.
    pub(crate) fn score_categorical(self, rows: &[&[String]], attribute: usize) -> f64 {
        match self {
            Self::InformationGain => purity::information_gain(rows, attribute),
            Self::GainRatio => purity::info_gain_ratio(rows, attribute),
            Self::NormalizedWeightedGain => purity::normalized_weighted_gain(rows, attribute),
        }
    }

    /// Applies the criterion transform to the information gain of a binary
    /// numeric split (`k = 2` for NWIG; intrinsic value over the two
    /// partition sizes for IGR).
    pub(crate) fn transform_binary_gain(
        self,
        gain: f64,
        left_size: usize,
        total_size: usize,
    ) -> f64 {
        match self {
            Self::InformationGain => gain,
            Self::GainRatio => {
                let p_left = left_size as f64 / total_size as f64;
                let p_right = 1.0 - p_left;
                let mut intrinsic = 0.0;
                if p_left > 0.0 {
                    intrinsic -= p_left * p_left.log2();
                }
                if p_right > 0.0 {
                    intrinsic -= p_right * p_right.log2();
                }
                if intrinsic > 0.0 { gain / intrinsic } else { 0.0 }
            }
            Self::NormalizedWeightedGain => {
                (gain / 3f64.log2()) * (1.0 - 1.0 / total_size as f64)
            }
        }
    }
}
