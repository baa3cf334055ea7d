//! Binary threshold search for numeric attributes.
//!
//! Sorts the parseable `(value, label)` pairs once and sweeps a boundary
//! between adjacent entries, maintaining running left-side class counts and
//! deriving the right side from the global totals. One sort plus one linear
//! sweep, O(n log n) overall.

use std::collections::HashMap;

use crate::classifiers::decision_tree::criterion::SplitCriterion;
use crate::classifiers::decision_tree::purity::entropy_of_counts;
use crate::core::class_label;

/// The winning binary split for one numeric attribute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct ThresholdSplit {
    pub score: f64,
    pub threshold: f64,
}

/// Finds the threshold maximizing `criterion` for a binary split on
/// `attribute`.
///
/// Rows whose cell does not parse as `f64` are excluded from the search
/// (not from the dataset). Returns `None` when no row parses or no viable
/// boundary exists. A boundary between adjacent sorted entries is only
/// evaluated when the value strictly increases and the label changes;
/// boundaries between tied values or same-class neighbors cannot improve
/// purity. Ties on the score keep the first (lowest-threshold) maximum.
pub(crate) fn best_threshold(
    rows: &[&[String]],
    attribute: usize,
    criterion: SplitCriterion,
) -> Option<ThresholdSplit> {
    let mut pairs: Vec<(f64, &str)> = Vec::with_capacity(rows.len());
    let mut totals: HashMap<&str, usize> = HashMap::new();
    for row in rows {
        if let Ok(value) = row[attribute].parse::<f64>() {
            let label = class_label(row);
            pairs.push((value, label));
            *totals.entry(label).or_insert(0) += 1;
        }
    }
    if pairs.is_empty() {
        return None;
    }

    pairs.sort_by(|a, b| a.0.total_cmp(&b.0).then_with(|| a.1.cmp(b.1)));

    let total_size = pairs.len();
    let base_entropy = entropy_of_counts(totals.values().copied(), total_size);

    let mut left: HashMap<&str, usize> = HashMap::new();
    let mut best: Option<ThresholdSplit> = None;

    for i in 1..total_size {
        let (prev_value, prev_label) = pairs[i - 1];
        *left.entry(prev_label).or_insert(0) += 1;

        let (value, label) = pairs[i];
        if value == prev_value || label == prev_label {
            continue;
        }

        // The sweep has consumed exactly `i` entries into the left side.
        let left_size = i;
        let right_size = total_size - left_size;

        let left_entropy = entropy_of_counts(left.values().copied(), left_size);
        let right_entropy = entropy_of_counts(
            totals
                .iter()
                .map(|(l, &count)| count - left.get(l).copied().unwrap_or(0)),
            right_size,
        );

        let weighted = (left_size as f64 / total_size as f64) * left_entropy
            + (right_size as f64 / total_size as f64) * right_entropy;
        let gain = base_entropy - weighted;
        let score = criterion.transform_binary_gain(gain, left_size, total_size);
        let threshold = (prev_value + value) / 2.0;

        match best {
            Some(current) if score <= current.score => {}
            _ => best = Some(ThresholdSplit { score, threshold }),
        }
    }

    best
}
