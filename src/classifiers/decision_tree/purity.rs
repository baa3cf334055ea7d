//! Purity metrics over row views.
//!
//! All functions here are pure: they read a borrowed set of rows and never
//! mutate or retain it. Rows are slices of string cells whose last cell is
//! the class label.

use std::collections::HashMap;

use crate::core::class_label;

/// Class-label frequencies in first-encountered order.
fn class_counts<'a>(rows: &[&'a [String]]) -> Vec<(&'a str, usize)> {
    let mut order: Vec<(&'a str, usize)> = Vec::new();
    let mut index: HashMap<&'a str, usize> = HashMap::new();
    for row in rows {
        let label = class_label(row);
        match index.get(label) {
            Some(&i) => order[i].1 += 1,
            None => {
                index.insert(label, order.len());
                order.push((label, 1));
            }
        }
    }
    order
}

/// Entropy (base 2) of a frequency distribution. Zero counts contribute
/// nothing; an empty or single-class distribution has entropy 0.
pub(crate) fn entropy_of_counts<I>(counts: I, total: usize) -> f64
where
    I: IntoIterator<Item = usize>,
{
    if total == 0 {
        return 0.0;
    }
    let total = total as f64;
    let mut entropy = 0.0;
    for count in counts {
        if count == 0 {
            continue;
        }
        let p = count as f64 / total;
        entropy -= p * p.log2();
    }
    entropy
}

/// Shannon entropy of the class-label distribution in `rows`.
pub fn entropy(rows: &[&[String]]) -> f64 {
    let counts = class_counts(rows);
    entropy_of_counts(counts.into_iter().map(|(_, c)| c), rows.len())
}

/// The most frequent class label, ties resolved by first-encountered order.
/// `None` only for an empty row set.
pub fn majority_class<'a>(rows: &[&'a [String]]) -> Option<&'a str> {
    let mut best: Option<(&str, usize)> = None;
    for (label, count) in class_counts(rows) {
        match best {
            Some((_, max)) if count <= max => {}
            _ => best = Some((label, count)),
        }
    }
    best.map(|(label, _)| label)
}

fn group_by_value<'a, 'b>(
    rows: &'b [&'a [String]],
    attribute: usize,
) -> HashMap<&'a str, Vec<&'a [String]>> {
    let mut groups: HashMap<&'a str, Vec<&'a [String]>> = HashMap::new();
    for row in rows {
        groups.entry(row[attribute].as_str()).or_default().push(row);
    }
    groups
}

/// Information gain of a multi-way split on the exact values of a
/// categorical attribute: base entropy minus the size-weighted sum of the
/// child entropies.
pub fn information_gain(rows: &[&[String]], attribute: usize) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let base = entropy(rows);
    let total = rows.len() as f64;
    let weighted: f64 = group_by_value(rows, attribute)
        .values()
        .map(|group| (group.len() as f64 / total) * entropy(group))
        .sum();
    base - weighted
}

/// Information gain divided by the intrinsic value of the split (the
/// entropy of the split-size distribution). Exactly 0.0 when the attribute
/// has a single distinct value, so no division by zero.
pub fn info_gain_ratio(rows: &[&[String]], attribute: usize) -> f64 {
    if rows.is_empty() {
        return 0.0;
    }
    let groups = group_by_value(rows, attribute);
    let intrinsic = entropy_of_counts(groups.values().map(Vec::len), rows.len());
    if intrinsic == 0.0 {
        return 0.0;
    }
    information_gain(rows, attribute) / intrinsic
}

/// `(IG / log2(k + 1)) * (1 - (k - 1) / n)` where `k` is the number of
/// distinct attribute values and `n` the row count. 0.0 when `k <= 1` or
/// `n <= 1`.
pub fn normalized_weighted_gain(rows: &[&[String]], attribute: usize) -> f64 {
    let n = rows.len();
    if n <= 1 {
        return 0.0;
    }
    let k = group_by_value(rows, attribute).len();
    if k <= 1 {
        return 0.0;
    }
    let gain = information_gain(rows, attribute);
    (gain / (k as f64 + 1.0).log2()) * (1.0 - (k as f64 - 1.0) / n as f64)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::dummies::borrowed;

    #[test]
    fn entropy_of_even_two_class_split_is_one_bit() {
        let rows = vec![
            vec!["1".into(), "A".into()],
            vec!["2".into(), "A".into()],
            vec!["3".into(), "B".into()],
            vec!["4".into(), "B".into()],
        ];
        assert_eq!(entropy(&borrowed(&rows)), 1.0);
    }

    #[test]
    fn entropy_of_single_class_set_is_zero() {
        let rows = vec![
            vec!["1".into(), "A".into()],
            vec!["2".into(), "A".into()],
            vec!["3".into(), "A".into()],
        ];
        assert_eq!(entropy(&borrowed(&rows)), 0.0);
        assert_eq!(entropy(&[]), 0.0);
    }

    #[test]
    fn majority_class_breaks_ties_by_first_encounter() {
        let rows = vec![
            vec!["1".into(), "B".into()],
            vec!["2".into(), "A".into()],
            vec!["3".into(), "A".into()],
            vec!["4".into(), "B".into()],
        ];
        // 2-2 tie: "B" was seen first.
        assert_eq!(majority_class(&borrowed(&rows)), Some("B"));
        assert_eq!(majority_class(&[]), None);
    }

    #[test]
    fn information_gain_of_perfect_separator_equals_base_entropy() {
        let rows = vec![
            vec!["a".into(), "Y".into()],
            vec!["a".into(), "Y".into()],
            vec!["b".into(), "N".into()],
            vec!["b".into(), "N".into()],
        ];
        let rows = borrowed(&rows);
        assert_eq!(information_gain(&rows, 0), 1.0);
    }

    #[test]
    fn info_gain_ratio_is_zero_for_single_valued_attribute() {
        let rows = vec![
            vec!["same".into(), "Y".into()],
            vec!["same".into(), "N".into()],
        ];
        assert_eq!(info_gain_ratio(&borrowed(&rows), 0), 0.0);
    }

    #[test]
    fn normalized_weighted_gain_degenerate_cases_are_zero() {
        let single_value = vec![
            vec!["same".into(), "Y".into()],
            vec!["same".into(), "N".into()],
        ];
        assert_eq!(normalized_weighted_gain(&borrowed(&single_value), 0), 0.0);

        let single_row = vec![vec!["a".into(), "Y".into()]];
        assert_eq!(normalized_weighted_gain(&borrowed(&single_row), 0), 0.0);
    }

    #[test]
    fn normalized_weighted_gain_scales_information_gain() {
        let rows = vec![
            vec!["a".into(), "Y".into()],
            vec!["a".into(), "Y".into()],
            vec!["b".into(), "N".into()],
            vec!["b".into(), "N".into()],
        ];
        let rows = borrowed(&rows);
        // k = 2, n = 4: (1.0 / log2(3)) * (1 - 1/4)
        let expected = (1.0 / 3f64.log2()) * 0.75;
        let got = normalized_weighted_gain(&rows, 0);
        assert!((got - expected).abs() < 1e-12);
    }
}
