//! Fixture datasets shared across unit tests.

use crate::core::Dataset;

/// Builds a dataset from string literals, panicking on ragged input.
pub fn dataset(rows: &[&[&str]]) -> Dataset {
    Dataset::from_rows(
        rows.iter()
            .map(|row| row.iter().map(|cell| cell.to_string()).collect())
            .collect(),
    )
    .expect("fixture rows must be rectangular")
}

/// Borrowed row views over owned rows, as the engine internals consume them.
pub fn borrowed(rows: &[Vec<String>]) -> Vec<&[String]> {
    rows.iter().map(Vec::as_slice).collect()
}

/// Four rows, numeric attribute 0 and categorical attribute 1; attribute 1
/// separates the classes perfectly, attribute 0 does not.
pub fn mixed_numeric() -> Dataset {
    dataset(&[
        &["1", "a", "Y"],
        &["2", "a", "Y"],
        &["1", "b", "N"],
        &["2", "b", "N"],
    ])
}

/// The classic 14-row play-tennis table: four nominal attributes, a
/// deterministic function from features to label.
pub fn weather_nominal() -> Dataset {
    dataset(&[
        &["sunny", "hot", "high", "false", "no"],
        &["sunny", "hot", "high", "true", "no"],
        &["overcast", "hot", "high", "false", "yes"],
        &["rainy", "mild", "high", "false", "yes"],
        &["rainy", "cool", "normal", "false", "yes"],
        &["rainy", "cool", "normal", "true", "no"],
        &["overcast", "cool", "normal", "true", "yes"],
        &["sunny", "mild", "high", "false", "no"],
        &["sunny", "cool", "normal", "false", "yes"],
        &["rainy", "mild", "normal", "false", "yes"],
        &["sunny", "mild", "normal", "true", "yes"],
        &["overcast", "mild", "high", "true", "yes"],
        &["overcast", "hot", "normal", "false", "yes"],
        &["rainy", "mild", "high", "true", "no"],
    ])
}
