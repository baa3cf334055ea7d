//! CSV loading and cleaning for the decision-tree engine.
//!
//! Produces the rectangular dataset the engine consumes: comma-separated
//! cells trimmed of whitespace and surrounding quotes, ragged lines
//! dropped, and `"?"` cells imputed with the per-column majority value.

use std::fs;
use std::path::Path;

use crate::core::{Dataset, TreeError};

/// Marker for a missing cell in the source data.
pub const MISSING: &str = "?";

#[derive(Debug, Clone, Copy, Default)]
pub struct CsvOptions {
    /// Skip the first non-empty line.
    pub has_header: bool,
    /// Drop the leading column of every row (row-ID columns).
    pub drop_first_column: bool,
}

#[inline]
fn strip_surrounding_quotes(s: &str) -> &str {
    let b = s.as_bytes();
    if b.len() >= 2 {
        let first = b[0];
        let last = b[b.len() - 1];
        if (first == b'\'' && last == b'\'') || (first == b'"' && last == b'"') {
            return &s[1..s.len() - 1];
        }
    }
    s
}

/// Splits one line on commas outside quotes, trimming whitespace and
/// stripping surrounding quotes from each cell.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut in_quotes: Option<char> = None;

    for ch in line.chars() {
        match in_quotes {
            Some(q) => {
                if ch == q {
                    in_quotes = None;
                }
                current.push(ch);
            }
            None => {
                if ch == '"' || ch == '\'' {
                    in_quotes = Some(ch);
                    current.push(ch);
                } else if ch == ',' {
                    cells.push(strip_surrounding_quotes(current.trim()).to_string());
                    current.clear();
                } else {
                    current.push(ch);
                }
            }
        }
    }
    if !current.is_empty() || !cells.is_empty() {
        cells.push(strip_surrounding_quotes(current.trim()).to_string());
    }
    cells
}

/// Replaces every [`MISSING`] cell with the majority value of its column,
/// counted over the non-missing cells (ties keep the first-encountered
/// value). Columns that are entirely missing are left untouched.
pub fn impute_missing(rows: &mut [Vec<String>]) {
    let width = rows.first().map_or(0, Vec::len);
    let mut counts: Vec<Vec<(String, usize)>> = vec![Vec::new(); width];

    for row in rows.iter() {
        for (column, cell) in row.iter().enumerate() {
            if cell == MISSING {
                continue;
            }
            match counts[column].iter_mut().find(|(value, _)| value == cell) {
                Some((_, count)) => *count += 1,
                None => counts[column].push((cell.clone(), 1)),
            }
        }
    }

    let majorities: Vec<Option<String>> = counts
        .into_iter()
        .map(|column| {
            let mut best: Option<(String, usize)> = None;
            for (value, count) in column {
                match &best {
                    Some((_, max)) if count <= *max => {}
                    _ => best = Some((value, count)),
                }
            }
            best.map(|(value, _)| value)
        })
        .collect();

    for row in rows.iter_mut() {
        for (cell, majority) in row.iter_mut().zip(&majorities) {
            if cell == MISSING {
                if let Some(value) = majority {
                    *cell = value.clone();
                }
            }
        }
    }
}

/// Loads and cleans a CSV file into a [`Dataset`].
///
/// The first kept data line establishes the expected width; lines with a
/// different cell count are dropped, as are empty lines.
pub fn load_csv(path: &Path, options: CsvOptions) -> Result<Dataset, TreeError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    if options.has_header {
        let _ = lines.next();
    }

    let mut rows: Vec<Vec<String>> = Vec::new();
    let mut width: Option<usize> = None;
    for line in lines {
        let mut cells = tokenize_line(line);
        if options.drop_first_column && !cells.is_empty() {
            cells.remove(0);
        }
        let expected = *width.get_or_insert(cells.len());
        if cells.len() != expected {
            continue;
        }
        rows.push(cells);
    }

    impute_missing(&mut rows);
    Dataset::from_rows(rows)
}
