use crate::core::error::TreeError;

/// Returns the class label of a row (the last cell).
#[inline]
pub fn class_label(row: &[String]) -> &str {
    row.last().map(String::as_str).unwrap_or("")
}

/// A rectangular table of string-typed cells.
///
/// Each row is a fixed-width tuple of cells whose last cell is the class
/// label. Numeric columns keep their textual form; parsing happens late, at
/// the call sites that need a number.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    rows: Vec<Vec<String>>,
}

impl Dataset {
    /// Builds a dataset from raw rows, validating that every row has the
    /// same width and at least a label cell.
    pub fn from_rows(rows: Vec<Vec<String>>) -> Result<Self, TreeError> {
        if let Some(first) = rows.first() {
            let expected = first.len();
            if expected == 0 {
                return Err(TreeError::RaggedRow { expected: 1, found: 0 });
            }
            for row in &rows {
                if row.len() != expected {
                    return Err(TreeError::RaggedRow {
                        expected,
                        found: row.len(),
                    });
                }
            }
        }
        Ok(Self { rows })
    }

    /// Wraps rows whose widths were already validated by the caller.
    pub(crate) fn from_validated(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Number of cells per row, 0 for an empty dataset.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    /// Number of attribute columns (total width minus the label column).
    pub fn attribute_count(&self) -> usize {
        self.width().saturating_sub(1)
    }

    /// The initial candidate attribute set: every non-label column.
    pub fn attribute_indices(&self) -> Vec<usize> {
        (0..self.attribute_count()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn owned(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn from_rows_accepts_rectangular_data() {
        let ds = Dataset::from_rows(vec![owned(&["1", "a", "Y"]), owned(&["2", "b", "N"])])
            .unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.width(), 3);
        assert_eq!(ds.attribute_count(), 2);
        assert_eq!(ds.attribute_indices(), vec![0, 1]);
    }

    #[test]
    fn from_rows_rejects_ragged_rows() {
        let err = Dataset::from_rows(vec![owned(&["1", "a", "Y"]), owned(&["2", "N"])])
            .unwrap_err();
        assert!(matches!(
            err,
            TreeError::RaggedRow {
                expected: 3,
                found: 2
            }
        ));
    }

    #[test]
    fn empty_dataset_is_valid() {
        let ds = Dataset::from_rows(Vec::new()).unwrap();
        assert!(ds.is_empty());
        assert_eq!(ds.width(), 0);
        assert_eq!(ds.attribute_count(), 0);
    }

    #[test]
    fn class_label_is_last_cell() {
        let row = owned(&["5.1", "setosa"]);
        assert_eq!(class_label(&row), "setosa");
    }
}
