use crate::core::dataset::Dataset;

/// Kind of an attribute column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Per-attribute column kinds, inferred once on the full cleaned dataset
/// and reused unchanged throughout tree construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    kinds: Vec<ColumnKind>,
}

impl Schema {
    pub fn from_kinds(kinds: Vec<ColumnKind>) -> Self {
        Self { kinds }
    }

    /// Infers column kinds from the data: a column is numeric iff every one
    /// of its cells parses as `f64`.
    pub fn infer(dataset: &Dataset) -> Self {
        let mut kinds = vec![ColumnKind::Numeric; dataset.attribute_count()];
        for row in dataset.rows() {
            for (kind, cell) in kinds.iter_mut().zip(row.iter()) {
                if cell.parse::<f64>().is_err() {
                    *kind = ColumnKind::Categorical;
                }
            }
        }
        Self { kinds }
    }

    pub fn kind(&self, attribute: usize) -> Option<ColumnKind> {
        self.kinds.get(attribute).copied()
    }

    pub fn is_numeric(&self, attribute: usize) -> bool {
        matches!(self.kinds.get(attribute), Some(ColumnKind::Numeric))
    }

    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }
}
