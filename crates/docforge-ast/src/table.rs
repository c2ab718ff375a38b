//! Table rows for spreadsheet output

use serde::{Deserialize, Serialize};

/// One row of trimmed cell strings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableRow {
    /// Cell values in column order
    pub cells: Vec<String>,
}

impl TableRow {
    /// Create a row from cell values
    pub fn new(cells: Vec<String>) -> Self {
        Self { cells }
    }

    /// Number of cells in this row
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Whether the row has no cells
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for TableRow {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            cells: iter.into_iter().map(Into::into).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_row() {
        let row: TableRow = ["a", "b"].into_iter().collect();
        assert_eq!(row.len(), 2);
        assert_eq!(row.cells, vec!["a".to_string(), "b".to_string()]);
        assert!(!row.is_empty());
        assert!(TableRow::default().is_empty());
    }
}
