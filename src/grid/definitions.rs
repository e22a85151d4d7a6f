// src/grid/definitions.rs
use std::fmt;

/// Rows and columns in the editable grid.
pub const GRID_SIZE: usize = 3;

/// Name of the file every export produces.
pub const EXPORT_FILE_NAME: &str = "my-new-file.txt";

/// Content type handed to the delivery alongside the document.
pub const EXPORT_CONTENT_TYPE: &str = "text/plain";

/// Builds the identifier of the cell at (row, col), 1-indexed: `a` followed by
/// the row digit and the column digit. Row 2, column 3 is `a23`.
pub fn cell_key(row: usize, col: usize) -> String {
    format!("a{}{}", row, col)
}

/// A coordinate known to lie inside the 3x3 grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellKey {
    row: usize,
    col: usize,
}

impl CellKey {
    /// `None` unless both coordinates are in `1..=GRID_SIZE`.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        let in_range = |n: usize| (1..=GRID_SIZE).contains(&n);
        (in_range(row) && in_range(col)).then_some(CellKey { row, col })
    }

    /// All nine keys in row-major order.
    pub fn all() -> impl Iterator<Item = CellKey> {
        (1..=GRID_SIZE).flat_map(|row| (1..=GRID_SIZE).filter_map(move |col| CellKey::new(row, col)))
    }

    pub fn row(self) -> usize {
        self.row
    }

    /// True for the rightmost cell of a row.
    pub fn ends_row(self) -> bool {
        self.col == GRID_SIZE
    }

    pub fn id(self) -> String {
        cell_key(self.row, self.col)
    }
}

impl fmt::Display for CellKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a{}{}", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_key_format() {
        assert_eq!(cell_key(1, 1), "a11");
        assert_eq!(cell_key(2, 3), "a23");
        assert_eq!(cell_key(3, 1), "a31");
    }

    #[test]
    fn test_all_keys_row_major() {
        let ids: Vec<String> = CellKey::all().map(CellKey::id).collect();
        assert_eq!(
            ids,
            vec!["a11", "a12", "a13", "a21", "a22", "a23", "a31", "a32", "a33"]
        );
    }

    #[test]
    fn test_new_rejects_out_of_range() {
        assert!(CellKey::new(0, 1).is_none());
        assert!(CellKey::new(1, 4).is_none());
        assert!(CellKey::new(7, 9).is_none());

        let key = CellKey::new(2, 3).unwrap();
        assert_eq!(key.row(), 2);
        assert_eq!(key.id(), "a23");
        assert!(key.ends_row());
        assert!(!CellKey::new(3, 1).unwrap().ends_row());
    }

    #[test]
    fn test_display_matches_id() {
        for key in CellKey::all() {
            assert_eq!(key.to_string(), key.id());
        }
    }
}
