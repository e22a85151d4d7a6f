// src/matrix/square.rs

use std::ops::Index;

use super::error::MatrixError;
use crate::grid::{cell_key, CellKey, CellSource, GRID_SIZE};

/// Name of the entry at a 0-indexed (row, col), e.g. `entry_name(0, 1)` is `a12`.
pub fn entry_name(row: usize, col: usize) -> String {
    cell_key(row + 1, col + 1)
}

/// An n x n matrix stored row-major in one vector.
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T> {
    size: usize,
    entries: Vec<T>,
}

impl<T> SquareMatrix<T> {
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self, MatrixError> {
        let size = rows.len();
        if size == 0 {
            return Err(MatrixError::Empty);
        }
        if let Some((row, bad)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(MatrixError::NotSquare { size, row, len: bad.len() });
        }
        Ok(Self {
            size,
            entries: rows.into_iter().flatten().collect(),
        })
    }

    pub fn from_fn(size: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut entries = Vec::with_capacity(size * size);
        for row in 0..size {
            for col in 0..size {
                entries.push(f(row, col));
            }
        }
        Self { size, entries }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    fn index_of(&self, row: usize, col: usize) -> usize {
        row * self.size + col
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.entries.chunks(self.size.max(1))
    }
}

impl<T: Clone> SquareMatrix<T> {
    /// The matrix without `row` and `col`.
    pub fn minor(&self, row: usize, col: usize) -> Self {
        let size = self.size.saturating_sub(1);
        let mut entries = Vec::with_capacity(size * size);
        for (r, values) in self.rows().enumerate() {
            if r == row {
                continue;
            }
            entries.extend(
                values
                    .iter()
                    .enumerate()
                    .filter(|(c, _)| *c != col)
                    .map(|(_, v)| v.clone()),
            );
        }
        Self { size, entries }
    }

    pub fn transpose(&self) -> Self {
        Self::from_fn(self.size, |row, col| self[(col, row)].clone())
    }
}

impl<T> Index<(usize, usize)> for SquareMatrix<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(row < self.size && col < self.size, "({}, {}) outside {}x{} matrix", row, col, self.size, self.size);
        &self.entries[self.index_of(row, col)]
    }
}

impl SquareMatrix<String> {
    /// Matrix whose entries are their own names (`a11`, `a12`, ...).
    pub fn symbolic(size: usize) -> Self {
        Self::from_fn(size, entry_name)
    }
}

impl SquareMatrix<f64> {
    #[cfg(test)]
    pub fn identity(size: usize) -> Self {
        Self::from_fn(size, |row, col| if row == col { 1.0 } else { 0.0 })
    }

    /// Reads the 3x3 grid as numbers. Surrounding whitespace is ignored.
    pub fn from_cells<S: CellSource + ?Sized>(cells: &S) -> Result<Self, MatrixError> {
        let mut rows = vec![Vec::with_capacity(GRID_SIZE); GRID_SIZE];
        for key in CellKey::all() {
            let id = key.id();
            let raw = cells
                .lookup(&id)
                .ok_or_else(|| MatrixError::MissingCell(id.clone()))?;
            let value = raw.trim().parse::<f64>().map_err(|_| MatrixError::NotANumber {
                key: id.clone(),
                value: raw.to_string(),
            })?;
            rows[key.row() - 1].push(value);
        }
        Self::from_rows(rows)
    }

    #[cfg(test)]
    pub fn multiply(&self, other: &Self) -> Option<Self> {
        if self.size != other.size {
            return None;
        }
        Some(Self::from_fn(self.size, |row, col| {
            (0..self.size).map(|k| self[(row, k)] * other[(k, col)]).sum()
        }))
    }

    #[cfg(test)]
    pub fn approx_eq(&self, other: &Self, tolerance: f64) -> bool {
        self.size == other.size
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|(a, b)| (a - b).abs() <= tolerance)
    }
}
