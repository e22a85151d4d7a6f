// src/matrix/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatrixError {
    #[error("Matrix has no entries.")]
    Empty,
    #[error("Row {row} has {len} entries; a {size}x{size} matrix needs {size}.")]
    NotSquare { size: usize, row: usize, len: usize },
    #[error("Matrix is singular (determinant is zero) and has no inverse.")]
    Singular,
    #[error("A {size}x{size} matrix is too small; at least {min}x{min} is required.")]
    TooSmall { size: usize, min: usize },
    #[error("A {size}x{size} matrix is too large; at most {max}x{max} is supported.")]
    TooLarge { size: usize, max: usize },
    #[error("Cell '{0}' is missing.")]
    MissingCell(String),
    #[error("Cell '{key}' is not a number: '{value}'.")]
    NotANumber { key: String, value: String },
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CodecError {
    #[error("Encoded matrix is empty.")]
    Empty,
    #[error("Delimiter error: every entry must be followed by ','.")]
    Delimiter,
    #[error("Token {position} is not a number: '{token}'.")]
    InvalidNumber { token: String, position: usize },
    #[error("Decoded rows do not form a square matrix: {0}")]
    NotSquare(#[source] MatrixError),
}
