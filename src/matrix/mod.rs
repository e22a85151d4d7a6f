// src/matrix/mod.rs

pub mod closed_form;
pub mod codec;
pub mod error;
pub mod numeric;
pub mod square;

pub use error::{CodecError, MatrixError};
pub use numeric::{determinant, inverse, MAX_EXPANSION_SIZE};
pub use square::{entry_name, SquareMatrix};
