// src/grid/error.rs

use thiserror::Error;

use super::definitions::CellKey;
use super::delivery::DeliveryError;

/// Failures of a single export. Nothing is delivered when a lookup fails.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Cell field '{0}' does not exist.")]
    MissingField(CellKey),
    #[error("Delivery failed: {0}")]
    Delivery(#[from] DeliveryError),
}

pub type ExportResult<T> = Result<T, ExportError>;
