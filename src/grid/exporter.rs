// src/grid/exporter.rs

use std::collections::HashMap;

use super::definitions::{CellKey, EXPORT_CONTENT_TYPE, EXPORT_FILE_NAME};
use super::delivery::{Delivery, DeliveryReceipt};
use super::error::{ExportError, ExportResult};

/// Read access to the cell fields of the host surface.
pub trait CellSource {
    /// `None` when the surface has no field with this identifier.
    fn lookup(&self, id: &str) -> Option<&str>;
}

impl<T: CellSource + ?Sized> CellSource for &T {
    fn lookup(&self, id: &str) -> Option<&str> {
        (**self).lookup(id)
    }
}

impl CellSource for HashMap<String, String> {
    fn lookup(&self, id: &str) -> Option<&str> {
        self.get(id).map(String::as_str)
    }
}

/// Builds the exported document: one line per row, the row's cells
/// concatenated without separator, every line ending in `\n`.
///
/// Cells are read in row-major order. The first missing identifier aborts
/// the build.
pub fn render_document<S: CellSource + ?Sized>(source: &S) -> ExportResult<String> {
    let mut document = String::new();
    for key in CellKey::all() {
        let value = source
            .lookup(&key.id())
            .ok_or(ExportError::MissingField(key))?;
        document.push_str(value);
        if key.ends_row() {
            document.push('\n');
        }
    }
    Ok(document)
}

/// Reads the grid and hands the document to a delivery.
pub struct GridExporter<S, D> {
    source: S,
    delivery: D,
}

impl<S: CellSource, D: Delivery> GridExporter<S, D> {
    pub fn new(source: S, delivery: D) -> Self {
        Self { source, delivery }
    }

    /// One call, one delivered file. Nothing is delivered if any cell is missing.
    pub fn export(&mut self) -> ExportResult<DeliveryReceipt> {
        let document = render_document(&self.source)?;
        let receipt = self
            .delivery
            .deliver(document.as_bytes(), EXPORT_FILE_NAME, EXPORT_CONTENT_TYPE)?;
        Ok(receipt)
    }

    #[cfg(test)]
    pub(crate) fn delivery(&self) -> &D {
        &self.delivery
    }
}
