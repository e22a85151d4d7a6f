// src/cli/export.rs
use std::path::PathBuf;

use super::CliError;
use crate::grid::delivery::DirectoryDelivery;
use crate::grid::{CellFields, GridExporter, GRID_SIZE};

pub fn run(cells: Vec<String>, out: Option<PathBuf>) -> Result<(), CliError> {
    if cells.len() != GRID_SIZE * GRID_SIZE {
        return Err(CliError::CellCount(cells.len()));
    }
    let fields = CellFields::from_row_major(cells);
    let dir = out.unwrap_or_else(|| PathBuf::from("."));

    let receipt = GridExporter::new(&fields, DirectoryDelivery::new(dir)).export()?;
    println!("Wrote {} bytes to {}", receipt.bytes_written, receipt.path.display());
    Ok(())
}
