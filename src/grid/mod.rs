// src/grid/mod.rs

pub mod definitions;
pub mod delivery;
pub mod error;
pub mod events;
pub mod exporter;
pub mod plugin;
pub mod resources;

pub(crate) mod systems;

pub use definitions::{cell_key, CellKey, EXPORT_FILE_NAME, GRID_SIZE};
pub use error::ExportError;
pub use exporter::{render_document, CellSource, GridExporter};
pub use plugin::GridPlugin;
pub use resources::CellFields;
