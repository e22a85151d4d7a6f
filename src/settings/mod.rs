// src/settings/mod.rs
pub mod io;

use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::grid::delivery::{Delivery, DeliveryError, DialogDelivery, DirectoryDelivery};

/// How the "Save" button delivers the exported file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum DeliveryMode {
    /// Ask for a location every time.
    #[default]
    SaveDialog,
    /// Write straight into `AppSettings::export_dir`.
    ExportFolder,
}

#[derive(Resource, Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppSettings {
    pub delivery_mode: DeliveryMode,
    pub export_dir: Option<PathBuf>,
    pub open_folder_after_export: bool,
}

impl AppSettings {
    /// Builds the delivery the current settings ask for.
    pub fn delivery(&self) -> Result<Box<dyn Delivery>, DeliveryError> {
        match self.delivery_mode {
            DeliveryMode::SaveDialog => Ok(Box::new(DialogDelivery::new(self.export_dir.clone()))),
            DeliveryMode::ExportFolder => self
                .export_dir
                .clone()
                .map(|dir| Box::new(DirectoryDelivery::new(dir)) as Box<dyn Delivery>)
                .ok_or(DeliveryError::NoTargetDirectory),
        }
    }
}
