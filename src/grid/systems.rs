// src/grid/systems.rs

use bevy::prelude::*;
use chrono::Local;
use rfd::FileDialog;

use super::events::{
    AppSettingsChanged, GridOperationFeedback, RequestGridExport, RequestPickExportFolder,
};
use super::exporter::GridExporter;
use super::resources::CellFields;
use crate::settings::{io as settings_io, AppSettings};

pub(crate) fn load_settings_on_startup(mut settings: ResMut<AppSettings>) {
    match settings_io::load_settings() {
        Ok(loaded) => {
            info!(
                "AppSettings: Loaded (mode: {:?}, export folder: {:?}).",
                loaded.delivery_mode, loaded.export_dir
            );
            *settings = loaded;
        }
        Err(e) => {
            error!("AppSettings: Failed to load settings: {}. Using defaults.", e);
            *settings = AppSettings::default();
        }
    }
}

/// Runs one export per `RequestGridExport` and reports the outcome.
pub fn handle_export_requests(
    mut events: EventReader<RequestGridExport>,
    cells: Res<CellFields>,
    settings: Res<AppSettings>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    for _event in events.read() {
        info!("GridExport: Export requested ({:?}).", settings.delivery_mode);

        let delivery = match settings.delivery() {
            Ok(delivery) => delivery,
            Err(e) => {
                let msg = format!("Export failed: {}", e);
                error!("GridExport: {}", msg);
                feedback_writer.write(GridOperationFeedback { message: msg, is_error: true });
                continue;
            }
        };

        match GridExporter::new(&*cells, delivery).export() {
            Ok(receipt) => {
                let msg = format!(
                    "Saved {} bytes to '{}' at {}",
                    receipt.bytes_written,
                    receipt.path.display(),
                    Local::now().format("%H:%M:%S")
                );
                info!("GridExport: {}", msg);
                feedback_writer.write(GridOperationFeedback { message: msg, is_error: false });

                if settings.open_folder_after_export {
                    if let Some(folder) = receipt.path.parent() {
                        if let Err(e) = open::that(folder) {
                            warn!("GridExport: Could not open folder {:?}: {}", folder, e);
                        }
                    }
                }
            }
            Err(e) => {
                let msg = format!("Export failed: {}", e);
                error!("GridExport: {}", msg);
                feedback_writer.write(GridOperationFeedback { message: msg, is_error: true });
            }
        }
    }
}

pub(crate) fn handle_pick_export_folder_request(
    mut events: EventReader<RequestPickExportFolder>,
    mut settings: ResMut<AppSettings>,
    mut changed_writer: EventWriter<AppSettingsChanged>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    let mut dialog = FileDialog::new().set_title("Choose export folder");
    if let Some(dir) = &settings.export_dir {
        dialog = dialog.set_directory(dir);
    }
    match dialog.pick_folder() {
        Some(dir) => {
            info!("AppSettings: Export folder set to {:?}", dir);
            settings.export_dir = Some(dir);
            changed_writer.write(AppSettingsChanged);
        }
        None => info!("AppSettings: Export folder selection cancelled."),
    }
}

pub(crate) fn handle_settings_change_and_save(
    mut events: EventReader<AppSettingsChanged>,
    settings: Res<AppSettings>,
    mut feedback_writer: EventWriter<GridOperationFeedback>,
) {
    if events.is_empty() {
        return;
    }
    events.clear();

    if let Err(e) = settings_io::save_settings(&settings) {
        let msg = format!("Failed to save settings: {}", e);
        error!("AppSettings: {}", msg);
        feedback_writer.write(GridOperationFeedback { message: msg, is_error: true });
    }
}
