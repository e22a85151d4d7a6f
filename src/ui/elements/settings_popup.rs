// src/ui/elements/settings_popup.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::grid::events::{AppSettingsChanged, RequestPickExportFolder};
use crate::settings::{AppSettings, DeliveryMode};
use crate::ui::state::EditorWindowState;

pub(crate) fn show_settings_popup(
    ctx: &egui::Context,
    state: &mut EditorWindowState,
    settings: &mut AppSettings,
    pick_folder_writer: &mut EventWriter<RequestPickExportFolder>,
    changed_writer: &mut EventWriter<AppSettingsChanged>,
) {
    if !state.show_settings_popup {
        return;
    }

    let mut is_window_open = true;
    let mut close_requested = false;
    let mut changed = false;

    egui::Window::new("Settings")
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut is_window_open)
        .show(ctx, |ui| {
            ui.label("When 'Save' is pressed:");
            changed |= ui
                .radio_value(&mut settings.delivery_mode, DeliveryMode::SaveDialog, "Ask where to save")
                .changed();
            changed |= ui
                .radio_value(
                    &mut settings.delivery_mode,
                    DeliveryMode::ExportFolder,
                    "Write into the export folder",
                )
                .changed();
            ui.separator();

            ui.horizontal(|ui| {
                ui.label("Export folder:");
                let folder = settings
                    .export_dir
                    .as_ref()
                    .map_or_else(|| "None".to_string(), |p| p.display().to_string());
                ui.monospace(folder);
                if ui.button("Choose...").clicked() {
                    pick_folder_writer.write(RequestPickExportFolder);
                }
            });
            if settings.delivery_mode == DeliveryMode::ExportFolder && settings.export_dir.is_none() {
                ui.colored_label(egui::Color32::YELLOW, "Choose a folder before saving.");
            }

            changed |= ui
                .checkbox(&mut settings.open_folder_after_export, "Open folder after export")
                .changed();
            ui.separator();

            if ui.button("Close").clicked() {
                close_requested = true;
            }
        });

    if changed {
        info!("AppSettings: Changed in settings popup: {:?}", settings);
        changed_writer.write(AppSettingsChanged);
    }
    state.show_settings_popup = is_window_open && !close_requested;
}
