// src/ui/elements/matrix_editor.rs
use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use crate::grid::{
    events::{AppSettingsChanged, RequestGridExport, RequestPickExportFolder},
    CellFields,
};
use crate::settings::AppSettings;
use crate::ui::{state::EditorWindowState, UiFeedbackState};

use super::closed_form_panel::show_closed_form_panel;
use super::grid_panel::show_grid_panel;
use super::inverse_panel::show_inverse_panel;
use super::settings_popup::show_settings_popup;

#[allow(clippy::too_many_arguments)]
pub fn matrix_editor_ui(
    mut contexts: EguiContexts,
    mut state: ResMut<EditorWindowState>,
    mut cells: ResMut<CellFields>,
    mut settings: ResMut<AppSettings>,
    ui_feedback: Res<UiFeedbackState>,
    mut export_writer: EventWriter<RequestGridExport>,
    mut pick_folder_writer: EventWriter<RequestPickExportFolder>,
    mut settings_changed_writer: EventWriter<AppSettingsChanged>,
) {
    let ctx = contexts.ctx_mut();

    egui::TopBottomPanel::top("matrixpad_top_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            ui.heading("MatrixPad");
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("⚙ Settings").clicked() {
                    state.show_settings_popup = true;
                }
            });
        });
    });

    egui::TopBottomPanel::bottom("matrixpad_feedback_panel").show(ctx, |ui| {
        if ui_feedback.last_message.is_empty() {
            ui.weak("Ready.");
        } else if ui_feedback.is_error {
            ui.colored_label(egui::Color32::RED, &ui_feedback.last_message);
        } else {
            ui.label(&ui_feedback.last_message);
        }
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        egui::ScrollArea::vertical().show(ui, |ui| {
            show_grid_panel(ui, &mut cells, &mut export_writer);
            ui.separator();
            show_inverse_panel(ui, &cells, &mut state);
            ui.separator();
            show_closed_form_panel(ui, &mut state);
        });
    });

    show_settings_popup(
        ctx,
        &mut state,
        &mut settings,
        &mut pick_folder_writer,
        &mut settings_changed_writer,
    );
}
