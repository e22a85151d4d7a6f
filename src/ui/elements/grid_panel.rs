// src/ui/elements/grid_panel.rs
use bevy::prelude::*;
use bevy_egui::egui;

use crate::grid::{
    cell_key, events::RequestGridExport, render_document, CellFields, EXPORT_FILE_NAME, GRID_SIZE,
};

const CELL_WIDTH: f32 = 90.0;

/// Shows line breaks as a visible marker so empty rows stay readable.
pub(crate) fn preview_text(document: &str) -> String {
    document.replace('\n', "⏎\n")
}

pub(crate) fn show_grid_panel(
    ui: &mut egui::Ui,
    cells: &mut CellFields,
    export_writer: &mut EventWriter<RequestGridExport>,
) {
    ui.heading("Grid");

    egui::Grid::new("matrix_cell_grid")
        .num_columns(GRID_SIZE)
        .spacing([6.0, 6.0])
        .show(ui, |ui| {
            for row in 1..=GRID_SIZE {
                for col in 1..=GRID_SIZE {
                    let id = cell_key(row, col);
                    match cells.get_mut(&id) {
                        Some(value) => {
                            ui.add(
                                egui::TextEdit::singleline(value)
                                    .desired_width(CELL_WIDTH)
                                    .hint_text(id.as_str()),
                            )
                            .on_hover_text(id.as_str());
                        }
                        None => {
                            ui.colored_label(egui::Color32::RED, format!("{} missing", id));
                        }
                    }
                }
                ui.end_row();
            }
        });

    ui.horizontal(|ui| {
        if ui
            .button("Save")
            .on_hover_text(format!("Export the grid as {}", EXPORT_FILE_NAME))
            .clicked()
        {
            info!("Save clicked; requesting grid export.");
            export_writer.write(RequestGridExport);
        }
        if ui.button("Clear").clicked() {
            cells.clear_values();
        }
    });

    ui.add_space(4.0);
    match render_document(&*cells) {
        Ok(document) => {
            ui.label(format!("Preview ({} bytes):", document.len()));
            ui.monospace(preview_text(&document));
        }
        Err(e) => {
            ui.colored_label(egui::Color32::RED, e.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_marks_line_ends() {
        assert_eq!(preview_text("12\n\n3\n"), "12⏎\n⏎\n3⏎\n");
    }
}
