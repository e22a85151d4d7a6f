// src/ui/elements/inverse_panel.rs
use bevy::log::{info, warn};
use bevy_egui::egui;

use crate::grid::CellFields;
use crate::matrix::{determinant, inverse, MatrixError, SquareMatrix};
use crate::ui::state::{EditorWindowState, InverseReport};

pub(crate) fn compute_inverse_report(cells: &CellFields) -> Result<InverseReport, MatrixError> {
    let matrix = SquareMatrix::from_cells(cells)?;
    let inverse = inverse(&matrix)?;
    Ok(InverseReport {
        determinant: determinant(&matrix),
        inverse,
    })
}

pub(crate) fn show_inverse_panel(ui: &mut egui::Ui, cells: &CellFields, state: &mut EditorWindowState) {
    ui.heading("Inverse");

    if ui
        .button("Compute Inverse")
        .on_hover_text("Read the grid as numbers and invert it")
        .clicked()
    {
        let report = compute_inverse_report(cells);
        match &report {
            Ok(r) => info!("Inverse computed (determinant {:.6}).", r.determinant),
            Err(e) => warn!("Inverse not available: {}", e),
        }
        state.inverse_report = Some(report);
    }

    match &state.inverse_report {
        None => {
            ui.weak("Fill the grid with numbers and press 'Compute Inverse'.");
        }
        Some(Err(e)) => {
            ui.colored_label(egui::Color32::RED, e.to_string());
        }
        Some(Ok(report)) => {
            ui.label(format!("Determinant: {:.6}", report.determinant));
            egui::Grid::new("matrix_inverse_grid")
                .num_columns(report.inverse.size())
                .striped(true)
                .spacing([12.0, 4.0])
                .show(ui, |ui| {
                    for row in report.inverse.rows() {
                        for value in row {
                            ui.monospace(format!("{:.6}", value));
                        }
                        ui.end_row();
                    }
                });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_for_invertible_grid() {
        let cells = CellFields::from_row_major(["1", "2", "3", "0", "1", "4", "5", "6", "0"]);
        let report = compute_inverse_report(&cells).unwrap();
        assert_eq!(report.determinant, 1.0);
        assert_eq!(report.inverse[(0, 0)], -24.0);
        assert_eq!(report.inverse[(2, 2)], 1.0);
    }

    #[test]
    fn test_report_errors() {
        let digits = CellFields::from_row_major(["1", "2", "3", "4", "5", "6", "7", "8", "9"]);
        assert_eq!(compute_inverse_report(&digits), Err(MatrixError::Singular));

        let empty = CellFields::default();
        assert!(matches!(
            compute_inverse_report(&empty),
            Err(MatrixError::NotANumber { ref key, .. }) if key == "a11"
        ));
    }
}
