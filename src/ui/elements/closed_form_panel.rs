// src/ui/elements/closed_form_panel.rs
use bevy::log::debug;
use bevy_egui::egui;
use std::ops::RangeInclusive;

use crate::matrix::{closed_form, entry_name, MatrixError};
use crate::ui::state::{ClosedFormReport, EditorWindowState};

// Formula length grows factorially; 5x5 is already several kilobytes.
const DIMENSIONS: RangeInclusive<usize> = 2..=5;

pub(crate) fn build_closed_form_report(
    dimension: usize,
    show_adjugate: bool,
) -> Result<ClosedFormReport, MatrixError> {
    Ok(ClosedFormReport {
        determinant: closed_form::determinant(dimension)?,
        adjugate: show_adjugate.then(|| closed_form::inverse(dimension)),
    })
}

pub(crate) fn show_closed_form_panel(ui: &mut egui::Ui, state: &mut EditorWindowState) {
    ui.heading("Closed Form");

    ui.horizontal(|ui| {
        ui.add(egui::Slider::new(&mut state.closed_form_dimension, DIMENSIONS).text("n"));
        ui.checkbox(&mut state.closed_form_show_adjugate, "Adjugate formulas");
    });

    let key = (state.closed_form_dimension, state.closed_form_show_adjugate);
    if state.closed_form_cache.as_ref().map(|(cached, _)| *cached) != Some(key) {
        debug!("Rebuilding closed-form formulas for {:?}", key);
        state.closed_form_cache = Some((key, build_closed_form_report(key.0, key.1)));
    }

    let Some((_, report)) = &state.closed_form_cache else {
        return;
    };
    let report = match report {
        Ok(report) => report,
        Err(e) => {
            ui.colored_label(egui::Color32::RED, e.to_string());
            return;
        }
    };

    egui::ScrollArea::vertical()
        .id_salt("closed_form_scroll")
        .max_height(240.0)
        .show(ui, |ui| {
            ui.label("det =");
            ui.add(
                egui::TextEdit::multiline(&mut report.determinant.as_str())
                    .code_editor()
                    .desired_width(f32::INFINITY),
            );

            match &report.adjugate {
                None => {}
                Some(Err(e)) => {
                    ui.colored_label(egui::Color32::RED, e.to_string());
                }
                Some(Ok(adjugate)) => {
                    ui.separator();
                    ui.label("Each inverse entry is the formula below divided by det:");
                    for (row, values) in adjugate.rows().enumerate() {
                        for (col, formula) in values.iter().enumerate() {
                            ui.monospace(format!("inv[{}] = {}", entry_name(row, col), formula));
                        }
                    }
                }
            }
        });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_adjugate_only_when_requested() {
        let report = build_closed_form_report(3, false).unwrap();
        assert!(report.adjugate.is_none());
        let report = build_closed_form_report(3, true).unwrap();
        assert!(matches!(report.adjugate, Some(Ok(ref m)) if m.size() == 3));
    }

    #[test]
    fn test_two_by_two_adjugate_is_too_small() {
        let report = build_closed_form_report(2, true).unwrap();
        assert_eq!(report.determinant, "(a11*a22 - a12*a21)");
        assert_eq!(
            report.adjugate,
            Some(Err(MatrixError::TooSmall { size: 2, min: 3 }))
        );
    }
}
