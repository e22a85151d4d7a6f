// src/ui/state.rs
use bevy::prelude::Resource;

use crate::matrix::{MatrixError, SquareMatrix};

/// Result of pressing "Compute Inverse".
#[derive(Debug, Clone, PartialEq)]
pub struct InverseReport {
    pub determinant: f64,
    pub inverse: SquareMatrix<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClosedFormReport {
    pub determinant: String,
    /// Present only when adjugate formulas were asked for.
    pub adjugate: Option<Result<SquareMatrix<String>, MatrixError>>,
}

#[derive(Resource, Debug, Clone)]
pub struct EditorWindowState {
    pub show_settings_popup: bool,
    pub inverse_report: Option<Result<InverseReport, MatrixError>>,
    pub closed_form_dimension: usize,
    pub closed_form_show_adjugate: bool,
    // Keyed by (dimension, show_adjugate); rebuilt when either changes
    pub closed_form_cache: Option<((usize, bool), Result<ClosedFormReport, MatrixError>)>,
}

impl Default for EditorWindowState {
    fn default() -> Self {
        Self {
            show_settings_popup: false,
            inverse_report: None,
            closed_form_dimension: 3,
            closed_form_show_adjugate: false,
            closed_form_cache: None,
        }
    }
}
