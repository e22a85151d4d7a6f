// src/ui/elements/mod.rs

pub mod matrix_editor;

mod closed_form_panel;
mod grid_panel;
mod inverse_panel;
mod settings_popup;
