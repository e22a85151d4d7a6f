// src/grid/events.rs
use bevy::prelude::Event;

/// Sent when the user presses "Save". Each event produces one export.
#[derive(Event, Debug, Clone)]
pub struct RequestGridExport;

/// Outcome of a grid or settings operation, shown in the feedback line.
#[derive(Event, Debug, Clone)]
pub struct GridOperationFeedback {
    pub message: String,
    pub is_error: bool,
}

/// Sent when the settings popup asks for an export folder.
#[derive(Event, Debug, Clone)]
pub struct RequestPickExportFolder;

/// Sent whenever `AppSettings` changed and must be written to disk.
#[derive(Event, Debug, Clone)]
pub struct AppSettingsChanged;
