// src/grid/plugin.rs
use bevy::prelude::*;

use super::events::{
    AppSettingsChanged, GridOperationFeedback, RequestGridExport, RequestPickExportFolder,
};
use super::resources::CellFields;
use super::systems;
use crate::settings::AppSettings;

#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
enum GridSystemSet {
    UserInput,      // Dialogs opened in response to UI events
    FileOperations, // Exports and settings persistence
}

/// Owns the cell fields and wires the "Save" trigger to the exporter.
pub struct GridPlugin;

impl Plugin for GridPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(
            Update,
            (
                GridSystemSet::UserInput,
                GridSystemSet::FileOperations.after(GridSystemSet::UserInput),
            ),
        );

        app.init_resource::<CellFields>()
            .init_resource::<AppSettings>();

        app.add_event::<RequestGridExport>()
            .add_event::<GridOperationFeedback>()
            .add_event::<RequestPickExportFolder>()
            .add_event::<AppSettingsChanged>();

        app.add_systems(Startup, systems::load_settings_on_startup);

        app.add_systems(
            Update,
            systems::handle_pick_export_folder_request.in_set(GridSystemSet::UserInput),
        );
        app.add_systems(
            Update,
            (
                systems::handle_settings_change_and_save,
                systems::handle_export_requests,
            )
                .chain()
                .in_set(GridSystemSet::FileOperations),
        );

        info!("GridPlugin initialized.");
    }
}
