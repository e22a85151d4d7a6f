// src/main.rs

use bevy::{
    log::LogPlugin,
    prelude::*,
    window::WindowPlugin,
    winit::{UpdateMode, WinitSettings},
};
use bevy_egui::EguiPlugin;
use clap::Parser;
use std::time::Duration;

mod cli;
mod grid;
mod matrix;
mod settings;
mod ui;

use cli::Cli;
use grid::GridPlugin;
use ui::EditorUiPlugin;

fn main() {
    let cli = Cli::parse();
    if let Some(command) = cli.command {
        std::process::exit(cli::run(command));
    }

    App::new()
        .insert_resource(WinitSettings {
            focused_mode: UpdateMode::Continuous,
            unfocused_mode: UpdateMode::reactive_low_power(Duration::from_secs_f32(1.0 / 5.0)),
        })
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "MatrixPad".into(),
                        resolution: (720.0, 640.0).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error,naga=warn".to_string(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin {
            enable_multipass_for_primary_context: true,
        })
        .add_plugins(GridPlugin)
        .add_plugins(EditorUiPlugin)
        .run();
}
