mod constants;
mod interface;
mod plugins;
mod systems;

use bevy::prelude::*;
use std::env;

use crate::plugins::{StartupPlugin, VisualPlugin};
use crate::systems::WidgetSystemSet;
use crate::systems::visual::avatar::GazePolicy;

/// 起動時に選択された視線追従ポリシー
#[derive(Resource)]
pub struct GazeConfig(pub GazePolicy);

fn has_cli_flag(flag: &str) -> bool {
    env::args().any(|arg| arg == flag)
}

fn main() {
    // `--direct-gaze` で平滑化なしの直接マッピングに切り替える
    let policy = if has_cli_flag("--direct-gaze") {
        GazePolicy::Direct
    } else {
        GazePolicy::Amplified
    };

    App::new()
        .insert_resource(ClearColor(Color::srgb(0.06, 0.06, 0.08)))
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Chat Mascot".into(),
                        resolution: (960, 640).into(),
                        ..default()
                    }),
                    ..default()
                })
                .set(bevy::log::LogPlugin {
                    level: bevy::log::Level::INFO,
                    filter: "wgpu=error".to_string(),
                    ..default()
                }),
        )
        .insert_resource(GazeConfig(policy))
        .configure_sets(
            Update,
            (WidgetSystemSet::Input, WidgetSystemSet::Visual).chain(),
        )
        .add_plugins(StartupPlugin)
        .add_plugins(VisualPlugin)
        .run();
}
