//! スタートアップ関連のプラグイン

use bevy::prelude::*;

use crate::constants::*;
use crate::systems::visual::avatar::spawn_mascot_avatar;
use crate::systems::visual::speech::spawn_speech_bubble;
use crate::GazeConfig;

pub struct StartupPlugin;

impl Plugin for StartupPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup);
    }
}

fn setup(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    gaze: Res<GazeConfig>,
) {
    commands.spawn(Camera2d);

    let avatar_pos = Vec2::new(0.0, -40.0);
    spawn_mascot_avatar(
        &mut commands,
        &mut meshes,
        &mut materials,
        avatar_pos,
        96.0,
        gaze.0,
    );

    // アバターの頭上に吹き出しを出す
    let bubble_anchor = avatar_pos + Vec2::new(0.0, 110.0);
    spawn_speech_bubble(
        &mut commands,
        SPEECH_DEFAULT_MESSAGE,
        SPEECH_DEFAULT_DELAY,
        bubble_anchor,
    );

    info!("mascot spawned (policy: {:?})", gaze.0);
}
