pub mod blink;
pub mod components;
pub mod spawn;
pub mod tracking;

use bevy::prelude::*;

pub use components::{AvatarEye, BlinkCycle, GazePolicy, MascotAvatar};
pub use spawn::spawn_mascot_avatar;

use crate::systems::WidgetSystemSet;

pub struct AvatarPlugin;

impl Plugin for AvatarPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                tracking::eye_tracking_system,
                blink::blink_cycle_system,
                blink::eyelid_system,
            )
                .chain()
                .in_set(WidgetSystemSet::Visual),
        );
    }
}
