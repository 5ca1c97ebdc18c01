//! ビジュアル関連のプラグイン

use bevy::prelude::*;

use crate::interface::cursor::{track_cursor_system, CursorTracker};
use crate::systems::visual::avatar::AvatarPlugin;
use crate::systems::visual::speech::SpeechPlugin;
use crate::systems::WidgetSystemSet;

pub struct VisualPlugin;

impl Plugin for VisualPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CursorTracker>();
        app.add_systems(
            Update,
            track_cursor_system.in_set(WidgetSystemSet::Input),
        );
        app.add_plugins(AvatarPlugin);
        app.add_plugins(SpeechPlugin);
    }
}
