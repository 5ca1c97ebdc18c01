pub mod animation;
pub mod components;
pub mod spawn;

use bevy::prelude::*;

pub use components::{BubbleAnimation, BubblePhase, SpeechBubble};
pub use spawn::spawn_speech_bubble;

use crate::systems::WidgetSystemSet;

pub struct SpeechPlugin;

impl Plugin for SpeechPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            animation::animate_speech_bubbles.in_set(WidgetSystemSet::Visual),
        );
    }
}
