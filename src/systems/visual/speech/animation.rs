//! 吹き出しの表示遷移
//!
//! Hidden → Animating → Visible の一方向ステートマシン。
//! Animating でフェードイン＋上昇（0.7 秒）、その 50ms 後の Visible で
//! スケール 0.95 → 1.0（0.5 秒）が重なって走る。

use bevy::prelude::*;

use super::components::*;
use crate::constants::*;

fn ease_out_cubic(t: f32) -> f32 {
    1.0 - (1.0 - t).powi(3)
}

/// 吹き出しの位相遷移と描画更新のシステム
pub fn animate_speech_bubbles(
    time: Res<Time>,
    mut q_bubbles: Query<(
        &SpeechBubble,
        &mut BubbleAnimation,
        &mut Transform,
        &mut TextColor,
        Option<&Children>,
    )>,
    mut q_sprites: Query<(&mut Sprite, Option<&BubblePulse>), With<BubbleChrome>>,
) {
    let dt = time.delta();

    for (bubble, mut anim, mut transform, mut text_color, children) in q_bubbles.iter_mut() {
        match anim.phase {
            BubblePhase::Hidden => {
                anim.delay_timer.tick(dt);
                if anim.delay_timer.just_finished() {
                    anim.phase = BubblePhase::Animating;
                }
            }
            BubblePhase::Animating => {
                anim.fade_elapsed += dt.as_secs_f32();
                anim.stage_timer.tick(dt);
                if anim.stage_timer.just_finished() {
                    anim.phase = BubblePhase::Visible;
                }
            }
            BubblePhase::Visible => {
                anim.fade_elapsed += dt.as_secs_f32();
                anim.scale_elapsed += dt.as_secs_f32();
            }
        }

        // フェードイン＋上昇
        let fade = ease_out_cubic((anim.fade_elapsed / BUBBLE_FADE_DURATION).clamp(0.0, 1.0));
        transform.translation.y = bubble.anchor.y - BUBBLE_RISE_OFFSET * (1.0 - fade);
        text_color.0.set_alpha(fade * COLOR_BUBBLE_TEXT.alpha());

        if let Some(children) = children {
            for &child in children {
                if let Ok((mut sprite, pulse)) = q_sprites.get_mut(child) {
                    let alpha = if pulse.is_some() {
                        // リングは Visible 以降のみ、2秒周期で 1.0 ↔ 0.5 に明滅
                        match anim.phase {
                            BubblePhase::Visible => {
                                let wave = 0.75
                                    + 0.25
                                        * (time.elapsed_secs() * std::f32::consts::TAU
                                            / BUBBLE_PULSE_PERIOD)
                                            .cos();
                                BUBBLE_PULSE_ALPHA * wave
                            }
                            _ => 0.0,
                        }
                    } else {
                        fade
                    };
                    let mut color = sprite.color;
                    color.set_alpha(alpha);
                    sprite.color = color;
                }
            }
        }

        // スケール遷移
        let scale_progress =
            ease_out_cubic((anim.scale_elapsed / BUBBLE_SCALE_DURATION).clamp(0.0, 1.0));
        let scale = match anim.phase {
            BubblePhase::Visible => {
                BUBBLE_HIDDEN_SCALE + (1.0 - BUBBLE_HIDDEN_SCALE) * scale_progress
            }
            _ => BUBBLE_HIDDEN_SCALE,
        };
        transform.scale = Vec3::splat(scale);
    }
}
