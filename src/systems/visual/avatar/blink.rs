//! まばたきのタイマーチェーン
//!
//! Waiting(ランダム 2〜5 秒) → Closing(0.12 秒) → Waiting(再抽選) を
//! ワンショットタイマーの連鎖で回す。チェーンの状態はアバターの
//! コンポーネントに閉じており、despawn で未発火のタイマーごと消える。

use bevy::prelude::*;

use super::components::*;
use crate::constants::*;

/// まばたき位相を進めるシステム
pub fn blink_cycle_system(time: Res<Time>, mut q_blinks: Query<&mut BlinkCycle>) {
    for mut blink in q_blinks.iter_mut() {
        blink.timer.tick(time.delta());
        if !blink.timer.just_finished() {
            continue;
        }

        match blink.phase {
            BlinkPhase::Waiting => {
                blink.phase = BlinkPhase::Closing;
                blink.timer = Timer::from_seconds(BLINK_CLOSED_DURATION, TimerMode::Once);
            }
            BlinkPhase::Closing => {
                blink.phase = BlinkPhase::Waiting;
                blink.timer = Timer::from_seconds(random_blink_delay(), TimerMode::Once);
            }
        }
    }
}

/// 閉眼状態に応じて目の縦スケールを補間するシステム。
/// 閉じる側のレートを上げ、開く側より速く落とす。
pub fn eyelid_system(
    time: Res<Time>,
    q_avatars: Query<(&BlinkCycle, &Children)>,
    mut q_eyes: Query<&mut Transform, With<AvatarEye>>,
) {
    let dt = time.delta_secs();

    for (blink, children) in q_avatars.iter() {
        let (target, rate) = match blink.phase {
            BlinkPhase::Closing => (BLINK_CLOSED_SCALE_Y, BLINK_CLOSE_RATE),
            BlinkPhase::Waiting => (1.0, BLINK_OPEN_RATE),
        };
        let t = (rate * dt).min(1.0);

        for &child in children {
            if let Ok(mut transform) = q_eyes.get_mut(child) {
                transform.scale.y += (target - transform.scale.y) * t;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn advance(app: &mut App, seconds: f32) {
        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(seconds));
        app.update();
    }

    fn blink_app() -> App {
        let mut app = App::new();
        app.init_resource::<Time>();
        app.add_systems(Update, (blink_cycle_system, eyelid_system).chain());
        app
    }

    #[test]
    fn closing_phase_lasts_fixed_duration() {
        let mut app = blink_app();
        let avatar = app
            .world_mut()
            .spawn(BlinkCycle {
                phase: BlinkPhase::Waiting,
                timer: Timer::from_seconds(2.0, TimerMode::Once),
            })
            .id();

        advance(&mut app, 1.9);
        assert_eq!(
            app.world().get::<BlinkCycle>(avatar).unwrap().phase,
            BlinkPhase::Waiting
        );

        advance(&mut app, 0.1);
        assert_eq!(
            app.world().get::<BlinkCycle>(avatar).unwrap().phase,
            BlinkPhase::Closing
        );

        // 閉眼時間を過ぎると開眼し、次回が再スケジュールされる
        advance(&mut app, BLINK_CLOSED_DURATION);
        let blink = app.world().get::<BlinkCycle>(avatar).unwrap();
        assert_eq!(blink.phase, BlinkPhase::Waiting);
        let next = blink.timer.duration().as_secs_f32();
        assert!(next >= BLINK_DELAY_MIN && next < BLINK_DELAY_MAX);
    }

    #[test]
    fn eyelid_closes_and_reopens() {
        let mut app = blink_app();
        let eye = app
            .world_mut()
            .spawn((
                AvatarEye {
                    rest: AVATAR_EYE_REST_LEFT,
                },
                Transform::from_translation(AVATAR_EYE_REST_LEFT.extend(Z_AVATAR_EYE)),
            ))
            .id();
        app.world_mut()
            .spawn(BlinkCycle {
                phase: BlinkPhase::Closing,
                timer: Timer::from_seconds(BLINK_CLOSED_DURATION, TimerMode::Once),
            })
            .add_child(eye);

        // 閉眼中は縦スケールが閉眼値へ向かって単調に落ちる
        let mut prev = 1.0;
        for _ in 0..4 {
            advance(&mut app, 0.016);
            let scale_y = app.world().get::<Transform>(eye).unwrap().scale.y;
            assert!(scale_y < prev);
            assert!(scale_y >= BLINK_CLOSED_SCALE_Y);
            prev = scale_y;
        }

        // 開眼後は 1.0 へ戻る
        advance(&mut app, BLINK_CLOSED_DURATION);
        for _ in 0..60 {
            advance(&mut app, 0.016);
        }
        let scale_y = app.world().get::<Transform>(eye).unwrap().scale.y;
        assert!((scale_y - 1.0).abs() < 0.05);
    }

    #[test]
    fn despawn_cancels_pending_chain() {
        let mut app = blink_app();
        let avatar = app
            .world_mut()
            .spawn(BlinkCycle {
                phase: BlinkPhase::Waiting,
                timer: Timer::from_seconds(2.0, TimerMode::Once),
            })
            .id();

        app.world_mut().entity_mut(avatar).despawn();
        advance(&mut app, 10.0);

        let mut query = app.world_mut().query::<&BlinkCycle>();
        assert_eq!(query.iter(app.world()).count(), 0);
    }
}
