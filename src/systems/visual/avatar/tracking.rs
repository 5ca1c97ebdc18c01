//! カーソル追従の視線計算
//!
//! カーソル位置はウィンドウ座標系（y軸下向き）で扱い、目の Transform へ
//! 書き込む瞬間にだけ y を反転してワールド座標系（y軸上向き）に合わせる。

use bevy::prelude::*;

use super::components::*;
use crate::constants::*;
use crate::interface::CursorTracker;

/// ウィンドウ中心からカーソルまでの正規化距離 [0, 1]
pub fn normalized_cursor_distance(cursor: Vec2, viewport: Vec2) -> f32 {
    let center = viewport * 0.5;
    // 非退化ウィンドウなら半対角線は必ず正
    let max_distance = center.length();
    ((cursor - center).length() / max_distance).min(1.0)
}

/// 静止位置とカーソルから目標位置（256x256 論理座標）を計算する
pub fn eye_target(rest: Vec2, cursor: Vec2, viewport: Vec2, policy: GazePolicy) -> Vec2 {
    let center = viewport * 0.5;
    let normalized = normalized_cursor_distance(cursor, viewport);
    let to_cursor = cursor - center;
    let angle = to_cursor.y.atan2(to_cursor.x);

    let move_distance = match policy {
        GazePolicy::Direct => normalized * EYE_MAX_MOVEMENT_DIRECT,
        GazePolicy::Amplified => {
            // 中心に近いほど増幅（指数で減衰）
            let proximity = (1.0 - normalized).powi(EYE_PROXIMITY_EXPONENT);
            let adjusted = EYE_BASE_MOVEMENT * (EYE_AMPLIFY_MIN + proximity * EYE_AMPLIFY_RANGE);
            normalized * adjusted
        }
    };

    // ウィンドウ座標の角度をワールド座標へ（y反転）
    rest + Vec2::new(angle.cos() * move_distance, -angle.sin() * move_distance)
}

/// 残距離の一定割合を毎フレーム詰める補間の 1 ステップ
pub fn ease_toward(current: Vec2, target: Vec2, factor: f32) -> Vec2 {
    current + (target - current) * factor
}

/// 目の位置を更新するシステム。
/// カーソル未観測またはビューポート未計測の間は静止位置を目標とする。
pub fn eye_tracking_system(
    tracker: Res<CursorTracker>,
    q_avatars: Query<(&MascotAvatar, &Children)>,
    mut q_eyes: Query<(&AvatarEye, &mut Transform)>,
) {
    for (avatar, children) in q_avatars.iter() {
        for &child in children {
            let Ok((eye, mut transform)) = q_eyes.get_mut(child) else {
                continue;
            };

            let target = match tracker.position {
                Some(cursor) if tracker.is_ready() => {
                    eye_target(eye.rest, cursor, tracker.viewport, avatar.policy)
                }
                _ => eye.rest,
            };

            let next = match avatar.policy {
                GazePolicy::Direct => target,
                GazePolicy::Amplified => {
                    ease_toward(transform.translation.truncate(), target, EYE_EASE_FACTOR)
                }
            };
            transform.translation.x = next.x;
            transform.translation.y = next.y;
        }
    }
}
