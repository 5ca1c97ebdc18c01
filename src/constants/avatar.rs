//! マスコットアバター（バッジ＋目）の定数

use bevy::prelude::*;

// ----- バッジ形状（256x256 論理座標系）-----
pub const AVATAR_LOGICAL_SIZE: f32 = 256.0;
pub const AVATAR_BADGE_RADIUS: f32 = 128.0;
pub const AVATAR_EYE_RADIUS: f32 = 18.0;
/// バッジ中心から見た左右の目の静止位置
pub const AVATAR_EYE_REST_LEFT: Vec2 = Vec2::new(-26.0, 0.0);
pub const AVATAR_EYE_REST_RIGHT: Vec2 = Vec2::new(26.0, 0.0);

// ----- 視線追従 -----
/// Amplified ポリシーの基準移動量
pub const EYE_BASE_MOVEMENT: f32 = 240.0;
/// 中心付近で移動を増幅するための指数
pub const EYE_PROXIMITY_EXPONENT: i32 = 6;
/// 増幅係数の下限（画面端）と可変幅。中心付近で 0.3 + 0.9 = 1.2 倍
pub const EYE_AMPLIFY_MIN: f32 = 0.3;
pub const EYE_AMPLIFY_RANGE: f32 = 0.9;
/// Direct ポリシーの最大移動量
pub const EYE_MAX_MOVEMENT_DIRECT: f32 = 24.0;
/// 毎フレーム残距離の 15% を詰めるイージング係数
pub const EYE_EASE_FACTOR: f32 = 0.15;

// ----- まばたき -----
pub const BLINK_DELAY_MIN: f32 = 2.0;
pub const BLINK_DELAY_MAX: f32 = 5.0;
pub const BLINK_CLOSED_DURATION: f32 = 0.12;
/// 閉眼時の目の縦スケール
pub const BLINK_CLOSED_SCALE_Y: f32 = 0.1;
/// 閉じる方を速くして瞬きらしさを出す（毎秒レート）
pub const BLINK_CLOSE_RATE: f32 = 36.0;
pub const BLINK_OPEN_RATE: f32 = 25.0;
