//! Z軸レイヤー管理と配色

use bevy::prelude::Color;

/// アバターのルートレイヤー
pub const Z_AVATAR: f32 = 1.0;
/// バッジ円盤（ルートからの相対）
pub const Z_AVATAR_BADGE: f32 = 0.0;
/// 目の円盤（バッジの上）
pub const Z_AVATAR_EYE: f32 = 0.1;
/// 吹き出しのルートレイヤー
pub const Z_SPEECH_BUBBLE: f32 = 2.0;
/// 吹き出しのパルスリング（最背面）
pub const Z_BUBBLE_PULSE: f32 = -0.01;
/// 吹き出し枠線（ルートからの相対）
pub const Z_BUBBLE_BORDER: f32 = 0.0;
/// 吹き出し本体パネル
pub const Z_BUBBLE_PANEL: f32 = 0.01;
/// 吹き出しテキスト
pub const Z_BUBBLE_TEXT: f32 = 0.02;

/// バッジの地色（チャット UI の muted トーンに合わせる）
pub const COLOR_AVATAR_BADGE: Color = Color::srgb(0.22, 0.23, 0.27);
pub const COLOR_AVATAR_EYE: Color = Color::WHITE;
pub const COLOR_BUBBLE_BORDER: Color = Color::srgba(0.45, 0.46, 0.50, 1.0);
pub const COLOR_BUBBLE_PANEL: Color = Color::srgba(0.10, 0.10, 0.13, 1.0);
pub const COLOR_BUBBLE_TEXT: Color = Color::srgba(0.72, 0.73, 0.76, 1.0);
