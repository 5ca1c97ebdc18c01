use bevy::prelude::*;

use super::components::*;
use crate::constants::*;

/// 吹き出しをスポーンする。`delay` 秒後にフェードインが始まり、
/// その 50ms 後にスケール遷移が始まる。表示までは透明のまま。
pub fn spawn_speech_bubble(
    commands: &mut Commands,
    message: &str,
    delay: f32,
    anchor: Vec2,
) -> Entity {
    // テキスト長に応じたサイズ計算 (概算: 1文字平均 8px + 左右余白)
    let text_width =
        (message.chars().count() as f32 * BUBBLE_CHAR_WIDTH).max(BUBBLE_MIN_TEXT_WIDTH);
    let panel_size = Vec2::new(
        text_width + BUBBLE_PADDING_X * 2.0,
        FONT_SIZE_BUBBLE + BUBBLE_PADDING_Y * 2.0,
    );
    let border_size = panel_size + Vec2::splat(BUBBLE_BORDER_THICKNESS * 2.0);

    let pulse_size = border_size + Vec2::splat(BUBBLE_PULSE_MARGIN * 2.0);

    commands
        .spawn((
            SpeechBubble { anchor },
            BubbleAnimation::new(delay),
            Text2d::new(message),
            TextFont {
                font_size: FONT_SIZE_BUBBLE,
                ..default()
            },
            TextColor(COLOR_BUBBLE_TEXT.with_alpha(0.0)),
            TextLayout::new_with_justify(Justify::Center),
            // 非表示状態: 下にオフセットし縮小しておく
            Transform::from_xyz(anchor.x, anchor.y - BUBBLE_RISE_OFFSET, Z_SPEECH_BUBBLE)
                .with_scale(Vec3::splat(BUBBLE_HIDDEN_SCALE)),
        ))
        .with_children(|parent| {
            // パルスリング（Visible 以降にうっすら明滅する）
            parent.spawn((
                BubbleChrome,
                BubblePulse,
                Sprite {
                    color: COLOR_BUBBLE_BORDER.with_alpha(0.0),
                    custom_size: Some(pulse_size),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, Z_BUBBLE_PULSE - Z_BUBBLE_TEXT),
            ));
            // 枠線（一回り大きいパネルを背面に敷く）
            parent.spawn((
                BubbleChrome,
                Sprite {
                    color: COLOR_BUBBLE_BORDER.with_alpha(0.0),
                    custom_size: Some(border_size),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, Z_BUBBLE_BORDER - Z_BUBBLE_TEXT),
            ));
            parent.spawn((
                BubbleChrome,
                Sprite {
                    color: COLOR_BUBBLE_PANEL.with_alpha(0.0),
                    custom_size: Some(panel_size),
                    ..default()
                },
                Transform::from_xyz(0.0, 0.0, Z_BUBBLE_PANEL - Z_BUBBLE_TEXT),
            ));
            // 下向きのしっぽ（45度回転した正方形の下半分を覗かせる）
            parent.spawn((
                BubbleChrome,
                Sprite {
                    color: COLOR_BUBBLE_BORDER.with_alpha(0.0),
                    custom_size: Some(Vec2::splat(BUBBLE_TAIL_SIZE)),
                    ..default()
                },
                Transform::from_xyz(
                    0.0,
                    -panel_size.y * 0.5,
                    Z_BUBBLE_BORDER - Z_BUBBLE_TEXT,
                )
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
            ));
            // しっぽの内側（パネル色でひと回り小さく重ねる）
            parent.spawn((
                BubbleChrome,
                Sprite {
                    color: COLOR_BUBBLE_PANEL.with_alpha(0.0),
                    custom_size: Some(Vec2::splat(BUBBLE_TAIL_SIZE - BUBBLE_BORDER_THICKNESS * 2.0)),
                    ..default()
                },
                Transform::from_xyz(
                    0.0,
                    -panel_size.y * 0.5 + BUBBLE_BORDER_THICKNESS,
                    Z_BUBBLE_PANEL - Z_BUBBLE_TEXT,
                )
                .with_rotation(Quat::from_rotation_z(std::f32::consts::FRAC_PI_4)),
            ));
        })
        .id()
}
