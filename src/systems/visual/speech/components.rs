use bevy::prelude::*;

use crate::constants::*;

/// 吹き出しのルートコンポーネント
#[derive(Component)]
pub struct SpeechBubble {
    /// 表示完了時のアンカー位置（ワールド座標）
    pub anchor: Vec2,
}

/// 表示遷移の位相。一方向にのみ進み、巻き戻らない
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BubblePhase {
    /// 遅延タイマー待ち
    Hidden,
    /// フェード・上昇の遷移中
    Animating,
    /// スケール遷移も開始済み
    Visible,
}

/// 吹き出しの遷移状態
#[derive(Component)]
pub struct BubbleAnimation {
    pub phase: BubblePhase,
    /// Hidden → Animating の遅延
    pub delay_timer: Timer,
    /// Animating → Visible の間隔（50ms）
    pub stage_timer: Timer,
    /// フェード・上昇遷移の経過時間
    pub fade_elapsed: f32,
    /// スケール遷移の経過時間
    pub scale_elapsed: f32,
}

impl BubbleAnimation {
    pub fn new(delay: f32) -> Self {
        Self {
            phase: BubblePhase::Hidden,
            delay_timer: Timer::from_seconds(delay, TimerMode::Once),
            stage_timer: Timer::from_seconds(BUBBLE_STAGE_DELAY, TimerMode::Once),
            fade_elapsed: 0.0,
            scale_elapsed: 0.0,
        }
    }
}

/// 吹き出しの枠線・パネル・しっぽ用マーカー
#[derive(Component)]
pub struct BubbleChrome;

/// 表示完了後に明滅するパルスリングのマーカー
#[derive(Component)]
pub struct BubblePulse;
