use bevy::prelude::*;
use rand::Rng;

use crate::constants::*;

/// 視線追従のポリシー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GazePolicy {
    /// 正規化距離に比例した直接マッピング（平滑化なし）
    Direct,
    /// 中心付近で増幅し、毎フレーム補間で追従する
    Amplified,
}

/// マスコットアバターのルートコンポーネント
#[derive(Component)]
pub struct MascotAvatar {
    pub policy: GazePolicy,
}

/// バッジ円盤のマーカー
#[derive(Component)]
pub struct AvatarBadge;

/// 目のコンポーネント。描画位置は自身の Transform が持つ
#[derive(Component)]
pub struct AvatarEye {
    /// バッジ中心から見た静止位置（256x256 論理座標）
    pub rest: Vec2,
}

/// まばたきの位相
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlinkPhase {
    /// 次のまばたきを待機中
    Waiting,
    /// 閉眼中
    Closing,
}

/// 自己再スケジュールするまばたきのタイマーチェーン。
/// アバターごとに所有し、despawn でチェーン全体が破棄される。
#[derive(Component)]
pub struct BlinkCycle {
    pub phase: BlinkPhase,
    pub timer: Timer,
}

impl BlinkCycle {
    pub fn new() -> Self {
        Self {
            phase: BlinkPhase::Waiting,
            timer: Timer::from_seconds(random_blink_delay(), TimerMode::Once),
        }
    }
}

/// [BLINK_DELAY_MIN, BLINK_DELAY_MAX) 秒の待機時間を引く
pub fn random_blink_delay() -> f32 {
    rand::thread_rng().gen_range(BLINK_DELAY_MIN..BLINK_DELAY_MAX)
}
