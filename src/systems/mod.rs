pub mod visual;

use bevy::prelude::*;

/// ウィジェットシステムの実行順序を制御するセット
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum WidgetSystemSet {
    /// カーソル位置の取り込み
    Input,
    /// 目・まばたき・吹き出しの描画更新
    Visual,
}
