//! グローバルなカーソル位置の購読
//!
//! ウィンドウ座標系（左上原点・y軸下向き）での最新カーソル位置と
//! ビューポートサイズを 1 箇所に集約する。最初の CursorMoved を
//! 観測するまで `position` は None のまま（タッチ環境では永続的に None）。

use bevy::prelude::*;
use bevy::window::{CursorMoved, PrimaryWindow};

#[derive(Resource, Default)]
pub struct CursorTracker {
    /// 最後に観測したカーソル位置（ウィンドウピクセル座標）
    pub position: Option<Vec2>,
    /// 現在のビューポートサイズ
    pub viewport: Vec2,
}

impl CursorTracker {
    /// ビューポート計測が済み、視線計算が可能か
    pub fn is_ready(&self) -> bool {
        self.position.is_some() && self.viewport.x > 0.0 && self.viewport.y > 0.0
    }
}

/// カーソル移動メッセージとウィンドウサイズを毎フレーム取り込むシステム
pub fn track_cursor_system(
    mut tracker: ResMut<CursorTracker>,
    mut cursor_moved: MessageReader<CursorMoved>,
    q_window: Query<&Window, With<PrimaryWindow>>,
) {
    if let Ok(window) = q_window.single() {
        tracker.viewport = Vec2::new(window.width(), window.height());
    }

    // 同一フレーム内に複数イベントがあれば最後のものだけを採用する
    if let Some(moved) = cursor_moved.read().last() {
        tracker.position = Some(moved.position);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tracker_starts_unobserved() {
        let tracker = CursorTracker::default();
        assert!(tracker.position.is_none());
        assert!(!tracker.is_ready());
    }

    #[test]
    fn tracker_ready_needs_both_measurements() {
        let mut tracker = CursorTracker {
            position: Some(Vec2::new(10.0, 10.0)),
            viewport: Vec2::ZERO,
        };
        assert!(!tracker.is_ready());

        tracker.viewport = Vec2::new(960.0, 640.0);
        assert!(tracker.is_ready());
    }

    #[test]
    fn latest_cursor_message_wins() {
        let mut app = App::new();
        app.init_resource::<CursorTracker>();
        app.add_message::<CursorMoved>();
        app.add_systems(Update, track_cursor_system);

        let window = app.world_mut().spawn_empty().id();
        app.world_mut().write_message(CursorMoved {
            window,
            position: Vec2::new(100.0, 100.0),
            delta: None,
        });
        app.world_mut().write_message(CursorMoved {
            window,
            position: Vec2::new(300.0, 200.0),
            delta: None,
        });
        app.update();

        let tracker = app.world().resource::<CursorTracker>();
        assert_eq!(tracker.position, Some(Vec2::new(300.0, 200.0)));
    }
}
