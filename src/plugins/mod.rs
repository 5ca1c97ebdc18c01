//! プラグインモジュールのエントリポイント

pub mod startup;
pub mod visual;

pub use startup::StartupPlugin;
pub use visual::VisualPlugin;
