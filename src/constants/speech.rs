//! 吹き出し（Speech Bubble）の定数

// ----- 表示タイミング -----
pub const SPEECH_DEFAULT_DELAY: f32 = 1.0;
pub const SPEECH_DEFAULT_MESSAGE: &str = "What are you working on today?";
/// フェード開始からスケール開始までの間隔
pub const BUBBLE_STAGE_DELAY: f32 = 0.05;

// ----- 遷移 -----
pub const BUBBLE_FADE_DURATION: f32 = 0.7;
pub const BUBBLE_SCALE_DURATION: f32 = 0.5;
/// 非表示時に下へずらしておくオフセット
pub const BUBBLE_RISE_OFFSET: f32 = 16.0;
pub const BUBBLE_HIDDEN_SCALE: f32 = 0.95;

// ----- 吹き出しサイズ -----
/// テキスト幅の概算: 1文字平均 8px
pub const BUBBLE_CHAR_WIDTH: f32 = 8.0;
pub const BUBBLE_MIN_TEXT_WIDTH: f32 = 32.0;
pub const BUBBLE_PADDING_X: f32 = 16.0;
pub const BUBBLE_PADDING_Y: f32 = 12.0;
pub const BUBBLE_BORDER_THICKNESS: f32 = 1.0;
pub const BUBBLE_TAIL_SIZE: f32 = 12.0;
pub const FONT_SIZE_BUBBLE: f32 = 14.0;

// ----- パルスリング -----
/// 表示完了後にうっすら明滅するリングの最大アルファ
pub const BUBBLE_PULSE_ALPHA: f32 = 0.3;
pub const BUBBLE_PULSE_PERIOD: f32 = 2.0;
pub const BUBBLE_PULSE_MARGIN: f32 = 4.0;
