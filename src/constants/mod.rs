//! 定数のドメイン別分割
//!
//! 呼び出し側の `use crate::constants::*` 互換を維持するため、
//! 全定数を再 export している。

mod avatar;
mod render;
mod speech;

pub use avatar::*;
pub use render::*;
pub use speech::*;
