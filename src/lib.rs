//! マンデルブロ集合の脱出時間法による格子点カウント
//!
//! 固定サイズの格子を複素平面へ写し、`z ← z² + c` を最大反復回数まで回して
//! 発散しなかった点の数を数える。演算スループットのマイクロベンチマーク用。

pub mod common;

pub use common::counter::{compute, count, count_with, Traversal};
pub use common::error::{Error, Result};
pub use common::grid::Grid;
