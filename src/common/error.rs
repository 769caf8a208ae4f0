//! エラー型

use thiserror::Error;

/// 入力検証・ベンチマークで発生するエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{name} must not be negative (got {value})")]
    Negative { name: &'static str, value: i64 },

    #[error("{name} does not fit in u32 (got {value})")]
    TooLarge { name: &'static str, value: i64 },

    #[error("benchmark needs at least one timed run")]
    NoRuns,

    #[error("count changed between runs: expected {expected}, got {actual}")]
    Nondeterministic { expected: u64, actual: u64 },
}

pub type Result<T> = std::result::Result<T, Error>;
