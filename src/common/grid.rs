//! 格子パラメータと格子点 → 複素平面の写像

use num_complex::Complex;

use super::constants::{
    DEFAULT_HEIGHT, DEFAULT_MAX_ITER, DEFAULT_WIDTH, PLANE_X_OFFSET, PLANE_Y_OFFSET,
};
use super::error::{Error, Result};

/// 1回の計算で使う格子（実行中は不変）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Grid {
    pub width: u32,
    pub height: u32,
    pub max_iter: u32,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT, DEFAULT_MAX_ITER)
    }
}

impl Grid {
    pub fn new(width: u32, height: u32, max_iter: u32) -> Self {
        Self {
            width,
            height,
            max_iter,
        }
    }

    /// 符号付きの入力から格子を作る
    ///
    /// 0 は空の格子・反復なしとして受け付け、負の値は拒否する。
    pub fn from_signed(width: i64, height: i64, max_iter: i64) -> Result<Self> {
        Ok(Self::new(
            checked_dim("width", width)?,
            checked_dim("height", height)?,
            checked_dim("max_iter", max_iter)?,
        ))
    }

    /// 格子点の総数（カウントの上限）
    pub fn points(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// 格子点 (row, col) を複素平面上の点 c に変換
    ///
    /// `x = col / (w/2) - 1.5`, `y = row / (h/2) - 1.0`。除算は必ず浮動小数点で行う。
    #[inline]
    pub fn sample_point(&self, row: u32, col: u32) -> Complex<f64> {
        let half_w = self.width as f64 / 2.0;
        let half_h = self.height as f64 / 2.0;
        Complex::new(
            col as f64 / half_w - PLANE_X_OFFSET,
            row as f64 / half_h - PLANE_Y_OFFSET,
        )
    }
}

fn checked_dim(name: &'static str, value: i64) -> Result<u32> {
    if value < 0 {
        return Err(Error::Negative { name, value });
    }
    u32::try_from(value).map_err(|_| Error::TooLarge { name, value })
}
