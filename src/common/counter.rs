//! 格子全体で発散しなかった点を数える

use clap::ValueEnum;
use rayon::prelude::*;

use super::error::Result;
use super::grid::Grid;
use super::mandelbrot::is_bounded;

/// 格子点の走査順
///
/// どの走査でも 0/1 の和なので結果は変わらない。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Traversal {
    /// 行ごとに左から右（基準実装）
    #[default]
    RowMajor,
    /// 列ごとに上から下
    ColumnMajor,
    /// Rayonで行単位に並列処理
    Parallel,
}

/// 符号付きの入力で格子を検証してからカウントする
pub fn compute(width: i64, height: i64, max_iter: i64) -> Result<u64> {
    let grid = Grid::from_signed(width, height, max_iter)?;
    Ok(count(&grid))
}

pub fn count(grid: &Grid) -> u64 {
    count_with(grid, Traversal::RowMajor)
}

pub fn count_with(grid: &Grid, traversal: Traversal) -> u64 {
    match traversal {
        Traversal::RowMajor => count_row_major(grid),
        Traversal::ColumnMajor => count_column_major(grid),
        Traversal::Parallel => count_parallel(grid),
    }
}

fn count_row(grid: &Grid, row: u32) -> u64 {
    (0..grid.width)
        .filter(|&col| is_bounded(grid.sample_point(row, col), grid.max_iter))
        .count() as u64
}

fn count_row_major(grid: &Grid) -> u64 {
    let mut count = 0;
    for row in 0..grid.height {
        count += count_row(grid, row);
    }
    count
}

fn count_column_major(grid: &Grid) -> u64 {
    let mut count = 0;
    for col in 0..grid.width {
        for row in 0..grid.height {
            if is_bounded(grid.sample_point(row, col), grid.max_iter) {
                count += 1;
            }
        }
    }
    count
}

fn count_parallel(grid: &Grid) -> u64 {
    (0..grid.height)
        .into_par_iter()
        .map(|row| count_row(grid, row))
        .sum()
}
