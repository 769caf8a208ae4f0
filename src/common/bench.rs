//! ウォームアップ + ベスト・オブ・N の計測

use std::time::{Duration, Instant};

use tracing::debug;

use super::counter::{count_with, Traversal};
use super::error::{Error, Result};
use super::grid::Grid;

/// 計測結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BenchReport {
    pub count: u64,
    pub runs: u32,
    /// 最速の1回
    pub best: Duration,
    /// 計測した全回の合計（ウォームアップを除く）
    pub total: Duration,
}

impl BenchReport {
    pub fn mean(&self) -> Duration {
        self.total / self.runs
    }
}

/// 1回ウォームアップしてから `runs` 回計測する
///
/// 毎回同じカウントになることも確認する。
pub fn bench(grid: &Grid, traversal: Traversal, runs: u32) -> Result<BenchReport> {
    if runs == 0 {
        return Err(Error::NoRuns);
    }

    let expected = count_with(grid, traversal);
    debug!(count = expected, "ウォームアップ完了");

    let mut best = Duration::MAX;
    let mut total = Duration::ZERO;

    for run in 0..runs {
        let start = Instant::now();
        let actual = count_with(grid, traversal);
        let elapsed = start.elapsed();

        if actual != expected {
            return Err(Error::Nondeterministic { expected, actual });
        }

        debug!(run, ?elapsed, "計測");
        best = best.min(elapsed);
        total += elapsed;
    }

    Ok(BenchReport {
        count: expected,
        runs,
        best,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reports_count_and_timings() {
        let report = bench(&Grid::default(), Traversal::RowMajor, 3).unwrap();
        assert_eq!(report.count, 1240);
        assert_eq!(report.runs, 3);
        assert!(report.best <= report.total);
        assert!(report.best <= report.mean());
    }

    #[test]
    fn zero_runs_is_rejected() {
        assert_eq!(bench(&Grid::default(), Traversal::Parallel, 0), Err(Error::NoRuns));
    }
}
