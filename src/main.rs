//! マンデルブロ集合カウント (脱出時間法)
//!
//! 引数なしで 80x40 の格子・最大反復 100 回を計算し、発散しなかった点の数を
//! 標準出力に1行で出力する。ログは標準エラーへ（`RUST_LOG` で調整）。
//!
//! オプション:
//!   - `--width`, `--height`, `--max-iter`: 格子と反復回数（負の値はエラー）
//!   - `--traversal`: row-major / column-major / parallel
//!   - `--bench <RUNS>`: ウォームアップ後に RUNS 回計測して最速時間を表示

use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use mandelbrot_count::common::{
    bench::bench,
    constants::{DEFAULT_HEIGHT, DEFAULT_MAX_ITER, DEFAULT_WIDTH},
    counter::{count_with, Traversal},
    error::Result,
    grid::Grid,
};
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "mandelbrot-count", version, about = "マンデルブロ集合の格子点カウント")]
struct Args {
    /// 格子の幅
    #[arg(long, default_value_t = DEFAULT_WIDTH as i64, allow_negative_numbers = true)]
    width: i64,

    /// 格子の高さ
    #[arg(long, default_value_t = DEFAULT_HEIGHT as i64, allow_negative_numbers = true)]
    height: i64,

    /// 最大反復回数
    #[arg(long, default_value_t = DEFAULT_MAX_ITER as i64, allow_negative_numbers = true)]
    max_iter: i64,

    /// 走査順
    #[arg(long, value_enum, default_value_t = Traversal::RowMajor)]
    traversal: Traversal,

    /// ベンチマークモード（計測回数）
    #[arg(long, value_name = "RUNS")]
    bench: Option<u32>,
}

fn run(args: &Args) -> Result<u64> {
    let grid = Grid::from_signed(args.width, args.height, args.max_iter)?;

    if let Some(runs) = args.bench {
        let report = bench(&grid, args.traversal, runs)?;
        info!(
            "計測: best {:.2?} / mean {:.2?} ({}回, {:?})",
            report.best,
            report.mean(),
            report.runs,
            args.traversal
        );
        return Ok(report.count);
    }

    let start = Instant::now();
    let count = count_with(&grid, args.traversal);
    info!(
        "計算完了: {:.2?} [{}x{}, max_iter={}, {:?}]",
        start.elapsed(),
        grid.width,
        grid.height,
        grid.max_iter,
        args.traversal
    );
    Ok(count)
}

fn main() -> ExitCode {
    let _ = tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .try_init();

    let args = Args::parse();

    match run(&args) {
        Ok(count) => {
            println!("{}", count);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
