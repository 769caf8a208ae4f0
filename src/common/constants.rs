//! 共通定数

/// ベンチマーク格子の幅
pub const DEFAULT_WIDTH: u32 = 80;
/// ベンチマーク格子の高さ
pub const DEFAULT_HEIGHT: u32 = 40;

/// 最大反復回数
pub const DEFAULT_MAX_ITER: u32 = 100;

/// 発散判定の閾値（|z|² > 4.0、つまり |z| > 2）
pub const ESCAPE_RADIUS_SQR: f64 = 4.0;

/// 格子 → 複素平面の平行移動量
pub const PLANE_X_OFFSET: f64 = 1.5;
pub const PLANE_Y_OFFSET: f64 = 1.0;

/// ベンチマークモードの既定の計測回数
pub const DEFAULT_BENCH_RUNS: u32 = 5;
