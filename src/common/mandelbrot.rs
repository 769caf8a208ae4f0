//! マンデルブロ集合計算関数

use num_complex::Complex;

use super::constants::ESCAPE_RADIUS_SQR;

/// 脱出までの反復回数を計算
///
/// 各ステップで `z = z² + c` を更新した直後に `|z|² > 4.0` を判定する。
/// 戻り値 `k` が `max_iter` 未満なら (k+1) 回目の更新で発散した。
/// `max_iter` と等しければ発散しなかった（`max_iter == 0` なら常にこちら）。
#[inline]
pub fn escape_iter(c: Complex<f64>, max_iter: u32) -> u32 {
    let mut z = Complex::new(0.0, 0.0);
    let mut k = 0;

    while k < max_iter {
        z = z * z + c;
        if z.norm_sqr() > ESCAPE_RADIUS_SQR {
            break;
        }
        k += 1;
    }
    k
}

/// 最大反復回数内で発散しなかったか
#[inline]
pub fn is_bounded(c: Complex<f64>, max_iter: u32) -> bool {
    escape_iter(c, max_iter) == max_iter
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 展開形の漸化式（aa = a*a - b*b + x, bb = 2*a*b + y）
    fn escape_iter_expanded(x: f64, y: f64, max_iter: u32) -> u32 {
        let (mut a, mut b) = (0.0f64, 0.0f64);
        let mut k = 0;
        while k < max_iter {
            let aa = a * a - b * b + x;
            let bb = 2.0 * a * b + y;
            a = aa;
            b = bb;
            if a * a + b * b > 4.0 {
                break;
            }
            k += 1;
        }
        k
    }

    #[test]
    fn origin_never_escapes() {
        assert_eq!(escape_iter(Complex::new(0.0, 0.0), 1000), 1000);
        assert!(is_bounded(Complex::new(-1.0, 0.0), 1000));
    }

    #[test]
    fn far_point_escapes_on_first_step() {
        // z1 = c = 3 なので |z1|² = 9 > 4、k は 0 のまま
        assert_eq!(escape_iter(Complex::new(3.0, 0.0), 100), 0);
        assert!(!is_bounded(Complex::new(3.0, 0.0), 100));
    }

    #[test]
    fn threshold_is_strict() {
        // c = 2 → z1 = 2, |z1|² = 4 はちょうど閾値で発散扱いにならない
        // z2 = 6 で発散
        assert_eq!(escape_iter(Complex::new(2.0, 0.0), 10), 1);
    }

    #[test]
    fn zero_budget_counts_as_bounded() {
        assert_eq!(escape_iter(Complex::new(100.0, 100.0), 0), 0);
        assert!(is_bounded(Complex::new(100.0, 100.0), 0));
    }

    #[test]
    fn matches_expanded_recurrence() {
        for row in 0..40 {
            for col in 0..80 {
                let x = col as f64 / 40.0 - 1.5;
                let y = row as f64 / 20.0 - 1.0;
                assert_eq!(
                    escape_iter(Complex::new(x, y), 100),
                    escape_iter_expanded(x, y, 100),
                    "mismatch at ({row}, {col})"
                );
            }
        }
    }
}
