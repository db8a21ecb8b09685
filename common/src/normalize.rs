//! min-max正規化
//!
//! 行列全体（未設定の0セルを含む）の最小値を0、最大値を255に線形写像する。
//! 全セルが同じ値の場合は0除算を避け、全セルを0にする。
//! 丸めは最近接偶数（127.5 → 128, 0.5 → 0）。

use crate::matrix::{CostMatrix, GrayMatrix};

/// 正規化後の上限値
pub const NORM_MAX: f64 = 255.0;

/// 退化行列（全セル同値）のときの出力値
pub const DEGENERATE_VALUE: u8 = 0;

pub fn normalize_min_max(matrix: &CostMatrix) -> GrayMatrix {
    let data = match matrix.min_max() {
        Some((lo, hi)) if hi > lo => {
            // 値域の幅がf64を超える場合は半分の値で計算する
            let half = if (hi - lo).is_finite() { 1.0 } else { 0.5 };
            let (lo, hi) = (lo * half, hi * half);
            let scale = NORM_MAX / (hi - lo);
            matrix
                .values()
                .iter()
                .map(|&v| ((v * half - lo) * scale).round_ties_even().clamp(0.0, NORM_MAX) as u8)
                .collect()
        }
        _ => vec![DEGENERATE_VALUE; matrix.values().len()],
    };

    GrayMatrix::from_parts(matrix.size(), data)
}

/// 全セルが同値かどうか
pub fn is_degenerate(matrix: &CostMatrix) -> bool {
    matrix.min_max().map_or(true, |(lo, hi)| hi <= lo)
}
