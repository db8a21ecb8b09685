//! コスト行列の型定義
//!
//! - CostMatrix: スコアを保持する正方行列（f64、行優先）
//! - GrayMatrix: 正規化後の8bitグレースケール行列

use crate::error::{Error, Result};

/// 軌跡同士のスコアを保持する正方行列
///
/// 次元は設定値で決まり、入力から推定しない。
/// 全セルは0.0で初期化される。
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    size: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    pub fn new(size: usize) -> Self {
        Self {
            size,
            data: vec![0.0; size * size],
        }
    }

    /// 確保できない大きさならエラーを返す（abortしない）
    pub fn try_new(size: usize) -> Result<Self> {
        let cells = size.checked_mul(size).ok_or(Error::TooLarge { size })?;
        let mut data = Vec::new();
        data.try_reserve_exact(cells)
            .map_err(|_| Error::TooLarge { size })?;
        data.resize(cells, 0.0);
        Ok(Self { size, data })
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<f64> {
        self.index(row as i64, col as i64).ok().map(|i| self.data[i])
    }

    /// セルに値を書き込む（同じ座標は後勝ち）
    pub fn set(&mut self, row: i64, col: i64, value: f64) -> Result<()> {
        let i = self.index(row, col)?;
        self.data[i] = value;
        Ok(())
    }

    /// 全セルの最小値と最大値（空行列ならNone）
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data.iter().fold(None, |acc, &v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
    }

    /// 0以外の値を持つセル数
    pub fn populated(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0.0).count()
    }

    pub fn values(&self) -> &[f64] {
        &self.data
    }

    fn index(&self, row: i64, col: i64) -> Result<usize> {
        let size = self.size as i64;
        if row < 0 || col < 0 || row >= size || col >= size {
            return Err(Error::OutOfRange {
                row,
                col,
                size: self.size,
            });
        }
        Ok(row as usize * self.size + col as usize)
    }
}

/// 正規化済みグレースケール行列
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayMatrix {
    size: usize,
    data: Vec<u8>,
}

impl GrayMatrix {
    /// 行優先のバッファから作成（長さが size*size でなければNone）
    pub fn from_vec(size: usize, data: Vec<u8>) -> Option<Self> {
        (data.len() == size * size).then_some(Self { size, data })
    }

    /// 呼び出し側で長さを保証する場合のみ使用
    pub(crate) fn from_parts(size: usize, data: Vec<u8>) -> Self {
        debug_assert_eq!(data.len(), size * size);
        Self { size, data }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(self.data[row * self.size + col])
    }

    pub fn as_slice(&self) -> &[u8] {
        &self.data
    }
}
