//! エラー型定義

use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record at line {line}: {reason} ({content:?})")]
    MalformedRecord {
        line: usize,
        content: String,
        reason: String,
    },

    #[error("Index out of range: ({row}, {col}) is outside a {size}x{size} matrix")]
    OutOfRange { row: i64, col: i64, size: usize },

    #[error("Index out of range at line {line}: ({row}, {col}) is outside a {size}x{size} matrix")]
    OutOfRangeAtLine {
        line: usize,
        row: i64,
        col: i64,
        size: usize,
    },

    #[error("Index out of range at line {line}: {token}")]
    IndexOverflow { line: usize, token: String },

    #[error("Matrix too large: {size}x{size}")]
    TooLarge { size: usize },
}

impl Error {
    /// 行番号を付与する（OutOfRange以外はそのまま返す）
    pub fn at_line(self, line: usize) -> Self {
        match self {
            Error::OutOfRange { row, col, size } => Error::OutOfRangeAtLine { line, row, col, size },
            other => other,
        }
    }

    /// インデックス範囲外エラーかどうか
    pub fn is_out_of_range(&self) -> bool {
        matches!(
            self,
            Error::OutOfRange { .. } | Error::OutOfRangeAtLine { .. } | Error::IndexOverflow { .. }
        )
    }
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;
