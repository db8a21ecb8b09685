//! Cost View Common Library
//!
//! コスト行列ビューアの型と純粋な処理（パース・正規化）

pub mod error;
pub mod matrix;
pub mod normalize;
pub mod record;

pub use error::{Error, Result};
pub use matrix::{CostMatrix, GrayMatrix};
pub use normalize::{is_degenerate, normalize_min_max};
pub use record::{
    highlight_records, parse_highlight_line, parse_score_line, score_records, HighlightEntry,
    ScoreEntry,
};
