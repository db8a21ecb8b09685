use serde::Serialize;
use std::fmt;

use crate::error::Result;

/// 読み込み・描画結果の要約
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderSummary {
    pub traj_size: usize,
    /// scoresのレコード数
    pub records: usize,
    /// 0以外の値を持つセル数
    pub populated: usize,
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
    /// 全セルが同値（正規化結果が一定）
    pub degenerate: bool,
    pub highlights: usize,
}

impl RenderSummary {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

fn fmt_score(v: Option<f64>) -> String {
    v.map_or_else(|| "-".to_string(), |v| format!("{v}"))
}

impl fmt::Display for RenderSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  行列サイズ: {0}x{0}", self.traj_size)?;
        writeln!(f, "  スコア件数: {}", self.records)?;
        writeln!(f, "  非ゼロセル: {}", self.populated)?;
        writeln!(
            f,
            "  スコア範囲: {} .. {}",
            fmt_score(self.min_score),
            fmt_score(self.max_score)
        )?;
        if self.degenerate {
            writeln!(f, "  ※ 全セルが同値のため正規化結果は一定")?;
        }
        write!(f, "  類似地点ペア: {}", self.highlights)
    }
}
