//! 読み込み → 正規化 → カラー化 → ハイライト の一連処理
//!
//! 2つの入力ファイルは正規化の前にすべて読み込む。

use crate::config::Config;
use crate::error::Result;
use crate::loader::{ensure_inputs_exist, load_highlights, load_scores, LoadedScores};
use crate::render::{gray_to_rgb, overlay_highlights};
use crate::summary::RenderSummary;
use costview_common::{is_degenerate, normalize_min_max, HighlightEntry};
use image::RgbImage;

/// 進捗ログの出力レベル
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    /// 進捗を出さない（JSON出力時など）
    Quiet,
    Normal,
    /// パスなどの詳細も出す
    Verbose,
}

impl Verbosity {
    pub fn from_flag(verbose: bool) -> Self {
        if verbose {
            Verbosity::Verbose
        } else {
            Verbosity::Normal
        }
    }

    fn step(self, msg: std::fmt::Arguments<'_>) {
        if self != Verbosity::Quiet {
            println!("{msg}");
        }
    }

    fn detail(self, msg: std::fmt::Arguments<'_>) {
        if self == Verbosity::Verbose {
            println!("  - {msg}");
        }
    }
}

/// 読み込み済みの入力
#[derive(Debug, Clone)]
pub struct Inputs {
    pub scores: LoadedScores,
    pub highlights: Vec<HighlightEntry>,
}

impl Inputs {
    pub fn summary(&self, highlights_applied: usize) -> RenderSummary {
        let matrix = &self.scores.matrix;
        RenderSummary {
            traj_size: matrix.size(),
            records: self.scores.records,
            populated: matrix.populated(),
            min_score: self.scores.min_score,
            max_score: self.scores.max_score,
            degenerate: is_degenerate(matrix),
            highlights: highlights_applied,
        }
    }
}

/// 描画結果
#[derive(Debug, Clone)]
pub struct Rendered {
    pub image: RgbImage,
    pub summary: RenderSummary,
}

/// 両方の入力ファイルを読み込む
pub fn load_inputs(config: &Config, log: Verbosity) -> Result<Inputs> {
    let scores_path = config.scores_path();
    let sim_places_path = config.sim_places_path();
    ensure_inputs_exist(&[&scores_path, &sim_places_path])?;

    log.step(format_args!("[1/4] スコアを読み込み中..."));
    log.detail(format_args!("{}", scores_path.display()));
    let scores = load_scores(&scores_path, config.traj_size)?;
    log.detail(format_args!(
        "最小スコア: {:?} / 最大スコア: {:?}",
        scores.min_score, scores.max_score
    ));
    log.step(format_args!(
        "✔ {}件のスコアを読み込み ({1}x{1})\n",
        scores.records, config.traj_size
    ));

    log.step(format_args!("[2/4] 類似地点ペアを読み込み中..."));
    log.detail(format_args!("{}", sim_places_path.display()));
    let highlights = load_highlights(&sim_places_path)?;
    log.step(format_args!("✔ {}件のペアを読み込み\n", highlights.len()));

    Ok(Inputs { scores, highlights })
}

/// 読み込み済みの入力から画像を作る
pub fn render_inputs(inputs: Inputs, config: &Config, log: Verbosity) -> Result<Rendered> {
    log.step(format_args!("[3/4] 正規化中..."));
    let gray = normalize_min_max(&inputs.scores.matrix);
    if is_degenerate(&inputs.scores.matrix) {
        log.detail(format_args!("全セルが同値のため全画素を0にしました"));
    }
    let mut image = gray_to_rgb(&gray);
    log.step(format_args!("✔ 正規化完了\n"));

    log.step(format_args!("[4/4] 類似地点ペアを描画中..."));
    let applied = overlay_highlights(&mut image, &inputs.highlights, config.highlight_color)?;
    log.step(format_args!("✔ {}画素をハイライト\n", applied));

    let summary = inputs.summary(applied);
    Ok(Rendered { image, summary })
}

/// 入力の読み込みから描画まで
pub fn render_cost_matrix(config: &Config, log: Verbosity) -> Result<Rendered> {
    let inputs = load_inputs(config, log)?;
    render_inputs(inputs, config, log)
}
