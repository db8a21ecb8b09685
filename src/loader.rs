use crate::error::{CostViewError, Result};
use costview_common::{highlight_records, score_records, CostMatrix, HighlightEntry};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// scoresファイルの読み込み結果
#[derive(Debug, Clone)]
pub struct LoadedScores {
    pub matrix: CostMatrix,
    /// 読み込んだレコード数
    pub records: usize,
    /// 読み込んだスコアの最小値（レコードがなければNone）
    pub min_score: Option<f64>,
    pub max_score: Option<f64>,
}

/// 入力ファイルの存在確認（パース前にまとめて行う）
pub fn ensure_inputs_exist(paths: &[&Path]) -> Result<()> {
    for path in paths {
        if !path.is_file() {
            return Err(CostViewError::FileNotFound(path.display().to_string()));
        }
    }
    Ok(())
}

fn open(path: &Path) -> Result<BufReader<File>> {
    let file = File::open(path).map_err(|e| match e.kind() {
        std::io::ErrorKind::NotFound => CostViewError::FileNotFound(path.display().to_string()),
        _ => CostViewError::Io(e),
    })?;
    Ok(BufReader::new(file))
}

/// scoresファイルを読み込んで traj_size×traj_size の行列を作る
///
/// 同じ座標が複数回出てきた場合は後の行が優先される。
pub fn load_scores(path: &Path, traj_size: usize) -> Result<LoadedScores> {
    let reader = open(path)?;
    let mut matrix = CostMatrix::try_new(traj_size)
        .map_err(|e| CostViewError::Config(format!("traj_size={traj_size}: {e}")))?;
    let mut records = 0;
    let mut min_score: Option<f64> = None;
    let mut max_score: Option<f64> = None;

    for record in score_records(reader) {
        let (line, entry) = record.map_err(|e| CostViewError::record(path, e))?;
        matrix
            .set(entry.row, entry.col, entry.score)
            .map_err(|e| CostViewError::record(path, e.at_line(line)))?;

        records += 1;
        min_score = Some(min_score.map_or(entry.score, |m| m.min(entry.score)));
        max_score = Some(max_score.map_or(entry.score, |m| m.max(entry.score)));
    }

    Ok(LoadedScores {
        matrix,
        records,
        min_score,
        max_score,
    })
}

/// simPlacesファイルを読み込む
///
/// 範囲チェックは描画時（画像サイズ確定後）に行う。
pub fn load_highlights(path: &Path) -> Result<Vec<HighlightEntry>> {
    let reader = open(path)?;
    highlight_records(reader)
        .map(|record| {
            record
                .map(|(_, entry)| entry)
                .map_err(|e| CostViewError::record(path, e))
        })
        .collect()
}
