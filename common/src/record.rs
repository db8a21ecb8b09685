//! テキストレコードパーサー
//!
//! 2種類の空白区切りファイルを1行ずつ読む:
//! - scores: `row col score`（4列目以降は無視）
//! - simPlaces: `row col [ignored...]`
//!
//! 空行を含め、不正な行は即座にエラーとして返す（スキップしない）。
//! 末尾の改行は余分な行を生まない。

use std::io::BufRead;
use std::num::IntErrorKind;

use crate::error::{Error, Result};

/// scoresファイルの1レコード
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreEntry {
    pub row: i64,
    pub col: i64,
    pub score: f64,
}

/// simPlacesファイルの1レコード
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightEntry {
    pub row: i64,
    pub col: i64,
}

fn malformed(line: usize, content: &str, reason: impl Into<String>) -> Error {
    Error::MalformedRecord {
        line,
        content: content.to_string(),
        reason: reason.into(),
    }
}

fn parse_index(token: &str, what: &str, line: usize, content: &str) -> Result<i64> {
    token.parse::<i64>().map_err(|e| match e.kind() {
        // 整数としては正しいが桁あふれ: どの行列でも範囲外
        IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => Error::IndexOverflow {
            line,
            token: token.to_string(),
        },
        _ => malformed(line, content, format!("{what} is not an integer: {token}")),
    })
}

/// scores行をパース
///
/// # Arguments
/// * `line` - 1始まりの行番号（エラー表示用）
/// * `content` - 行の内容
///
/// # Examples
/// ```
/// use costview_common::parse_score_line;
///
/// let entry = parse_score_line(1, "3  1 0.25").unwrap();
/// assert_eq!((entry.row, entry.col, entry.score), (3, 1, 0.25));
/// ```
pub fn parse_score_line(line: usize, content: &str) -> Result<ScoreEntry> {
    let mut tokens = content.split_whitespace();
    let (Some(row), Some(col), Some(score)) = (tokens.next(), tokens.next(), tokens.next()) else {
        return Err(malformed(line, content, "expected `row col score`"));
    };

    let row = parse_index(row, "row", line, content)?;
    let col = parse_index(col, "col", line, content)?;
    let score = score
        .parse::<f64>()
        .map_err(|_| malformed(line, content, format!("score is not a number: {score}")))?;
    if !score.is_finite() {
        return Err(malformed(line, content, "score is not finite"));
    }

    Ok(ScoreEntry { row, col, score })
}

/// simPlaces行をパース
pub fn parse_highlight_line(line: usize, content: &str) -> Result<HighlightEntry> {
    let mut tokens = content.split_whitespace();
    let (Some(row), Some(col)) = (tokens.next(), tokens.next()) else {
        return Err(malformed(line, content, "expected `row col`"));
    };

    Ok(HighlightEntry {
        row: parse_index(row, "row", line, content)?,
        col: parse_index(col, "col", line, content)?,
    })
}

/// 行ごとにパースするイテレータ
///
/// `Item = (行番号, パース結果)`。IOエラー・パースエラーは一度返した時点で終了する。
pub struct Records<R, T> {
    lines: std::io::Lines<R>,
    line_no: usize,
    parse: fn(usize, &str) -> Result<T>,
    failed: bool,
}

impl<R: BufRead, T> Records<R, T> {
    fn new(reader: R, parse: fn(usize, &str) -> Result<T>) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
            parse,
            failed: false,
        }
    }
}

impl<R: BufRead, T> Iterator for Records<R, T> {
    type Item = Result<(usize, T)>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let content = match self.lines.next()? {
            Ok(content) => content,
            Err(e) => {
                self.failed = true;
                return Some(Err(e.into()));
            }
        };
        self.line_no += 1;
        let parsed = (self.parse)(self.line_no, &content);
        self.failed = parsed.is_err();
        Some(parsed.map(|entry| (self.line_no, entry)))
    }
}

/// scoresファイルのレコードを順に読む
pub fn score_records<R: BufRead>(reader: R) -> Records<R, ScoreEntry> {
    Records::new(reader, parse_score_line)
}

/// simPlacesファイルのレコードを順に読む
pub fn highlight_records<R: BufRead>(reader: R) -> Records<R, HighlightEntry> {
    Records::new(reader, parse_highlight_line)
}
