use thiserror::Error;

#[derive(Error, Debug)]
pub enum CostViewError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("ファイルが見つかりません: {0}")]
    FileNotFound(String),

    #[error("{path}: {source}")]
    Record {
        path: String,
        #[source]
        source: costview_common::Error,
    },

    #[error("ハイライト座標が画像の範囲外です: ({row}, {col}) / {width}x{height}")]
    HighlightOutOfRange {
        row: i64,
        col: i64,
        width: u32,
        height: u32,
    },

    #[error("画像保存エラー: {0}")]
    ImageSave(#[from] image::ImageError),

    #[error("表示エラー: {0}")]
    Display(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl CostViewError {
    /// ファイル名付きでレコードエラーを包む
    pub fn record(path: &std::path::Path, source: costview_common::Error) -> Self {
        CostViewError::Record {
            path: path.display().to_string(),
            source,
        }
    }

    /// 不正レコードによる失敗か
    pub fn is_malformed(&self) -> bool {
        matches!(
            self,
            CostViewError::Record {
                source: costview_common::Error::MalformedRecord { .. },
                ..
            }
        )
    }

    /// インデックス範囲外による失敗か
    pub fn is_out_of_range(&self) -> bool {
        match self {
            CostViewError::Record { source, .. } => source.is_out_of_range(),
            CostViewError::HighlightOutOfRange { .. } => true,
            _ => false,
        }
    }
}

pub type Result<T> = std::result::Result<T, CostViewError>;
