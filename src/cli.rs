use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::config::Config;
use crate::error::Result;

#[derive(Parser)]
#[command(name = "costview")]
#[command(about = "コスト行列と類似地点ペアを可視化するデバッグツール", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 詳細ログを出力
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// 入力ファイルの指定（設定ファイルの値を上書き）
#[derive(Args, Debug, Clone, Default)]
pub struct InputArgs {
    /// scores / simPlaces のあるフォルダ
    #[arg(short, long)]
    pub folder: Option<PathBuf>,

    /// 行列の次元（軌跡の長さ）
    #[arg(short = 'n', long)]
    pub traj_size: Option<usize>,

    /// scoresファイル（相対パスはフォルダ基準）
    #[arg(long)]
    pub scores: Option<PathBuf>,

    /// simPlacesファイル（相対パスはフォルダ基準）
    #[arg(long)]
    pub sim_places: Option<PathBuf>,
}

impl InputArgs {
    /// 設定にCLI指定を適用
    pub fn apply(&self, mut config: Config) -> Result<Config> {
        if let Some(folder) = &self.folder {
            config.folder = folder.clone();
        }
        if let Some(traj_size) = self.traj_size {
            config.traj_size = traj_size;
        }
        if let Some(scores) = &self.scores {
            config.scores_file = scores.to_string_lossy().into_owned();
        }
        if let Some(sim_places) = &self.sim_places {
            config.sim_places_file = sim_places.to_string_lossy().into_owned();
        }
        config.validate()?;
        Ok(config)
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// コスト行列を描画してウィンドウに表示（キー入力で終了）
    Show {
        #[command(flatten)]
        input: InputArgs,

        /// 表示した画像をPNGにも保存
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// コスト行列を描画してPNGに保存（ウィンドウなし）
    Render {
        #[command(flatten)]
        input: InputArgs,

        /// 出力PNGファイル
        #[arg(short, long, required = true)]
        output: PathBuf,
    },

    /// 読み込み結果の統計を表示
    Stats {
        #[command(flatten)]
        input: InputArgs,

        /// JSONで出力
        #[arg(long)]
        json: bool,
    },

    /// 設定を表示/編集
    Config(ConfigArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct ConfigArgs {
    /// 入力フォルダを設定
    #[arg(long)]
    pub set_folder: Option<PathBuf>,

    /// 行列の次元を設定
    #[arg(long)]
    pub set_traj_size: Option<usize>,

    /// 設定を表示
    #[arg(long)]
    pub show: bool,
}

impl ConfigArgs {
    /// 変更指定がなければ表示する
    pub fn should_show(&self) -> bool {
        self.show || (self.set_folder.is_none() && self.set_traj_size.is_none())
    }
}
