use crate::error::{CostViewError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 人が「赤」と認識する色（RGB順）
pub const DEFAULT_HIGHLIGHT_COLOR: [u8; 3] = [255, 0, 0];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// scores / simPlaces を置いたフォルダ
    pub folder: PathBuf,
    /// 行列の次元（軌跡の長さ）
    pub traj_size: usize,
    pub scores_file: String,
    pub sim_places_file: String,
    /// ハイライト色（RGB）
    pub highlight_color: [u8; 3],
    pub window_title: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            folder: PathBuf::from("."),
            traj_size: 1078,
            scores_file: "scores.txt".into(),
            sim_places_file: "vggSim.txt".into(),
            highlight_color: DEFAULT_HIGHLIGHT_COLOR,
            window_title: "costs".into(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if config_path.exists() {
            let content = std::fs::read_to_string(config_path)?;
            let config: Config = serde_json::from_str(&content)?;
            config.validate()?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(config_path, content)?;
        Ok(())
    }

    pub fn config_path() -> Result<PathBuf> {
        let home = dirs::home_dir()
            .ok_or_else(|| CostViewError::Config("ホームディレクトリが見つかりません".into()))?;
        Ok(home.join(".config").join("costview").join("config.json"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.traj_size == 0 {
            return Err(CostViewError::Config("traj_size は1以上を指定してください".into()));
        }
        if u32::try_from(self.traj_size).is_err() {
            return Err(CostViewError::Config(format!(
                "traj_size が大きすぎます: {}",
                self.traj_size
            )));
        }
        Ok(())
    }

    pub fn scores_path(&self) -> PathBuf {
        self.folder.join(&self.scores_file)
    }

    pub fn sim_places_path(&self) -> PathBuf {
        self.folder.join(&self.sim_places_file)
    }

    pub fn set_folder(&mut self, folder: PathBuf) -> Result<()> {
        self.folder = folder;
        self.save()
    }

    pub fn set_traj_size(&mut self, traj_size: usize) -> Result<()> {
        self.traj_size = traj_size;
        self.validate()?;
        self.save()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_paths() {
        let config = Config {
            folder: PathBuf::from("/data/run1"),
            ..Default::default()
        };
        assert_eq!(config.scores_path(), PathBuf::from("/data/run1/scores.txt"));
        assert_eq!(config.sim_places_path(), PathBuf::from("/data/run1/vggSim.txt"));
    }

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("none.json")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"traj_size": 42, "folder": "/tmp/x"}"#).unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.traj_size, 42);
        assert_eq!(config.folder, PathBuf::from("/tmp/x"));
        assert_eq!(config.scores_file, "scores.txt");
        assert_eq!(config.highlight_color, DEFAULT_HIGHLIGHT_COLOR);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let config = Config {
            traj_size: 10,
            window_title: "debug".into(),
            ..Default::default()
        };
        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_zero_traj_size_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"traj_size": 0}"#).unwrap();
        assert!(matches!(Config::load_from(&path), Err(CostViewError::Config(_))));
    }

    #[test]
    fn test_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(Config::load_from(&path), Err(CostViewError::JsonParse(_))));
    }
}
