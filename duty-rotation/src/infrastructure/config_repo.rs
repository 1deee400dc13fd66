use std::fs;
use std::path::{Path, PathBuf};

use log::info;

use crate::domain::roster_model::RosterConfig;
use crate::error::ConfigError;

// ==========================================
// 設定ファイル (JSON) の読み書き
// ==========================================
//
// {
//   "referenceDate": "2025-11-09",
//   "members": [{ "name": "PREM MANDAL", "phaseOffset": 0 }, ...],
//   "duties": [{ "name": "पोछा लगाना", "translation": "Mopping" }, ...],
//   "basinOrder": ["KESHAV KUMAR", ...]
// }

pub struct ConfigRepository {
    path: PathBuf,
}

impl ConfigRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// 読み込んで検証まで行う
    pub fn load(&self) -> Result<RosterConfig, ConfigError> {
        let text = fs::read_to_string(&self.path).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        let config: RosterConfig =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: self.path.clone(),
                source,
            })?;

        config.validate()?;

        info!(
            "event=config_load status=ok path={} members={} duties={}",
            self.path.display(),
            config.members.len(),
            config.duties.len()
        );
        Ok(config)
    }

    pub fn save(&self, config: &RosterConfig) -> Result<(), ConfigError> {
        let text = serde_json::to_string_pretty(config).map_err(|source| ConfigError::Parse {
            path: self.path.clone(),
            source,
        })?;

        fs::write(&self.path, text).map_err(|source| ConfigError::Io {
            path: self.path.clone(),
            source,
        })?;

        info!("event=config_save status=ok path={}", self.path.display());
        Ok(())
    }
}

/// パスが無ければ組み込みの既定設定を使う
pub fn load_or_default(path: Option<&Path>) -> Result<RosterConfig, ConfigError> {
    match path {
        Some(path) => ConfigRepository::new(path).load(),
        None => {
            let config = RosterConfig::default();
            config.validate()?;
            Ok(config)
        }
    }
}
