use std::{
    fs,
    path::{Path, PathBuf},
};

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::{errors::StoreResult, storage};

const CONFIG_FILE: &str = "config.json";

/// User preferences that shape the calendar page.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Weekday the visible grid starts on.
    pub week_starts_on: Weekday,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            week_starts_on: Weekday::Sun,
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new() -> StoreResult<Self> {
        Self::from_base(storage::app_data_dir())
    }

    #[cfg(test)]
    pub fn with_base_dir(base: PathBuf) -> StoreResult<Self> {
        Self::from_base(base)
    }

    fn from_base(base: PathBuf) -> StoreResult<Self> {
        fs::create_dir_all(&base)?;
        Ok(Self {
            path: base.join(CONFIG_FILE),
        })
    }

    /// Saved preferences, or the defaults when nothing was saved yet.
    pub fn load(&self) -> StoreResult<Config> {
        if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            Ok(serde_json::from_str(&data)?)
        } else {
            Ok(Config::default())
        }
    }

    pub fn save(&self, config: &Config) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_loads_defaults() {
        let dir = tempdir().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.week_starts_on, Weekday::Sun);
    }

    #[test]
    fn saved_preferences_round_trip() {
        let dir = tempdir().expect("temp dir");
        let manager = ConfigManager::with_base_dir(dir.path().to_path_buf()).unwrap();

        let config = Config {
            week_starts_on: Weekday::Mon,
        };
        manager.save(&config).unwrap();

        let loaded = manager.load().unwrap();
        assert_eq!(loaded, config);
        assert!(
            !manager.path().with_extension("tmp").exists(),
            "staging file must not survive a save"
        );
    }
}
