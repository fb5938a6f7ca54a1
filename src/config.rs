use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::{Result, SiteError};
use crate::validation::CounterThresholds;

const CONFIG_VERSION: u32 = 1;
const DEFAULT_LOG_RETENTION: usize = 10;

fn default_log_retention() -> usize {
    DEFAULT_LOG_RETENTION
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub version: u32,
    #[serde(default)]
    pub counter: CounterThresholds,
    /// Number of rotated session logs to keep.
    #[serde(default = "default_log_retention")]
    pub log_retention: usize,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            counter: CounterThresholds::default(),
            log_retention: DEFAULT_LOG_RETENTION,
        }
    }
}

/// `~/.grimreaper`, where config and logs live.
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".grimreaper"))
}

fn config_path() -> Option<PathBuf> {
    data_dir().map(|d| d.join("config.json"))
}

impl SiteConfig {
    /// Read the config at `path`. A missing or malformed file yields `None`.
    pub fn load_from(path: &Path) -> Option<Self> {
        let content = std::fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Load the user's config, falling back to defaults.
    pub fn load() -> Self {
        config_path()
            .and_then(|p| Self::load_from(&p))
            .unwrap_or_default()
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    pub fn save(&self) -> Result<()> {
        let path = config_path()
            .ok_or_else(|| SiteError::Custom("Cannot find home directory".into()))?;
        self.save_to(&path)
    }

    /// Apply new settings on top of the config stored at `path` and write it back.
    pub fn update_at(
        path: &Path,
        counter: Option<CounterThresholds>,
        log_retention: Option<usize>,
    ) -> Result<Self> {
        let mut config = Self::load_from(path).unwrap_or_default();

        if let Some(counter) = counter {
            if counter.warn_at > counter.critical_at {
                return Err(SiteError::Custom(
                    "Counter warning threshold must not exceed the critical threshold".into(),
                ));
            }
            config.counter = counter;
        }
        if let Some(keep) = log_retention {
            config.log_retention = keep;
        }

        config.save_to(path)?;
        Ok(config)
    }

    pub fn update(
        counter: Option<CounterThresholds>,
        log_retention: Option<usize>,
    ) -> Result<Self> {
        let path = config_path()
            .ok_or_else(|| SiteError::Custom("Cannot find home directory".into()))?;
        Self::update_at(&path, counter, log_retention)
    }
}

/// Managed state holding the settings in effect, read from disk once at startup
/// and replaced whenever new settings are saved.
pub struct SettingsState {
    pub config: Arc<Mutex<SiteConfig>>,
}

impl SettingsState {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: Arc::new(Mutex::new(config)),
        }
    }

    pub async fn counter(&self) -> CounterThresholds {
        self.config.lock().await.counter
    }

    pub async fn log_retention(&self) -> usize {
        self.config.lock().await.log_retention
    }

    pub async fn replace(&self, config: SiteConfig) {
        *self.config.lock().await = config;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(SiteConfig::load_from(&dir.path().join("config.json")), None);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{"version":1}"#).unwrap();
        assert_eq!(SiteConfig::load_from(&path), Some(SiteConfig::default()));
    }

    #[test]
    fn test_update_creates_and_merges() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let config = SiteConfig::update_at(&path, None, Some(3)).unwrap();
        assert_eq!(config.log_retention, 3);
        assert_eq!(config.counter, CounterThresholds::default());

        let counter = CounterThresholds {
            warn_at: 400,
            critical_at: 450,
        };
        let config = SiteConfig::update_at(&path, Some(counter), None).unwrap();
        assert_eq!(config.log_retention, 3);
        assert_eq!(config.counter, counter);

        let json = std::fs::read_to_string(&path).unwrap();
        assert!(json.contains("\"logRetention\": 3"));
        assert!(json.contains("\"warnAt\": 400"));
    }

    #[test]
    fn test_update_rejects_inverted_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let bad = CounterThresholds {
            warn_at: 950,
            critical_at: 900,
        };
        assert!(SiteConfig::update_at(&path, Some(bad), None).is_err());
        assert!(!path.exists());
    }

    #[tokio::test]
    async fn test_settings_state_serves_saved_thresholds() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        let state = SettingsState::new(SiteConfig::load_from(&path).unwrap_or_default());
        assert_eq!(state.counter().await, CounterThresholds::default());

        let counter = CounterThresholds {
            warn_at: 100,
            critical_at: 200,
        };
        state
            .replace(SiteConfig::update_at(&path, Some(counter), Some(4)).unwrap())
            .await;
        assert_eq!(state.counter().await, counter);
        assert_eq!(state.log_retention().await, 4);
    }
}
