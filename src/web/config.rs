use serde::{Deserialize, Deserializer};
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::preference::{FileStore, MemoryStore, PreferenceStore};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("invalid interval for {0}: must be greater than zero")]
    Interval(&'static str),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub web: WebConfig,
    pub feeds: FeedsConfig,
    pub preferences: PreferencesConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    #[serde(default = "default_static_dir")]
    pub static_dir: PathBuf,
}

impl Default for WebConfig {
    fn default() -> Self {
        WebConfig {
            bind: default_bind(),
            static_dir: default_static_dir(),
        }
    }
}

fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}

fn default_static_dir() -> PathBuf {
    PathBuf::from("src/web/static")
}

#[derive(Debug, Clone, Deserialize)]
pub struct FeedsConfig {
    #[serde(default = "default_mars_interval", deserialize_with = "humantime_duration")]
    pub mars_interval: Duration,
    #[serde(
        default = "default_deep_space_interval",
        deserialize_with = "humantime_duration"
    )]
    pub deep_space_interval: Duration,
    /// Fixes both random sources for reproducible sessions.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for FeedsConfig {
    fn default() -> Self {
        FeedsConfig {
            mars_interval: default_mars_interval(),
            deep_space_interval: default_deep_space_interval(),
            seed: None,
        }
    }
}

fn default_mars_interval() -> Duration {
    Duration::from_secs(5)
}

fn default_deep_space_interval() -> Duration {
    Duration::from_secs(15)
}

fn humantime_duration<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    humantime::parse_duration(raw.trim()).map_err(serde::de::Error::custom)
}

#[derive(Debug, Clone, Deserialize)]
pub struct PreferencesConfig {
    #[serde(default = "default_preferences_path")]
    pub path: PathBuf,
    /// When false the theme lives only as long as the process.
    #[serde(default = "default_persist")]
    pub persist: bool,
}

impl Default for PreferencesConfig {
    fn default() -> Self {
        PreferencesConfig {
            path: default_preferences_path(),
            persist: default_persist(),
        }
    }
}

impl PreferencesConfig {
    pub fn open_store(&self) -> Box<dyn PreferenceStore> {
        if self.persist {
            Box::new(FileStore::new(self.path.clone()))
        } else {
            Box::new(MemoryStore::new())
        }
    }
}

fn default_persist() -> bool {
    true
}

fn default_preferences_path() -> PathBuf {
    PathBuf::from("data/preferences.yaml")
}

impl Config {
    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    pub fn from_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the built-in defaults.
    pub fn load(path: Option<&str>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Ok(Config::default()),
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.feeds.mars_interval.is_zero() {
            return Err(ConfigError::Interval("feeds.mars_interval"));
        }
        if self.feeds.deep_space_interval.is_zero() {
            return Err(ConfigError::Interval("feeds.deep_space_interval"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_uses_defaults() {
        let config = Config::from_str("").unwrap();
        assert_eq!(config.web.bind, "0.0.0.0:8080");
        assert_eq!(config.feeds.mars_interval, Duration::from_secs(5));
        assert_eq!(config.feeds.deep_space_interval, Duration::from_secs(15));
        assert_eq!(config.feeds.seed, None);
        assert_eq!(
            config.preferences.path,
            PathBuf::from("data/preferences.yaml")
        );
    }

    #[test]
    fn partial_sections() {
        let yaml = "
web:
  bind: 127.0.0.1:9000
feeds:
  mars_interval: 2s 500ms
  seed: 42
";
        let config = Config::from_str(yaml).unwrap();
        assert_eq!(config.web.bind, "127.0.0.1:9000");
        assert_eq!(config.web.static_dir, PathBuf::from("src/web/static"));
        assert_eq!(config.feeds.mars_interval, Duration::from_millis(2_500));
        assert_eq!(config.feeds.deep_space_interval, Duration::from_secs(15));
        assert_eq!(config.feeds.seed, Some(42));
    }

    #[test]
    fn rejects_zero_interval() {
        let err = Config::from_str("feeds:\n  deep_space_interval: 0s\n").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::Interval("feeds.deep_space_interval")
        ));
    }

    #[test]
    fn rejects_garbage_interval() {
        let err = Config::from_str("feeds:\n  mars_interval: soon\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn ephemeral_preferences() {
        let config = Config::from_str("preferences:\n  persist: false\n").unwrap();
        let store = config.preferences.open_store();
        store.set("theme", "dark").unwrap();
        assert_eq!(store.get("theme").unwrap().as_deref(), Some("dark"));
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            Config::from_file("/nonexistent/qsl-sim.yaml"),
            Err(ConfigError::Io(_))
        ));
    }
}
