use serde::{Deserialize, Serialize};
use std::{
    env,
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::alerts::DEFAULT_WARNING_THRESHOLD;
use crate::errors::ConfigError;
use crate::ledger::{LedgerPolicy, SavingsCap};

/// Overrides the settings file location.
pub const CONFIG_ENV_VAR: &str = "CENTS_CONFIG";

const APP_DIR: &str = "cents";
const CONFIG_FILE: &str = "config.json";
const TMP_SUFFIX: &str = "tmp";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub warning_threshold: f64,
    pub savings_cap: SavingsCap,
    pub plain_output: bool,
    pub quiet: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            warning_threshold: DEFAULT_WARNING_THRESHOLD,
            savings_cap: SavingsCap::default(),
            plain_output: false,
            quiet: false,
        }
    }
}

impl Config {
    pub fn ledger_policy(&self) -> LedgerPolicy {
        LedgerPolicy {
            savings_cap: self.savings_cap,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.warning_threshold.is_finite() || self.warning_threshold < 0.0 {
            return Err(ConfigError::Invalid(format!(
                "warning_threshold must be a non-negative number, got {}",
                self.warning_threshold
            )));
        }
        Ok(())
    }
}

/// Loads and saves [`Config`] as JSON.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `CENTS_CONFIG` when set, otherwise the platform config directory.
    pub fn new() -> Result<Self, ConfigError> {
        if let Some(path) = env::var_os(CONFIG_ENV_VAR).filter(|value| !value.is_empty()) {
            return Ok(Self::with_path(PathBuf::from(path)));
        }
        let base = dirs::config_dir().ok_or(ConfigError::MissingConfigDir)?;
        Ok(Self::with_path(base.join(APP_DIR).join(CONFIG_FILE)))
    }

    pub fn with_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Reads the settings file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        let config = if self.path.exists() {
            let data = fs::read_to_string(&self.path)?;
            serde_json::from_str(&data)?
        } else {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            Config::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<(), ConfigError> {
        config.validate()?;
        let json = serde_json::to_string_pretty(config)?;
        let tmp = tmp_path(&self.path);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.path)?;
        tracing::info!(path = %self.path.display(), "configuration saved");
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn missing_file_yields_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("absent.json"));
        let config = manager.load().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.warning_threshold, 5.0);
        assert_eq!(config.savings_cap, SavingsCap::Uncapped);
    }

    #[test]
    fn save_then_load_keeps_settings() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::with_path(temp.path().join("nested").join("config.json"));
        let config = Config {
            warning_threshold: 25.0,
            savings_cap: SavingsCap::AvailableFunds,
            plain_output: true,
            quiet: false,
        };
        manager.save(&config).unwrap();
        assert_eq!(manager.load().unwrap(), config);
        assert!(!manager.path().with_extension("json.tmp").exists());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{ "savings_cap": "available_funds" }"#).unwrap();
        let config = ConfigManager::with_path(path).load().unwrap();
        assert_eq!(config.savings_cap, SavingsCap::AvailableFunds);
        assert_eq!(config.warning_threshold, DEFAULT_WARNING_THRESHOLD);
    }

    #[test]
    fn negative_threshold_is_rejected() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("config.json");
        fs::write(&path, r#"{ "warning_threshold": -3.0 }"#).unwrap();
        let err = ConfigManager::with_path(path).load().unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }
}
