// src/config/app.rs
use std::env;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::aliases::DbPassphrase;
use crate::consts::{DEFAULT_CONFIG_FILE, ENV_CONFIG, ENV_DB_KEY, ENV_HISTORY_DB};
use crate::enums::ShiftVariant;
use crate::error::Result;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub paths: Paths,
    pub history: History,
    pub defaults: Defaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Paths {
    pub history_db: PathBuf,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct History {
    /// Lab records operations only when enabled
    pub enabled: bool,
    /// SQLCipher key; empty leaves the database unencrypted
    pub passphrase: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub shift_variant: ShiftVariant,
}

impl Config {
    /// `CIPHER_LAB_HISTORY_DB` and `CIPHER_LAB_DB_KEY` win over the file
    pub fn apply_env_overrides(&mut self) {
        if let Ok(path) = env::var(ENV_HISTORY_DB) {
            self.paths.history_db = PathBuf::from(path);
        }
        if let Ok(key) = env::var(ENV_DB_KEY) {
            self.history.passphrase = key;
        }
    }

    /// Passphrase for the history database, if one is configured
    pub fn passphrase(&self) -> Option<DbPassphrase> {
        if self.history.passphrase.is_empty() {
            None
        } else {
            Some(DbPassphrase::new(self.history.passphrase.clone()))
        }
    }
}

/// Parse a TOML config file. Missing sections fall back to defaults.
pub fn from_path(path: impl AsRef<Path>) -> Result<Config> {
    let content = std::fs::read_to_string(path.as_ref())?;
    let conf = toml::from_str(&content)?;
    Ok(conf)
}

static CONFIG: OnceLock<Config> = OnceLock::new();

/// Load config once per process; falls back to defaults if missing or invalid
pub fn load() -> &'static Config {
    CONFIG.get_or_init(|| {
        let config_path = env::var(ENV_CONFIG)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_FILE));

        let mut conf = if config_path.exists() {
            from_path(&config_path).unwrap_or_else(|err| {
                warn!(path = %config_path.display(), %err, "invalid config, using built-in defaults");
                Config::default()
            })
        } else {
            debug!(path = %config_path.display(), "no config file, using built-in defaults");
            Config::default()
        };

        conf.apply_env_overrides();
        conf
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn partial_file_keeps_defaults_for_missing_sections() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
            [history]
            enabled = false

            [defaults]
            shift_variant = "ascii"
            "#
        )
        .unwrap();

        let conf = from_path(file.path()).unwrap();
        assert!(!conf.history.enabled);
        assert!(conf.history.passphrase.is_empty());
        assert!(conf.passphrase().is_none());
        assert_eq!(conf.defaults.shift_variant, ShiftVariant::AsciiRange);
        assert!(conf.paths.history_db.ends_with("history.db"));
    }

    #[test]
    fn invalid_toml_is_a_config_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[history\nenabled = maybe").unwrap();

        let err = from_path(file.path()).unwrap_err();
        assert!(matches!(err, crate::error::LabError::Config(_)));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = from_path("/definitely/not/here/cipher-lab.toml").unwrap_err();
        assert!(matches!(err, crate::error::LabError::Io(_)));
    }
}
