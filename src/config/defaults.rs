// src/config/defaults.rs
use std::path::PathBuf;

use crate::config::app::{Defaults, History, Paths};
use crate::enums::ShiftVariant;

pub const DEFAULT_DB_FILE: &str = "history.db";
pub const DEFAULT_APP_DIR: &str = "cipher-lab";

/// `<data dir>/cipher-lab/history.db`, or the working directory when the
/// platform has no data dir
pub fn default_history_db() -> PathBuf {
    dirs::data_dir()
        .map(|dir| dir.join(DEFAULT_APP_DIR))
        .unwrap_or_default()
        .join(DEFAULT_DB_FILE)
}

impl Default for Paths {
    fn default() -> Self {
        Paths {
            history_db: default_history_db(),
        }
    }
}

impl Default for History {
    fn default() -> Self {
        History {
            enabled: true,
            passphrase: String::new(),
        }
    }
}

impl Default for Defaults {
    fn default() -> Self {
        Defaults {
            shift_variant: ShiftVariant::Modulo26,
        }
    }
}
