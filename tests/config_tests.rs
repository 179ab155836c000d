// tests/config_tests.rs
//! Config file parsing and environment overrides
//!
//! Environment variables are process-wide, so every test here runs serially.

mod common;

use std::env;
use std::io::Write;

use cipher_lab::config::{self, Config};
use cipher_lab::consts::{ENV_DB_KEY, ENV_HISTORY_DB};
use cipher_lab::{HistoryStore, ShiftVariant};
use serial_test::serial;

fn clear_env() {
    env::remove_var(ENV_HISTORY_DB);
    env::remove_var(ENV_DB_KEY);
}

#[test]
#[serial]
fn env_overrides_win_over_the_file() {
    common::setup();
    clear_env();
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
        [paths]
        history_db = "/from/file/history.db"

        [history]
        passphrase = "file-secret"
        "#
    )
    .unwrap();

    let mut conf = config::from_path(file.path()).unwrap();
    assert_eq!(conf.paths.history_db.to_str(), Some("/from/file/history.db"));

    env::set_var(ENV_HISTORY_DB, "/from/env/history.db");
    env::set_var(ENV_DB_KEY, "env-secret");
    conf.apply_env_overrides();
    clear_env();

    assert_eq!(conf.paths.history_db.to_str(), Some("/from/env/history.db"));
    assert_eq!(conf.history.passphrase, "env-secret");
    assert!(conf.passphrase().is_some());
}

#[test]
#[serial]
fn defaults_without_file_or_env() {
    clear_env();
    let mut conf = Config::default();
    conf.apply_env_overrides();

    assert!(conf.history.enabled);
    assert!(conf.passphrase().is_none());
    assert_eq!(conf.defaults.shift_variant, ShiftVariant::Modulo26);
    assert!(conf.paths.history_db.ends_with("history.db"));
}

#[test]
#[serial]
fn store_opens_where_the_config_points() {
    clear_env();
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("from-config").join("history.db");

    let mut conf = Config::default();
    conf.paths.history_db = db.clone();
    HistoryStore::open_from_config(&conf).unwrap();

    assert!(db.exists());
}
