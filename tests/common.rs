// tests/common.rs
//! Shared test utilities: logging setup and store fixtures

#![allow(dead_code)]

use std::path::PathBuf;

use cipher_lab::{HistoryStore, Identity};
use tempfile::TempDir;

#[cfg(feature = "logging")]
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize test-friendly logging; safe to call from every test
pub fn setup() {
    #[cfg(feature = "logging")]
    tracing_subscriber::registry()
        .with(fmt::layer().with_test_writer())
        .with(EnvFilter::from_default_env())
        .try_init()
        .ok();
}

/// A file-backed store inside its own temp dir; the dir lives as long as
/// the fixture
pub struct TempStore {
    pub store: HistoryStore,
    pub db_path: PathBuf,
    dir: TempDir,
}

impl TempStore {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let db_path = dir.path().join("nested").join("history.db");
        let store = HistoryStore::open(&db_path, None).expect("open history db");
        TempStore {
            store,
            db_path,
            dir,
        }
    }

    pub fn dir(&self) -> &std::path::Path {
        self.dir.path()
    }
}

pub fn identity(raw: &str) -> Identity {
    Identity::new(raw).expect("valid identity")
}
