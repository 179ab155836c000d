// src/history/db_conn.rs
use std::{fs, path::Path};

use rusqlite::Connection;

use crate::aliases::DbPassphrase;
use crate::consts::DB_KDF_ITERATIONS;
use crate::error::Result;

const SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS history (
        id         INTEGER PRIMARY KEY AUTOINCREMENT,
        identity   TEXT NOT NULL,
        method     TEXT NOT NULL,
        direction  TEXT NOT NULL CHECK (direction IN ('encrypt', 'decrypt')),
        input      TEXT NOT NULL,
        output     TEXT NOT NULL,
        created_at TEXT NOT NULL
    );

    CREATE INDEX IF NOT EXISTS idx_history_identity ON history(identity, created_at);
    CREATE INDEX IF NOT EXISTS idx_history_method ON history(method);
"#;

/// Open (or create) the history database at `path`.
///
/// With a passphrase the file is keyed through SQLCipher; without one it
/// is a plain SQLite file.
pub fn open_history_db(path: impl AsRef<Path>, passphrase: Option<&DbPassphrase>) -> Result<Connection> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let conn = Connection::open(path)?;
    init_connection(&conn, passphrase)?;
    Ok(conn)
}

/// Throwaway database for tests and one-shot CLI runs
pub fn open_in_memory_db() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    init_connection(&conn, None)?;
    Ok(conn)
}

pub(crate) fn init_connection(conn: &Connection, passphrase: Option<&DbPassphrase>) -> Result<()> {
    if let Some(passphrase) = passphrase {
        let key = passphrase.expose_secret().replace('\'', "''");
        conn.execute_batch(&format!("PRAGMA key = '{key}';"))?;
        conn.execute_batch(&format!(
            r#"
            PRAGMA cipher_page_size = 4096;
            PRAGMA kdf_iter = {DB_KDF_ITERATIONS};
            PRAGMA cipher_hmac_algorithm = HMAC_SHA512;
            PRAGMA cipher_kdf_algorithm = PBKDF2_HMAC_SHA512;
            "#
        ))?;
    }

    conn.execute_batch(SCHEMA)?;
    Ok(())
}
