// src/history/store.rs
//! History store operations
//!
//! `HistoryStore` owns one connection and is passed around explicitly;
//! nothing here reaches for a global handle. Every query is scoped to
//! the caller's identity, including deletes.

use std::path::Path;

use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{params, Connection, Row};
use tracing::{debug, info};

use crate::aliases::DbPassphrase;
use crate::config::Config;
use crate::error::{LabError, Result};
use crate::history::db_conn::{init_connection, open_history_db, open_in_memory_db};
use crate::history::record::{HistoryRecord, HistoryStats, Identity, NewRecord};

const SELECT_COLUMNS: &str =
    "SELECT id, identity, method, direction, input, output, created_at FROM history";

pub struct HistoryStore {
    conn: Connection,
}

/// Column values as stored, before label/timestamp parsing
struct RawRow {
    id: i64,
    identity: String,
    method: String,
    direction: String,
    input: String,
    output: String,
    created_at: String,
}

impl RawRow {
    fn from_row(row: &Row<'_>) -> rusqlite::Result<Self> {
        Ok(RawRow {
            id: row.get(0)?,
            identity: row.get(1)?,
            method: row.get(2)?,
            direction: row.get(3)?,
            input: row.get(4)?,
            output: row.get(5)?,
            created_at: row.get(6)?,
        })
    }

    fn into_record(self) -> Result<HistoryRecord> {
        Ok(HistoryRecord {
            id: self.id,
            identity: Identity::new(self.identity)?,
            method: self.method.parse()?,
            direction: self.direction.parse()?,
            input: self.input,
            output: self.output,
            created_at: parse_timestamp(&self.created_at)?,
        })
    }
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| LabError::BadTimestamp(raw.to_string()))
}

impl HistoryStore {
    pub fn open(path: impl AsRef<Path>, passphrase: Option<&DbPassphrase>) -> Result<Self> {
        let conn = open_history_db(path, passphrase)?;
        Ok(HistoryStore { conn })
    }

    pub fn in_memory() -> Result<Self> {
        Ok(HistoryStore {
            conn: open_in_memory_db()?,
        })
    }

    pub fn open_from_config(config: &Config) -> Result<Self> {
        let passphrase = config.passphrase();
        Self::open(&config.paths.history_db, passphrase.as_ref())
    }

    /// Wrap an already-open connection; the schema is created if missing
    pub fn from_connection(conn: Connection) -> Result<Self> {
        init_connection(&conn, None)?;
        Ok(HistoryStore { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// Append one operation for `identity`.
    ///
    /// Empty input or output is refused with [`LabError::NothingToSave`].
    pub fn record(&mut self, identity: &Identity, new: &NewRecord) -> Result<HistoryRecord> {
        if new.input.is_empty() || new.output.is_empty() {
            return Err(LabError::NothingToSave);
        }

        let created_at = format_timestamp(Utc::now());
        self.conn.execute(
            "INSERT INTO history (identity, method, direction, input, output, created_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                identity.as_str(),
                new.method.label(),
                new.direction.as_str(),
                &new.input,
                &new.output,
                &created_at,
            ],
        )?;
        let id = self.conn.last_insert_rowid();

        info!(%identity, id, method = %new.method, direction = %new.direction, "history recorded");

        Ok(HistoryRecord {
            id,
            identity: identity.clone(),
            method: new.method,
            direction: new.direction,
            input: new.input.clone(),
            output: new.output.clone(),
            created_at: parse_timestamp(&created_at)?,
        })
    }

    /// All records for `identity`, newest first
    pub fn list(&self, identity: &Identity) -> Result<Vec<HistoryRecord>> {
        self.query_records(
            &format!("{SELECT_COLUMNS} WHERE identity = ?1 ORDER BY created_at DESC, id DESC"),
            params![identity.as_str()],
        )
    }

    /// Records whose input text or method label contains `filter`,
    /// case-insensitively
    pub fn search(&self, identity: &Identity, filter: &str) -> Result<Vec<HistoryRecord>> {
        self.query_records(
            &format!(
                "{SELECT_COLUMNS} WHERE identity = ?1
                   AND (instr(lower(input), lower(?2)) > 0 OR instr(lower(method), lower(?2)) > 0)
                 ORDER BY created_at DESC, id DESC"
            ),
            params![identity.as_str(), filter.trim()],
        )
    }

    pub fn get(&self, identity: &Identity, id: i64) -> Result<HistoryRecord> {
        self.query_records(
            &format!("{SELECT_COLUMNS} WHERE identity = ?1 AND id = ?2"),
            params![identity.as_str(), id],
        )?
        .pop()
        .ok_or(LabError::RecordNotFound(id))
    }

    pub fn stats(&self, identity: &Identity) -> Result<HistoryStats> {
        let mut stmt = self.conn.prepare(
            "SELECT direction, COUNT(*) FROM history WHERE identity = ?1 GROUP BY direction",
        )?;
        let rows = stmt.query_map([identity.as_str()], |row| {
            Ok((row.get::<_, String>(0)?, row.get::<_, i64>(1)?))
        })?;

        let mut stats = HistoryStats::default();
        for row in rows {
            let (direction, count) = row?;
            let count = count as u64;
            match direction.as_str() {
                "encrypt" => stats.encrypt = count,
                "decrypt" => stats.decrypt = count,
                other => return Err(LabError::UnknownDirection(other.to_string())),
            }
            stats.total += count;
        }
        Ok(stats)
    }

    /// Delete one record owned by `identity`
    pub fn delete(&mut self, identity: &Identity, id: i64) -> Result<()> {
        let removed = self.conn.execute(
            "DELETE FROM history WHERE id = ?1 AND identity = ?2",
            params![id, identity.as_str()],
        )?;
        if removed == 0 {
            return Err(LabError::RecordNotFound(id));
        }
        debug!(%identity, id, "history record deleted");
        Ok(())
    }

    /// Remove every record for `identity`, returning how many went
    pub fn clear(&mut self, identity: &Identity) -> Result<usize> {
        let tx = self.conn.transaction()?;
        let removed = tx.execute(
            "DELETE FROM history WHERE identity = ?1",
            [identity.as_str()],
        )?;
        tx.commit()?;
        info!(%identity, removed, "history cleared");
        Ok(removed)
    }

    fn query_records(
        &self,
        sql: &str,
        params: impl rusqlite::Params,
    ) -> Result<Vec<HistoryRecord>> {
        let mut stmt = self.conn.prepare(sql)?;
        let raw = stmt
            .query_map(params, RawRow::from_row)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        raw.into_iter().map(RawRow::into_record).collect()
    }
}
