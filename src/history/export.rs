// src/history/export.rs
use std::path::Path;

use chrono::Utc;
use serde_json::json;
use tracing::info;

use crate::consts::EXPORT_FORMAT;
use crate::error::Result;
use crate::history::record::Identity;
use crate::history::store::HistoryStore;

/// Export every record of `identity` to a pretty-printed JSON file.
///
/// Records are written newest first, as `HistoryStore::list` returns
/// them. Returns the number of records written.
pub fn export_to_json(
    store: &HistoryStore,
    identity: &Identity,
    path: impl AsRef<Path>,
) -> Result<usize> {
    let records = store.list(identity)?;
    let stats = store.stats(identity)?;

    let export = json!({
        "export_format": EXPORT_FORMAT,
        "exported_at": Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Secs, true),
        "exporter_version": env!("CARGO_PKG_VERSION"),
        "identity": identity,
        "total_records": records.len(),
        "stats": stats,
        "records": records,
    });

    std::fs::write(path.as_ref(), serde_json::to_string_pretty(&export)?)?;
    info!(%identity, count = records.len(), path = %path.as_ref().display(), "history exported");

    Ok(records.len())
}
