// src/history/mod.rs
//! Per-identity operation log
//!
//! The cipher engine never touches this module; callers record an
//! operation after running a transform.

pub mod db_conn;
pub mod export;
pub mod record;
pub mod store;

pub use db_conn::{open_history_db, open_in_memory_db};
pub use export::export_to_json;
pub use record::{HistoryRecord, HistoryStats, Identity, NewRecord};
pub use store::HistoryStore;
