//! Key-value record store: one JSON document per key in the `store` table.
//! Every write replaces the whole record.

use crate::errors::AppResult;
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use serde::Serialize;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKey {
    EventLog,
    QuittingPolicy,
    DailyCounter,
    UiMinimized,
    UiIconPosition,
}

impl RecordKey {
    pub const ALL: [RecordKey; 5] = [
        RecordKey::EventLog,
        RecordKey::QuittingPolicy,
        RecordKey::DailyCounter,
        RecordKey::UiMinimized,
        RecordKey::UiIconPosition,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKey::EventLog => "event_log",
            RecordKey::QuittingPolicy => "quitting_policy",
            RecordKey::DailyCounter => "daily_counter",
            RecordKey::UiMinimized => "ui_minimized",
            RecordKey::UiIconPosition => "ui_icon_position",
        }
    }
}

/// Outcome of reading a record. Missing and corrupt records are both
/// first-run state for the caller; they are kept apart only for logging.
#[derive(Debug)]
pub enum Loaded<T> {
    Found(T),
    Missing,
    Corrupt(String),
}

impl<T> Loaded<T> {
    pub fn unwrap_or_else<F: FnOnce() -> T>(self, f: F) -> T {
        match self {
            Loaded::Found(v) => v,
            Loaded::Missing | Loaded::Corrupt(_) => f(),
        }
    }
}

pub fn read_raw(conn: &Connection, key: RecordKey) -> AppResult<Option<String>> {
    let mut stmt = conn.prepare_cached("SELECT value FROM store WHERE key = ?1")?;
    let value = stmt
        .query_row([key.as_str()], |row| row.get::<_, String>(0))
        .optional()?;
    Ok(value)
}

pub fn write_raw(conn: &Connection, key: RecordKey, value: &str) -> AppResult<()> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
    )?;
    stmt.execute(params![key.as_str(), value, Utc::now().to_rfc3339()])?;
    Ok(())
}

pub fn read<T: DeserializeOwned>(conn: &Connection, key: RecordKey) -> AppResult<Loaded<T>> {
    let loaded = match read_raw(conn, key)? {
        None => Loaded::Missing,
        Some(raw) => match serde_json::from_str::<T>(&raw) {
            Ok(v) => Loaded::Found(v),
            Err(e) => Loaded::Corrupt(e.to_string()),
        },
    };
    Ok(loaded)
}

pub fn write<T: Serialize>(conn: &Connection, key: RecordKey, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    write_raw(conn, key, &json)
}
