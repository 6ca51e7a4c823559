// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use once_cell::sync::Lazy;
use rusqlite::{Connection, OptionalExtension, params};
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Theme, Transaction};

static APP: Lazy<(&str, &str, &str)> =
    Lazy::new(|| ("com.alphavelocity", "Pocketbook", "pocketbook"));

// Versioned storage keys; bump when the persisted layout changes.
pub const TRANSACTIONS_KEY: &str = "pocketbook_transactions_v2";
pub const THEME_KEY: &str = "pocketbook_theme_v2";

pub fn db_path() -> Result<PathBuf> {
    let proj = ProjectDirs::from(APP.0, APP.1, APP.2)
        .context("Could not determine platform-specific data dir")?;
    let data_dir = proj.data_dir();
    fs::create_dir_all(data_dir).context("Failed to create data dir")?;
    Ok(data_dir.join("pocketbook.sqlite"))
}

pub fn open_or_init() -> Result<Connection> {
    let path = db_path()?;
    open_at(&path)
}

pub fn open_at(path: &Path) -> Result<Connection> {
    let conn =
        Connection::open(path).with_context(|| format!("Open storage at {}", path.display()))?;
    init_schema(&conn)?;
    Ok(conn)
}

/// One key-value table plays the role of the browser's local storage:
/// whole entries, overwritten as a unit.
pub fn init_schema(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
    CREATE TABLE IF NOT EXISTS kv(
        key TEXT PRIMARY KEY,
        value TEXT NOT NULL
    );
    "#,
    )?;
    Ok(())
}

fn get_value(conn: &Connection, key: &str) -> Option<String> {
    conn.query_row("SELECT value FROM kv WHERE key=?1", params![key], |r| {
        r.get(0)
    })
    .optional()
    .ok()
    .flatten()
}

fn set_value(conn: &Connection, key: &str, value: &str) -> Result<()> {
    conn.execute(
        "INSERT INTO kv(key, value) VALUES(?1, ?2)
         ON CONFLICT(key) DO UPDATE SET value=excluded.value",
        params![key, value],
    )?;
    Ok(())
}

/// Missing or unparsable state is an empty collection, never an error
/// for the caller.
pub fn load_transactions(conn: &Connection) -> Vec<Transaction> {
    get_value(conn, TRANSACTIONS_KEY)
        .and_then(|raw| serde_json::from_str(&raw).ok())
        .unwrap_or_default()
}

/// Serializes the full collection, overwriting prior state. There is no
/// partial-write path.
pub fn save_transactions(conn: &Connection, transactions: &[Transaction]) -> Result<()> {
    let raw = serde_json::to_string(transactions)?;
    set_value(conn, TRANSACTIONS_KEY, &raw)
}

pub fn load_theme(conn: &Connection) -> Theme {
    Theme::from_stored(get_value(conn, THEME_KEY).as_deref())
}

pub fn save_theme(conn: &Connection, theme: Theme) -> Result<()> {
    set_value(conn, THEME_KEY, theme.as_str())
}
