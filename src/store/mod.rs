//! Whole-snapshot persistence for the checklist.
//!
//! The checklist is one serialized JSON array stored under a single key,
//! replaced in full on every write. There is no per-item schema and no
//! payload versioning: loading tolerates junk by silently dropping any
//! stored element that is not an object carrying a `completed` field.
//!
//! Saving re-sorts through [`crate::checklist::sort_by_category`], so an
//! unsorted sequence can never reach disk.

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use anyhow::Result;
use rusqlite::Connection;

use crate::checklist;
use crate::models::GroceryItem;

/// Storage key for the checklist snapshot.
const CHECKLIST_KEY: &str = "groceryList";

pub struct ChecklistStore {
    conn: Arc<Mutex<Connection>>,
}

impl ChecklistStore {
    pub fn open(path: PathBuf) -> Result<Self> {
        let parent = path
            .parent()
            .ok_or_else(|| anyhow::anyhow!("Store path has no parent directory"))?;
        std::fs::create_dir_all(parent)?;
        let conn = Connection::open(&path)?;
        conn.pragma_update(None, "journal_mode", "WAL")?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn open_default() -> Result<Self> {
        let dirs = directories::ProjectDirs::from("", "", "recigo")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let db_path = dirs.data_dir().join("recigo.db");
        Self::open(db_path)
    }

    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self {
            conn: Arc::new(Mutex::new(conn)),
        })
    }

    pub fn migrate(&self) -> Result<()> {
        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute_batch(include_str!("migrations/001_initial.sql"))?;
        Ok(())
    }

    /// Load the persisted checklist, or an empty list when nothing has
    /// been saved yet.
    pub fn load(&self) -> Result<Vec<GroceryItem>> {
        let conn = self.conn.lock().expect("store lock poisoned");
        let mut stmt = conn.prepare("SELECT value FROM snapshots WHERE key = ?")?;
        let mut rows = stmt.query([CHECKLIST_KEY])?;

        let Some(row) = rows.next()? else {
            return Ok(Vec::new());
        };
        let raw: String = row.get(0)?;
        Ok(decode_snapshot(&raw))
    }

    /// Replace the persisted checklist with `items`, re-sorted. Returns
    /// the sorted sequence that was written so callers can adopt it as
    /// their in-memory state.
    pub fn save(&self, items: &[GroceryItem]) -> Result<Vec<GroceryItem>> {
        let sorted = checklist::sort_by_category(items);
        let payload = serde_json::to_string(&sorted)?;

        let conn = self.conn.lock().expect("store lock poisoned");
        conn.execute(
            "INSERT INTO snapshots (key, value) VALUES (?, ?)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            (CHECKLIST_KEY, &payload),
        )?;
        Ok(sorted)
    }
}

impl Clone for ChecklistStore {
    fn clone(&self) -> Self {
        Self {
            conn: self.conn.clone(),
        }
    }
}

/// Decode a stored snapshot payload, dropping anything unreadable.
///
/// Elements must be JSON objects with a `completed` field; everything
/// else is filtered out silently. A payload that is not an array at all
/// resets to an empty list.
pub fn decode_snapshot(raw: &str) -> Vec<GroceryItem> {
    let values: Vec<serde_json::Value> = match serde_json::from_str(raw) {
        Ok(values) => values,
        Err(e) => {
            tracing::warn!("stored checklist is not a JSON array, resetting: {}", e);
            return Vec::new();
        }
    };

    let mut items = Vec::new();
    for value in values {
        let is_item = value
            .as_object()
            .map_or(false, |object| object.contains_key("completed"));
        if !is_item {
            tracing::debug!("dropping stored entry without a completed field");
            continue;
        }
        match serde_json::from_value::<GroceryItem>(value) {
            Ok(item) => items.push(item),
            Err(e) => tracing::warn!("dropping unreadable checklist entry: {}", e),
        }
    }
    items
}
