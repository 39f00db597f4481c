use crate::error::{BookingError, Result};
use rusqlite::{Connection, OptionalExtension};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tauri::{AppHandle, Manager};

/// String-keyed persistent entries, the desktop stand-in for browser storage.
pub trait LocalStorage: Send + Sync {
    fn get_item(&self, key: &str) -> Result<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> Result<()>;
    fn remove_item(&self, key: &str) -> Result<()>;
}

pub struct Database {
    pub conn: Mutex<Connection>,
}

impl Database {
    pub fn new(app_handle: &AppHandle, file_name: &str) -> Result<Self> {
        let app_dir: PathBuf = app_handle
            .path()
            .app_data_dir()
            .map_err(|e| BookingError::AppDataDir(e.to_string()))?;

        std::fs::create_dir_all(&app_dir)?;

        Self::open(app_dir.join(file_name))
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let conn = Connection::open(path)?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Database {
            conn: Mutex::new(conn),
        })
    }

    pub fn initialize(&self) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| BookingError::StatePoisoned)?;

        conn.execute_batch(
            "
            CREATE TABLE IF NOT EXISTS local_storage (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at DATETIME DEFAULT CURRENT_TIMESTAMP
            );
            ",
        )?;

        Ok(())
    }
}

impl LocalStorage for Database {
    fn get_item(&self, key: &str) -> Result<Option<String>> {
        let conn = self.conn.lock().map_err(|_| BookingError::StatePoisoned)?;

        let value = conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                [key],
                |row| row.get(0),
            )
            .optional()?;

        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| BookingError::StatePoisoned)?;

        conn.execute(
            "INSERT INTO local_storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = CURRENT_TIMESTAMP",
            rusqlite::params![key, value],
        )?;

        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        let conn = self.conn.lock().map_err(|_| BookingError::StatePoisoned)?;

        conn.execute("DELETE FROM local_storage WHERE key = ?1", [key])?;

        Ok(())
    }
}
