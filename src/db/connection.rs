use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use rusqlite::Connection;

/// Handle on the SQLite file. It only remembers where the database lives;
/// every operation opens its own connection through [`Store::connect`] and the
/// connection closes when that call returns.
#[derive(Debug, Clone)]
pub struct Store {
    path: PathBuf,
    hash_cost: u32,
}

impl Store {
    /// Make sure the database file exists, run the lazy migrations, and return
    /// a handle ready for use.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).context("failed to create data directory")?;
            }
        }

        let store = Self {
            path,
            hash_cost: bcrypt::DEFAULT_COST,
        };
        let conn = store.connect()?;
        ensure_schema(&conn)?;
        Ok(store)
    }

    /// Override the bcrypt work factor used for new passwords.
    pub fn with_hash_cost(mut self, cost: u32) -> Self {
        self.hash_cost = cost;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn hash_cost(&self) -> u32 {
        self.hash_cost
    }

    /// Open a fresh connection scoped to the caller.
    pub fn connect(&self) -> Result<Connection> {
        Connection::open(&self.path).context("failed to open SQLite database")
    }
}

/// Create both tables if they do not exist yet.
pub fn ensure_schema(conn: &Connection) -> Result<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT UNIQUE,
            password TEXT
        )",
        [],
    )
    .context("failed to create users table")?;

    conn.execute(
        "CREATE TABLE IF NOT EXISTS doctors (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            specialty TEXT,
            rating REAL,
            image_url TEXT
        )",
        [],
    )
    .context("failed to create doctors table")?;

    Ok(())
}
