use std::fs;
use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use directories::BaseDirs;

/// Folder name used beneath the user's home directory for application data.
const DATA_DIR_NAME: &str = ".medical-booking";
/// SQLite file name stored inside the application data directory.
const DB_FILE_NAME: &str = "medical.db";
/// Subdirectory that receives the rolling log files.
const LOG_DIR_NAME: &str = "logs";

/// Where the application keeps its files and how expensive password hashing is.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: PathBuf,
    pub db_path: PathBuf,
    pub log_dir: PathBuf,
    pub hash_cost: u32,
}

impl Settings {
    /// Resolve every path beneath `~/.medical-booking`.
    pub fn load() -> Result<Self> {
        let base_dirs = BaseDirs::new().ok_or_else(|| anyhow!("could not locate home directory"))?;
        Ok(Self::rooted_at(base_dirs.home_dir().join(DATA_DIR_NAME)))
    }

    /// Lay the standard file names out under an arbitrary data directory.
    pub fn rooted_at(data_dir: PathBuf) -> Self {
        Self {
            db_path: data_dir.join(DB_FILE_NAME),
            log_dir: data_dir.join(LOG_DIR_NAME),
            data_dir,
            hash_cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create the data and log directories if they are missing.
    pub fn ensure_dirs(&self) -> Result<()> {
        fs::create_dir_all(&self.data_dir).context("failed to create data directory")?;
        fs::create_dir_all(&self.log_dir).context("failed to create log directory")?;
        Ok(())
    }
}
