//! File-backed table store
//!
//! Saves go through a temp file in the target directory followed by a
//! rename, so a reader sees either the old file or the new one.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use super::format;
use crate::error::{CorruptReason, StoreError, StoreResult};
use crate::highscores::Table;

/// Leaderboard file on local disk
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the saved table
    pub fn load(&self) -> StoreResult<Table> {
        let text = fs::read_to_string(&self.path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound {
                path: self.path.clone(),
            },
            io::ErrorKind::InvalidData => StoreError::Corrupt {
                path: self.path.clone(),
                line: 0,
                reason: CorruptReason::NotUtf8,
            },
            _ => StoreError::Unreadable {
                path: self.path.clone(),
                source,
            },
        })?;

        let table = format::parse(&text).map_err(|err| StoreError::Corrupt {
            path: self.path.clone(),
            line: err.line,
            reason: err.reason,
        })?;
        log::info!("Loaded leaderboard from {}", self.path.display());
        Ok(table)
    }

    /// Replace the saved table with `table`
    pub fn save(&self, table: &Table) -> StoreResult<()> {
        self.write_atomic(format::serialize(table).as_bytes())
            .map_err(|source| StoreError::WriteFailure {
                path: self.path.clone(),
                source,
            })?;
        log::info!("Leaderboard saved to {}", self.path.display());
        Ok(())
    }

    /// Reset the saved table to the defaults and read it back
    pub fn wipe(&self) -> StoreResult<Table> {
        log::warn!("Reverting leaderboard at {} to defaults", self.path.display());
        let fatal = |cause: StoreError| {
            log::error!("Could not revert to default leaderboard data: {cause}");
            StoreError::FatalRecovery {
                path: self.path.clone(),
                cause: Box::new(cause),
            }
        };
        self.save(&Table::default()).map_err(fatal)?;
        self.load().map_err(fatal)
    }

    fn write_atomic(&self, bytes: &[u8]) -> io::Result<()> {
        let dir = match self.path.parent() {
            Some(dir) if !dir.as_os_str().is_empty() => dir,
            _ => Path::new("."),
        };
        let mut temp = NamedTempFile::new_in(dir)?;
        temp.write_all(bytes)?;
        temp.as_file().sync_all()?;
        temp.persist(&self.path).map_err(|err| err.error)?;
        Ok(())
    }
}
