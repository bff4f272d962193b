//! Storage — durable persistence for the roster under a single fixed key.
//!
//! The roster is serialized as a JSON array of [`Starship`] records
//! (ids included) into `roster.json` inside the app data directory
//! (`$XDG_DATA_HOME/hangar`, falling back to `~/.local/share/hangar`).
//! An absent key means no prior state. Malformed stored data is treated
//! the same way: logged at WARN and reported as absent, never fatal.

use crate::roster::Roster;
use crate::types::Starship;
use std::path::{Path, PathBuf};

/// File name of the fixed storage key.
const ROSTER_KEY: &str = "roster.json";

/// Errors from the write side of storage. The read side never fails — see
/// [`Storage::load`].
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("storage io: {0}")]
    Io(#[from] std::io::Error),
    #[error("roster serialization: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the on-disk roster store.
///
/// Construct with [`Storage::open_default`] in the application and
/// [`Storage::new`] with a temp directory in tests.
#[derive(Debug, Clone)]
pub struct Storage {
    dir: PathBuf,
}

impl Storage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Storage rooted at the default app data directory.
    pub fn open_default() -> Self {
        Self::new(default_data_dir())
    }

    fn key_path(&self) -> PathBuf {
        self.dir.join(ROSTER_KEY)
    }

    /// Serialize the full record sequence under the fixed key.
    ///
    /// Saving an empty roster is a no-op: whatever was previously persisted
    /// stays untouched rather than being overwritten with nothing.
    pub fn save(&self, roster: &Roster) -> Result<(), StorageError> {
        if roster.is_empty() {
            tracing::debug!("roster empty, save skipped");
            return Ok(());
        }
        std::fs::create_dir_all(&self.dir)?;
        let json = serde_json::to_string_pretty(roster.ships())?;
        std::fs::write(self.key_path(), json)?;
        tracing::debug!(count = roster.len(), path = %self.key_path().display(), "roster saved");
        Ok(())
    }

    /// Read back the persisted record sequence, if any.
    ///
    /// Returns `None` when the key is absent. Unreadable or malformed data
    /// is also reported as `None` (with a WARN) so a corrupt file degrades
    /// to a fresh start instead of an unrecoverable error.
    pub fn load(&self) -> Option<Vec<Starship>> {
        let path = self.key_path();
        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "stored roster unreadable, treating as absent");
                return None;
            }
        };
        match serde_json::from_str::<Vec<Starship>>(&raw) {
            Ok(ships) => {
                tracing::debug!(count = ships.len(), "roster loaded");
                Some(ships)
            }
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "stored roster malformed, treating as absent");
                None
            }
        }
    }

    /// Remove the fixed key entirely. Already-absent is not an error.
    pub fn clear(&self) -> Result<(), StorageError> {
        match std::fs::remove_file(self.key_path()) {
            Ok(()) => {
                tracing::debug!("stored roster cleared");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn default_data_dir() -> PathBuf {
    std::env::var("XDG_DATA_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".local")
                .join("share")
        })
        .join("hangar")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
