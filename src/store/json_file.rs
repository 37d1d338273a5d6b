//! JsonFileStore - The roster as a single JSON array on disk.

use std::fs;
use std::path::{Path, PathBuf};

use crate::player::Player;

use super::error::PersistenceError;
use super::store::RosterStore;

/// Reads and writes the roster as one pretty-printed JSON array.
///
/// A missing file is an error on `read`; `write` creates any missing parent
/// directories.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        JsonFileStore { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RosterStore for JsonFileStore {
    fn read(&self) -> Result<Vec<Player>, PersistenceError> {
        let json = fs::read_to_string(&self.path)
            .map_err(|e| PersistenceError::io(self.path.display(), e))?;
        let players: Vec<Player> = serde_json::from_str(&json)?;
        log::debug!(
            "read {} players from {}",
            players.len(),
            self.path.display()
        );
        Ok(players)
    }

    fn write(&self, players: &[Player]) -> Result<(), PersistenceError> {
        let json = serde_json::to_string_pretty(players)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)
                    .map_err(|e| PersistenceError::io(parent.display(), e))?;
            }
        }

        fs::write(&self.path, json).map_err(|e| PersistenceError::io(self.path.display(), e))?;
        log::debug!("wrote {} players to {}", players.len(), self.path.display());
        Ok(())
    }
}
