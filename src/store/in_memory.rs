//! InMemoryRosterStore - Vec-backed roster store for tests and demos.

use std::sync::{Arc, RwLock};

use crate::player::Player;

use super::error::PersistenceError;
use super::store::RosterStore;

/// In-memory roster store backed by `Arc<RwLock<Vec<Player>>>`.
///
/// Clone-friendly: clones share the same buffer, so a test can hand one
/// clone to a `RosterManager` and inspect the other.
#[derive(Clone, Default)]
pub struct InMemoryRosterStore {
    players: Arc<RwLock<Vec<Player>>>,
}

impl InMemoryRosterStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with `players`, as if they had been written earlier.
    pub fn with_players(players: Vec<Player>) -> Self {
        Self {
            players: Arc::new(RwLock::new(players)),
        }
    }

    /// Copy of the last written document.
    pub fn contents(&self) -> Result<Vec<Player>, PersistenceError> {
        self.read()
    }
}

impl RosterStore for InMemoryRosterStore {
    fn read(&self) -> Result<Vec<Player>, PersistenceError> {
        let players = self
            .players
            .read()
            .map_err(|_| PersistenceError::LockPoisoned("read"))?;
        Ok(players.clone())
    }

    fn write(&self, players: &[Player]) -> Result<(), PersistenceError> {
        let mut stored = self
            .players
            .write()
            .map_err(|_| PersistenceError::LockPoisoned("write"))?;
        *stored = players.to_vec();
        Ok(())
    }
}
