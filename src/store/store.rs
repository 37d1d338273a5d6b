use crate::player::Player;

use super::error::PersistenceError;

/// Bulk read/write boundary for the roster document.
pub trait RosterStore {
    /// Load every stored player, in stored order.
    fn read(&self) -> Result<Vec<Player>, PersistenceError>;

    /// Replace the stored document with `players`.
    fn write(&self, players: &[Player]) -> Result<(), PersistenceError>;
}

impl<S: RosterStore + ?Sized> RosterStore for &S {
    fn read(&self) -> Result<Vec<Player>, PersistenceError> {
        (**self).read()
    }

    fn write(&self, players: &[Player]) -> Result<(), PersistenceError> {
        (**self).write(players)
    }
}
