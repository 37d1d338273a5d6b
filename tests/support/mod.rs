//! Shared fixtures for the integration suites.
#![allow(dead_code)]

use std::io::Cursor;

use gridiron_roster::{
    Console, InMemoryRosterStore, PersistenceError, Player, Position, RosterManager, RosterStore,
};

pub fn john() -> Player {
    Player::new(1, "John Doe", Position::RunningBack, 100.0, 5)
}

pub fn jane() -> Player {
    Player::new(2, "Jane Doe", Position::Quarterback, 250.0, 1)
}

pub fn roster() -> RosterManager<InMemoryRosterStore> {
    RosterManager::new(InMemoryRosterStore::new())
}

/// John (rank 5), Jane (rank 1), and a retired kicker (rank 5).
pub fn seeded_roster() -> RosterManager<InMemoryRosterStore> {
    let mut roster = roster();
    roster.add(john());
    roster.add(jane());
    roster.add(Player::new(3, "Old Boot", Position::Kicker, 10.0, 5).retired());
    roster
}

/// A store whose every read and write fails.
pub struct FailingStore;

impl RosterStore for FailingStore {
    fn read(&self) -> Result<Vec<Player>, PersistenceError> {
        Err(PersistenceError::Io {
            path: "unreachable.json".into(),
            message: "disk on fire".into(),
        })
    }

    fn write(&self, _players: &[Player]) -> Result<(), PersistenceError> {
        Err(PersistenceError::Io {
            path: "unreachable.json".into(),
            message: "disk on fire".into(),
        })
    }
}

pub type ScriptedConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

/// Console fed from `script`, writing into a buffer.
pub fn scripted(script: &str) -> ScriptedConsole {
    Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new())
}

pub fn printed(console: &ScriptedConsole) -> String {
    String::from_utf8_lossy(console.output()).into_owned()
}
