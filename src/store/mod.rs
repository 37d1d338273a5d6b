//! Store - Persistence port for the roster.
//!
//! The roster is read and written wholesale: one `read` replaces the whole
//! collection, one `write` flushes it. Adapters decide where the bytes live.
//!
//! ## Example
//!
//! ```
//! use gridiron_roster::{InMemoryRosterStore, Player, Position, RosterStore};
//!
//! let store = InMemoryRosterStore::new();
//! store.write(&[Player::new(1, "John Doe", Position::RunningBack, 100.0, 5)]).unwrap();
//! assert_eq!(store.read().unwrap().len(), 1);
//! ```

mod error;
mod in_memory;
mod json_file;
mod store;

pub use error::PersistenceError;
pub use in_memory::InMemoryRosterStore;
pub use json_file::JsonFileStore;
pub use store::RosterStore;
