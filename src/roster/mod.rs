//! Roster - The ordered player collection and everything you can ask of it.
//!
//! Records are addressed by their zero-based position in the collection.
//! Those positions are **not** stable handles: deleting a record shifts every
//! later record down by one, so an index obtained before a `delete` may point
//! at a different player afterwards.
//!
//! ## Example
//!
//! ```
//! use gridiron_roster::{InMemoryRosterStore, Player, Position, RosterManager};
//!
//! let mut roster = RosterManager::new(InMemoryRosterStore::new());
//! roster.add(Player::new(1, "John Doe", Position::RunningBack, 100.0, 5));
//! roster.add(Player::new(2, "Jane Doe", Position::Quarterback, 90.0, 5));
//!
//! assert!(roster.retire(0));
//! assert_eq!(roster.count_active(), 1);
//! assert_eq!(
//!     roster.search_by_name("JOHN"),
//!     "0: #1 John Doe, RUNNING_BACK, cost 100.00, ranking 5, retired"
//! );
//! ```

mod manager;
mod render;

pub use manager::{
    RosterManager, EMPTY_ROSTER_BY_RANK, NO_ACTIVE_PLAYERS, NO_PLAYERS, NO_RETIRED_PLAYERS,
};
