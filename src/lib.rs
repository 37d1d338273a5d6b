mod console;
mod player;
mod roster;
mod store;

pub use console::{run_menu, Console};
pub use player::{ParsePositionError, Player, Position};
pub use roster::{
    RosterManager, EMPTY_ROSTER_BY_RANK, NO_ACTIVE_PLAYERS, NO_PLAYERS, NO_RETIRED_PLAYERS,
};
pub use store::{InMemoryRosterStore, JsonFileStore, PersistenceError, RosterStore};
