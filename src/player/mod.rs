//! Player - The roster record and its field position.
//!
//! A `Player` is a plain value: the roster hands out borrows or owned copies,
//! never shared mutable handles.
//!
//! ## Example
//!
//! ```
//! use gridiron_roster::{Player, Position};
//!
//! let player = Player::new(1, "John Doe", Position::RunningBack, 100.0, 5);
//! assert_eq!(
//!     player.to_string(),
//!     "#1 John Doe, RUNNING_BACK, cost 100.00, ranking 5, active"
//! );
//! ```

mod position;

use serde::{Deserialize, Serialize};
use std::fmt;

pub use position::{ParsePositionError, Position};

/// One roster entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Caller-assigned number. Not checked for uniqueness.
    pub id: i32,
    pub name: String,
    pub position: Position,
    pub cost: f64,
    pub ranking: i32,
    #[serde(default)]
    pub retired: bool,
}

impl Player {
    /// Create an active player.
    pub fn new(
        id: i32,
        name: impl Into<String>,
        position: Position,
        cost: f64,
        ranking: i32,
    ) -> Self {
        Player {
            id,
            name: name.into(),
            position,
            cost,
            ranking,
            retired: false,
        }
    }

    /// Same player, marked as retired.
    pub fn retired(mut self) -> Self {
        self.retired = true;
        self
    }

    pub fn is_active(&self) -> bool {
        !self.retired
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {}, {}, cost {:.2}, ranking {}, {}",
            self.id,
            self.name,
            self.position,
            self.cost,
            self.ranking,
            if self.retired { "retired" } else { "active" }
        )
    }
}
