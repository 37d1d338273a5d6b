use crate::player::Player;
use crate::store::{PersistenceError, RosterStore};

use super::render::format_list;

pub const NO_PLAYERS: &str = "No Players Stored";
pub const NO_ACTIVE_PLAYERS: &str = "No Active Players Stored";
pub const NO_RETIRED_PLAYERS: &str = "No Retired Players Stored";
/// Returned by `list_by_rank` when the roster itself is empty.
pub const EMPTY_ROSTER_BY_RANK: &str = "No Players stored";

/// Owns the ordered roster and delegates bulk persistence to `S`.
///
/// Validation failures (bad index, missing replacement, already retired)
/// come back as `false`/`None`. Only `load` and `save` return errors.
pub struct RosterManager<S: RosterStore> {
    store: S,
    players: Vec<Player>,
}

impl<S: RosterStore> RosterManager<S> {
    /// Empty roster backed by `store`. Nothing is read until `load`.
    pub fn new(store: S) -> Self {
        RosterManager {
            store,
            players: Vec::new(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Read-only view of the roster in order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Append `player`. Always succeeds.
    pub fn add(&mut self, player: Player) -> bool {
        log::debug!("adding player {} at index {}", player.id, self.players.len());
        self.players.push(player);
        true
    }

    pub fn get(&self, index: usize) -> Option<&Player> {
        self.players.get(index)
    }

    /// Remove and return the player at `index`. Later players shift down.
    pub fn delete(&mut self, index: usize) -> Option<Player> {
        if index >= self.players.len() {
            log::debug!("delete rejected: index {} out of range", index);
            return None;
        }
        let removed = self.players.remove(index);
        log::debug!("deleted player {} from index {}", removed.id, index);
        Some(removed)
    }

    /// Replace the player at `index` with `replacement`'s name, position and
    /// ranking. The stored id, cost and retired flag are kept.
    pub fn update(&mut self, index: usize, replacement: Option<Player>) -> bool {
        let (Some(current), Some(replacement)) = (self.players.get(index), replacement) else {
            log::debug!("update rejected at index {}", index);
            return false;
        };

        let updated = Player {
            id: current.id,
            name: replacement.name,
            position: replacement.position,
            cost: current.cost,
            ranking: replacement.ranking,
            retired: current.retired,
        };
        self.players[index] = updated;
        log::debug!("updated player at index {}", index);
        true
    }

    /// Mark the player at `index` as retired. `false` if the index is invalid
    /// or the player has already retired.
    pub fn retire(&mut self, index: usize) -> bool {
        match self.players.get_mut(index) {
            Some(player) if !player.retired => {
                player.retired = true;
                log::debug!("retired player {} at index {}", player.id, index);
                true
            }
            _ => false,
        }
    }

    pub fn list_all(&self) -> String {
        if self.players.is_empty() {
            NO_PLAYERS.to_string()
        } else {
            self.render_where(|_| true)
        }
    }

    pub fn list_active(&self) -> String {
        if self.count_active() == 0 {
            NO_ACTIVE_PLAYERS.to_string()
        } else {
            self.render_where(Player::is_active)
        }
    }

    pub fn list_retired(&self) -> String {
        if self.count_retired() == 0 {
            NO_RETIRED_PLAYERS.to_string()
        } else {
            self.render_where(|player| player.retired)
        }
    }

    pub fn list_by_rank(&self, rank: i32) -> String {
        if self.players.is_empty() {
            return EMPTY_ROSTER_BY_RANK.to_string();
        }

        let listing = self.render_where(|player| player.ranking == rank);
        if listing.is_empty() {
            format!("No Players with Ranking: {}", rank)
        } else {
            format!(
                "{} Players with Ranking {}: {}",
                self.count_by_rank(rank),
                rank,
                listing
            )
        }
    }

    pub fn count_all(&self) -> usize {
        self.players.len()
    }

    pub fn count_active(&self) -> usize {
        self.count_where(Player::is_active)
    }

    pub fn count_retired(&self) -> usize {
        self.count_where(|player| player.retired)
    }

    pub fn count_by_rank(&self, rank: i32) -> usize {
        self.count_where(|player| player.ranking == rank)
    }

    /// Case-insensitive substring search on the name. An empty string means
    /// nothing matched.
    pub fn search_by_name(&self, needle: &str) -> String {
        let needle = needle.to_lowercase();
        self.render_where(|player| player.name.to_lowercase().contains(&needle))
    }

    /// Replace the whole roster with what the store holds.
    ///
    /// On error the current roster is left as it was.
    pub fn load(&mut self) -> Result<(), PersistenceError> {
        let players = self.store.read().map_err(|err| {
            log::warn!("loading roster failed: {}", err);
            err
        })?;
        log::info!("loaded {} players", players.len());
        self.players = players;
        Ok(())
    }

    /// Write the whole roster to the store.
    pub fn save(&self) -> Result<(), PersistenceError> {
        self.store.write(&self.players).map_err(|err| {
            log::warn!("saving roster failed: {}", err);
            err
        })?;
        log::info!("saved {} players", self.players.len());
        Ok(())
    }

    fn count_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&Player) -> bool,
    {
        self.players.iter().filter(|&player| predicate(player)).count()
    }

    fn render_where<F>(&self, predicate: F) -> String
    where
        F: Fn(&Player) -> bool,
    {
        format_list(
            self.players
                .iter()
                .enumerate()
                .filter(|&(_, player)| predicate(player)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::player::Position;
    use crate::store::InMemoryRosterStore;

    fn roster() -> RosterManager<InMemoryRosterStore> {
        RosterManager::new(InMemoryRosterStore::new())
    }

    #[test]
    fn update_keeps_id_cost_and_status() {
        let mut roster = roster();
        roster.add(Player::new(1234, "John Doe", Position::RunningBack, 12000000.0, 1200).retired());

        let replacement = Player::new(1, "Updated Name", Position::Quarterback, 5.0, 2);
        assert!(roster.update(0, Some(replacement)));

        let stored = roster.get(0).unwrap();
        assert_eq!(stored.id, 1234);
        assert_eq!(stored.name, "Updated Name");
        assert_eq!(stored.position, Position::Quarterback);
        assert_eq!(stored.cost, 12000000.0);
        assert_eq!(stored.ranking, 2);
        assert!(stored.retired);
    }

    #[test]
    fn duplicates_render_with_their_own_index() {
        let mut roster = roster();
        let twin = Player::new(5, "Twin", Position::Kicker, 1.0, 3);
        roster.add(twin.clone());
        roster.add(twin);

        let listing = roster.list_all();
        let lines: Vec<&str> = listing.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("0: "));
        assert!(lines[1].starts_with("1: "));
    }

    #[test]
    fn filtered_views_use_full_collection_indices() {
        let mut roster = roster();
        roster.add(Player::new(1, "A", Position::Kicker, 1.0, 1).retired());
        roster.add(Player::new(2, "B", Position::Punter, 1.0, 1));

        assert!(roster.list_active().starts_with("1: #2 B"));
        assert!(roster.list_retired().starts_with("0: #1 A"));
    }
}
