use crate::player::Player;

/// Render `(index, player)` pairs as `"<index>: <player>"` lines.
///
/// The index is whatever the caller pairs with the player; the roster passes
/// each record's position in the full collection, even for filtered views.
pub(crate) fn format_list<'a, I>(entries: I) -> String
where
    I: IntoIterator<Item = (usize, &'a Player)>,
{
    entries
        .into_iter()
        .map(|(index, player)| format!("{}: {}", index, player))
        .collect::<Vec<_>>()
        .join("\n")
}
