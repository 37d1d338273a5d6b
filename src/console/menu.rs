use std::io::{self, BufRead, Write};

use crate::player::Player;
use crate::roster::RosterManager;
use crate::store::RosterStore;

use super::input::Console;

const MAIN_MENU: &str = "\
---------------------------------------
|            PLAYER ROSTER            |
---------------------------------------
|   1) Add a Player                   |
|   2) List Players                   |
|   3) Update a Player                |
|   4) Delete a Player                |
|   5) Retire a Player                |
|   6) Search Players (by name)       |
|   7) List Players by Ranking        |
---------------------------------------
|   20) Save Players                  |
|   21) Load Players                  |
---------------------------------------
|   0) Exit                           |
---------------------------------------
==>> ";

const LIST_MENU: &str = "\
--------------------------------
|   1) View ALL Players        |
|   2) View ACTIVE Players     |
|   3) View RETIRED Players    |
--------------------------------
==>> ";

enum Flow {
    Continue,
    Exit,
}

/// Unwrap an answer, or leave the menu when the input has run out.
macro_rules! ask {
    ($answer:expr) => {
        match $answer? {
            Some(value) => value,
            None => return Ok(Flow::Exit),
        }
    };
}

/// Run the numbered menu until the user picks `0` or the input ends.
pub fn run_menu<S, R, W>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<()>
where
    S: RosterStore,
    R: BufRead,
    W: Write,
{
    loop {
        let flow = match console.read_int(MAIN_MENU)? {
            None => Flow::Exit,
            Some(1) => add_player(roster, console)?,
            Some(2) => list_players(roster, console)?,
            Some(3) => update_player(roster, console)?,
            Some(4) => delete_player(roster, console)?,
            Some(5) => retire_player(roster, console)?,
            Some(6) => search_players(roster, console)?,
            Some(7) => list_by_rank(roster, console)?,
            Some(20) => save(roster, console)?,
            Some(21) => load(roster, console)?,
            Some(0) => {
                log::info!("exit requested from menu");
                Flow::Exit
            }
            Some(other) => {
                console.say(format!("Invalid option entered: {}", other))?;
                Flow::Continue
            }
        };

        if let Flow::Exit = flow {
            return Ok(());
        }
    }
}

/// Negative console input never names a valid slot.
fn to_index(raw: i64) -> Option<usize> {
    usize::try_from(raw).ok()
}

fn add_player<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let id = ask!(console.read_parsed::<i32>("Enter player ID Number: "));
    let name = ask!(console.read_line("Enter player's Full Name: "));
    let position = ask!(console.read_position("Enter player's position: "));
    let cost = ask!(console.read_cost("Enter the cost for the Player: "));
    let ranking = ask!(console.read_parsed::<i32>("Enter the player's current Rank: "));
    let retired = ask!(console.read_yes_no("Enter (y/n) if the player is retired: "));

    let mut player = Player::new(id, name, position, cost, ranking);
    player.retired = retired;

    if roster.add(player) {
        console.say("Player Added Successfully")?;
    } else {
        console.say("Adding a Player Failed")?;
    }
    Ok(Flow::Continue)
}

fn list_players<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    if roster.is_empty() {
        console.say("Option Invalid - No Players stored")?;
        return Ok(Flow::Continue);
    }

    match ask!(console.read_int(LIST_MENU)) {
        1 => console.say(roster.list_all())?,
        2 => console.say(roster.list_active())?,
        3 => console.say(roster.list_retired())?,
        other => console.say(format!("Invalid option entered: {}", other))?,
    }
    Ok(Flow::Continue)
}

fn update_player<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say(roster.list_all())?;
    if roster.is_empty() {
        return Ok(Flow::Continue);
    }

    let raw = ask!(console.read_int("Enter the index of the Player to update: "));
    let Some((index, existing)) =
        to_index(raw).and_then(|index| roster.get(index).cloned().map(|p| (index, p)))
    else {
        console.say("Invalid index. There are no Players for this index number.")?;
        return Ok(Flow::Continue);
    };

    console.say("Current Player Details:")?;
    console.say(format!("Name: {}", existing.name))?;
    console.say(format!("Position: {}", existing.position))?;
    console.say(format!("Ranking: {}", existing.ranking))?;

    let name = ask!(console.read_line("Enter a new name for the Player: "));
    let position = ask!(console.read_position("Enter player's position: "));
    let ranking = ask!(console.read_parsed::<i32>("Enter a new Rank for the Player: "));

    let replacement = Player {
        name,
        position,
        ranking,
        ..existing
    };

    if roster.update(index, Some(replacement)) {
        console.say("Update Successful")?;
    } else {
        console.say("Update Failed")?;
    }
    Ok(Flow::Continue)
}

fn delete_player<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say(roster.list_all())?;
    if roster.is_empty() {
        return Ok(Flow::Continue);
    }

    let raw = ask!(console.read_int("Enter the index of the Player to delete: "));
    match to_index(raw).and_then(|index| roster.delete(index)) {
        Some(removed) => {
            log::info!("deleted player {} ({})", removed.id, removed.name);
            console.say("Delete Successful!")?;
        }
        None => console.say("Delete NOT Successful")?,
    }
    Ok(Flow::Continue)
}

fn retire_player<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    console.say(roster.list_active())?;
    if roster.count_active() == 0 {
        return Ok(Flow::Continue);
    }

    let raw = ask!(console.read_int("Enter the index of the Player to Retire: "));
    if to_index(raw).is_some_and(|index| roster.retire(index)) {
        console.say("Player has been Retired Successfully!")?;
    } else {
        console.say("Player has NOT been Retired Successfully")?;
    }
    Ok(Flow::Continue)
}

fn search_players<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let needle = ask!(console.read_line("Enter the name to search by: "));
    let results = roster.search_by_name(&needle);
    if results.is_empty() {
        console.say("No Players found")?;
    } else {
        console.say(results)?;
    }
    Ok(Flow::Continue)
}

fn list_by_rank<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    let rank = ask!(console.read_parsed::<i32>("Enter the ranking to list: "));
    console.say(roster.list_by_rank(rank))?;
    Ok(Flow::Continue)
}

fn save<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    match roster.save() {
        Ok(()) => console.say(format!("Saved {} players", roster.count_all()))?,
        Err(err) => console.say(format!("Error writing to file: {}", err))?,
    }
    Ok(Flow::Continue)
}

fn load<S: RosterStore, R: BufRead, W: Write>(
    roster: &mut RosterManager<S>,
    console: &mut Console<R, W>,
) -> io::Result<Flow> {
    match roster.load() {
        Ok(()) => console.say(format!("Loaded {} players", roster.count_all()))?,
        Err(err) => console.say(format!("Error reading from file: {}", err))?,
    }
    Ok(Flow::Continue)
}
