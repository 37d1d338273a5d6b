use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Field position. Closed set; anything else is rejected at parse time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Position {
    Quarterback,
    RunningBack,
    WideReceiver,
    TightEnd,
    OffensiveLine,
    DefensiveLine,
    Linebacker,
    DefensiveBack,
    Kicker,
    Punter,
    SpecialTeams,
}

impl Position {
    pub const ALL: [Position; 11] = [
        Position::Quarterback,
        Position::RunningBack,
        Position::WideReceiver,
        Position::TightEnd,
        Position::OffensiveLine,
        Position::DefensiveLine,
        Position::Linebacker,
        Position::DefensiveBack,
        Position::Kicker,
        Position::Punter,
        Position::SpecialTeams,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Position::Quarterback => "QUARTERBACK",
            Position::RunningBack => "RUNNING_BACK",
            Position::WideReceiver => "WIDE_RECEIVER",
            Position::TightEnd => "TIGHT_END",
            Position::OffensiveLine => "OFFENSIVE_LINE",
            Position::DefensiveLine => "DEFENSIVE_LINE",
            Position::Linebacker => "LINEBACKER",
            Position::DefensiveBack => "DEFENSIVE_BACK",
            Position::Kicker => "KICKER",
            Position::Punter => "PUNTER",
            Position::SpecialTeams => "SPECIAL_TEAMS",
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsePositionError(pub String);

impl fmt::Display for ParsePositionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown position: {:?}", self.0)
    }
}

impl std::error::Error for ParsePositionError {}

impl FromStr for Position {
    type Err = ParsePositionError;

    /// Case-insensitive; spaces and hyphens count as underscores.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .map(|c| match c {
                ' ' | '-' => '_',
                other => other.to_ascii_uppercase(),
            })
            .collect();

        Position::ALL
            .into_iter()
            .find(|position| position.as_str() == normalized)
            .ok_or_else(|| ParsePositionError(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_canonical_names() {
        for position in Position::ALL {
            assert_eq!(position.as_str().parse::<Position>(), Ok(position));
        }
    }

    #[test]
    fn parses_loose_spellings() {
        assert_eq!("running back".parse::<Position>(), Ok(Position::RunningBack));
        assert_eq!("Wide-Receiver".parse::<Position>(), Ok(Position::WideReceiver));
        assert_eq!("  kicker ".parse::<Position>(), Ok(Position::Kicker));
    }

    #[test]
    fn rejects_unknown() {
        let err = "goalkeeper".parse::<Position>().unwrap_err();
        assert_eq!(err, ParsePositionError("goalkeeper".into()));
        assert!(err.to_string().contains("goalkeeper"));
    }

    #[test]
    fn serde_matches_display() {
        let json = serde_json::to_string(&Position::SpecialTeams).unwrap();
        assert_eq!(json, "\"SPECIAL_TEAMS\"");
        assert_eq!(Position::SpecialTeams.to_string(), "SPECIAL_TEAMS");
    }
}
