//! The fixed set of teams that can receive points.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Team {
    Spartans,
    Ninjas,
    Apaches,
    Vikings,
    Centurions,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown team '{0}'")]
pub struct ParseTeamError(pub String);

impl Team {
    pub const COUNT: usize = 5;

    /// All teams in display order.
    pub const ALL: [Team; Team::COUNT] = [
        Team::Spartans,
        Team::Ninjas,
        Team::Apaches,
        Team::Vikings,
        Team::Centurions,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Team::Spartans => "Spartans",
            Team::Ninjas => "Ninjas",
            Team::Apaches => "Apaches",
            Team::Vikings => "Vikings",
            Team::Centurions => "Centurions",
        }
    }

    /// Position in `Team::ALL`, used to index per-team storage.
    #[inline]
    pub(crate) fn index(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Team {
    type Err = ParseTeamError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Team::ALL
            .iter()
            .copied()
            .find(|team| team.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| ParseTeamError(trimmed.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_display_order() {
        for (i, team) in Team::ALL.iter().enumerate() {
            assert_eq!(team.index(), i);
        }
    }

    #[test]
    fn parses_names_case_insensitively() {
        assert_eq!("Vikings".parse::<Team>(), Ok(Team::Vikings));
        assert_eq!(" ninjas ".parse::<Team>(), Ok(Team::Ninjas));
        assert_eq!(
            "Pirates".parse::<Team>(),
            Err(ParseTeamError("Pirates".to_string()))
        );
    }

    #[test]
    fn serializes_as_team_name() {
        let json = serde_json::to_string(&Team::Centurions).unwrap();
        assert_eq!(json, "\"Centurions\"");
        let back: Team = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Team::Centurions);
    }
}
