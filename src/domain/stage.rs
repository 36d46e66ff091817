use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Maximum number of tasks allowed in the work-in-progress stage
pub const WIP_LIMIT: usize = 2;

/// Canonical stage order. Adjacency for moves is defined by position here.
pub const STAGE_ORDER: [Stage; 4] = [Stage::Backlog, Stage::Todo, Stage::Doing, Stage::Done];

/// A step in the board workflow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Stage {
    Backlog,
    Todo,
    Doing,
    Done,
}

impl Stage {
    /// Stage tasks can never leave once they reach it
    pub const TERMINAL: Stage = Stage::Done;

    /// Stage guarded by [`WIP_LIMIT`]
    pub const WORK_IN_PROGRESS: Stage = Stage::Doing;

    /// Stable identifier used in persisted boards
    pub fn id(&self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Todo => "TODO",
            Self::Doing => "DOING",
            Self::Done => "DONE",
        }
    }

    /// Display label for the column holding this stage
    pub fn label(&self) -> &'static str {
        match self {
            Self::Backlog => "BACKLOG",
            Self::Todo => "TODO",
            Self::Doing => "DOING",
            Self::Done => "DONE",
        }
    }

    /// Position in [`STAGE_ORDER`]
    pub fn index(&self) -> usize {
        match self {
            Self::Backlog => 0,
            Self::Todo => 1,
            Self::Doing => 2,
            Self::Done => 3,
        }
    }

    pub fn is_terminal(&self) -> bool {
        *self == Self::TERMINAL
    }

    /// Checks whether `other` is exactly one step before or after this stage
    pub fn is_adjacent_to(&self, other: Stage) -> bool {
        self.index().abs_diff(other.index()) == 1
    }
}

impl FromStr for Stage {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        STAGE_ORDER
            .iter()
            .copied()
            .find(|stage| stage.id() == s)
            .ok_or_else(|| format!("Unknown stage '{}'", s))
    }
}

impl AsRef<str> for Stage {
    fn as_ref(&self) -> &str {
        self.id()
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stage_order_matches_index() {
        for (position, stage) in STAGE_ORDER.iter().enumerate() {
            assert_eq!(stage.index(), position);
        }
    }

    #[test]
    fn test_stage_parsing() {
        assert_eq!(Stage::from_str("BACKLOG").unwrap(), Stage::Backlog);
        assert_eq!(Stage::from_str("DONE").unwrap(), Stage::Done);

        // Identifiers are exact, not case-folded
        assert!(Stage::from_str("done").is_err());
        assert!(Stage::from_str("UNKNOWN").is_err());
        assert!(Stage::from_str("").is_err());
    }

    #[test]
    fn test_adjacency() {
        assert!(Stage::Backlog.is_adjacent_to(Stage::Todo));
        assert!(Stage::Doing.is_adjacent_to(Stage::Todo));
        assert!(!Stage::Backlog.is_adjacent_to(Stage::Doing));
        assert!(!Stage::Backlog.is_adjacent_to(Stage::Done));
        assert!(!Stage::Todo.is_adjacent_to(Stage::Todo));
    }

    #[test]
    fn test_stage_serialization() {
        let json = serde_json::to_string(&Stage::Doing).unwrap();
        assert_eq!(json, "\"DOING\"");

        let stage: Stage = serde_json::from_str("\"TODO\"").unwrap();
        assert_eq!(stage, Stage::Todo);
    }

    #[test]
    fn test_terminal_stage() {
        assert!(Stage::Done.is_terminal());
        assert!(!Stage::Doing.is_terminal());
        assert_eq!(Stage::WORK_IN_PROGRESS, Stage::Doing);
    }
}
