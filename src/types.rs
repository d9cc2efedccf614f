//! Shared types for the quiz engine.
//!
//! Pure data types used across the core engine and the adapter boundary.

use serde::{Deserialize, Serialize};

/// Score accumulator and question value type.
///
/// Signed: wrong answers subtract, so a player's score can go negative.
pub type Points = i32;

/// Multipliers for the "classic" ruleset (half value on penalties and buzzes).
pub const CLASSIC_FIRST_WRONG: f64 = 0.5;
pub const CLASSIC_BUZZ_CORRECT: f64 = 0.5;
pub const CLASSIC_BUZZ_WRONG: f64 = 0.5;

/// Multipliers for the "hard" ruleset (full value everywhere).
pub const HARD_FIRST_WRONG: f64 = 1.0;
pub const HARD_BUZZ_CORRECT: f64 = 1.0;
pub const HARD_BUZZ_WRONG: f64 = 1.0;

/// Phase of a single question-answer-buzz cycle.
///
/// `Resolving` is the "answer revealed, awaiting explicit continue" holding
/// state; `Resolved` is terminal and the turn is replaced by the next one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TurnState {
    Selecting,
    Answering,
    Buzzing,
    Resolving,
    Resolved,
}

impl TurnState {
    /// Parse from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "selecting" => Some(TurnState::Selecting),
            "answering" => Some(TurnState::Answering),
            "buzzing" => Some(TurnState::Buzzing),
            "resolving" => Some(TurnState::Resolving),
            "resolved" => Some(TurnState::Resolved),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            TurnState::Selecting => "selecting",
            TurnState::Answering => "answering",
            TurnState::Buzzing => "buzzing",
            TurnState::Resolving => "resolving",
            TurnState::Resolved => "resolved",
        }
    }
}

impl std::fmt::Display for TurnState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_state_string_roundtrip() {
        for state in [
            TurnState::Selecting,
            TurnState::Answering,
            TurnState::Buzzing,
            TurnState::Resolving,
            TurnState::Resolved,
        ] {
            assert_eq!(TurnState::from_str(state.as_str()), Some(state));
        }
        assert_eq!(TurnState::from_str("SELECTING"), Some(TurnState::Selecting));
        assert_eq!(TurnState::from_str("unknown"), None);
    }
}
