//! Protocol module - the tagged command union hosts dispatch
//!
//! Hosts (a web controller, a shared-worker queue, the bundled console) send
//! actions as tagged JSON values, e.g.
//! `{"type": "buzz", "playerId": "bob"}`. Dispatch is an exhaustive match
//! over the closed [`Action`] union; adding a variant is a compile error at
//! every dispatch site until handled.

use serde::{Deserialize, Serialize};

use crate::core::error::GameError;
use crate::core::game::Game;

/// One host command against the engine.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Put the question at `(category, question)` on the table.
    SelectQuestion { category: usize, question: usize },
    /// Judge the active player's answer.
    Answer { correct: bool },
    /// A player takes over answering.
    #[serde(rename_all = "camelCase")]
    Buzz { player_id: String },
    /// Nobody else wants to try; end the question.
    Pass,
    /// Close the revealed answer and move to the next turn.
    Continue,
}

/// Apply an action to the game. Errors bubble up unchanged from the engine;
/// a rejected action leaves the game untouched.
pub fn dispatch(game: &mut Game, action: &Action) -> Result<(), GameError> {
    match action {
        Action::SelectQuestion { category, question } => {
            game.select_question(*category, *question)
        }
        Action::Answer { correct } => game.answer(*correct),
        Action::Buzz { player_id } => game.buzz(player_id),
        Action::Pass => game.pass(),
        Action::Continue => game.continue_turn(),
    }
}

/// Pre-validation mirror of [`dispatch`]: true iff the action would currently
/// be accepted. Hosts use this to gate controls so the happy path never
/// produces an error.
pub fn permitted(game: &Game, action: &Action) -> bool {
    let Some(turn) = game.turn() else {
        return false;
    };
    match action {
        Action::SelectQuestion { category, question } => {
            turn.can_select_question()
                && game
                    .board()
                    .question(*category, *question)
                    .is_ok_and(|q| !q.asked())
        }
        Action::Answer { .. } => turn.can_answer(),
        Action::Buzz { player_id } => game
            .player_index(player_id)
            .is_some_and(|p| turn.can_buzz(p)),
        Action::Pass => turn.can_pass(),
        Action::Continue => turn.can_continue(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_tags() {
        let json = serde_json::to_value(&Action::SelectQuestion {
            category: 1,
            question: 2,
        })
        .unwrap();
        assert_eq!(json["type"], "selectQuestion");
        assert_eq!(json["category"], 1);
        assert_eq!(json["question"], 2);

        let buzz: Action = serde_json::from_str(r#"{"type":"buzz","playerId":"bob"}"#).unwrap();
        assert_eq!(
            buzz,
            Action::Buzz {
                player_id: "bob".to_string()
            }
        );

        let pass: Action = serde_json::from_str(r#"{"type":"pass"}"#).unwrap();
        assert_eq!(pass, Action::Pass);
    }

    #[test]
    fn test_unknown_tag_rejected() {
        assert!(serde_json::from_str::<Action>(r#"{"type":"cheat"}"#).is_err());
    }
}
