//! Turn module - the state machine for one question-answer-buzz cycle
//!
//! A turn is constructed by [`Game`](crate::core::Game) with a fixed starting
//! player, runs `Selecting -> Answering -> (Buzzing | Resolving)` with buzz
//! loops back into `Answering`, holds in `Resolving` until an explicit
//! continue, and terminates in `Resolved`, at which point the game replaces it
//! wholesale. The turn owns the per-cycle mutable state: who is active, who
//! is locked out, and which question is on the table.
//!
//! Every mutator guards its state precondition and is a no-op when rejected.
//! The matching `can_*` predicates are pure and are what hosts use to
//! pre-validate commands so the happy path never sees an error.

use crate::core::board::Board;
use crate::core::error::GameError;
use crate::core::player::Player;
use crate::core::rules::GameRules;
use crate::types::{Points, TurnState};

/// The question on the table, recorded as board indices plus the fields the
/// turn needs without holding a borrow into the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedQuestion {
    pub category: usize,
    pub row: usize,
    pub category_name: String,
    pub value: Points,
}

/// State machine for a single question cycle.
///
/// Players are identified by roster index; the game resolves ids before
/// delegating. Invariants:
/// - the active player is either the starter or a successful buzzer
/// - a locked-out player stays locked out for the rest of the turn
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    starting_player: usize,
    player_count: usize,
    rules: GameRules,
    state: TurnState,
    active_player: usize,
    selected: Option<SelectedQuestion>,
    /// Roster indices of players who answered incorrectly this turn.
    locked_out: Vec<usize>,
    /// Set once the starter has made their first attempt, right or wrong.
    first_attempt_done: bool,
}

impl Turn {
    pub fn new(starting_player: usize, player_count: usize, rules: GameRules) -> Self {
        debug_assert!(starting_player < player_count);
        Self {
            starting_player,
            player_count,
            rules,
            state: TurnState::Selecting,
            active_player: starting_player,
            selected: None,
            locked_out: Vec::with_capacity(player_count),
            first_attempt_done: false,
        }
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn starting_player(&self) -> usize {
        self.starting_player
    }

    pub fn active_player(&self) -> usize {
        self.active_player
    }

    pub fn selected(&self) -> Option<&SelectedQuestion> {
        self.selected.as_ref()
    }

    pub fn first_attempt_done(&self) -> bool {
        self.first_attempt_done
    }

    // ===== Predicates (pure, mirrored into the snapshot) =====

    pub fn can_select_question(&self) -> bool {
        self.state == TurnState::Selecting
    }

    pub fn can_answer(&self) -> bool {
        self.state == TurnState::Answering
    }

    pub fn can_buzz(&self, player: usize) -> bool {
        self.state == TurnState::Buzzing && player < self.player_count && !self.is_locked_out(player)
    }

    pub fn can_pass(&self) -> bool {
        self.state == TurnState::Buzzing
    }

    pub fn can_continue(&self) -> bool {
        self.state == TurnState::Resolving
    }

    pub fn is_locked_out(&self, player: usize) -> bool {
        self.locked_out.contains(&player)
    }

    /// Roster indices currently allowed to buzz (empty outside `Buzzing`).
    pub fn eligible_buzzers(&self) -> Vec<usize> {
        if self.state != TurnState::Buzzing {
            return Vec::new();
        }
        (0..self.player_count)
            .filter(|&p| !self.is_locked_out(p))
            .collect()
    }

    // ===== Mutators =====

    /// Put a question on the table. Marks it played on the board.
    pub fn select_question(
        &mut self,
        board: &mut Board,
        category: usize,
        row: usize,
    ) -> Result<(), GameError> {
        if self.state != TurnState::Selecting {
            return Err(GameError::InvalidState {
                action: "select a question",
                state: self.state,
            });
        }

        let question = board.question_mut(category, row)?;
        question.play()?;
        let value = question.value();
        let category_name = board.categories()[category].name().to_string();

        self.selected = Some(SelectedQuestion {
            category,
            row,
            category_name,
            value,
        });
        self.state = TurnState::Answering;
        Ok(())
    }

    /// Score the active player's answer and advance the machine.
    ///
    /// Correct answers end the question (`Resolving`). Wrong answers lock the
    /// player out and open buzzing, unless every player has now failed, which
    /// also ends the question.
    pub fn submit_answer(
        &mut self,
        players: &mut [Player],
        correct: bool,
    ) -> Result<(), GameError> {
        if self.state != TurnState::Answering {
            return Err(GameError::InvalidState {
                action: "answer",
                state: self.state,
            });
        }
        // Unreachable through the state machine, but guarded anyway.
        let Some(selected) = self.selected.as_ref() else {
            return Err(GameError::InvalidState {
                action: "answer",
                state: self.state,
            });
        };

        let is_starter = self.active_player == self.starting_player;
        let delta = self.rules.answer_delta(selected.value, is_starter, correct);
        players[self.active_player].add_score(delta);

        if correct {
            self.state = TurnState::Resolving;
        } else {
            if !self.is_locked_out(self.active_player) {
                self.locked_out.push(self.active_player);
            }
            self.state = if self.locked_out.len() == self.player_count {
                // Everyone has tried and failed; the question ends unanswered.
                TurnState::Resolving
            } else {
                TurnState::Buzzing
            };
        }

        if is_starter {
            self.first_attempt_done = true;
        }
        Ok(())
    }

    /// A non-locked-out player takes over answering.
    pub fn buzz(&mut self, players: &[Player], player: usize) -> Result<(), GameError> {
        if self.state != TurnState::Buzzing {
            return Err(GameError::InvalidState {
                action: "buzz",
                state: self.state,
            });
        }
        debug_assert!(player < self.player_count);
        if self.is_locked_out(player) {
            return Err(GameError::LockedOut {
                player: players[player].name().to_string(),
            });
        }

        self.active_player = player;
        self.state = TurnState::Answering;
        Ok(())
    }

    /// Give up on the question: nobody else wants to buzz. No scoring.
    pub fn pass(&mut self) -> Result<(), GameError> {
        if self.state != TurnState::Buzzing {
            return Err(GameError::InvalidState {
                action: "pass",
                state: self.state,
            });
        }
        self.state = TurnState::Resolving;
        Ok(())
    }

    /// Close the turn after the answer reveal. The owning game observes the
    /// `Resolved` state and reacts (rotates the starter, spawns the next
    /// turn); that observation is the one-shot resolution notification.
    pub fn continue_turn(&mut self) -> Result<(), GameError> {
        if self.state != TurnState::Resolving {
            return Err(GameError::InvalidState {
                action: "continue",
                state: self.state,
            });
        }
        self.state = TurnState::Resolved;
        Ok(())
    }
}
