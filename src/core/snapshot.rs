//! Read-only projection of engine state for rendering hosts.
//!
//! A snapshot is plain data: captured in one call, serializable, and detached
//! from the engine, so hosts can render or ship it without holding borrows
//! into the game. Permission flags mirror the turn predicates so hosts can
//! enable/disable controls without trial-and-error dispatching.

use serde::Serialize;

use crate::core::game::Game;
use crate::types::{Points, TurnState};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerSnapshot {
    pub id: String,
    pub name: String,
    pub score: Points,
    pub is_active: bool,
    pub is_locked_out: bool,
}

/// One board tile: its price and whether it can still be selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TileSnapshot {
    pub value: Points,
    pub is_available: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySnapshot {
    pub name: String,
    pub tiles: Vec<TileSnapshot>,
}

/// The question currently on the table, with the answer included: the host's
/// role profiles decide who gets to see which fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActiveQuestionSnapshot {
    pub value: Points,
    pub text: String,
    pub answer: String,
    pub category_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameSnapshot {
    pub players: Vec<PlayerSnapshot>,
    pub categories: Vec<CategorySnapshot>,
    pub active_question: Option<ActiveQuestionSnapshot>,
    /// None once the game is finished.
    pub turn_state: Option<TurnState>,
    pub starting_player: Option<String>,
    pub active_player: Option<String>,
    pub can_select_question: bool,
    pub can_answer: bool,
    pub can_pass: bool,
    pub can_continue: bool,
    /// Ids of players currently allowed to buzz.
    pub eligible_buzzers: Vec<String>,
    pub finished: bool,
}

impl GameSnapshot {
    pub fn capture(game: &Game) -> Self {
        let turn = game.turn();

        let players = game
            .players()
            .iter()
            .enumerate()
            .map(|(i, p)| PlayerSnapshot {
                id: p.id().to_string(),
                name: p.name().to_string(),
                score: p.score(),
                is_active: turn.is_some_and(|t| t.active_player() == i),
                is_locked_out: turn.is_some_and(|t| t.is_locked_out(i)),
            })
            .collect();

        let categories = game
            .board()
            .categories()
            .iter()
            .map(|c| CategorySnapshot {
                name: c.name().to_string(),
                tiles: c
                    .questions()
                    .iter()
                    .map(|q| TileSnapshot {
                        value: q.value(),
                        is_available: !q.asked(),
                    })
                    .collect(),
            })
            .collect();

        // The selection was recorded from this same board, so the lookup
        // cannot miss; `.ok()` keeps the capture panic-free regardless.
        let active_question = turn.and_then(|t| t.selected()).and_then(|s| {
            game.board()
                .question(s.category, s.row)
                .ok()
                .map(|question| ActiveQuestionSnapshot {
                    value: s.value,
                    text: question.text().to_string(),
                    answer: question.answer().to_string(),
                    category_name: s.category_name.clone(),
                })
        });

        let player_id = |i: usize| game.players()[i].id().to_string();

        Self {
            players,
            categories,
            active_question,
            turn_state: turn.map(|t| t.state()),
            starting_player: turn.map(|t| player_id(t.starting_player())),
            active_player: turn.map(|t| player_id(t.active_player())),
            can_select_question: turn.is_some_and(|t| t.can_select_question()),
            can_answer: turn.is_some_and(|t| t.can_answer()),
            can_pass: turn.is_some_and(|t| t.can_pass()),
            can_continue: turn.is_some_and(|t| t.can_continue()),
            eligible_buzzers: turn
                .map(|t| t.eligible_buzzers().into_iter().map(player_id).collect())
                .unwrap_or_default(),
            finished: game.is_finished(),
        }
    }
}
