//! Core game engine - pure, deterministic, and synchronous
//!
//! This module contains the whole rules engine with zero dependencies on UI,
//! storage, or transport. All operations are plain in-process calls that
//! complete before returning; the host is responsible for serializing calls
//! (the engine is never driven from two execution contexts at once).
//!
//! # Module Structure
//!
//! - [`board`]: categories and priced questions with one-shot "asked" state
//! - [`player`]: score-holding player identity
//! - [`rules`]: scoring policy (multipliers, presets, rounding)
//! - [`turn`]: the state machine for one question-answer-buzz cycle
//! - [`game`]: turn sequencing and starter rotation across the board
//! - [`snapshot`]: read-only projection consumed by rendering hosts
//! - [`error`]: the engine error taxonomy

pub mod board;
pub mod error;
pub mod game;
pub mod player;
pub mod rules;
pub mod snapshot;
pub mod turn;

// Re-export commonly used types
pub use board::{Board, Category, Question};
pub use error::GameError;
pub use game::Game;
pub use player::Player;
pub use rules::GameRules;
pub use snapshot::{
    ActiveQuestionSnapshot, CategorySnapshot, GameSnapshot, PlayerSnapshot, TileSnapshot,
};
pub use turn::{SelectedQuestion, Turn};
