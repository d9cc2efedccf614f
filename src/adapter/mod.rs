//! Adapter module - the host boundary
//!
//! Everything a hosting controller needs to drive the engine from outside:
//! the serde-tagged [`Action`] command union with its dispatcher, and the
//! board-import schema that turns user-authored JSON into a validated
//! [`Board`](crate::core::Board).

pub mod board_spec;
pub mod protocol;

// Re-export boundary types
pub use board_spec::{BoardSpec, BoardSpecError, CategorySpec, QuestionSpec};
pub use protocol::{dispatch, permitted, Action};
