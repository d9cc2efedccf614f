//! Quizboard - a Jeopardy-style quiz game engine.
//!
//! The engine models a board of categories and priced questions, a roster of
//! players, and the turn-resolution protocol that governs who may select a
//! question, who may answer, who may buzz in after a wrong answer, and how
//! scores move. Rendering, persistence, and transport are deliberately left
//! to the host: it drives [`core::Game`] through the command surface in
//! [`adapter`] and reads back an immutable [`core::GameSnapshot`].

pub mod adapter;
pub mod core;
pub mod types;
