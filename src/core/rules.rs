//! Scoring policy - multipliers, presets, and the rounding rule
//!
//! Rounding contract:
//! - A delta's magnitude is `ceil(value * multiplier)`, the sign applied after.
//! - Gains round up so the answerer is never short-changed by a fractional
//!   multiplier; penalties round up in magnitude so a wrong answer is never
//!   under-penalized.
//! - The starter's first-attempt correct answer is always the full,
//!   unmultiplied value: `first_wrong` only ever discounts losses, never gains.

use crate::types::{
    Points, CLASSIC_BUZZ_CORRECT, CLASSIC_BUZZ_WRONG, CLASSIC_FIRST_WRONG, HARD_BUZZ_CORRECT,
    HARD_BUZZ_WRONG, HARD_FIRST_WRONG,
};

/// Immutable scoring-policy value object: three non-negative multipliers
/// applied to a question's value.
///
/// Non-negativity of custom values is the responsibility of whatever layer
/// collects them, not of this type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GameRules {
    first_wrong: f64,
    buzz_correct: f64,
    buzz_wrong: f64,
}

impl GameRules {
    pub fn new(first_wrong: f64, buzz_correct: f64, buzz_wrong: f64) -> Self {
        Self {
            first_wrong,
            buzz_correct,
            buzz_wrong,
        }
    }

    /// Half value on the starter's penalty and on buzz outcomes (0.5/0.5/0.5).
    pub fn classic() -> Self {
        Self::new(CLASSIC_FIRST_WRONG, CLASSIC_BUZZ_CORRECT, CLASSIC_BUZZ_WRONG)
    }

    /// Full value everywhere (1/1/1).
    pub fn hard() -> Self {
        Self::new(HARD_FIRST_WRONG, HARD_BUZZ_CORRECT, HARD_BUZZ_WRONG)
    }

    /// Multiplier on the starting player's penalty for a wrong first answer.
    pub fn first_wrong(&self) -> f64 {
        self.first_wrong
    }

    /// Multiplier on a buzzing player's gain for a correct answer.
    pub fn buzz_correct(&self) -> f64 {
        self.buzz_correct
    }

    /// Multiplier on a buzzing player's penalty for a wrong answer.
    pub fn buzz_wrong(&self) -> f64 {
        self.buzz_wrong
    }

    /// Signed score delta for an answer on a question worth `value`.
    pub fn answer_delta(&self, value: Points, is_starter: bool, correct: bool) -> Points {
        let multiplier = match (correct, is_starter) {
            // First-attempt correct answers are never discounted.
            (true, true) => return value,
            (true, false) => self.buzz_correct,
            (false, true) => self.first_wrong,
            (false, false) => self.buzz_wrong,
        };
        let magnitude = scale_value(value, multiplier);
        if correct {
            magnitude
        } else {
            -magnitude
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::classic()
    }
}

/// Ceiling-scale a question value by a multiplier (magnitude only).
fn scale_value(value: Points, multiplier: f64) -> Points {
    (value as f64 * multiplier).ceil() as Points
}
