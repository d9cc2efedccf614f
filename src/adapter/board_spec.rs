//! Board import - the user-authored JSON schema
//!
//! ```json
//! {
//!   "categories": [
//!     {"name": "History", "questions": [{"text": "...", "answer": "..."}]}
//!   ],
//!   "rowValues": [100, 200]
//! }
//! ```
//!
//! Question prices live in `rowValues`, one per row tier, shared by all
//! categories. Validation happens here, at the construction boundary: every
//! category must hold exactly one question per row value (structural
//! symmetry), and row values must be positive.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::board::{Board, Category, Question};
use crate::types::Points;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardSpecError {
    #[error("a board needs at least one category")]
    NoCategories,

    #[error("a board needs at least one row value")]
    NoRowValues,

    #[error("row value {0} is not positive")]
    NonPositiveRowValue(Points),

    #[error("category {name:?} has {got} questions, expected {expected}")]
    RowMismatch {
        name: String,
        got: usize,
        expected: usize,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionSpec {
    pub text: String,
    pub answer: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "questionMedia")]
    pub question_media: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[serde(rename = "answerMedia")]
    pub answer_media: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub name: String,
    pub questions: Vec<QuestionSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardSpec {
    pub categories: Vec<CategorySpec>,
    pub row_values: Vec<Points>,
}

impl BoardSpec {
    /// Validate the spec and lower it into a playable board, assigning the
    /// row value to every question in that tier.
    pub fn into_board(self) -> Result<Board, BoardSpecError> {
        if self.categories.is_empty() {
            return Err(BoardSpecError::NoCategories);
        }
        if self.row_values.is_empty() {
            return Err(BoardSpecError::NoRowValues);
        }
        if let Some(&bad) = self.row_values.iter().find(|&&v| v <= 0) {
            return Err(BoardSpecError::NonPositiveRowValue(bad));
        }
        let rows = self.row_values.len();
        if let Some(c) = self.categories.iter().find(|c| c.questions.len() != rows) {
            return Err(BoardSpecError::RowMismatch {
                name: c.name.clone(),
                got: c.questions.len(),
                expected: rows,
            });
        }

        let row_values = self.row_values;
        let categories = self
            .categories
            .into_iter()
            .map(|c| {
                let questions = c
                    .questions
                    .into_iter()
                    .zip(row_values.iter())
                    .map(|(q, &value)| {
                        Question::new(q.text, q.answer, value)
                            .with_media(q.question_media, q.answer_media)
                    })
                    .collect();
                Category::new(c.name, questions)
            })
            .collect();

        Ok(Board::new(categories))
    }
}
