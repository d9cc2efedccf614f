//! Board module - categories and priced questions
//!
//! The board is a static grid: an ordered list of categories, each holding one
//! question per row-value tier. It is immutable for the lifetime of a game
//! except for the one-shot `asked` flag on each question, flipped by the turn
//! machine when a question is selected. A board is exclusively owned by one
//! [`Game`](crate::core::Game), so played-state never aliases across games.

use crate::core::error::GameError;
use crate::types::Points;

/// A prompt/answer/value unit. `asked` transitions false -> true exactly once
/// and never resets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    text: String,
    answer: String,
    value: Points,
    question_media: Option<String>,
    answer_media: Option<String>,
    asked: bool,
}

impl Question {
    pub fn new(text: impl Into<String>, answer: impl Into<String>, value: Points) -> Self {
        Self {
            text: text.into(),
            answer: answer.into(),
            value,
            question_media: None,
            answer_media: None,
            asked: false,
        }
    }

    /// Attach opaque media handles (resolved by the host's media store).
    pub fn with_media(
        mut self,
        question_media: Option<String>,
        answer_media: Option<String>,
    ) -> Self {
        self.question_media = question_media;
        self.answer_media = answer_media;
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn value(&self) -> Points {
        self.value
    }

    pub fn question_media(&self) -> Option<&str> {
        self.question_media.as_deref()
    }

    pub fn answer_media(&self) -> Option<&str> {
        self.answer_media.as_deref()
    }

    pub fn asked(&self) -> bool {
        self.asked
    }

    /// Mark the question as played. Fails on the second call; the flag is
    /// one-shot by contract.
    pub(crate) fn play(&mut self) -> Result<(), GameError> {
        if self.asked {
            return Err(GameError::AlreadyAsked);
        }
        self.asked = true;
        Ok(())
    }
}

/// Named column of questions, row-indexed (one per row-value tier).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    questions: Vec<Question>,
}

impl Category {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn question(&self, row: usize) -> Option<&Question> {
        self.questions.get(row)
    }
}

/// Ordered categories with `(category, row)` lookup.
///
/// Structural symmetry (every category holding as many questions as there are
/// row values) is enforced at the import boundary
/// ([`BoardSpec`](crate::adapter::BoardSpec)), not here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn question(&self, category: usize, row: usize) -> Result<&Question, GameError> {
        self.categories
            .get(category)
            .and_then(|c| c.question(row))
            .ok_or(GameError::NoSuchQuestion { category, row })
    }

    pub(crate) fn question_mut(
        &mut self,
        category: usize,
        row: usize,
    ) -> Result<&mut Question, GameError> {
        self.categories
            .get_mut(category)
            .and_then(|c| c.questions.get_mut(row))
            .ok_or(GameError::NoSuchQuestion { category, row })
    }

    /// True once every question on the board has been played; the natural
    /// end-of-game condition.
    pub fn all_asked(&self) -> bool {
        self.categories
            .iter()
            .all(|c| c.questions.iter().all(|q| q.asked()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_by_two() -> Board {
        Board::new(vec![
            Category::new(
                "History",
                vec![
                    Question::new("Q1", "A1", 100),
                    Question::new("Q2", "A2", 200),
                ],
            ),
            Category::new(
                "Science",
                vec![
                    Question::new("Q3", "A3", 100),
                    Question::new("Q4", "A4", 200),
                ],
            ),
        ])
    }

    #[test]
    fn test_lookup_in_and_out_of_range() {
        let board = two_by_two();
        assert_eq!(board.question(0, 1).unwrap().text(), "Q2");
        assert_eq!(board.question(1, 0).unwrap().value(), 100);

        assert_eq!(
            board.question(2, 0),
            Err(GameError::NoSuchQuestion {
                category: 2,
                row: 0
            })
        );
        assert_eq!(
            board.question(0, 2),
            Err(GameError::NoSuchQuestion {
                category: 0,
                row: 2
            })
        );
    }

    #[test]
    fn test_play_is_one_shot() {
        let mut question = Question::new("Q", "A", 100);
        assert!(!question.asked());

        question.play().unwrap();
        assert!(question.asked());

        assert_eq!(question.play(), Err(GameError::AlreadyAsked));
        // Still asked after the rejected second play.
        assert!(question.asked());
    }

    #[test]
    fn test_all_asked() {
        let mut board = two_by_two();
        assert!(!board.all_asked());

        for category in 0..2 {
            for row in 0..2 {
                board.question_mut(category, row).unwrap().play().unwrap();
            }
        }
        assert!(board.all_asked());
    }

    #[test]
    fn test_media_handles() {
        let question = Question::new("Q", "A", 100).with_media(Some("img-17".to_string()), None);
        assert_eq!(question.question_media(), Some("img-17"));
        assert_eq!(question.answer_media(), None);
    }
}
