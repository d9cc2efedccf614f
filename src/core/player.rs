//! Player - score-holding identity.

use crate::types::Points;

/// A participant in the game. Created once at setup and lives for the whole
/// game; the score is only ever mutated through [`Player::add_score`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Player {
    id: String,
    name: String,
    score: Points,
}

impl Player {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            score: 0,
        }
    }

    /// Stable identity, unique within a game.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn score(&self) -> Points {
        self.score
    }

    /// Apply a signed score delta. The single mutation point for scores.
    pub fn add_score(&mut self, delta: Points) {
        self.score = self.score.saturating_add(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_starts_at_zero_and_accumulates() {
        let mut player = Player::new("alice", "Alice");
        assert_eq!(player.score(), 0);

        player.add_score(100);
        assert_eq!(player.score(), 100);

        player.add_score(-150);
        assert_eq!(player.score(), -50);
    }
}
