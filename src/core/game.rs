//! Game module - turn sequencing across players and the board
//!
//! The game owns the roster, the board, the rules, and the current turn, and
//! exposes the single command surface hosts drive. Commands delegate to the
//! turn machine and propagate its errors unchanged. When a turn resolves, the
//! game rotates the starter by one position (wrapping) and starts a fresh
//! turn, unless the board is exhausted, in which case no turn remains and the
//! game is finished.

use crate::core::board::Board;
use crate::core::error::GameError;
use crate::core::player::Player;
use crate::core::rules::GameRules;
use crate::core::turn::Turn;
use crate::types::TurnState;

#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    players: Vec<Player>,
    board: Board,
    rules: GameRules,
    current_player_index: usize,
    /// None once the board is exhausted; the game is then finished.
    turn: Option<Turn>,
}

impl Game {
    /// Build a game over a fresh board. The board is moved in: one board per
    /// game, so played-state cannot leak across games.
    ///
    /// Fails on an empty roster or duplicate player ids; membership and order
    /// are fixed for the whole game.
    pub fn new(players: Vec<Player>, board: Board, rules: GameRules) -> Result<Self, GameError> {
        if players.is_empty() {
            return Err(GameError::InvalidSetup(
                "a game needs at least one player".to_string(),
            ));
        }
        for (i, player) in players.iter().enumerate() {
            if players[..i].iter().any(|p| p.id() == player.id()) {
                return Err(GameError::InvalidSetup(format!(
                    "duplicate player id: {}",
                    player.id()
                )));
            }
        }

        let turn = if board.all_asked() {
            None
        } else {
            Some(Turn::new(0, players.len(), rules))
        };

        Ok(Self {
            players,
            board,
            rules,
            current_player_index: 0,
            turn,
        })
    }

    // ===== Read accessors =====

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn rules(&self) -> GameRules {
        self.rules
    }

    pub fn turn(&self) -> Option<&Turn> {
        self.turn.as_ref()
    }

    pub fn current_player_index(&self) -> usize {
        self.current_player_index
    }

    pub fn current_player(&self) -> &Player {
        &self.players[self.current_player_index]
    }

    /// True once every question has been played and the last turn closed.
    pub fn is_finished(&self) -> bool {
        self.turn.is_none()
    }

    /// Roster index for a player id.
    pub fn player_index(&self, id: &str) -> Option<usize> {
        self.players.iter().position(|p| p.id() == id)
    }

    // ===== Commands (delegate to the current turn) =====

    pub fn select_question(&mut self, category: usize, row: usize) -> Result<(), GameError> {
        let turn = self.turn.as_mut().ok_or(GameError::GameFinished)?;
        turn.select_question(&mut self.board, category, row)
    }

    pub fn answer(&mut self, correct: bool) -> Result<(), GameError> {
        let turn = self.turn.as_mut().ok_or(GameError::GameFinished)?;
        turn.submit_answer(&mut self.players, correct)
    }

    pub fn buzz(&mut self, player_id: &str) -> Result<(), GameError> {
        let player = self
            .player_index(player_id)
            .ok_or_else(|| GameError::UnknownPlayer {
                id: player_id.to_string(),
            })?;
        let turn = self.turn.as_mut().ok_or(GameError::GameFinished)?;
        turn.buzz(&self.players, player)
    }

    pub fn pass(&mut self) -> Result<(), GameError> {
        let turn = self.turn.as_mut().ok_or(GameError::GameFinished)?;
        turn.pass()
    }

    /// Close the resolving turn. On success the turn has reached `Resolved`,
    /// so the starter rotates and the next turn begins (or the game ends).
    pub fn continue_turn(&mut self) -> Result<(), GameError> {
        let turn = self.turn.as_mut().ok_or(GameError::GameFinished)?;
        turn.continue_turn()?;
        if turn.state() == TurnState::Resolved {
            self.advance();
        }
        Ok(())
    }

    fn advance(&mut self) {
        self.current_player_index = (self.current_player_index + 1) % self.players.len();
        self.turn = if self.board.all_asked() {
            None
        } else {
            Some(Turn::new(
                self.current_player_index,
                self.players.len(),
                self.rules,
            ))
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::board::{Category, Question};

    fn players(names: &[&str]) -> Vec<Player> {
        names
            .iter()
            .map(|n| Player::new(n.to_lowercase(), *n))
            .collect()
    }

    fn board(categories: usize, rows: usize) -> Board {
        Board::new(
            (0..categories)
                .map(|c| {
                    Category::new(
                        format!("Category {c}"),
                        (0..rows)
                            .map(|r| {
                                Question::new(
                                    format!("Q{c}-{r}"),
                                    format!("A{c}-{r}"),
                                    100 * (r as i32 + 1),
                                )
                            })
                            .collect(),
                    )
                })
                .collect(),
        )
    }

    fn resolve_current_question(game: &mut Game, category: usize, row: usize) {
        game.select_question(category, row).unwrap();
        game.answer(true).unwrap();
        game.continue_turn().unwrap();
    }

    #[test]
    fn test_setup_validation() {
        assert_eq!(
            Game::new(Vec::new(), board(1, 1), GameRules::classic()),
            Err(GameError::InvalidSetup(
                "a game needs at least one player".to_string()
            ))
        );

        let dup = vec![Player::new("a", "Alice"), Player::new("a", "Alan")];
        assert_eq!(
            Game::new(dup, board(1, 1), GameRules::classic()),
            Err(GameError::InvalidSetup(
                "duplicate player id: a".to_string()
            ))
        );
    }

    #[test]
    fn test_starter_rotates_by_one_wrapping() {
        let mut game = Game::new(
            players(&["Alice", "Bob", "Charlie"]),
            board(1, 4),
            GameRules::classic(),
        )
        .unwrap();
        assert_eq!(game.current_player().id(), "alice");

        resolve_current_question(&mut game, 0, 0);
        assert_eq!(game.current_player().id(), "bob");
        assert_eq!(game.turn().unwrap().starting_player(), 1);

        resolve_current_question(&mut game, 0, 1);
        assert_eq!(game.current_player().id(), "charlie");

        resolve_current_question(&mut game, 0, 2);
        assert_eq!(game.current_player().id(), "alice");
    }

    #[test]
    fn test_game_finishes_when_board_is_exhausted() {
        let mut game = Game::new(
            players(&["Alice", "Bob"]),
            board(1, 1),
            GameRules::classic(),
        )
        .unwrap();
        assert!(!game.is_finished());

        resolve_current_question(&mut game, 0, 0);
        assert!(game.is_finished());
        assert!(game.turn().is_none());
        // Rotation still happened before the game closed.
        assert_eq!(game.current_player().id(), "bob");

        assert_eq!(game.select_question(0, 0), Err(GameError::GameFinished));
        assert_eq!(game.answer(true), Err(GameError::GameFinished));
        assert_eq!(game.pass(), Err(GameError::GameFinished));
        assert_eq!(game.continue_turn(), Err(GameError::GameFinished));
    }

    #[test]
    fn test_buzz_resolves_player_id() {
        let mut game = Game::new(
            players(&["Alice", "Bob"]),
            board(1, 2),
            GameRules::classic(),
        )
        .unwrap();
        game.select_question(0, 0).unwrap();
        game.answer(false).unwrap();

        assert_eq!(
            game.buzz("nobody"),
            Err(GameError::UnknownPlayer {
                id: "nobody".to_string()
            })
        );

        game.buzz("bob").unwrap();
        assert_eq!(game.turn().unwrap().active_player(), 1);
    }

    #[test]
    fn test_errors_propagate_unchanged() {
        let mut game = Game::new(
            players(&["Alice", "Bob"]),
            board(1, 2),
            GameRules::classic(),
        )
        .unwrap();

        assert_eq!(
            game.answer(true),
            Err(GameError::InvalidState {
                action: "answer",
                state: TurnState::Selecting,
            })
        );
        assert_eq!(
            game.select_question(5, 0),
            Err(GameError::NoSuchQuestion {
                category: 5,
                row: 0
            })
        );

        game.select_question(0, 0).unwrap();
        let mut second = game.clone();
        // Re-selecting the played question from a later turn fails.
        second.answer(true).unwrap();
        second.continue_turn().unwrap();
        assert_eq!(second.select_question(0, 0), Err(GameError::AlreadyAsked));
    }

    #[test]
    fn test_single_player_game_auto_resolves_on_wrong_answer() {
        let mut game =
            Game::new(players(&["Alice"]), board(1, 1), GameRules::classic()).unwrap();
        game.select_question(0, 0).unwrap();
        game.answer(false).unwrap();
        // The only player is locked out, so the turn is already resolving.
        assert_eq!(game.turn().unwrap().state(), TurnState::Resolving);
        game.continue_turn().unwrap();
        assert!(game.is_finished());
        assert_eq!(game.players()[0].score(), -50);
    }
}
