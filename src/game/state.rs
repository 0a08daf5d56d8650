use super::board::{self, Board, GameOutcome, COLS};
use super::player::Player;

/// Move rejection at the game level. Wraps the board-level errors and adds
/// `GameOver` for moves submitted after the outcome is decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// A full game position: the grid, whose turn it is, and the outcome once
/// the game has ended. While the game runs, `current_player` is the side to
/// move; after a win it stays on the winner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state
    pub fn initial() -> Self {
        GameState {
            board: Board::new(),
            current_player: Player::Red, // Red starts
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Columns that can still take a disc, lowest index first.
    /// Empty once the game is over.
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLS)
            .filter(|&col| !self.board.is_column_full(col))
            .collect()
    }

    /// Apply a move, returning the successor state. `self` is untouched.
    pub fn apply_move(&self, col: usize) -> Result<GameState, MoveError> {
        let mut next = *self;
        next.apply_move_mut(col)?;
        Ok(next)
    }

    /// Apply a move in place for the current player.
    pub fn apply_move_mut(&mut self, col: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board
            .drop_disc(col, self.current_player)
            .map_err(|err| match err {
                board::MoveError::ColumnFull => MoveError::ColumnFull,
                board::MoveError::InvalidColumn => MoveError::InvalidColumn,
            })?;

        match self.board.terminal_state() {
            Some(outcome) => self.outcome = Some(outcome),
            None => self.current_player = self.current_player.other(),
        }

        Ok(())
    }
}
