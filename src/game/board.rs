use std::fmt;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Number of 4-cell windows on the grid: every horizontal, vertical and
/// diagonal run of four cells. 69 for the 6×7 board; recompute if the
/// dimensions ever change, the heuristic normalizes by this.
pub const WINDOW_COUNT: usize =
    ROWS * (COLS - 3) + (ROWS - 3) * COLS + 2 * (ROWS - 3) * (COLS - 3);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

impl Cell {
    /// The side occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Red => Some(Player::Red),
            Cell::Yellow => Some(Player::Yellow),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Red => Cell::Red,
            Player::Yellow => Cell::Yellow,
        }
    }
}

/// How a finished game ended. `Board::terminal_state` returns `None` while
/// the game is still undetermined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

/// 6×7 grid of cells. Row 0 is the top, row 5 the bottom; discs obey
/// gravity, so each column's occupied cells form a contiguous run from the
/// bottom row up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Get the cell at a specific position.
    /// Out-of-range coordinates are a caller bug and panic.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full; out-of-range columns count as full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Drop a disc for `side` into a column, returns the row where it landed.
    /// The board is untouched when the move is rejected.
    pub fn drop_disc(&mut self, col: usize, side: Player) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }
        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = Cell::from(side);
                return Ok(row);
            }
        }

        unreachable!("column has a free cell if is_column_full returned false");
    }

    /// Remove the disc at (row, col), the undo half of `drop_disc`. The
    /// search pairs every drop with exactly one lift on every path, so the
    /// shared board is restored before each frame returns.
    pub fn lift_disc(&mut self, row: usize, col: usize) {
        self.cells[row][col] = Cell::Empty;
    }

    /// Scan the whole board for a finished game: `Winner` on the first
    /// 4-in-a-row found, `Draw` when every cell is occupied, `None` while
    /// play continues.
    ///
    /// Windows are visited in a fixed order (horizontal, vertical,
    /// down-right diagonal, up-right diagonal, each family row-major from
    /// the top) so the result is reproducible. Legal play can never put
    /// four-in-a-row on the board for both sides, so the order does not
    /// affect which winner is reported.
    pub fn terminal_state(&self) -> Option<GameOutcome> {
        // Horizontal windows
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                if let Some(side) = self.cells[row][col].player() {
                    if (1..4).all(|i| self.cells[row][col + i] == self.cells[row][col]) {
                        return Some(GameOutcome::Winner(side));
                    }
                }
            }
        }

        // Vertical windows
        for row in 0..ROWS - 3 {
            for col in 0..COLS {
                if let Some(side) = self.cells[row][col].player() {
                    if (1..4).all(|i| self.cells[row + i][col] == self.cells[row][col]) {
                        return Some(GameOutcome::Winner(side));
                    }
                }
            }
        }

        // Down-right diagonals
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                if let Some(side) = self.cells[row][col].player() {
                    if (1..4).all(|i| self.cells[row + i][col + i] == self.cells[row][col]) {
                        return Some(GameOutcome::Winner(side));
                    }
                }
            }
        }

        // Up-right diagonals
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                if let Some(side) = self.cells[row][col].player() {
                    if (1..4).all(|i| self.cells[row - i][col + i] == self.cells[row][col]) {
                        return Some(GameOutcome::Winner(side));
                    }
                }
            }
        }

        if self.is_full() {
            Some(GameOutcome::Draw)
        } else {
            None
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..ROWS {
            for col in 0..COLS {
                if col > 0 {
                    write!(f, " ")?;
                }
                let glyph = match self.cells[row][col] {
                    Cell::Empty => '.',
                    Cell::Red => 'R',
                    Cell::Yellow => 'Y',
                };
                write!(f, "{glyph}")?;
            }
            writeln!(f)?;
        }
        for col in 1..=COLS {
            if col > 1 {
                write!(f, " ")?;
            }
            write!(f, "{col}")?;
        }
        Ok(())
    }
}
