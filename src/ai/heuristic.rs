use crate::game::{Board, Cell, COLS, ROWS, WINDOW_COUNT};

/// Trait for statically evaluating a board position.
///
/// Scores are absolute rather than side-to-move relative: positive favors
/// Red, negative favors Yellow, and implementations are expected to stay
/// inside [-1, 1] so a proven win or loss always outranks them.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board) -> f64;
}

/// Default evaluator: one pass over every 4-cell window, blending two
/// normalized components.
///
/// A window still winnable by a side (no opposing disc in it) counts toward
/// that side's open lines; a window holding three of a side's discs and one
/// empty cell counts as an immediate threat. Each component is the Red minus
/// Yellow count divided by the total window count, so both live in [-1, 1]:
///
/// ```text
/// value = possible_weight * (open_red - open_yellow) / 69
///       + threat_weight   * (threat_red - threat_yellow) / 69
/// ```
///
/// The caller settles wins and draws before asking for an evaluation; this
/// only grades undecided positions.
pub struct WindowHeuristic {
    possible_weight: f64,
    threat_weight: f64,
}

#[derive(Default)]
struct WindowTally {
    open_red: i32,
    open_yellow: i32,
    threat_red: i32,
    threat_yellow: i32,
}

impl WindowTally {
    /// Classify one window from its cell counts. An all-empty window is
    /// open for both sides.
    fn add(&mut self, red: usize, yellow: usize, empty: usize) {
        if yellow == 0 {
            self.open_red += 1;
        }
        if red == 0 {
            self.open_yellow += 1;
        }
        if red == 3 && empty == 1 {
            self.threat_red += 1;
        }
        if yellow == 3 && empty == 1 {
            self.threat_yellow += 1;
        }
    }

    fn scan(&mut self, board: &Board, row: usize, col: usize, dr: isize, dc: isize) {
        let mut red = 0;
        let mut yellow = 0;
        let mut empty = 0;
        for i in 0..4 {
            let r = (row as isize + dr * i) as usize;
            let c = (col as isize + dc * i) as usize;
            match board.get(r, c) {
                Cell::Red => red += 1,
                Cell::Yellow => yellow += 1,
                Cell::Empty => empty += 1,
            }
        }
        self.add(red, yellow, empty);
    }
}

impl WindowHeuristic {
    pub fn new(possible_weight: f64, threat_weight: f64) -> Self {
        WindowHeuristic {
            possible_weight,
            threat_weight,
        }
    }
}

impl Default for WindowHeuristic {
    fn default() -> Self {
        WindowHeuristic::new(0.5, 0.5)
    }
}

impl Heuristic for WindowHeuristic {
    fn evaluate(&self, board: &Board) -> f64 {
        let mut tally = WindowTally::default();

        // Horizontal
        for row in 0..ROWS {
            for col in 0..COLS - 3 {
                tally.scan(board, row, col, 0, 1);
            }
        }

        // Vertical
        for row in 0..ROWS - 3 {
            for col in 0..COLS {
                tally.scan(board, row, col, 1, 0);
            }
        }

        // Diagonal (down-right)
        for row in 0..ROWS - 3 {
            for col in 0..COLS - 3 {
                tally.scan(board, row, col, 1, 1);
            }
        }

        // Diagonal (up-right)
        for row in 3..ROWS {
            for col in 0..COLS - 3 {
                tally.scan(board, row, col, -1, 1);
            }
        }

        let windows = WINDOW_COUNT as f64;
        let possible = f64::from(tally.open_red - tally.open_yellow) / windows;
        let threats = f64::from(tally.threat_red - tally.threat_yellow) / windows;

        self.possible_weight * possible + self.threat_weight * threats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Player;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    /// Red on the bottom row at columns 0..=2: nine windows touch a red
    /// disc, one of them is a completed threat.
    fn three_reds() -> Board {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_disc(col, Player::Red).unwrap();
        }
        board
    }

    /// Replay `moves` twice, once as given and once with the colors
    /// swapped.
    fn mirrored_boards(moves: &[(usize, Player)]) -> (Board, Board) {
        let mut board = Board::new();
        let mut swapped = Board::new();
        for &(col, side) in moves {
            board.drop_disc(col, side).unwrap();
            swapped.drop_disc(col, side.other()).unwrap();
        }
        (board, swapped)
    }

    #[test]
    fn empty_board_is_zero() {
        // Every window is open for both sides, so the components cancel
        let h = WindowHeuristic::default();
        let value = h.evaluate(&Board::new());
        assert!(value.abs() < f64::EPSILON, "expected 0, got {value}");
    }

    #[test]
    fn open_line_component_counts_red_only_windows() {
        let h = WindowHeuristic::new(1.0, 0.0);
        let value = h.evaluate(&three_reds());
        let expected = 9.0 / 69.0;
        assert!(
            (value - expected).abs() < 1e-12,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn threat_component_counts_three_plus_empty() {
        let h = WindowHeuristic::new(0.0, 1.0);
        let value = h.evaluate(&three_reds());
        let expected = 1.0 / 69.0;
        assert!(
            (value - expected).abs() < 1e-12,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn default_weights_blend_components() {
        let h = WindowHeuristic::default();
        let value = h.evaluate(&three_reds());
        let expected = 5.0 / 69.0;
        assert!(
            (value - expected).abs() < 1e-12,
            "expected {expected}, got {value}"
        );
    }

    #[test]
    fn yellow_position_scores_negative() {
        let mut board = Board::new();
        for col in 0..3 {
            board.drop_disc(col, Player::Yellow).unwrap();
        }
        let h = WindowHeuristic::default();
        let value = h.evaluate(&board);
        assert!(value < 0.0, "Yellow material should score negative, got {value}");
    }

    #[test]
    fn swapping_colors_negates_the_score() {
        let moves = [
            (3, Player::Red),
            (3, Player::Yellow),
            (2, Player::Red),
            (4, Player::Yellow),
            (2, Player::Red),
            (5, Player::Yellow),
            (1, Player::Red),
        ];
        let h = WindowHeuristic::default();
        for n in 0..=moves.len() {
            let (board, swapped) = mirrored_boards(&moves[..n]);
            let value = h.evaluate(&board);
            let mirrored = h.evaluate(&swapped);
            assert!(
                (value + mirrored).abs() < 1e-12,
                "after {n} moves: {value} vs {mirrored}"
            );
        }
    }

    #[test]
    fn value_stays_bounded_on_random_positions() {
        let h = WindowHeuristic::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..50 {
            let mut board = Board::new();
            let mut side = Player::Red;
            while board.terminal_state().is_none() {
                let col = rng.random_range(0..COLS);
                if board.drop_disc(col, side).is_err() {
                    continue;
                }
                side = side.other();
                let value = h.evaluate(&board);
                assert!(
                    value.abs() <= 1.0,
                    "value {value} escaped [-1, 1]"
                );
            }
        }
    }
}
