use std::time::Instant;

use log::debug;

use crate::game::{Board, GameOutcome, GameState, Player, COLS};

use super::agent::Agent;
use super::heuristic::{Heuristic, WindowHeuristic};

/// Depth-limited full-width minimax over the column moves.
///
/// Red maximizes and Yellow minimizes against fixed terminal values: +1 for
/// a Red win, -1 for a Yellow win, 0 for a draw. Every legal column is
/// searched in increasing order with no pruning, so two runs on the same
/// position always return the same column, and equal-valued alternatives
/// resolve to the lowest column index.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

/// Fixed value of a decided position, from Red's perspective.
fn outcome_value(outcome: GameOutcome) -> f64 {
    match outcome {
        GameOutcome::Winner(Player::Red) => 1.0,
        GameOutcome::Winner(Player::Yellow) => -1.0,
        GameOutcome::Draw => 0.0,
    }
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic::default()),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    pub fn with_weights(depth: usize, possible_weight: f64, threat_weight: f64) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(WindowHeuristic::new(possible_weight, threat_weight)),
        }
    }

    /// Search the position and return the column to play, `None` once the
    /// game is over. The state's own board is never touched; the search
    /// works on a copy, pushing and undoing discs in place.
    pub fn recommend(&self, state: &GameState) -> Option<usize> {
        let started = Instant::now();
        let mut board = *state.board();
        let side = state.current_player();

        let (value, column) = match side {
            Player::Red => self.maximize(&mut board, self.depth),
            Player::Yellow => self.minimize(&mut board, self.depth),
        };

        debug!(
            "minimax depth {} for {}: column {:?}, value {:+.4}, took {:?}",
            self.depth,
            side.name(),
            column,
            value,
            started.elapsed()
        );

        column
    }

    /// Red to move: pick the child with the highest value. Terminal
    /// positions are settled before the depth check, so a decided game
    /// keeps its fixed value at any remaining depth.
    fn maximize(&self, board: &mut Board, depth: usize) -> (f64, Option<usize>) {
        if let Some(outcome) = board.terminal_state() {
            return (outcome_value(outcome), None);
        }
        if depth == 0 {
            return (self.heuristic.evaluate(board), None);
        }

        // Below any reachable value; strict > keeps the first best column
        let mut best_value = -2.0;
        let mut best_column = None;

        for col in 0..COLS {
            let Ok(row) = board.drop_disc(col, Player::Red) else {
                continue;
            };
            let (value, _) = self.minimize(board, depth - 1);
            board.lift_disc(row, col);

            if value > best_value {
                best_value = value;
                best_column = Some(col);
            }
        }

        (best_value, best_column)
    }

    /// Yellow to move: mirror image of `maximize`.
    fn minimize(&self, board: &mut Board, depth: usize) -> (f64, Option<usize>) {
        if let Some(outcome) = board.terminal_state() {
            return (outcome_value(outcome), None);
        }
        if depth == 0 {
            return (self.heuristic.evaluate(board), None);
        }

        let mut best_value = 2.0;
        let mut best_column = None;

        for col in 0..COLS {
            let Ok(row) = board.drop_disc(col, Player::Yellow) else {
                continue;
            };
            let (value, _) = self.maximize(board, depth - 1);
            board.lift_disc(row, col);

            if value < best_value {
                best_value = value;
                best_column = Some(col);
            }
        }

        (best_value, best_column)
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        self.recommend(state)
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
