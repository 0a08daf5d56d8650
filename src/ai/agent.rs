use crate::game::GameState;

/// Universal interface for automated players.
pub trait Agent {
    /// Select a column for the current position. `None` means the agent has
    /// no move to offer, which only happens once the game is over.
    fn select_column(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
