use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use crate::game::GameState;

use super::agent::Agent;

/// An agent that selects uniformly at random among the open columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Seeded variant for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        let columns = state.legal_columns();
        if columns.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..columns.len());
        Some(columns[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_agent_selects_legal_column() {
        let mut agent = RandomAgent::new();
        let state = GameState::initial();
        let legal = state.legal_columns();

        for _ in 0..100 {
            let column = agent.select_column(&state).unwrap();
            assert!(legal.contains(&column), "Column {} is not legal", column);
        }
    }

    #[test]
    fn test_random_agent_plays_full_game() {
        let mut agent1 = RandomAgent::new();
        let mut agent2 = RandomAgent::new();
        let mut state = GameState::initial();

        let mut turn = 0;
        while !state.is_terminal() {
            let column = if turn % 2 == 0 {
                agent1.select_column(&state).unwrap()
            } else {
                agent2.select_column(&state).unwrap()
            };
            state = state.apply_move(column).unwrap();
            turn += 1;
        }

        assert!(state.is_terminal());
        assert!(state.outcome().is_some());
        assert_eq!(agent1.select_column(&state), None);
    }

    #[test]
    fn test_seeded_agents_repeat_their_choices() {
        let mut first = RandomAgent::with_seed(9);
        let mut second = RandomAgent::with_seed(9);
        let state = GameState::initial();

        for _ in 0..20 {
            assert_eq!(first.select_column(&state), second.select_column(&state));
        }
    }

    #[test]
    fn test_random_agent_name() {
        let agent = RandomAgent::new();
        assert_eq!(agent.name(), "Random");
    }
}
