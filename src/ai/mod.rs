mod agent;
mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use heuristic::{Heuristic, WindowHeuristic};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
