//! Computer opponents: the agent seam, the windowed positional heuristic,
//! and the policies built on it (minimax, greedy one-ply, random).

mod agent;
mod greedy;
pub mod heuristic;
mod minimax;
mod random;

pub use agent::Agent;
pub use greedy::{pick_best_move, GreedyAgent};
pub use minimax::{search, MinimaxAgent, DEFAULT_DEPTH, WIN_SCORE};
pub use random::RandomAgent;
