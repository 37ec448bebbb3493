use crate::game::GameState;

/// Universal interface for all computer opponents.
pub trait Agent {
    /// Select a column to play given the current game state.
    fn select_action(&mut self, state: &GameState) -> usize;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
