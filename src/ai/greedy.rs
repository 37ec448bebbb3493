use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::heuristic;
use crate::game::{Board, GameState, Player};

use super::agent::Agent;

/// Choose the column whose single drop maximizes the positional score for
/// `player`. One ply only, no recursion.
pub fn pick_best_move<R: Rng>(board: &Board, player: Player, rng: &mut R) -> usize {
    let valid = board.valid_columns();
    assert!(!valid.is_empty(), "No valid columns available");

    let mut best_score = i32::MIN;
    // Pre-seed the incumbent; the first explored column always replaces it.
    let mut best_col = valid[rng.random_range(0..valid.len())];

    for &col in &valid {
        let row = board.next_open_row(col);
        let mut child = board.clone();
        child.drop_piece(row, col, player.to_cell());
        let score = heuristic::score_position(&child, player);
        if score > best_score {
            best_score = score;
            best_col = col;
        }
    }

    best_col
}

/// Agent that plays the highest-scoring immediate drop. A weaker, cheaper
/// alternative to the minimax agent.
pub struct GreedyAgent {
    rng: StdRng,
}

impl GreedyAgent {
    pub fn new() -> Self {
        GreedyAgent {
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for GreedyAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for GreedyAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        pick_best_move(state.board(), state.current_player(), &mut self.rng)
    }

    fn name(&self) -> &str {
        "Greedy"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::{Cell, DEFAULT_COLS, DEFAULT_ROWS};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    fn drop_in(board: &mut Board, col: usize, cell: Cell) {
        let row = board.next_open_row(col);
        board.drop_piece(row, col, cell);
    }

    #[test]
    fn test_completes_four_in_a_row() {
        let mut board = Board::default();
        for col in 0..3 {
            drop_in(&mut board, col, Cell::Yellow);
        }

        // Completing the line scores +100, far above any other drop
        assert_eq!(pick_best_move(&board, Player::Ai, &mut rng()), 3);
    }

    #[test]
    fn test_prefers_center_on_empty_board() {
        let board = Board::default();
        assert_eq!(pick_best_move(&board, Player::Ai, &mut rng()), 3);
    }

    #[test]
    fn test_selects_legal_action() {
        let mut agent = GreedyAgent::new();
        let state = GameState::with_first_player(DEFAULT_ROWS, DEFAULT_COLS, Player::Ai);
        let legal = state.legal_actions();
        let action = agent.select_action(&state);
        assert!(legal.contains(&action), "Action {action} is not legal");
    }

    #[test]
    fn test_name_is_greedy() {
        let agent = GreedyAgent::new();
        assert_eq!(agent.name(), "Greedy");
    }
}
