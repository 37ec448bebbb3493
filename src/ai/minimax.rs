//! Depth-limited minimax over disposable board clones. No pruning; every
//! valid column is explored at every ply.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::heuristic;
use crate::game::{rules, Board, GameState, Player};

use super::agent::Agent;

/// Score of a decided position. A large finite sentinel, so that ordinary
/// integer comparisons stay well-defined.
pub const WIN_SCORE: i32 = 999_999;

/// Default search depth in plies.
pub const DEFAULT_DEPTH: usize = 3;

/// Explore all continuations of `board` to the given depth and return the
/// best column together with its minimax value.
///
/// Terminal positions score `WIN_SCORE` for a computer win, `-WIN_SCORE`
/// for a human win, and 0 for a full-board draw, with no column attached.
/// At `depth == 0` the frontier is scored with [`heuristic::score_position`]
/// from the computer's perspective, regardless of whose turn it is. The
/// mover alternates with `maximizing`: the computer's piece drops on
/// maximizing plies, the human's on minimizing plies.
pub fn search<R: Rng>(
    board: &Board,
    depth: usize,
    maximizing: bool,
    rng: &mut R,
) -> (Option<usize>, i32) {
    if rules::is_terminal(board) {
        return if rules::has_won(board, Player::Ai) {
            (None, WIN_SCORE)
        } else if rules::has_won(board, Player::Human) {
            (None, -WIN_SCORE)
        } else {
            (None, 0)
        };
    }

    if depth == 0 {
        return (None, heuristic::score_position(board, Player::Ai));
    }

    // Non-terminal, so at least one column is open.
    let valid = board.valid_columns();
    // Pre-seed the incumbent; the first explored child always replaces it.
    let mut column = valid[rng.random_range(0..valid.len())];

    if maximizing {
        let mut value = i32::MIN;
        for &col in &valid {
            let row = board.next_open_row(col);
            let mut child = board.clone();
            child.drop_piece(row, col, Player::Ai.to_cell());
            let (_, score) = search(&child, depth - 1, false, rng);
            if score > value {
                value = score;
                column = col;
            }
        }
        (Some(column), value)
    } else {
        let mut value = i32::MAX;
        for &col in &valid {
            let row = board.next_open_row(col);
            let mut child = board.clone();
            child.drop_piece(row, col, Player::Human.to_cell());
            let (_, score) = search(&child, depth - 1, true, rng);
            if score < value {
                value = score;
                column = col;
            }
        }
        (Some(column), value)
    }
}

/// Agent that plays the computer side with fixed-depth minimax.
pub struct MinimaxAgent {
    depth: usize,
    rng: StdRng,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            rng: StdRng::from_os_rng(),
        }
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> usize {
        let legal = state.legal_actions();
        assert!(!legal.is_empty(), "No legal actions available");
        let (column, _score) = search(state.board(), self.depth, true, &mut self.rng);
        column.expect("non-terminal search returns a column")
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
