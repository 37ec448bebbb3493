//! Positional scoring: every 4-cell window on the board is rated for the
//! given player, plus a bonus for occupying the center column.

use crate::game::{Board, Cell, Player, WINDOW_LENGTH};

/// Score a single 4-cell window from `player`'s perspective.
///
/// +100 for four own pieces, +5 for three own and one empty, +2 for two own
/// and two empty. A window holding three opponent pieces and one empty cell
/// costs 4 on top of that. Anything else scores 0.
pub fn evaluate_window(window: &[Cell; WINDOW_LENGTH], player: Player) -> i32 {
    let own_cell = player.to_cell();
    let opp_cell = player.other().to_cell();

    let own = window.iter().filter(|&&c| c == own_cell).count();
    let opp = window.iter().filter(|&&c| c == opp_cell).count();
    let empty = window.iter().filter(|&&c| c == Cell::Empty).count();

    let mut score = 0;
    if own == 4 {
        score += 100;
    } else if own == 3 && empty == 1 {
        score += 5;
    } else if own == 2 && empty == 2 {
        score += 2;
    }
    if opp == 3 && empty == 1 {
        score -= 4;
    }
    score
}

/// Sum `evaluate_window` over every horizontal, vertical, and diagonal
/// window on the board, plus 3 points per own piece in the center column.
pub fn score_position(board: &Board, player: Player) -> i32 {
    let rows = board.rows();
    let cols = board.cols();
    let mut score = 0;

    // Center column bonus
    let center = cols / 2;
    for row in 0..rows {
        if board.get(row, center) == player.to_cell() {
            score += 3;
        }
    }

    // Horizontal
    for row in 0..rows {
        for col in 0..=cols - WINDOW_LENGTH {
            let window: [Cell; WINDOW_LENGTH] =
                std::array::from_fn(|i| board.get(row, col + i));
            score += evaluate_window(&window, player);
        }
    }

    // Vertical
    for col in 0..cols {
        for row in 0..=rows - WINDOW_LENGTH {
            let window: [Cell; WINDOW_LENGTH] =
                std::array::from_fn(|i| board.get(row + i, col));
            score += evaluate_window(&window, player);
        }
    }

    // Diagonal, rising left to right
    for row in 0..=rows - WINDOW_LENGTH {
        for col in 0..=cols - WINDOW_LENGTH {
            let window: [Cell; WINDOW_LENGTH] =
                std::array::from_fn(|i| board.get(row + i, col + i));
            score += evaluate_window(&window, player);
        }
    }

    // Diagonal, falling left to right
    for row in 0..=rows - WINDOW_LENGTH {
        for col in 0..=cols - WINDOW_LENGTH {
            let window: [Cell; WINDOW_LENGTH] =
                std::array::from_fn(|i| board.get(row + WINDOW_LENGTH - 1 - i, col + i));
            score += evaluate_window(&window, player);
        }
    }

    score
}
