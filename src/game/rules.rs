//! Win and terminal detection: pure scans over a board, no state.

use super::board::Board;
use super::player::Player;

/// Length of a winning alignment (and of every scoring window).
pub const WINDOW_LENGTH: usize = 4;

/// Check whether `player` has four in a row in any of the four orientations:
/// horizontal, vertical, diagonal up-right, diagonal down-right. Scans
/// row-major per orientation and short-circuits on the first match.
pub fn has_won(board: &Board, player: Player) -> bool {
    let piece = player.to_cell();
    let rows = board.rows();
    let cols = board.cols();

    // Horizontal
    for row in 0..rows {
        for col in 0..=cols - WINDOW_LENGTH {
            if (0..WINDOW_LENGTH).all(|i| board.get(row, col + i) == piece) {
                return true;
            }
        }
    }

    // Vertical
    for col in 0..cols {
        for row in 0..=rows - WINDOW_LENGTH {
            if (0..WINDOW_LENGTH).all(|i| board.get(row + i, col) == piece) {
                return true;
            }
        }
    }

    // Diagonal, rising left to right
    for row in 0..=rows - WINDOW_LENGTH {
        for col in 0..=cols - WINDOW_LENGTH {
            if (0..WINDOW_LENGTH).all(|i| board.get(row + i, col + i) == piece) {
                return true;
            }
        }
    }

    // Diagonal, falling left to right
    for row in WINDOW_LENGTH - 1..rows {
        for col in 0..=cols - WINDOW_LENGTH {
            if (0..WINDOW_LENGTH).all(|i| board.get(row - i, col + i) == piece) {
                return true;
            }
        }
    }

    false
}

/// True iff the game has concluded: either player has won, or no column can
/// accept another piece (a draw).
pub fn is_terminal(board: &Board) -> bool {
    has_won(board, Player::Human) || has_won(board, Player::Ai) || board.is_full()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::board::Cell;

    fn drop_in(board: &mut Board, col: usize, cell: Cell) {
        let row = board.next_open_row(col);
        board.drop_piece(row, col, cell);
    }

    #[test]
    fn test_horizontal_win() {
        let mut board = Board::default();
        for col in 2..6 {
            drop_in(&mut board, col, Cell::Red);
        }
        assert!(has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Ai));
    }

    #[test]
    fn test_vertical_win() {
        let mut board = Board::default();
        for _ in 0..4 {
            drop_in(&mut board, 3, Cell::Yellow);
        }
        assert!(has_won(&board, Player::Ai));
        assert!(!has_won(&board, Player::Human));
    }

    #[test]
    fn test_diagonal_up_win() {
        let mut board = Board::default();
        // Staircase: red at (0,0), (1,1), (2,2), (3,3)
        drop_in(&mut board, 0, Cell::Red);

        drop_in(&mut board, 1, Cell::Yellow);
        drop_in(&mut board, 1, Cell::Red);

        drop_in(&mut board, 2, Cell::Yellow);
        drop_in(&mut board, 2, Cell::Yellow);
        drop_in(&mut board, 2, Cell::Red);

        drop_in(&mut board, 3, Cell::Yellow);
        drop_in(&mut board, 3, Cell::Yellow);
        drop_in(&mut board, 3, Cell::Yellow);
        drop_in(&mut board, 3, Cell::Red);

        assert!(has_won(&board, Player::Human));
    }

    #[test]
    fn test_diagonal_down_win() {
        let mut board = Board::default();
        // Staircase the other way: red at (3,3), (2,4), (1,5), (0,6)
        drop_in(&mut board, 6, Cell::Red);

        drop_in(&mut board, 5, Cell::Yellow);
        drop_in(&mut board, 5, Cell::Red);

        drop_in(&mut board, 4, Cell::Yellow);
        drop_in(&mut board, 4, Cell::Yellow);
        drop_in(&mut board, 4, Cell::Red);

        drop_in(&mut board, 3, Cell::Yellow);
        drop_in(&mut board, 3, Cell::Yellow);
        drop_in(&mut board, 3, Cell::Yellow);
        drop_in(&mut board, 3, Cell::Red);

        assert!(has_won(&board, Player::Human));
    }

    #[test]
    fn test_three_in_a_row_is_not_a_win() {
        let mut board = Board::default();
        for col in 0..3 {
            drop_in(&mut board, col, Cell::Red);
        }
        assert!(!has_won(&board, Player::Human));
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_empty_board_is_not_terminal() {
        let board = Board::default();
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_win_is_terminal() {
        let mut board = Board::default();
        for col in 0..4 {
            drop_in(&mut board, col, Cell::Yellow);
        }
        assert!(is_terminal(&board));
    }

    #[test]
    fn test_full_board_without_winner_is_terminal() {
        let mut board = Board::default();
        // Rows alternate two complementary patterns with runs of at most two,
        // which also breaks every diagonal.
        let bottom = [
            Cell::Red,
            Cell::Red,
            Cell::Yellow,
            Cell::Yellow,
            Cell::Red,
            Cell::Red,
            Cell::Yellow,
        ];
        for row in 0..board.rows() {
            for (col, &cell) in bottom.iter().enumerate() {
                let cell = if row % 2 == 0 {
                    cell
                } else if cell == Cell::Red {
                    Cell::Yellow
                } else {
                    Cell::Red
                };
                board.drop_piece(row, col, cell);
            }
        }

        assert!(board.is_full());
        assert!(!has_won(&board, Player::Human));
        assert!(!has_won(&board, Player::Ai));
        assert!(is_terminal(&board));
    }
}
