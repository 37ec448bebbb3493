use super::{rules, Board, LegalActions, Player};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
    GameOver,
}

/// One game session: the live board, whose turn it is, and the outcome once
/// the game has concluded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create an initial state with the human to move first.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self::with_first_player(rows, cols, Player::Human)
    }

    /// Create an initial state with an explicit first mover.
    pub fn with_first_player(rows: usize, cols: usize, first: Player) -> Self {
        GameState {
            board: Board::new(rows, cols),
            current_player: first,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> LegalActions {
        if self.is_terminal() {
            return LegalActions::new();
        }
        self.board.valid_columns()
    }

    /// Apply a move and return the new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply a move in place (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }
        if column >= self.board.cols() {
            return Err(MoveError::InvalidColumn);
        }
        if !self.board.is_valid(column) {
            return Err(MoveError::ColumnFull);
        }

        let row = self.board.next_open_row(column);
        self.board.drop_piece(row, column, self.current_player.to_cell());

        if rules::has_won(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();
        Ok(())
    }
}
