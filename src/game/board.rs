/// Default board height.
pub const DEFAULT_ROWS: usize = 6;
/// Default board width.
pub const DEFAULT_COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A gravity-fed grid. Row 0 is the physical bottom; pieces in a column are
/// always packed from row 0 upward with no gaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Board {
    /// Create a new empty board with the given dimensions.
    pub fn new(rows: usize, cols: usize) -> Self {
        Board {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Get the cell at a specific position. Row 0 is the bottom.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row * self.cols + col]
    }

    /// Check whether a column can accept another piece: the index is in
    /// range and the topmost row is still empty.
    pub fn is_valid(&self, col: usize) -> bool {
        col < self.cols && self.get(self.rows - 1, col) == Cell::Empty
    }

    /// First empty row in a column, scanning from the bottom. Callers must
    /// gate on `is_valid`; a full column is unreachable by contract.
    pub fn next_open_row(&self, col: usize) -> usize {
        for row in 0..self.rows {
            if self.get(row, col) == Cell::Empty {
                return row;
            }
        }
        unreachable!("next_open_row called on a full column");
    }

    /// Write a piece into the given cell. The caller supplies the row
    /// obtained from `next_open_row`; no validation happens here.
    pub fn drop_piece(&mut self, row: usize, col: usize, cell: Cell) {
        self.cells[row * self.cols + col] = cell;
    }

    /// Columns currently accepting a piece, in ascending order. An empty
    /// result means the board is full.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.cols).filter(|&col| self.is_valid(col)).collect()
    }

    /// Check if the board is completely full.
    pub fn is_full(&self) -> bool {
        (0..self.cols).all(|col| !self.is_valid(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(DEFAULT_ROWS, DEFAULT_COLS)
    }
}
