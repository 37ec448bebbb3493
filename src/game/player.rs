use super::board::Cell;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    /// Get the other player
    pub fn other(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    /// Convert player to cell type
    pub fn to_cell(self) -> Cell {
        match self {
            Player::Human => Cell::Red,
            Player::Ai => Cell::Yellow,
        }
    }

    /// Get player name for display
    pub fn name(self) -> &'static str {
        match self {
            Player::Human => "Human",
            Player::Ai => "Computer",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_player() {
        assert_eq!(Player::Human.other(), Player::Ai);
        assert_eq!(Player::Ai.other(), Player::Human);
    }

    #[test]
    fn test_player_cells_are_distinct() {
        assert_ne!(Player::Human.to_cell(), Player::Ai.to_cell());
        assert_ne!(Player::Human.to_cell(), Cell::Empty);
        assert_ne!(Player::Ai.to_cell(), Cell::Empty);
    }

    #[test]
    fn test_player_name() {
        assert_eq!(Player::Human.name(), "Human");
        assert_eq!(Player::Ai.name(), "Computer");
    }
}
