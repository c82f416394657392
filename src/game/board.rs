use std::fmt;

use super::player::Player;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

/// Column-major grid of chips. Each column is a stack filled from row 0
/// (the bottom) upwards; `heights[col]` is the number of chips in it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Option<Player>; ROWS]; COLS],
    heights: [usize; COLS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    #[error("column {0} is full")]
    ColumnFull(usize),

    #[error("column {0} is outside the board (0..7)")]
    InvalidColumn(usize),
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[None; ROWS]; COLS],
            heights: [0; COLS],
        }
    }

    /// Chip at a position, row 0 being the bottom. `None` for empty cells
    /// and coordinates off the board.
    pub fn chip_at(&self, col: usize, row: usize) -> Option<Player> {
        if col >= COLS || row >= self.heights[col] {
            return None;
        }
        self.cells[col][row]
    }

    /// Number of chips stacked in a column
    pub fn height(&self, col: usize) -> usize {
        self.heights.get(col).copied().unwrap_or(0)
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.heights[col] >= ROWS
    }

    /// Drop a chip in a column, returns the row where it landed
    pub fn place_chip(&mut self, col: usize, player: Player) -> Result<usize, PlacementError> {
        if col >= COLS {
            return Err(PlacementError::InvalidColumn(col));
        }
        if self.is_column_full(col) {
            return Err(PlacementError::ColumnFull(col));
        }

        let row = self.heights[col];
        self.cells[col][row] = Some(player);
        self.heights[col] += 1;
        Ok(row)
    }

    /// Copy of this board with one more chip on `col`, or `None` if it can't
    /// take one.
    pub fn with_chip(&self, col: usize, player: Player) -> Option<Board> {
        let mut next = *self;
        next.place_chip(col, player).ok()?;
        Some(next)
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }

    /// Columns that can still take a chip, in index order
    pub fn legal_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Total number of chips on the board
    pub fn chip_count(&self) -> usize {
        self.heights.iter().sum()
    }

    /// Empty every column
    pub fn reset(&mut self) {
        *self = Board::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..ROWS).rev() {
            for col in 0..COLS {
                let c = self.chip_at(col, row).map_or('.', Player::symbol);
                write!(f, "{c}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
