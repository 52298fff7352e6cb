use std::fmt;

pub const ROWS: usize = 6;
pub const COLS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Red,
    Yellow,
}

/// A 6x7 Connect Four board. Row 0 is the top, row 5 the bottom; columns
/// fill bottom-up by gravity, so an occupied cell never has an empty cell
/// below it in the same column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [[Cell; COLS]; ROWS],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    ColumnFull,
    InvalidColumn,
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Board {
            cells: [[Cell::Empty; COLS]; ROWS],
        }
    }

    /// Build a board directly from a grid of cells. The caller is trusted
    /// to supply a gravity-consistent position.
    pub fn from_cells(cells: [[Cell; COLS]; ROWS]) -> Self {
        Board { cells }
    }

    /// Get the cell at a specific position
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Check if a column is full
    pub fn is_column_full(&self, col: usize) -> bool {
        if col >= COLS {
            return true;
        }
        self.cells[0][col] != Cell::Empty
    }

    /// Columns that can still receive a piece, in ascending order. This
    /// ordering is the default search order and tie-break for every
    /// search strategy.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..COLS).filter(|&col| !self.is_column_full(col)).collect()
    }

    /// Drop a piece in a column, returns the row where it landed
    pub fn apply_move(&mut self, col: usize, cell: Cell) -> Result<usize, MoveError> {
        if col >= COLS {
            return Err(MoveError::InvalidColumn);
        }

        if self.is_column_full(col) {
            return Err(MoveError::ColumnFull);
        }

        // Find the lowest empty row in this column
        for row in (0..ROWS).rev() {
            if self.cells[row][col] == Cell::Empty {
                self.cells[row][col] = cell;
                return Ok(row);
            }
        }

        unreachable!("column cannot be full if is_column_full returned false");
    }

    /// Remove the topmost occupied cell in a column. Must only be called
    /// immediately after a matching `apply_move` on the same column within
    /// the same search frame: it is the exact inverse of that move.
    pub fn undo_move(&mut self, col: usize) {
        debug_assert!(col < COLS, "undo on out-of-range column {col}");
        for row in 0..ROWS {
            if self.cells[row][col] != Cell::Empty {
                self.cells[row][col] = Cell::Empty;
                return;
            }
        }
        debug_assert!(false, "undo on empty column {col}");
    }

    /// Check if the board is completely full
    pub fn is_full(&self) -> bool {
        (0..COLS).all(|col| self.is_column_full(col))
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    /// Renders the grid with one letter per occupied cell and `_` for
    /// empty, top row first.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    write!(f, " ")?;
                }
                let c = match cell {
                    Cell::Empty => '_',
                    Cell::Red => 'r',
                    Cell::Yellow => 'y',
                };
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
