//! Board module - manages the settled grid
//!
//! The board is a 20x10 grid where each cell is either empty or holds the kind
//! of the piece that was locked there. It never contains the falling piece.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (row, col) where row 0 is the top and col 0 the left edge.

use crate::error::EngineError;
use crate::types::{Cell, GridPoint, ShapeKind, BOARD_COLS, BOARD_ROWS};

const COLS: usize = BOARD_COLS as usize;
const ROWS: usize = BOARD_ROWS as usize;

/// Total number of cells on the board
const BOARD_SIZE: usize = COLS * ROWS;

/// The settled grid - 20 rows x 10 columns using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (row * COLS + col)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (row, col)
    #[inline(always)]
    fn index(row: i8, col: i8) -> Option<usize> {
        if Self::in_bounds(row, col) {
            Some(row as usize * COLS + col as usize)
        } else {
            None
        }
    }

    #[inline(always)]
    fn in_bounds(row: i8, col: i8) -> bool {
        (0..BOARD_ROWS as i8).contains(&row) && (0..BOARD_COLS as i8).contains(&col)
    }

    pub fn rows(&self) -> u8 {
        BOARD_ROWS
    }

    pub fn cols(&self) -> u8 {
        BOARD_COLS
    }

    /// Get cell at (row, col); `None` if out of bounds
    pub fn cell(&self, row: i8, col: i8) -> Option<Cell> {
        Self::index(row, col).map(|idx| self.cells[idx])
    }

    /// Set cell at (row, col); returns false if out of bounds.
    ///
    /// Bypasses lock validation. Meant for fixtures and benchmarks; gameplay
    /// writes go through [`Board::lock`].
    pub fn set(&mut self, row: i8, col: i8, cell: Cell) -> bool {
        match Self::index(row, col) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether an in-bounds cell is occupied.
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the board; callers bounds-check first.
    pub fn is_occupied(&self, row: i8, col: i8) -> bool {
        match Self::index(row, col) {
            Some(idx) => self.cells[idx].is_some(),
            None => panic!("is_occupied out of bounds: row {row}, col {col}"),
        }
    }

    /// True iff every cell is inside the board and empty.
    ///
    /// This is the only collision test in the engine; moves, rotations,
    /// spawns and landing probes all go through it.
    pub fn is_valid_placement(&self, cells: &[GridPoint; 4]) -> bool {
        cells
            .iter()
            .all(|p| Self::in_bounds(p.row, p.col) && !self.is_occupied(p.row, p.col))
    }

    /// Write `kind` into the four cells.
    ///
    /// All cells are checked before anything is written, so a rejected lock
    /// leaves the board untouched.
    pub fn lock(&mut self, cells: &[GridPoint; 4], kind: ShapeKind) -> Result<(), EngineError> {
        for p in cells {
            let Some(idx) = Self::index(p.row, p.col) else {
                return Err(EngineError::LockOutOfBounds {
                    row: p.row,
                    col: p.col,
                });
            };
            if self.cells[idx].is_some() {
                return Err(EngineError::LockOccupied {
                    row: p.row,
                    col: p.col,
                });
            }
        }

        for p in cells {
            self.set(p.row, p.col, Some(kind));
        }
        Ok(())
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, row: usize) -> bool {
        if row >= ROWS {
            return false;
        }
        let start = row * COLS;
        self.cells[start..start + COLS].iter().all(Option::is_some)
    }

    /// Clear one row and shift every row above it down by one.
    /// Returns the number of rows cleared (1, or 0 if `row` is out of range).
    pub fn clear_row(&mut self, row: usize) -> usize {
        if row >= ROWS {
            return 0;
        }

        // copy_within handles the overlapping ranges
        for r in (1..=row).rev() {
            let src_start = (r - 1) * COLS;
            self.cells.copy_within(src_start..src_start + COLS, r * COLS);
        }

        self.cells[..COLS].fill(None);
        1
    }

    /// Clear all full rows and compact the stack; returns how many rows were cleared.
    ///
    /// Single bottom-to-top pass with a read and a write cursor: non-full rows
    /// are copied down to the write cursor, full rows are skipped, and the rows
    /// left above the write cursor are emptied. Non-adjacent full rows are
    /// handled in the same pass.
    pub fn clear_full_rows(&mut self) -> usize {
        let mut cleared = 0;
        let mut write_row = ROWS;

        for read_row in (0..ROWS).rev() {
            if self.is_row_full(read_row) {
                cleared += 1;
                continue;
            }

            write_row -= 1;
            if write_row != read_row {
                let src_start = read_row * COLS;
                self.cells
                    .copy_within(src_start..src_start + COLS, write_row * COLS);
            }
        }

        self.cells[..write_row * COLS].fill(None);
        cleared
    }

    /// One row of cells, left to right.
    ///
    /// # Panics
    ///
    /// Panics if `row >= BOARD_ROWS`.
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * COLS;
        &self.cells[start..start + COLS]
    }

    /// Iterate rows from top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLS)
    }

    /// Number of settled cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), ROWS);
        assert!(cells_2d.iter().all(|row| row.len() == COLS));

        let mut flat = [None; BOARD_SIZE];
        for (r, row) in cells_2d.iter().enumerate() {
            flat[r * COLS..(r + 1) * COLS].copy_from_slice(row);
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.iter_rows().map(<[Cell]>::to_vec).collect()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
