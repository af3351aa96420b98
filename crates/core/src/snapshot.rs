use std::time::Duration;

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::shapes::definition_for;
use crate::types::{GridPoint, ShapeKind, BOARD_COLS, BOARD_ROWS};

const COLS: usize = BOARD_COLS as usize;
const ROWS: usize = BOARD_ROWS as usize;

/// One board cell as seen by a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CellSnapshot {
    pub occupied: bool,
    /// `0xRRGGBB`, 0 when empty
    pub color_id: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BoardSnapshot {
    pub cells: [[CellSnapshot; COLS]; ROWS],
}

impl BoardSnapshot {
    pub fn write_from(&mut self, board: &Board) {
        for (out_row, row) in self.cells.iter_mut().zip(board.iter_rows()) {
            for (out, cell) in out_row.iter_mut().zip(row) {
                *out = match cell {
                    Some(kind) => CellSnapshot {
                        occupied: true,
                        color_id: definition_for(*kind).color_id(),
                    },
                    None => CellSnapshot::default(),
                };
            }
        }
    }

    /// Cell at (row, col).
    ///
    /// # Panics
    ///
    /// Panics if (row, col) is outside the board.
    pub fn cell(&self, row: usize, col: usize) -> CellSnapshot {
        self.cells[row][col]
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let mut s = Self::default();
        s.write_from(board);
        s
    }
}

impl Default for BoardSnapshot {
    fn default() -> Self {
        Self {
            cells: [[CellSnapshot::default(); COLS]; ROWS],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub anchor: GridPoint,
}

impl ActiveSnapshot {
    /// Absolute cells, for drawing the falling piece over the board
    pub fn cells(&self) -> [GridPoint; 4] {
        ActivePiece::from(*self).cells()
    }

    pub fn color_id(&self) -> u32 {
        definition_for(self.kind).color_id()
    }
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            anchor: value.anchor,
        }
    }
}

impl From<ActiveSnapshot> for ActivePiece {
    fn from(value: ActiveSnapshot) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            anchor: value.anchor,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TimersSnapshot {
    pub fall: Duration,
    pub lock: Duration,
    pub grounded: bool,
}

/// Everything a presentation layer needs for one frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: BoardSnapshot,
    pub active: Option<ActiveSnapshot>,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
    pub seed: u32,
    pub paused: bool,
    pub game_over: bool,
    pub timers: TimersSnapshot,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: BoardSnapshot::default(),
            active: None,
            level: 1,
            lines: 0,
            pieces: 0,
            seed: 0,
            paused: false,
            game_over: false,
            timers: TimersSnapshot::default(),
        }
    }
}
