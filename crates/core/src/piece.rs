//! Active piece and lock-delay timer
//!
//! An [`ActivePiece`] is a plain value: moves and rotations build a candidate
//! piece, and the session commits the candidate only if the board accepts its
//! cells. A rejected attempt therefore never touches the committed piece.

use std::time::Duration;

use crate::board::Board;
use crate::shapes::{definition_for, spawn_lift, RotationState};
use crate::types::{GridPoint, Point, ShapeKind, BOARD_COLS};

/// Column new pieces spawn at (top-center)
pub const SPAWN_COL: i8 = (BOARD_COLS / 2) as i8;

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: ShapeKind,
    pub rotation: usize,
    pub anchor: GridPoint,
}

impl ActivePiece {
    /// Piece at the spawn anchor in rotation state 0
    pub fn spawn(kind: ShapeKind) -> Self {
        Self::at(kind, GridPoint::new(SPAWN_COL, spawn_lift(kind)))
    }

    /// Piece at an arbitrary anchor in rotation state 0
    pub fn at(kind: ShapeKind, anchor: GridPoint) -> Self {
        Self {
            kind,
            rotation: 0,
            anchor,
        }
    }

    /// Offsets for the current rotation state
    pub fn shape(&self) -> RotationState {
        definition_for(self.kind).cells_for(self.rotation)
    }

    /// Absolute board cells covered by the piece
    pub fn cells(&self) -> [GridPoint; 4] {
        self.shape().map(|offset| self.anchor.offset(offset))
    }

    /// Candidate translated by `delta`
    pub fn translated(&self, delta: Point) -> Self {
        Self {
            anchor: self.anchor.offset(delta),
            ..*self
        }
    }

    /// Candidate in the next rotation state at the same anchor
    pub fn rotated(&self) -> Self {
        Self {
            rotation: definition_for(self.kind).next_rotation(self.rotation),
            ..*self
        }
    }

    pub fn is_valid(&self, board: &Board) -> bool {
        board.is_valid_placement(&self.cells())
    }

    /// True iff moving one row down would be invalid
    pub fn has_landed(&self, board: &Board) -> bool {
        !self.translated(Point::new(0, 1)).is_valid(board)
    }

    /// Lowest valid position straight below, assuming `self` is valid
    pub fn dropped(&self, board: &Board) -> Self {
        let mut piece = *self;
        loop {
            let next = piece.translated(Point::new(0, 1));
            if !next.is_valid(board) {
                return piece;
            }
            piece = next;
        }
    }
}

/// Lock-delay state: armed while the piece rests on something
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct LockTimer {
    grounded: bool,
    elapsed: Duration,
}

impl LockTimer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_grounded(&self) -> bool {
        self.grounded
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    /// Mark grounded without adding time; keeps any time already accumulated
    pub fn arm(&mut self) {
        self.grounded = true;
    }

    /// Mark grounded (if not already) and accumulate `dt`
    pub fn accumulate(&mut self, dt: Duration) {
        self.grounded = true;
        self.elapsed = self.elapsed.saturating_add(dt);
    }

    /// Unset and zero the timer
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Whether the delay has been used up
    pub fn expired(&self, lock_delay: Duration) -> bool {
        self.grounded && self.elapsed >= lock_delay
    }
}
