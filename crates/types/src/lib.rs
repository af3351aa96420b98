//! Core types module - shared data structures and constants
//!
//! This crate defines the fundamental types used throughout the engine.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core simulation, a renderer, a headless driver).
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn column**: `BOARD_COLS / 2` (column 5)
//!
//! # Timing Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TARGET_FPS` | 60 | Frame rate a presentation layer is expected to tick at |
//! | `TICK_MS` | 16 | Fixed timestep interval (`1000 / TARGET_FPS`) |
//! | `LOCK_DELAY_MS` | 500 | Time before a grounded piece locks |
//! | `ROWS_PER_LEVEL` | 10 | Level-up threshold multiplier |
//!
//! # Examples
//!
//! ```
//! use tetris_sim_types::{GridPoint, Point, ShapeKind, BOARD_COLS, BOARD_ROWS};
//!
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! let anchor = GridPoint::new(5, 0);
//! assert_eq!(anchor.offset(Point::new(1, 2)), GridPoint::new(6, 2));
//!
//! assert_eq!(BOARD_COLS, 10);
//! assert_eq!(BOARD_ROWS, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_COLS: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_ROWS: u8 = 20;

/// Frame rate the surrounding loop is expected to tick at
pub const TARGET_FPS: u32 = 60;

/// Fixed timestep interval in milliseconds (~60 FPS)
pub const TICK_MS: u32 = 1000 / TARGET_FPS;

/// Grace period after landing before a piece becomes permanent (500ms)
pub const LOCK_DELAY_MS: u32 = 500;

/// Rows needed per level step; a level-up happens after `level * ROWS_PER_LEVEL` rows
pub const ROWS_PER_LEVEL: u32 = 10;

/// Level a fresh session starts at
pub const START_LEVEL: u32 = 1;

/// The seven tetromino shape kinds
///
/// Declaration order matches the shape registry and the bag's fresh order:
/// I, J, L, O, S, Z, T.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl ShapeKind {
    /// Number of distinct shape kinds
    pub const COUNT: usize = 7;

    /// All kinds in registry order
    pub const ALL: [ShapeKind; Self::COUNT] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::Z,
        ShapeKind::T,
    ];

    /// Position of this kind in [`ShapeKind::ALL`]
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// ```
    /// use tetris_sim_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("l"), Some(ShapeKind::L));
    /// assert_eq!(ShapeKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(ShapeKind::I),
            "j" => Some(ShapeKind::J),
            "l" => Some(ShapeKind::L),
            "o" => Some(ShapeKind::O),
            "s" => Some(ShapeKind::S),
            "z" => Some(ShapeKind::Z),
            "t" => Some(ShapeKind::T),
            _ => None,
        }
    }
}

/// Cell offset relative to a piece anchor: `x` is the column offset, `y` the row offset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i8,
    pub y: i8,
}

impl Point {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }
}

/// Absolute board coordinate. Row 0 is the top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridPoint {
    pub col: i8,
    pub row: i8,
}

impl GridPoint {
    pub const fn new(col: i8, row: i8) -> Self {
        Self { col, row }
    }

    /// Translate by a shape offset (or a movement delta)
    pub const fn offset(self, delta: Point) -> Self {
        Self {
            col: self.col + delta.x,
            row: self.row + delta.y,
        }
    }
}

/// Translation directions available to the player
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// One-cell translation for this direction
    pub const fn delta(self) -> Point {
        match self {
            Direction::Left => Point::new(-1, 0),
            Direction::Right => Point::new(1, 0),
            Direction::Down => Point::new(0, 1),
        }
    }
}

/// Game actions a presentation layer can forward to the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    Rotate,
    Pause,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotate" => Some(GameAction::Rotate),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::Rotate => "rotate",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(ShapeKind)`: settled cell left behind by a locked piece of that kind
pub type Cell = Option<ShapeKind>;
