//! Core simulation module - pure, deterministic, and testable
//!
//! This crate contains all the rules and state of the falling-block game. It
//! has no dependencies on rendering, windowing, input devices or I/O beyond
//! optional environment configuration, making it:
//!
//! - **Deterministic**: the same seed produces the same piece sequence
//! - **Testable**: every rule is reachable through plain method calls
//! - **Portable**: a renderer only reads snapshots and forwards inputs
//! - **Allocation-free** on the tick path: flat arrays and copy types
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven tetromino definitions (fixed rotation offsets, colors)
//! - [`rng`]: LCG and the 7-bag randomizer
//! - [`board`]: 20x10 settled grid with collision queries and row clearing
//! - [`piece`]: the falling piece and the lock-delay timer
//! - [`speed`]: level-to-gravity curve and level progression
//! - [`session`]: the gravity/lock state machine tying it all together
//! - [`snapshot`]: read-only views for a presentation layer
//! - [`config`], [`error`]: configuration and error types
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of seven pieces starting at a bag boundary holds each kind once
//! - **Fixed Rotation**: rotation swaps offset tables at the same anchor; no wall kicks
//! - **Lock Delay**: 500ms of being grounded before a piece locks; leaving the ground resets it
//! - **Hard Drop**: falls to the lowest valid row and locks at once
//! - **Levels**: level `n` ends after `n * 10` more cleared rows
//! - **Game Over**: a new piece whose spawn placement is blocked ends the session
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//!
//! use tetris_sim_core::{GameSession, Spawn};
//! use tetris_sim_types::Direction;
//!
//! let mut game = GameSession::with_seed(12345);
//! assert!(matches!(game.start(), Spawn::Piece(_)));
//!
//! game.attempt_move(Direction::Left);
//! game.attempt_rotate();
//! game.hard_drop();
//!
//! let outcome = game.tick(Duration::from_millis(16));
//! assert!(!outcome.locked);
//! assert_eq!(game.current_level(), 1);
//! ```

pub mod board;
pub mod config;
pub mod error;
pub mod piece;
pub mod rng;
pub mod session;
pub mod shapes;
pub mod snapshot;
pub mod speed;

pub use tetris_sim_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use config::EngineConfig;
pub use error::EngineError;
pub use piece::{ActivePiece, LockTimer};
pub use rng::{Bag, SimpleRng};
pub use session::{GameSession, PiecePhase, Spawn, TickOutcome};
pub use shapes::{definition_for, get_shape, ShapeDefinition};
pub use snapshot::{ActiveSnapshot, BoardSnapshot, CellSnapshot, GameSnapshot};
pub use speed::{fall_interval, fall_interval_secs, LevelProgress, MIN_FALL_INTERVAL_SECS};
