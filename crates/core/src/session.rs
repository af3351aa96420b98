//! Game session - owns the board, the bag and the falling piece
//!
//! This module ties the core components together: gravity timing, the
//! lock-delay state machine, row clears, level progression and game over.
//!
//! Piece lifecycle: `Spawned -> Falling -> Grounded -> Locked`. `Locked` is
//! transient; the next piece spawns in the same call unless the spawn
//! placement is blocked, which ends the game.

use std::time::Duration;

use tracing::{debug, error, info, trace};

use crate::board::Board;
use crate::config::EngineConfig;
use crate::piece::{ActivePiece, LockTimer};
use crate::rng::{clock_seed, Bag};
use crate::shapes::definition_for;
use crate::snapshot::{ActiveSnapshot, BoardSnapshot, GameSnapshot, TimersSnapshot};
use crate::speed::LevelProgress;
use crate::types::{Direction, GameAction, ShapeKind};

/// Result of a spawn attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spawn {
    Piece(ActivePiece),
    /// The spawn placement was blocked; the session is over
    GameOver,
}

/// Where the current piece is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PiecePhase {
    Spawned,
    Falling,
    Grounded,
    Locked,
}

/// What happened during one [`GameSession::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TickOutcome {
    pub locked: bool,
    pub lines_cleared: u32,
}

/// Complete simulation state
#[derive(Debug, Clone)]
pub struct GameSession {
    config: EngineConfig,
    seed: u32,
    board: Board,
    bag: Bag,
    active: Option<ActivePiece>,
    phase: PiecePhase,
    lock_timer: LockTimer,
    fall_timer: Duration,
    progress: LevelProgress,
    /// Pieces spawned so far
    pieces: u32,
    paused: bool,
    game_over: bool,
}

impl GameSession {
    /// Create a session on an empty board. Call [`GameSession::start`] to spawn the first piece.
    pub fn new(config: EngineConfig) -> Self {
        Self::with_board(config, Board::new())
    }

    /// Create a session with a fixed seed and default timings
    pub fn with_seed(seed: u32) -> Self {
        Self::new(EngineConfig::seeded(seed))
    }

    /// Create a session over a pre-filled board (puzzles, scenarios)
    pub fn with_board(config: EngineConfig, board: Board) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        let bag = if config.avoid_boundary_repeat {
            Bag::with_boundary_guard(seed)
        } else {
            Bag::new(seed)
        };
        let progress = LevelProgress::new(config.start_level, config.rows_per_level);

        Self {
            config,
            seed,
            board,
            bag,
            active: None,
            phase: PiecePhase::Spawned,
            lock_timer: LockTimer::new(),
            fall_timer: Duration::ZERO,
            progress,
            pieces: 0,
            paused: false,
            game_over: false,
        }
    }

    /// Spawn the first piece if none is active
    pub fn start(&mut self) -> Spawn {
        match self.active {
            Some(piece) => Spawn::Piece(piece),
            None => self.spawn_next(),
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn phase(&self) -> PiecePhase {
        self.phase
    }

    pub fn current_level(&self) -> u32 {
        self.progress.level()
    }

    pub fn total_lines(&self) -> u32 {
        self.progress.total_rows()
    }

    pub fn progress(&self) -> &LevelProgress {
        &self.progress
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn lock_timer(&self) -> LockTimer {
        self.lock_timer
    }

    fn playable(&self) -> bool {
        !self.paused && !self.game_over
    }

    /// Draw the next kind from the bag and spawn it, replacing any active piece
    pub fn spawn_next(&mut self) -> Spawn {
        if self.game_over {
            return Spawn::GameOver;
        }
        let kind = self.bag.next();
        self.spawn_kind(kind)
    }

    /// Spawn a specific kind at the spawn anchor without consuming the bag
    pub fn spawn_kind(&mut self, kind: ShapeKind) -> Spawn {
        if self.game_over {
            return Spawn::GameOver;
        }

        self.lock_timer.reset();
        self.fall_timer = Duration::ZERO;

        let piece = ActivePiece::spawn(kind);
        if !piece.is_valid(&self.board) {
            self.active = None;
            self.game_over = true;
            info!(
                ?kind,
                pieces = self.pieces,
                lines = self.progress.total_rows(),
                level = self.progress.level(),
                "spawn blocked, game over"
            );
            return Spawn::GameOver;
        }

        self.active = Some(piece);
        self.phase = PiecePhase::Spawned;
        self.pieces = self.pieces.wrapping_add(1);
        debug!(?kind, col = piece.anchor.col, row = piece.anchor.row, "spawned");

        Spawn::Piece(piece)
    }

    /// True iff the active piece cannot move one row down
    pub fn has_landed(&self) -> bool {
        self.active
            .map(|piece| piece.has_landed(&self.board))
            .unwrap_or(false)
    }

    /// Commit a candidate if the board accepts it
    fn try_commit(&mut self, candidate: ActivePiece) -> bool {
        if !candidate.is_valid(&self.board) {
            return false;
        }
        self.active = Some(candidate);
        self.refresh_grounding();
        true
    }

    /// Re-evaluate landing after a committed change. Leaving the ground
    /// resets the lock timer; staying grounded keeps its accumulated time.
    fn refresh_grounding(&mut self) {
        if self.has_landed() {
            self.phase = PiecePhase::Grounded;
            self.lock_timer.arm();
        } else {
            self.phase = PiecePhase::Falling;
            self.lock_timer.reset();
        }
    }

    /// Translate the active piece one cell; illegal moves are no-ops returning false
    pub fn attempt_move(&mut self, direction: Direction) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        self.try_commit(active.translated(direction.delta()))
    }

    /// Advance to the next rotation state at the same anchor (no kicks).
    ///
    /// Single-state kinds (O) report false since nothing changes.
    pub fn attempt_rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };
        if definition_for(active.kind).rotation_count() < 2 {
            return false;
        }
        self.try_commit(active.rotated())
    }

    /// Drop straight down and lock immediately, skipping the lock delay.
    /// Returns the rows cleared by the lock.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.playable() {
            return 0;
        }
        let Some(active) = self.active else {
            return 0;
        };

        let dropped = active.dropped(&self.board);
        trace!(
            from = active.anchor.row,
            to = dropped.anchor.row,
            "hard drop"
        );
        self.active = Some(dropped);
        self.lock_active()
    }

    /// One gravity step; false means the piece is grounded
    fn gravity_step(&mut self) -> bool {
        let Some(active) = self.active else {
            return false;
        };
        let moved = self.try_commit(active.translated(Direction::Down.delta()));
        if moved {
            trace!(row = active.anchor.row + 1, "gravity");
        }
        moved
    }

    /// Advance the simulation by `elapsed`: gravity, landing check, lock delay
    pub fn tick(&mut self, elapsed: Duration) -> TickOutcome {
        if !self.playable() || self.active.is_none() {
            return TickOutcome::default();
        }

        let was_grounded = self.lock_timer.is_grounded();

        let interval = self.progress.fall_interval();
        self.fall_timer = self.fall_timer.saturating_add(elapsed);
        while self.fall_timer >= interval {
            self.fall_timer -= interval;
            if !self.gravity_step() {
                self.fall_timer = Duration::ZERO;
                break;
            }
        }

        if !self.has_landed() {
            self.phase = PiecePhase::Falling;
            self.lock_timer.reset();
            return TickOutcome::default();
        }

        self.phase = PiecePhase::Grounded;
        if was_grounded {
            self.lock_timer.accumulate(elapsed);
        } else {
            // Landed during this tick; time starts counting from the next one
            self.lock_timer.arm();
        }

        if self.lock_timer.expired(self.config.lock_delay) {
            let lines_cleared = self.lock_active();
            return TickOutcome {
                locked: true,
                lines_cleared,
            };
        }

        TickOutcome::default()
    }

    /// Write the active piece into the board, clear rows, update the level
    /// and spawn the next piece. Returns rows cleared.
    fn lock_active(&mut self) -> u32 {
        let Some(piece) = self.active.take() else {
            return 0;
        };
        self.phase = PiecePhase::Locked;
        self.lock_timer.reset();
        self.fall_timer = Duration::ZERO;

        if let Err(err) = self.board.lock(&piece.cells(), piece.kind) {
            error!(%err, code = err.code(), kind = ?piece.kind, "refusing to lock active piece");
            if cfg!(debug_assertions) {
                panic!("active piece overlapped the settled board: {err}");
            }
            self.game_over = true;
            return 0;
        }

        let lines_cleared = self.board.clear_full_rows() as u32;
        debug!(
            kind = ?piece.kind,
            col = piece.anchor.col,
            row = piece.anchor.row,
            rotation = piece.rotation,
            lines_cleared,
            "locked"
        );

        if lines_cleared > 0 && self.progress.record_cleared(lines_cleared) > 0 {
            info!(
                level = self.progress.level(),
                lines = self.progress.total_rows(),
                "level up"
            );
        }

        self.spawn_next();
        lines_cleared
    }

    pub fn pause(&mut self) {
        if !self.game_over {
            self.paused = true;
        }
    }

    pub fn resume(&mut self) {
        self.paused = false;
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.paused {
            self.resume();
        } else {
            self.pause();
        }
        self.paused
    }

    /// Start over on an empty board with the same seed and config
    pub fn restart(&mut self) -> Spawn {
        let config = EngineConfig {
            seed: Some(self.seed),
            ..self.config.clone()
        };
        *self = Self::new(config);
        debug!(seed = self.seed, "restarted");
        self.start()
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.attempt_move(Direction::Left),
            GameAction::MoveRight => self.attempt_move(Direction::Right),
            GameAction::SoftDrop => self.attempt_move(Direction::Down),
            GameAction::Rotate => self.attempt_rotate(),
            GameAction::HardDrop => {
                if !self.playable() || self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::Pause => {
                if self.game_over {
                    return false;
                }
                self.toggle_pause();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }

    pub fn snapshot_board(&self) -> BoardSnapshot {
        BoardSnapshot::from(&self.board)
    }

    pub fn snapshot_active_piece(&self) -> Option<ActiveSnapshot> {
        self.active.map(ActiveSnapshot::from)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.board.write_from(&self.board);
        out.active = self.snapshot_active_piece();
        out.level = self.progress.level();
        out.lines = self.progress.total_rows();
        out.pieces = self.pieces;
        out.seed = self.seed;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.timers = TimersSnapshot {
            fall: self.fall_timer,
            lock: self.lock_timer.elapsed(),
            grounded: self.lock_timer.is_grounded(),
        };
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::with_seed(1)
    }
}
