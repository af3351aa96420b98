//! Headless runner (default binary).
//!
//! Drives a session at the fixed 60 FPS timestep with a scripted random
//! autopilot instead of a keyboard. Nothing is drawn; progress is reported
//! through `tracing` (`RUST_LOG=debug` shows every spawn and lock).

use std::time::Duration;

use anyhow::{Context, Result};
use arrayvec::ArrayVec;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tetris_sim::core::config::parse_var;
use tetris_sim::core::{EngineConfig, GameSession, SimpleRng, Spawn};
use tetris_sim::types::{GameAction, TARGET_FPS, TICK_MS};

/// Default frame budget: ten minutes of play
const DEFAULT_FRAMES: u64 = 10 * 60 * TARGET_FPS as u64;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let config = EngineConfig::try_from_env().context("reading engine config")?;
    let frames = parse_var::<u64>("TETRIS_FRAMES")
        .context("reading frame budget")?
        .unwrap_or(DEFAULT_FRAMES);

    run(config, frames);
    Ok(())
}

/// Most rotations the autopilot plans; a fourth would be a full turn
const MAX_ROTATIONS: u32 = 3;
/// Farthest the autopilot shifts from the spawn column, either way
const MAX_SHIFT: u32 = 5;
/// Rotations, shifts and the final drop
const PLAN_CAPACITY: usize = (MAX_ROTATIONS + MAX_SHIFT + 1) as usize;

/// Moves planned for the current piece, replayed one per frame
#[derive(Debug, Default)]
struct Plan {
    piece: u32,
    actions: ArrayVec<GameAction, PLAN_CAPACITY>,
    cursor: usize,
}

impl Plan {
    fn for_piece(piece: u32, rng: &mut SimpleRng) -> Self {
        let mut actions = ArrayVec::<GameAction, PLAN_CAPACITY>::new();
        for _ in 0..rng.next_range(MAX_ROTATIONS + 1) {
            actions.push(GameAction::Rotate);
        }
        let shift = rng.next_range(2 * MAX_SHIFT) as i32 - MAX_SHIFT as i32;
        let step = if shift < 0 {
            GameAction::MoveLeft
        } else {
            GameAction::MoveRight
        };
        for _ in 0..shift.unsigned_abs() {
            actions.push(step);
        }
        actions.push(GameAction::HardDrop);

        Self {
            piece,
            actions,
            cursor: 0,
        }
    }

    fn next_action(&mut self) -> GameAction {
        let action = self
            .actions
            .get(self.cursor)
            .copied()
            .unwrap_or(GameAction::HardDrop);
        self.cursor += 1;
        action
    }

    /// Skip straight to the drop
    fn abandon(&mut self) {
        self.cursor = self.actions.len().saturating_sub(1);
    }
}

fn run(config: EngineConfig, frames: u64) {
    let mut game = GameSession::new(config);
    if game.start() == Spawn::GameOver {
        info!("board full before the first piece");
        return;
    }
    info!(seed = game.seed(), level = game.current_level(), frames, "session started");

    let mut pilot = SimpleRng::new(game.seed() ^ 0x9E37_79B9);
    let mut plan = Plan::default();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut frame = 0;

    while frame < frames && !game.is_game_over() {
        frame += 1;

        if plan.piece != game.pieces_spawned() {
            plan = Plan::for_piece(game.pieces_spawned(), &mut pilot);
        }
        let action = plan.next_action();
        if !game.apply_action(action) {
            // Blocked by a wall or the stack
            plan.abandon();
        }

        game.tick(tick);
    }

    info!(
        frames = frame,
        pieces = game.pieces_spawned(),
        lines = game.total_lines(),
        level = game.current_level(),
        game_over = game.is_game_over(),
        "session finished"
    );
}
