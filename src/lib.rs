//! Falling-block puzzle simulation (workspace facade crate).
//!
//! The rules live in dedicated crates under `crates/`; this package exposes them as
//! `tetris_sim::{core,types}` and hosts the headless driver binary.

pub use tetris_sim_core as core;
pub use tetris_sim_types as types;
