//! Simulation engine for OUTPOST.
//!
//! Owns the hecs ECS world, runs an ordered pipeline of per-tick systems,
//! and produces a `RenderSnapshot` after each tick. Completely headless —
//! no rendering, audio, or asset concern lives here.

pub mod context;
pub mod engine;
pub mod scenario;
pub mod systems;

pub use context::SimContext;
pub use engine::{SimConfig, SimEngine};
pub use outpost_core as core;
