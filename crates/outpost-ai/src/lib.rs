//! Behaviors for OUTPOST.
//!
//! Concrete coroutine-style behaviors built on the behavior trait and
//! combinators from `outpost-core`: target seekers, small timing
//! primitives, and the projectile spawn they share. No engine dependency —
//! everything here operates on the world through a `BehaviorCtx`.

pub mod primitives;
pub mod projectile;
pub mod seeker;

pub use outpost_core as core;
