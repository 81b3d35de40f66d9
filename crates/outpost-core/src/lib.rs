//! Core types and definitions for the OUTPOST simulation.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, geometric types, enums, the behavior trait with its
//! combinators, state snapshots, and constants. It has no dependency on
//! any runtime or rendering framework.

pub mod behavior;
pub mod components;
pub mod constants;
pub mod enums;
pub mod error;
pub mod state;
pub mod types;

#[cfg(test)]
mod tests;
