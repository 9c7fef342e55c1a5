//! Solver engine and the state it owns.

/// Step function and lazy solve iterator.
pub mod engine;
/// Append-only path trail.
pub mod recorder;
/// Explicit per-solve state.
pub mod state;
