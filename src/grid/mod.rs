//! Maze grid model, its JSON description, and a generator.

/// Seeded recursive-backtracker generator.
pub mod generator;
/// JSON maze description load/save.
pub mod loader;
/// Grid and wall types.
pub mod model;
