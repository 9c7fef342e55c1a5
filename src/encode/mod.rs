//! Frame sinks.
//!
//! Sinks consume rendered frames in step order and are driven by [`crate::render_solve`].

/// Generic frame sink trait and built-in sinks.
pub mod sink;
