//! Driver loop tying solver, renderer and sink together.

/// Sequential solve-render-persist session.
pub mod solve_session;
