//! mazewalk generates grid mazes, solves them with a deterministic wall-following heuristic, and
//! renders every step of the solve as a numbered PNG frame.
//!
//! # Pipeline overview
//!
//! 1. **Load**: maze JSON -> [`Grid`] (or [`generate`] a fresh one)
//! 2. **Solve**: [`Grid`] -> lazy sequence of [`Snapshot`]s via [`solve`] / [`step`]
//! 3. **Render**: [`FrameScene`] -> draw ops -> [`FrameRGBA`] (CPU backend)
//! 4. **Persist**: frames -> [`FrameSink`] (PNG sequence on disk)
//!
//! [`render_solve`] runs 2-4 in strict step order.
//!
//! The solver owns all of its state in a [`SolverState`] value; separate solves never interfere.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod encode;
mod foundation;
mod grid;
mod render;
mod session;
mod solve;

pub use crate::encode::sink::{
    FrameSink, InMemorySink, PngSequenceOpts, PngSequenceSink, SinkConfig, unpremultiply_in_place,
};
pub use crate::foundation::core::{Canvas, Coord, Direction, FrameIndex, Point, Rect, Rgba8};
pub use crate::foundation::error::{MazeError, MazeResult};
pub use crate::grid::generator::{GeneratorOpts, generate};
pub use crate::grid::loader::ensure_parent_dir;
pub use crate::grid::model::{Grid, Walls};
pub use crate::render::backend::{
    BackendKind, FrameRGBA, RenderBackend, RenderSettings, create_backend,
};
pub use crate::render::cpu::CpuBackend;
pub use crate::render::plan::{DrawOp, FramePlan, FrameScene, compile_scene};
pub use crate::session::solve_session::{SessionOpts, SolveStats, render_solve};
pub use crate::solve::engine::{Snapshot, Solve, SolveOpts, StepEvent, solve, solve_with, step};
pub use crate::solve::recorder::PathRecorder;
pub use crate::solve::state::SolverState;
