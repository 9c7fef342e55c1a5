use crate::encode::sink::{FrameSink, SinkConfig};
use crate::foundation::core::FrameIndex;
use crate::foundation::error::MazeResult;
use crate::grid::model::Grid;
use crate::render::backend::{FrameRGBA, RenderBackend};
use crate::render::plan::FrameScene;
use crate::solve::engine::{SolveOpts, solve_with};

/// Options for [`render_solve`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionOpts {
    /// Solver options (step limit).
    pub solve: SolveOpts,
}

/// Counters for a completed solve-and-render run.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Frames pushed to the sink, intro frames included.
    pub frames: u64,
    /// Solver steps (moves, teleports and terminal arrival).
    pub steps: u64,
    /// Moves made.
    pub moves: u64,
    /// Backtrack teleports made.
    pub backtracks: u64,
    /// Crosses recorded over the run.
    pub crosses_found: u64,
    /// Distinct cells the walker committed to.
    pub cells_visited: u64,
}

/// Solve `grid` and push one rendered frame per step into `sink`.
///
/// Frame 0 is the bare maze, frame 1 shows the walker on the start cell, and every solver step
/// adds one frame after that. Rendering and persistence of a frame finish before the next step is
/// computed. On error the run stops at once: frames already pushed stay where the sink put them
/// and [`FrameSink::end`] is not called.
#[tracing::instrument(skip_all, fields(width = grid.width(), height = grid.height()))]
pub fn render_solve(
    grid: &Grid,
    backend: &mut dyn RenderBackend,
    sink: &mut dyn FrameSink,
    opts: &SessionOpts,
) -> MazeResult<SolveStats> {
    for (cell, dir) in grid.inconsistencies() {
        tracing::warn!(%cell, ?dir, "wall flag disagrees with neighbor");
    }

    let mut stats = SolveStats::default();
    let mut solve = solve_with(grid, opts.solve);

    let intro = backend.render(&FrameScene::maze_only(grid))?;
    sink.begin(SinkConfig {
        width: intro.width,
        height: intro.height,
    })?;
    push(sink, &mut stats, &intro)?;

    let initial = solve.initial_snapshot();
    let frame = backend.render(&FrameScene::from_snapshot(grid, &initial))?;
    push(sink, &mut stats, &frame)?;

    for snap in solve.by_ref() {
        let snap = snap?;
        tracing::debug!(step = snap.index, position = %snap.position, event = ?snap.event, "step");
        let frame = backend.render(&FrameScene::from_snapshot(grid, &snap))?;
        push(sink, &mut stats, &frame)?;
    }

    if let Some(state) = solve.state() {
        stats.steps = state.steps();
        stats.moves = state.moves();
        stats.backtracks = state.backtracks();
        stats.crosses_found = state.crosses_found();
        stats.cells_visited = state.visited_count() as u64;
    }
    sink.end()?;

    tracing::info!(
        frames = stats.frames,
        moves = stats.moves,
        backtracks = stats.backtracks,
        visited = stats.cells_visited,
        "solve rendered"
    );
    Ok(stats)
}

fn push(sink: &mut dyn FrameSink, stats: &mut SolveStats, frame: &FrameRGBA) -> MazeResult<()> {
    sink.push_frame(FrameIndex(stats.frames), frame)?;
    stats.frames += 1;
    Ok(())
}
