//! Fixed-priority wall-following solver.
//!
//! At every step the walker tries `right, down, up, left` and takes the first side that is open,
//! in bounds and leads to an uncommitted cell. Cells with more than two open sides are pushed on a
//! cross stack when first stood on; a dead end teleports the walker back to the newest cross that
//! still has a way out, popping exhausted crosses on the way. The heuristic is deterministic but
//! not shortest-path.

use std::iter::FusedIterator;

use crate::foundation::core::{Coord, Direction};
use crate::foundation::error::{MazeError, MazeResult};
use crate::grid::model::Grid;
use crate::solve::state::SolverState;

/// Solver options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SolveOpts {
    /// Maximum number of steps (moves and backtrack teleports). `None` uses `width * height`.
    pub step_limit: Option<u64>,
}

impl SolveOpts {
    /// Return options with an explicit step limit.
    pub fn with_step_limit(mut self, limit: u64) -> Self {
        self.step_limit = Some(limit);
        self
    }

    /// The limit that applies to `grid`.
    pub fn limit_for(&self, grid: &Grid) -> u64 {
        self.step_limit.unwrap_or_else(|| grid.cell_count())
    }
}

/// What the walker did during one step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepEvent {
    /// Moved one cell in the given direction.
    Moved(Direction),
    /// Teleported from a dead end back to the newest live cross.
    Backtracked {
        /// Dead-end cell the walker left.
        from: Coord,
    },
    /// Already standing on the goal; nothing to do.
    Arrived,
}

/// One renderable state of a solve.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    /// 1-based step number; 0 is the pre-step state.
    pub index: u64,
    /// Walker position after the step.
    pub position: Coord,
    /// Trail of occupied cells after the step.
    pub path: Vec<Coord>,
    /// Cross stack after the step, bottom to top.
    pub crosses: Vec<Coord>,
    /// What happened in this step. `None` only for the pre-step state.
    pub event: Option<StepEvent>,
    /// Whether the walker stands on the goal.
    pub done: bool,
}

impl Snapshot {
    fn capture(state: &SolverState, event: Option<StepEvent>) -> Self {
        Self {
            index: state.steps,
            position: state.position,
            path: state.path.as_slice().to_vec(),
            crosses: state.cross_stack.clone(),
            event,
            done: state.done,
        }
    }
}

/// Advance a solve by one step.
///
/// Moves and teleports each count as one step; once `opts` allows no further step the call fails
/// with [`MazeError::StepLimitExceeded`]. The terminal step of a walker already on the goal is
/// never refused.
///
/// Takes the state by value and hands back the successor together with the snapshot describing it,
/// so decision logic never touches rendering or IO.
pub fn step(
    grid: &Grid,
    mut state: SolverState,
    opts: &SolveOpts,
) -> MazeResult<(SolverState, Snapshot)> {
    if state.done {
        return Err(MazeError::validation("solve already reached the goal"));
    }

    if state.position == grid.end() {
        state.done = true;
        state.steps += 1;
        tracing::info!(steps = state.steps, "solved");
        let snap = Snapshot::capture(&state, Some(StepEvent::Arrived));
        return Ok((state, snap));
    }

    let limit = opts.limit_for(grid);
    if state.steps >= limit {
        tracing::warn!(limit, at = %state.position, "step limit reached");
        return Err(MazeError::StepLimitExceeded { limit });
    }

    if !state.started {
        state.started = true;
        record_cross(grid, &mut state)?;
    }

    let event = match first_viable(grid, &state, state.position)? {
        Some((dir, to)) => {
            let from = state.position;
            state.visited.insert(from);
            state.position = to;
            state.path.record(to);
            state.visited.insert(to);
            state.previous_step = Some(dir);
            state.moves += 1;
            tracing::debug!(%from, %to, ?dir, "move");

            if to == grid.end() {
                state.done = true;
                tracing::info!(steps = state.steps + 1, moves = state.moves, "solved");
            } else {
                record_cross(grid, &mut state)?;
            }
            StepEvent::Moved(dir)
        }
        None => backtrack(grid, &mut state)?,
    };

    state.steps += 1;
    let snap = Snapshot::capture(&state, Some(event));
    Ok((state, snap))
}

/// First viable move from `at` in search order, with its target cell.
fn first_viable(
    grid: &Grid,
    state: &SolverState,
    at: Coord,
) -> MazeResult<Option<(Direction, Coord)>> {
    let walls = grid.walls_at(at)?;
    Ok(Direction::SEARCH_ORDER.into_iter().find_map(|dir| {
        if !walls.is_open(dir) {
            return None;
        }
        grid.neighbor(at, dir)
            .filter(|n| !state.visited.contains(n))
            .map(|n| (dir, n))
    }))
}

/// Push the current cell as a cross when it has more than two open sides.
fn record_cross(grid: &Grid, state: &mut SolverState) -> MazeResult<()> {
    let at = state.position;
    if grid.walls_at(at)?.open_sides() > 2 && !state.cross_stack.contains(&at) {
        state.cross_stack.push(at);
        state.crosses_found += 1;
        tracing::debug!(cross = %at, depth = state.cross_stack.len(), "found cross");
    }
    Ok(())
}

/// Teleport to the newest cross that still has a viable move, popping exhausted ones.
fn backtrack(grid: &Grid, state: &mut SolverState) -> MazeResult<StepEvent> {
    let from = state.position;
    loop {
        let Some(&top) = state.cross_stack.last() else {
            tracing::warn!(at = %from, "stalled with no cross left");
            return Err(MazeError::StallDetected {
                x: from.x,
                y: from.y,
            });
        };

        if first_viable(grid, state, top)?.is_some() {
            state.position = top;
            state.path.record(top);
            state.backtracks += 1;
            tracing::debug!(%from, to = %top, "teleport to last cross");
            return Ok(StepEvent::Backtracked { from });
        }

        state.cross_stack.pop();
        tracing::debug!(cross = %top, remaining = state.cross_stack.len(), "popped cross");
    }
}

/// Start a solve of `grid` with default options.
pub fn solve(grid: &Grid) -> Solve<'_> {
    solve_with(grid, SolveOpts::default())
}

/// Start a solve of `grid`.
pub fn solve_with(grid: &Grid, opts: SolveOpts) -> Solve<'_> {
    Solve {
        grid,
        opts,
        state: Some(SolverState::new(grid)),
        finished: false,
    }
}

/// Lazy, finite, non-restartable sequence of solve steps.
///
/// Yields one snapshot per step. The iterator ends after the `done` snapshot or after the first
/// error.
#[derive(Debug)]
pub struct Solve<'g> {
    grid: &'g Grid,
    opts: SolveOpts,
    state: Option<SolverState>,
    finished: bool,
}

impl<'g> Solve<'g> {
    /// Grid being solved.
    pub fn grid(&self) -> &'g Grid {
        self.grid
    }

    /// Current state; `None` once a step has failed.
    pub fn state(&self) -> Option<&SolverState> {
        self.state.as_ref()
    }

    /// Snapshot of the state before the first step (walker on start, no event).
    pub fn initial_snapshot(&self) -> Snapshot {
        let fresh = SolverState::new(self.grid);
        Snapshot::capture(&fresh, None)
    }
}

impl Iterator for Solve<'_> {
    type Item = MazeResult<Snapshot>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }
        let state = self.state.take()?;
        match step(self.grid, state, &self.opts) {
            Ok((state, snap)) => {
                self.finished = snap.done;
                self.state = Some(state);
                Some(Ok(snap))
            }
            Err(e) => {
                self.finished = true;
                Some(Err(e))
            }
        }
    }
}

impl FusedIterator for Solve<'_> {}

#[cfg(test)]
#[path = "../../tests/unit/solve/engine.rs"]
mod tests;
