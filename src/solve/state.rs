use std::collections::HashSet;

use crate::foundation::core::{Coord, Direction};
use crate::grid::model::Grid;
use crate::solve::recorder::PathRecorder;

/// Everything one solve knows about its walk. Owned by a single solve; never shared.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SolverState {
    pub(crate) position: Coord,
    pub(crate) path: PathRecorder,
    pub(crate) visited: HashSet<Coord>,
    pub(crate) cross_stack: Vec<Coord>,
    pub(crate) previous_step: Option<Direction>,
    pub(crate) started: bool,
    pub(crate) done: bool,
    pub(crate) steps: u64,
    pub(crate) moves: u64,
    pub(crate) backtracks: u64,
    pub(crate) crosses_found: u64,
}

impl SolverState {
    /// Fresh state with the walker standing on the grid's start cell.
    pub fn new(grid: &Grid) -> Self {
        Self {
            position: grid.start(),
            path: PathRecorder::starting_at(grid.start()),
            visited: HashSet::new(),
            cross_stack: Vec::new(),
            previous_step: None,
            started: false,
            done: false,
            steps: 0,
            moves: 0,
            backtracks: 0,
            crosses_found: 0,
        }
    }

    /// Current walker position.
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Trail of occupied cells.
    pub fn path(&self) -> &PathRecorder {
        &self.path
    }

    /// Whether `c` is committed and excluded from future moves.
    pub fn is_visited(&self, c: Coord) -> bool {
        self.visited.contains(&c)
    }

    /// Number of committed cells.
    pub fn visited_count(&self) -> usize {
        self.visited.len()
    }

    /// Unresolved branch points, bottom to top.
    pub fn crosses(&self) -> &[Coord] {
        &self.cross_stack
    }

    /// Last direction moved.
    pub fn previous_step(&self) -> Option<Direction> {
        self.previous_step
    }

    /// Whether the walker has reached the goal.
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Steps taken (moves, teleports and the terminal arrival).
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Moves taken; backtrack teleports excluded.
    pub fn moves(&self) -> u64 {
        self.moves
    }

    /// Backtrack teleports taken.
    pub fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Crosses pushed over the whole solve.
    pub fn crosses_found(&self) -> u64 {
        self.crosses_found
    }
}
