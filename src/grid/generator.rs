use rand::rngs::StdRng;
use rand::{Rng as _, SeedableRng as _};

use crate::foundation::core::{Coord, Direction};
use crate::foundation::error::{MazeError, MazeResult};
use crate::grid::model::{Grid, Walls};

/// Options for [`generate`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GeneratorOpts {
    /// Width in cells.
    pub width: u32,
    /// Height in cells.
    pub height: u32,
    /// RNG seed; `None` draws one from the OS.
    pub seed: Option<u64>,
}

impl Default for GeneratorOpts {
    fn default() -> Self {
        Self {
            width: 10,
            height: 10,
            seed: None,
        }
    }
}

impl GeneratorOpts {
    /// Return options with a fixed seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

/// Generate a perfect maze with a recursive backtracker.
///
/// Every cell starts fully walled; carving a passage removes the shared wall on both sides, so the
/// result never has wall inconsistencies. Start is the top-left cell, end the bottom-right one.
#[tracing::instrument]
pub fn generate(opts: GeneratorOpts) -> MazeResult<Grid> {
    let GeneratorOpts {
        width,
        height,
        seed,
    } = opts;
    if width == 0 || height == 0 {
        return Err(MazeError::validation(format!(
            "maze dimensions must be positive, got {width}x{height}"
        )));
    }

    let seed = seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    tracing::debug!(seed, "generating maze");

    let w = width as usize;
    let mut tiles = vec![Walls::closed(); w * height as usize];
    let mut seen = vec![false; tiles.len()];
    let idx = |c: Coord| c.x as usize + c.y as usize * w;
    let in_bounds = |c: Coord| c.x < width && c.y < height;

    let origin = Coord::new(0, 0);
    seen[idx(origin)] = true;
    let mut stack = vec![origin];

    while let Some(&current) = stack.last() {
        let candidates: Vec<(Direction, Coord)> = Direction::ALL
            .into_iter()
            .filter_map(|dir| current.step(dir).map(|n| (dir, n)))
            .filter(|&(_, n)| in_bounds(n) && !seen[idx(n)])
            .collect();

        if candidates.is_empty() {
            stack.pop();
            continue;
        }

        let (dir, next) = candidates[rng.gen_range(0..candidates.len())];
        tiles[idx(current)].set_wall(dir, false);
        tiles[idx(next)].set_wall(dir.opposite(), false);
        seen[idx(next)] = true;
        stack.push(next);
    }

    Grid::new(
        width,
        height,
        origin,
        Coord::new(width - 1, height - 1),
        tiles,
    )
}

#[cfg(test)]
#[path = "../../tests/unit/grid/generator.rs"]
mod tests;
