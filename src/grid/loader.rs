use std::fs::File;
use std::io::{BufReader, BufWriter, Write as _};
use std::path::Path;

use anyhow::Context as _;

use crate::foundation::core::Coord;
use crate::foundation::error::{MazeError, MazeResult};
use crate::grid::model::{Grid, Walls};

/// JSON-facing maze description. Validated into a [`Grid`] on load.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct MazeDef {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) start: [i64; 2],
    pub(crate) end: [i64; 2],
    pub(crate) tiles: Vec<Walls>,
}

impl MazeDef {
    fn into_grid(self) -> MazeResult<Grid> {
        let start = self.checkpoint(self.start)?;
        let end = self.checkpoint(self.end)?;
        Grid::new(self.width, self.height, start, end, self.tiles)
    }

    /// Negative or oversized checkpoints are out of bounds, not malformed JSON.
    fn checkpoint(&self, [x, y]: [i64; 2]) -> MazeResult<Coord> {
        match (u32::try_from(x), u32::try_from(y)) {
            (Ok(cx), Ok(cy)) => Ok(Coord::new(cx, cy)),
            _ => Err(MazeError::out_of_bounds(x, y, self.width, self.height)),
        }
    }

    fn from_grid(grid: &Grid) -> Self {
        Self {
            width: grid.width(),
            height: grid.height(),
            start: [i64::from(grid.start().x), i64::from(grid.start().y)],
            end: [i64::from(grid.end().x), i64::from(grid.end().y)],
            tiles: grid.tiles().to_vec(),
        }
    }
}

impl Grid {
    /// Parse a maze description from a JSON reader.
    pub fn from_reader<R: std::io::Read>(r: R) -> MazeResult<Self> {
        let def: MazeDef = serde_json::from_reader(r)
            .map_err(|e| MazeError::serde(format!("parse maze JSON: {e}")))?;
        def.into_grid()
    }

    /// Parse a maze description from a JSON string.
    pub fn from_json_str(s: &str) -> MazeResult<Self> {
        let def: MazeDef = serde_json::from_str(s)
            .map_err(|e| MazeError::serde(format!("parse maze JSON: {e}")))?;
        def.into_grid()
    }

    /// Parse a maze description from a JSON file on disk.
    pub fn from_path(path: impl AsRef<Path>) -> MazeResult<Self> {
        let path = path.as_ref();
        let f = File::open(path)
            .with_context(|| format!("open maze JSON '{}'", path.display()))?;
        Self::from_reader(BufReader::new(f))
    }

    /// Write the maze description as pretty-printed JSON with `0/1` wall flags.
    pub fn to_writer_pretty<W: std::io::Write>(&self, w: W) -> MazeResult<()> {
        serde_json::to_writer_pretty(w, &MazeDef::from_grid(self))
            .map_err(|e| MazeError::serde(format!("write maze JSON: {e}")))
    }

    /// Write the maze description to `path`, creating its parent directory.
    pub fn save(&self, path: impl AsRef<Path>) -> MazeResult<()> {
        let path = path.as_ref();
        ensure_parent_dir(path)?;
        let f = File::create(path)
            .with_context(|| format!("create maze JSON '{}'", path.display()))?;
        let mut w = BufWriter::new(f);
        self.to_writer_pretty(&mut w)?;
        w.flush()
            .with_context(|| format!("flush maze JSON '{}'", path.display()))?;
        Ok(())
    }
}

/// Create the parent directory of `path` if it has one.
pub fn ensure_parent_dir(path: &Path) -> MazeResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory '{}'", parent.display()))?;
    }
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/grid/loader.rs"]
mod tests;
