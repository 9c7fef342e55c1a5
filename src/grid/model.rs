use crate::foundation::core::{Coord, Direction};
use crate::foundation::error::{MazeError, MazeResult};

/// Wall flags of one cell. `true` means a wall is present and the side cannot be crossed.
///
/// On the wire a record is `[top, right, bottom, left]` with `0/1` flags; booleans are accepted
/// on input too.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "[WallFlag; 4]", into = "[u8; 4]")]
pub struct Walls {
    /// Wall on the `y - 1` side.
    pub top: bool,
    /// Wall on the `x + 1` side.
    pub right: bool,
    /// Wall on the `y + 1` side.
    pub bottom: bool,
    /// Wall on the `x - 1` side.
    pub left: bool,
}

impl Walls {
    /// A cell with all four walls present.
    pub const fn closed() -> Self {
        Self {
            top: true,
            right: true,
            bottom: true,
            left: true,
        }
    }

    /// A cell with no walls.
    pub const fn open() -> Self {
        Self {
            top: false,
            right: false,
            bottom: false,
            left: false,
        }
    }

    /// Whether a wall is present on side `dir`.
    pub const fn has_wall(self, dir: Direction) -> bool {
        match dir {
            Direction::Up => self.top,
            Direction::Right => self.right,
            Direction::Down => self.bottom,
            Direction::Left => self.left,
        }
    }

    /// Whether side `dir` can be crossed.
    pub const fn is_open(self, dir: Direction) -> bool {
        !self.has_wall(dir)
    }

    /// Number of open sides (0..=4).
    pub fn open_sides(self) -> usize {
        Direction::ALL
            .into_iter()
            .filter(|&d| self.is_open(d))
            .count()
    }

    /// Set or clear the wall on side `dir`.
    pub fn set_wall(&mut self, dir: Direction, present: bool) {
        match dir {
            Direction::Up => self.top = present,
            Direction::Right => self.right = present,
            Direction::Down => self.bottom = present,
            Direction::Left => self.left = present,
        }
    }
}

/// One wall flag as it may appear in a maze description.
#[derive(Clone, Copy, Debug, serde::Deserialize)]
#[serde(untagged)]
pub(crate) enum WallFlag {
    Bool(bool),
    Int(u64),
}

impl TryFrom<WallFlag> for bool {
    type Error = String;

    fn try_from(flag: WallFlag) -> Result<Self, Self::Error> {
        match flag {
            WallFlag::Bool(b) => Ok(b),
            WallFlag::Int(0) => Ok(false),
            WallFlag::Int(1) => Ok(true),
            WallFlag::Int(n) => Err(format!("wall flag must be 0 or 1, got {n}")),
        }
    }
}

impl TryFrom<[WallFlag; 4]> for Walls {
    type Error = String;

    fn try_from([top, right, bottom, left]: [WallFlag; 4]) -> Result<Self, Self::Error> {
        Ok(Self {
            top: top.try_into()?,
            right: right.try_into()?,
            bottom: bottom.try_into()?,
            left: left.try_into()?,
        })
    }
}

impl From<Walls> for [u8; 4] {
    fn from(w: Walls) -> Self {
        [
            u8::from(w.top),
            u8::from(w.right),
            u8::from(w.bottom),
            u8::from(w.left),
        ]
    }
}

/// A rectangular maze: `width * height` cells, each with four wall flags.
///
/// Immutable once constructed. Tiles are stored row-major, indexed `x + y * width`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: u32,
    height: u32,
    start: Coord,
    end: Coord,
    tiles: Vec<Walls>,
}

impl Grid {
    /// Build a validated grid.
    ///
    /// Fails with [`MazeError::Validation`] on zero dimensions or a tile count other than
    /// `width * height`, and with [`MazeError::OutOfBounds`] when a checkpoint lies outside.
    pub fn new(
        width: u32,
        height: u32,
        start: Coord,
        end: Coord,
        tiles: Vec<Walls>,
    ) -> MazeResult<Self> {
        if width == 0 || height == 0 {
            return Err(MazeError::validation(format!(
                "grid dimensions must be positive, got {width}x{height}"
            )));
        }
        let expected = u64::from(width) * u64::from(height);
        if tiles.len() as u64 != expected {
            return Err(MazeError::validation(format!(
                "expected {expected} tiles for a {width}x{height} grid, got {}",
                tiles.len()
            )));
        }

        let grid = Self {
            width,
            height,
            start,
            end,
            tiles,
        };
        for checkpoint in [start, end] {
            grid.check_bounds(checkpoint)?;
        }
        Ok(grid)
    }

    /// A grid whose cells are all open, including the outer boundary.
    pub fn all_open(width: u32, height: u32, start: Coord, end: Coord) -> MazeResult<Self> {
        let n = (width as usize) * (height as usize);
        Self::new(width, height, start, end, vec![Walls::open(); n])
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Number of cells.
    pub fn cell_count(&self) -> u64 {
        u64::from(self.width) * u64::from(self.height)
    }

    /// Start checkpoint.
    pub fn start(&self) -> Coord {
        self.start
    }

    /// Goal checkpoint.
    pub fn end(&self) -> Coord {
        self.end
    }

    /// All wall records in `x + y * width` order.
    pub fn tiles(&self) -> &[Walls] {
        &self.tiles
    }

    /// Whether `c` lies inside `[0, width) x [0, height)`.
    pub fn contains(&self, c: Coord) -> bool {
        c.x < self.width && c.y < self.height
    }

    /// Wall flags of the cell at `c`.
    pub fn walls_at(&self, c: Coord) -> MazeResult<Walls> {
        self.check_bounds(c)?;
        Ok(self.tiles[self.index(c)])
    }

    /// The in-bounds neighbor of `c` across side `dir`, ignoring walls.
    pub fn neighbor(&self, c: Coord, dir: Direction) -> Option<Coord> {
        c.step(dir).filter(|&n| self.contains(n))
    }

    /// Iterate all coordinates row by row.
    pub fn coords(&self) -> impl Iterator<Item = Coord> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| Coord::new(x, y)))
    }

    /// Sides whose flag disagrees with the neighbor's opposite flag.
    ///
    /// Each disagreeing pair is reported once, from the cell with the smaller index. Sides on the
    /// outer boundary have no neighbor and are never reported.
    pub fn inconsistencies(&self) -> Vec<(Coord, Direction)> {
        let mut out = Vec::new();
        for c in self.coords() {
            let walls = self.tiles[self.index(c)];
            for dir in [Direction::Right, Direction::Down] {
                let Some(n) = self.neighbor(c, dir) else {
                    continue;
                };
                let other = self.tiles[self.index(n)];
                if walls.has_wall(dir) != other.has_wall(dir.opposite()) {
                    out.push((c, dir));
                }
            }
        }
        out
    }

    pub(crate) fn check_bounds(&self, c: Coord) -> MazeResult<()> {
        if self.contains(c) {
            Ok(())
        } else {
            Err(MazeError::out_of_bounds(
                i64::from(c.x),
                i64::from(c.y),
                self.width,
                self.height,
            ))
        }
    }

    fn index(&self, c: Coord) -> usize {
        c.x as usize + c.y as usize * self.width as usize
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grid/model.rs"]
mod tests;
