use crate::foundation::core::{Canvas, Coord, Direction, Point, Rect, Rgba8};
use crate::foundation::error::MazeResult;
use crate::grid::model::Grid;
use crate::render::backend::RenderSettings;
use crate::solve::engine::Snapshot;

/// Everything one frame shows.
#[derive(Clone, Copy, Debug)]
pub struct FrameScene<'a> {
    /// Maze to draw.
    pub grid: &'a Grid,
    /// Trail marks, in occupation order.
    pub path: &'a [Coord],
    /// Walker position, if the walker is shown.
    pub player: Option<Coord>,
}

impl<'a> FrameScene<'a> {
    /// The bare maze: walls and checkpoints, no trail, no walker.
    pub fn maze_only(grid: &'a Grid) -> Self {
        Self {
            grid,
            path: &[],
            player: None,
        }
    }

    /// The maze with a solve snapshot on top.
    pub fn from_snapshot(grid: &'a Grid, snap: &'a Snapshot) -> Self {
        Self {
            grid,
            path: &snap.path,
            player: Some(snap.position),
        }
    }
}

/// A single drawing instruction. Ops are painted in order with source-over blending.
#[derive(Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill an axis-aligned rectangle with a straight-alpha color.
    FillRect {
        /// Rectangle in canvas pixels.
        rect: Rect,
        /// Fill color.
        color: Rgba8,
    },
}

/// Backend-agnostic list of draw ops for one frame.
#[derive(Clone, Debug, PartialEq)]
pub struct FramePlan {
    /// Output canvas.
    pub canvas: Canvas,
    /// Ops in paint order.
    pub ops: Vec<DrawOp>,
}

/// Compile a scene into draw ops.
///
/// Paint order: background, start cell, end cell, walls, outline, trail, walker.
pub fn compile_scene(scene: &FrameScene<'_>, settings: &RenderSettings) -> MazeResult<FramePlan> {
    settings.validate()?;
    let canvas = settings.canvas();
    let grid = scene.grid;
    let size = f64::from(settings.size_px);
    let cell_w = size / f64::from(grid.width());
    let cell_h = size / f64::from(grid.height());
    let cell_origin = |c: Coord| Point::new(f64::from(c.x) * cell_w, f64::from(c.y) * cell_h);

    let mut ops = Vec::with_capacity(4 + grid.tiles().len() * 2 + scene.path.len());
    let mut fill = |rect: Rect, color: Rgba8| ops.push(DrawOp::FillRect { rect, color });

    fill(Rect::new(0.0, 0.0, size, size), settings.background);

    for (checkpoint, color) in [(grid.start(), settings.start), (grid.end(), settings.end)] {
        let o = cell_origin(checkpoint);
        fill(Rect::new(o.x, o.y, o.x + cell_w, o.y + cell_h), color);
    }

    let half_wall = settings.wall_width_px / 2.0;
    for c in grid.coords() {
        let walls = grid.walls_at(c)?;
        let o = cell_origin(c);
        let (x0, y0, x1, y1) = (o.x, o.y, o.x + cell_w, o.y + cell_h);
        for dir in Direction::ALL {
            if !walls.has_wall(dir) {
                continue;
            }
            let rect = match dir {
                Direction::Up => Rect::new(x0, y0 - half_wall, x1, y0 + half_wall),
                Direction::Right => Rect::new(x1 - half_wall, y0, x1 + half_wall, y1),
                Direction::Down => Rect::new(x0, y1 - half_wall, x1, y1 + half_wall),
                Direction::Left => Rect::new(x0 - half_wall, y0, x0 + half_wall, y1),
            };
            fill(rect, settings.wall);
        }
    }

    // A stroke centered on the canvas edge; only the inner half is visible.
    let band = settings.outline_width_px / 2.0;
    if band > 0.0 {
        fill(Rect::new(0.0, 0.0, size, band), settings.outline);
        fill(Rect::new(0.0, size - band, size, size), settings.outline);
        fill(Rect::new(0.0, 0.0, band, size), settings.outline);
        fill(Rect::new(size - band, 0.0, size, size), settings.outline);
    }

    let marker = |c: Coord| {
        let o = cell_origin(c);
        Rect::new(
            o.x + cell_w / 4.0,
            o.y + cell_h / 4.0,
            o.x + cell_w * 0.75,
            o.y + cell_h * 0.75,
        )
    };
    for &c in scene.path {
        fill(marker(c), settings.path);
    }
    if let Some(player) = scene.player {
        fill(marker(player), settings.player);
    }

    Ok(FramePlan { canvas, ops })
}

#[cfg(test)]
#[path = "../../tests/unit/render/plan.rs"]
mod tests;
