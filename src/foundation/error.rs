/// Convenience result type used across mazewalk.
pub type MazeResult<T> = Result<T, MazeError>;

/// Top-level error taxonomy used by grid, solver, renderer and sink APIs.
///
/// Every variant is fatal to a run: the solver is deterministic, so retrying cannot help.
#[derive(thiserror::Error, Debug)]
pub enum MazeError {
    /// A coordinate outside `[0, width) x [0, height)` was accessed.
    #[error("coordinate ({x}, {y}) is out of bounds for a {width}x{height} grid")]
    OutOfBounds {
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Grid width in cells.
        width: u32,
        /// Grid height in cells.
        height: u32,
    },

    /// The walker tried to move more often than the configured step limit allows.
    #[error("step limit exceeded: solver refused to make more than {limit} moves")]
    StepLimitExceeded {
        /// The limit that was hit.
        limit: u64,
    },

    /// No move was viable and no cross remained to backtrack to.
    #[error("solver stalled at ({x}, {y}): no viable move and no cross left to backtrack to")]
    StallDetected {
        /// Column where the walker got stuck.
        x: u32,
        /// Row where the walker got stuck.
        y: u32,
    },

    /// Malformed grid data or options.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing the maze description.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Errors while rasterizing or encoding a frame.
    #[error("render error: {0}")]
    Render(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl MazeError {
    /// Build a [`MazeError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`MazeError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }

    /// Build a [`MazeError::Render`] value.
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`MazeError::OutOfBounds`] value for a signed coordinate pair.
    pub fn out_of_bounds(x: i64, y: i64, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            x,
            y,
            width,
            height,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
