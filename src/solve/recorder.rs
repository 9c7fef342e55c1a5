use crate::foundation::core::Coord;

/// Append-only trail of every cell the walker has occupied, repeats included.
///
/// Backtrack teleports are recorded like moves, so the rendered trail keeps dead-end excursions.
/// The trail is never consulted for solver decisions.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathRecorder {
    cells: Vec<Coord>,
}

impl PathRecorder {
    /// A trail that starts on `origin`.
    pub fn starting_at(origin: Coord) -> Self {
        Self {
            cells: vec![origin],
        }
    }

    /// Append an occupied cell.
    pub fn record(&mut self, c: Coord) {
        self.cells.push(c);
    }

    /// The trail in occupation order.
    pub fn as_slice(&self) -> &[Coord] {
        &self.cells
    }

    /// Number of recorded entries.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Return `true` when nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Most recent entry.
    pub fn last(&self) -> Option<Coord> {
        self.cells.last().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/solve/recorder.rs"]
mod tests;
