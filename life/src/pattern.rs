// pattern.rs - Seed patterns: relative (row, col) offsets placed at an origin
//
// Pattern files are JSON arrays of [row, col] pairs:
//     [[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]]

use serde::{Deserialize, Serialize};

use crate::cell::Cell;
use crate::error::{GridError, Result};

/// Absolute grid position where a pattern's (0, 0) offset lands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    offsets: Vec<(usize, usize)>,
}

impl Pattern {
    pub fn new(name: impl Into<String>, offsets: impl Into<Vec<(usize, usize)>>) -> Self {
        Self { name: name.into(), offsets: offsets.into() }
    }

    /// Parse the `[[row, col], ...]` pattern format.
    ///
    /// Anything else (objects, negative or fractional coordinates, pairs of
    /// the wrong length) is a [`GridError::TypeMismatch`].
    pub fn from_json(name: impl Into<String>, json: &str) -> Result<Self> {
        let offsets: Vec<(usize, usize)> = serde_json::from_str(json)
            .map_err(|err| GridError::TypeMismatch(err.to_string()))?;
        Ok(Self::new(name, offsets))
    }

    pub fn name(&self) -> &str { &self.name }

    pub fn offsets(&self) -> &[(usize, usize)] { &self.offsets }

    pub fn len(&self) -> usize { self.offsets.len() }

    pub fn is_empty(&self) -> bool { self.offsets.is_empty() }

    /// Largest row offset.
    pub fn height(&self) -> usize {
        self.offsets.iter().map(|&(row, _)| row).max().unwrap_or(0)
    }

    /// Largest column offset.
    pub fn width(&self) -> usize {
        self.offsets.iter().map(|&(_, col)| col).max().unwrap_or(0)
    }

    /// Origin that centers this pattern on a `rows` x `cols` grid. Patterns
    /// larger than the grid are pinned to the top-left corner.
    pub fn centered_origin(&self, rows: usize, cols: usize) -> Origin {
        let center = |extent: usize, size: usize| {
            (extent as f64 / 2.0 - size as f64 / 2.0).round().max(0.0) as usize
        };
        Origin {
            row: center(rows, self.height()),
            col: center(cols, self.width()),
        }
    }

    /// Alive cells for this pattern placed at `origin`, in offset order.
    pub fn cells_at(&self, origin: Origin) -> impl Iterator<Item = Cell> + '_ {
        self.offsets
            .iter()
            .map(move |&(row, col)| Cell::alive(origin.row + row, origin.col + col))
    }
}
