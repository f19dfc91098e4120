// grid.rs - Bounded, non-wrapping Life grid with a cached population

use log::{debug, trace};

use crate::cell::Cell;
use crate::error::{GridError, Result};

// Relative positions of the 8 neighbors
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// One cell or an ordered batch of cells to write into a [`Grid`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Update {
    One(Cell),
    Many(Vec<Cell>),
}

impl From<Cell> for Update {
    fn from(cell: Cell) -> Self {
        Update::One(cell)
    }
}

impl From<Vec<Cell>> for Update {
    fn from(cells: Vec<Cell>) -> Self {
        Update::Many(cells)
    }
}

/// Fixed-size matrix of cells plus the running count of alive ones.
///
/// Cells are stored row-major; the cell at index (i, j) always reports
/// `row() == i` and `col() == j`.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
    population: usize,
}

impl Grid {
    /// Create a `rows` x `cols` grid of dead cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension(format!("{rows}x{cols}")));
        }
        let size = rows
            .checked_mul(cols)
            .filter(|&size| size <= isize::MAX as usize / std::mem::size_of::<Cell>())
            .ok_or_else(|| GridError::InvalidDimension(format!("{rows}x{cols}")))?;

        let mut cells = Vec::with_capacity(size);
        cells.extend((0..rows).flat_map(|row| (0..cols).map(move |col| Cell::dead(row, col))));

        debug!("created {rows}x{cols} grid");
        Ok(Self { rows, cols, cells, population: 0 })
    }

    pub fn rows(&self) -> usize { self.rows }

    pub fn cols(&self) -> usize { self.cols }

    /// Number of alive cells.
    pub fn population(&self) -> usize { self.population }

    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        (row < self.rows && col < self.cols).then(|| &self.cells[self.index(row, col)])
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn alive_cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().filter(|cell| cell.is_alive())
    }

    /// Apply a single cell or a batch.
    pub fn update(&mut self, update: impl Into<Update>) -> Result<()> {
        match update.into() {
            Update::One(cell) => self.update_one(cell),
            Update::Many(cells) => self.update_many(cells),
        }
    }

    /// Replace the cell stored at `cell`'s position.
    ///
    /// Writing a cell equal to the stored one is a no-op. Fails with
    /// [`GridError::OutOfRange`] before touching the matrix.
    pub fn update_one(&mut self, cell: Cell) -> Result<()> {
        let (row, col) = (cell.row(), cell.col());
        if row >= self.rows || col >= self.cols {
            return Err(GridError::OutOfRange { row, col, rows: self.rows, cols: self.cols });
        }

        let idx = self.index(row, col);
        let stored = self.cells[idx];
        if stored != cell {
            self.cells[idx] = cell;
            match (stored.is_alive(), cell.is_alive()) {
                (false, true) => self.population += 1,
                (true, false) => self.population -= 1,
                _ => {}
            }
        }
        Ok(())
    }

    /// Apply cells in order. Each entry commits on its own; the first
    /// invalid entry stops the batch and earlier entries stay applied.
    pub fn update_many(&mut self, cells: impl IntoIterator<Item = Cell>) -> Result<()> {
        let mut applied = 0usize;
        for cell in cells {
            self.update_one(cell)?;
            applied += 1;
        }
        debug!("applied batch of {applied} cells, population {}", self.population);
        Ok(())
    }

    /// Kill every cell.
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            cell.kill();
        }
        self.population = 0;
        debug!("cleared {}x{} grid", self.rows, self.cols);
    }

    /// Advance one generation under B3/S23 and return the cells that flipped,
    /// post-flip, in row-major order.
    ///
    /// All neighbor counts are taken against the pre-tick state: flips are
    /// collected during the scan and only applied once it is complete.
    pub fn tick(&mut self) -> Vec<Cell> {
        let mut to_update = Vec::new();

        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = self.index(row, col);
                let count = self.neighbors(row, col);

                let flips = match (self.cells[idx].is_alive(), count) {
                    (false, 3)            => true,   // Birth
                    (true, 2) | (true, 3) => false,  // Survival
                    (true, _)             => true,   // Under/overpopulation
                    _                     => false,  // Stays dead
                };

                if flips { to_update.push(idx); }
            }
        }

        let updated: Vec<Cell> = to_update
            .into_iter()
            .map(|idx| {
                let cell = &mut self.cells[idx];
                cell.toggle();
                if cell.is_alive() {
                    self.population += 1;
                } else {
                    self.population -= 1;
                }
                *cell
            })
            .collect();

        trace!("tick: {} cells changed, population {}", updated.len(), self.population);
        updated
    }

    /// Alive neighbors of (row, col); positions off the grid do not count.
    pub(crate) fn neighbors(&self, row: usize, col: usize) -> usize {
        self.neighbor_positions(row, col)
            .filter(|&(r, c)| self.cells[self.index(r, c)].is_alive())
            .count()
    }

    fn neighbor_positions(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr).filter(|&r| r < self.rows)?;
            let c = col.checked_add_signed(dc).filter(|&c| c < self.cols)?;
            Some((r, c))
        })
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }
}

/// Parse one grid dimension from text (CLI args, config values).
///
/// Anything other than a positive integer is an
/// [`GridError::InvalidDimension`]: zero, negatives and fractions included.
pub fn parse_dimension(text: &str) -> Result<usize> {
    match text.trim().parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(GridError::InvalidDimension(text.to_string())),
    }
}
