// controller.rs - Owns the grid and its renderer; decides when a generation runs

use log::{info, warn};
use rand::Rng;

use life::{Cell, Grid, Origin, Pattern};

use crate::canvas::Render;

/// Run / stop / single-step state around one [`Grid`].
///
/// Every change to the grid is forwarded to the renderer as the list of
/// cells it touched.
pub struct Controller<R: Render> {
    grid: Grid,
    render: R,

    generated: u64,       // Cells born since the last clear
    cycles: u64,          // Generations run since the last clear

    running: bool,
    stepping: bool,
    pending_steps: u32,
}

impl<R: Render> Controller<R> {
    pub fn new(grid: Grid, render: R) -> Self {
        Self {
            grid,
            render,
            generated: 0,
            cycles: 0,
            running: false,
            stepping: false,
            pending_steps: 0,
        }
    }

    pub fn grid(&self) -> &Grid { &self.grid }

    pub fn render(&self) -> &R { &self.render }

    /// Grid and renderer together, for renderers that need to resync.
    pub fn parts_mut(&mut self) -> (&Grid, &mut R) {
        (&self.grid, &mut self.render)
    }

    pub fn rows(&self) -> usize { self.grid.rows() }

    pub fn cols(&self) -> usize { self.grid.cols() }

    pub fn population(&self) -> usize { self.grid.population() }

    pub fn cycles(&self) -> u64 { self.cycles }

    pub fn generated(&self) -> u64 { self.generated }

    pub fn is_running(&self) -> bool { self.running }

    pub fn run(&mut self) {
        self.running = true;
        self.stepping = false;
        info!("run");
    }

    pub fn stop(&mut self) {
        self.running = false;
        self.stepping = false;
    }

    /// Pause and run exactly one generation on the next refresh.
    pub fn next(&mut self) {
        self.running = false;
        self.stepping = true;
        self.pending_steps = 1;
    }

    /// Stop and kill every cell.
    pub fn clear(&mut self) {
        self.stop();
        self.cycles = 0;
        self.generated = 0;
        self.render.clear();
        self.grid.clear();
    }

    /// Clear, then seed `pattern` with its (0, 0) offset at `origin`.
    ///
    /// A cell off the board aborts the load; cells placed before it stay.
    pub fn load(&mut self, pattern: &Pattern, origin: Origin) -> life::Result<()> {
        self.clear();
        for cell in pattern.cells_at(origin) {
            self.grid.update_one(cell)?;
            self.render.update(&[cell]);
        }
        info!(
            "loaded pattern '{}' ({} cells) at ({}, {})",
            pattern.name(),
            pattern.len(),
            origin.row,
            origin.col
        );
        Ok(())
    }

    pub fn load_centered(&mut self, pattern: &Pattern) -> life::Result<()> {
        let origin = pattern.centered_origin(self.rows(), self.cols());
        self.load(pattern, origin)
    }

    /// Clear, then bring each cell alive with probability `density`.
    pub fn randomize(&mut self, rng: &mut impl Rng, density: f64) {
        self.clear();
        let (rows, cols) = (self.rows(), self.cols());
        let soup: Vec<Cell> = (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|_| rng.gen_bool(density))
            .map(|(row, col)| Cell::alive(row, col))
            .collect();

        // Every cell is in bounds by construction
        if let Err(err) = self.grid.update_many(soup.iter().copied()) {
            warn!("random soup rejected: {err}");
            return;
        }
        self.render.update(&soup);
        info!("random soup: {} alive cells", self.population());
    }

    /// Bring the cell at (row, col) alive, e.g. while drawing with the mouse.
    pub fn paint(&mut self, row: usize, col: usize) {
        let cell = Cell::alive(row, col);
        match self.grid.update_one(cell) {
            Ok(()) => self.render.update(&[cell]),
            Err(err) => warn!("paint ignored: {err}"),
        }
    }

    /// Called once per frame or timer tick. Runs a generation if the
    /// controller is running or a single step is pending; an empty board
    /// stops it. Returns whether a generation ran.
    pub fn refresh(&mut self) -> bool {
        if self.grid.population() == 0 {
            self.stop();
        }

        let advance = self.running || (self.stepping && self.pending_steps > 0);
        if advance {
            let updated = self.grid.tick();
            self.generated += updated.iter().filter(|cell| cell.is_alive()).count() as u64;
            self.render.update(&updated);
            self.cycles += 1;
        }
        self.pending_steps = self.pending_steps.saturating_sub(1);
        advance
    }
}
