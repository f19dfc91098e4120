// cell.rs - One grid position and its life status

use serde::{Deserialize, Serialize};

/// A cell at a fixed (row, col) position. Only the status ever changes.
///
/// Equality is structural: two cells are equal when position and status match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    row: usize,
    col: usize,
    #[serde(default)]
    alive: bool,
}

impl Cell {
    pub fn new(row: usize, col: usize, alive: bool) -> Self {
        Self { row, col, alive }
    }

    /// Dead cell at (row, col).
    pub fn dead(row: usize, col: usize) -> Self {
        Self::new(row, col, false)
    }

    /// Alive cell at (row, col).
    pub fn alive(row: usize, col: usize) -> Self {
        Self::new(row, col, true)
    }

    pub fn row(&self) -> usize { self.row }

    pub fn col(&self) -> usize { self.col }

    pub fn is_alive(&self) -> bool { self.alive }

    pub fn is_dead(&self) -> bool { !self.alive }

    /// Mark alive. Calling it on an alive cell does nothing observable.
    pub fn set_alive(&mut self) {
        self.alive = true;
    }

    /// Mark dead. Calling it on a dead cell does nothing observable.
    pub fn kill(&mut self) {
        self.alive = false;
    }

    pub fn toggle(&mut self) {
        self.alive = !self.alive;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_cell_defaults_to_dead() {
        let cell = Cell::dead(2, 7);
        assert_eq!((cell.row(), cell.col()), (2, 7));
        assert!(cell.is_dead());
        assert!(!cell.is_alive());
    }

    #[test]
    fn mutators_are_unconditional() {
        let mut cell = Cell::dead(0, 0);
        cell.set_alive();
        cell.set_alive();
        assert!(cell.is_alive());

        cell.kill();
        cell.kill();
        assert!(cell.is_dead());

        cell.toggle();
        assert!(cell.is_alive());
        cell.toggle();
        assert!(cell.is_dead());
    }

    #[test]
    fn equality_covers_position_and_status() {
        assert_eq!(Cell::alive(1, 2), Cell::new(1, 2, true));
        assert_ne!(Cell::alive(1, 2), Cell::dead(1, 2));
        assert_ne!(Cell::alive(1, 2), Cell::alive(2, 1));
    }

    #[test]
    fn missing_status_deserializes_as_dead() {
        let cell: Cell = serde_json::from_str(r#"{"row": 4, "col": 5}"#).unwrap();
        assert_eq!(cell, Cell::dead(4, 5));
    }
}
