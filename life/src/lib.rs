// lib.rs - Bounded Conway's Game of Life engine
//
// The grid reports every generation as the list of cells that flipped,
// so a renderer only ever redraws what changed.

pub mod cell;     // Cell value type
pub mod error;    // GridError
pub mod grid;     // Grid, tick algorithm, validated updates
pub mod pattern;  // Seed patterns and the JSON pattern format

pub use cell::Cell;
pub use error::{GridError, Result};
pub use grid::{Grid, Update};
pub use pattern::{Origin, Pattern};
