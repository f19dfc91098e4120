// lib.rs - Driver side of the Game of Life: pacing, seeding and rendering
// around a `life::Grid`. Shared by the egui viewer and the headless runner.

pub mod canvas;      // Render trait + retained pixel canvas
pub mod config;      // Compile-time defaults
pub mod controller;  // Run / stop / step state machine owning the grid
pub mod patterns;    // Built-in pattern table and pattern files
pub mod speed;       // Named speed modes

pub use canvas::{Canvas, Render};
pub use controller::Controller;
pub use speed::SpeedController;
