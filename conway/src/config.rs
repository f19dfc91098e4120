// config.rs - Compile-time configuration for the viewer and the headless runner

use egui::Color32;

pub const GRID_ROWS: usize = 100;                  // Default board height (cells)
pub const GRID_COLS: usize = 160;                  // Default board width (cells)
pub const CELL_SIZE: f32 = 5.0;                    // On-screen pixels per cell
pub const DEFAULT_SPEED: usize = 1;                // Index into speed::MODES ("fast")
pub const RANDOM_DENSITY: f64 = 1.0 / 3.0;         // Alive ratio for random soup
pub const PATTERN_DIR: &str = "patterns";          // Extra *.json patterns, loaded at startup

pub const LIVE_COLOR: Color32 = Color32::from_rgb(0x5b, 0xc0, 0xde);
pub const DEAD_COLOR: Color32 = Color32::from_rgb(40, 40, 40);
