// canvas.rs - Rendering collaborators fed with changed-cell lists

use egui::{Color32, ColorImage};
use life::{Cell, Grid};

/// Receives the cells a grid operation changed. Implementations draw only
/// those cells; nothing is ever asked to redraw the whole board per tick.
pub trait Render {
    fn update(&mut self, cells: &[Cell]);
    fn clear(&mut self);
}

/// Retained `cols x rows` pixel image, one pixel per cell.
///
/// The viewer uploads it to a texture only while `dirty` is set.
pub struct Canvas {
    image: ColorImage,
    live_color: Color32,
    dead_color: Color32,
    dirty: bool,
}

impl Canvas {
    pub fn new(rows: usize, cols: usize, live_color: Color32, dead_color: Color32) -> Self {
        Self {
            image: ColorImage::new([cols, rows], dead_color),
            live_color,
            dead_color,
            dirty: true,
        }
    }

    pub fn rows(&self) -> usize { self.image.size[1] }

    pub fn cols(&self) -> usize { self.image.size[0] }

    pub fn pixel(&self, row: usize, col: usize) -> Option<Color32> {
        (row < self.rows() && col < self.cols()).then(|| self.image.pixels[row * self.cols() + col])
    }

    /// Change the palette. Every pixel is recolored from `grid`, the one
    /// case that needs a full pass.
    pub fn set_colors(&mut self, live_color: Color32, dead_color: Color32, grid: &Grid) {
        if (live_color, dead_color) == (self.live_color, self.dead_color) {
            return;
        }
        self.live_color = live_color;
        self.dead_color = dead_color;
        for cell in grid.cells() {
            self.paint(cell);
        }
        self.dirty = true;
    }

    /// The image, if it changed since the last call.
    pub fn take_dirty(&mut self) -> Option<&ColorImage> {
        if std::mem::take(&mut self.dirty) {
            Some(&self.image)
        } else {
            None
        }
    }

    fn paint(&mut self, cell: &Cell) {
        let cols = self.cols();
        if let Some(pixel) = self.image.pixels.get_mut(cell.row() * cols + cell.col()) {
            *pixel = if cell.is_alive() { self.live_color } else { self.dead_color };
        }
    }
}

impl Render for Canvas {
    fn update(&mut self, cells: &[Cell]) {
        if cells.is_empty() {
            return;
        }
        for cell in cells {
            if cell.row() < self.rows() && cell.col() < self.cols() {
                self.paint(cell);
            }
        }
        self.dirty = true;
    }

    fn clear(&mut self) {
        self.image.pixels.fill(self.dead_color);
        self.dirty = true;
    }
}
