// main.rs - egui viewer: owns one Controller and paces it from the frame loop

use eframe::egui;
use egui::Color32;
use std::error::Error;
use std::path::Path;
use std::time::Instant;

use log::{info, warn};

use conway::{Canvas, Controller, SpeedController, config, patterns};
use life::{Grid, Pattern};

mod ui;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let grid = Grid::new(config::GRID_ROWS, config::GRID_COLS)?;
    let canvas = Canvas::new(grid.rows(), grid.cols(), config::LIVE_COLOR, config::DEAD_COLOR);

    let mut app = GameOfLife::new(Controller::new(grid, canvas));
    app.apply_selected_pattern();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([
                config::GRID_COLS as f32 * config::CELL_SIZE + 40.0,
                config::GRID_ROWS as f32 * config::CELL_SIZE + 160.0,
            ]),
        ..Default::default()
    };

    eframe::run_native(
        "Conway's Game of Life",
        options,
        Box::new(|_cc| Box::new(app)),
    )?;
    Ok(())
}

/// Viewer state around the controller
pub struct GameOfLife {
    controller: Controller<Canvas>,
    speed: SpeedController,
    last_update: Instant,

    patterns: Vec<Pattern>,
    selected_pattern: usize,

    live_color: Color32,
    dead_color: Color32,
    texture: Option<egui::TextureHandle>,

    notice: Option<(String, Instant)>,  // Short status message, fades after a second
}

impl GameOfLife {
    pub fn new(controller: Controller<Canvas>) -> Self {
        let mut patterns = patterns::builtin();
        patterns.extend(patterns::load_dir(Path::new(config::PATTERN_DIR)));
        info!("{} patterns available", patterns.len());

        let selected_pattern = patterns
            .iter()
            .position(|p| p.name() == "Gosper Glider Gun")
            .unwrap_or(0);

        Self {
            controller,
            speed: SpeedController::default(),
            last_update: Instant::now(),
            patterns,
            selected_pattern,
            live_color: config::LIVE_COLOR,
            dead_color: config::DEAD_COLOR,
            texture: None,
            notice: None,
        }
    }

    fn notify(&mut self, text: impl Into<String>) {
        self.notice = Some((text.into(), Instant::now()));
    }

    fn apply_selected_pattern(&mut self) {
        let result = match self.patterns.get(self.selected_pattern) {
            Some(pattern) => self.controller.load_centered(pattern),
            None => return,
        };
        match result {
            Ok(()) => self.notify("Loaded"),
            Err(err) => {
                warn!("pattern cannot be loaded: {err}");
                self.notify("Pattern cannot be loaded");
            }
        }
    }

    fn random_pattern(&mut self) {
        self.controller.randomize(&mut rand::thread_rng(), config::RANDOM_DENSITY);
        self.notify("Random");
    }

    /// Run a generation when the current speed interval has elapsed.
    fn advance(&mut self) {
        if self.last_update.elapsed() >= self.speed.interval() {
            self.controller.refresh();
            self.last_update = Instant::now();
        }
    }

    /// Upload the canvas to the GPU texture if any pixel changed.
    fn sync_texture(&mut self, ctx: &egui::Context) {
        let (grid, canvas) = self.controller.parts_mut();
        canvas.set_colors(self.live_color, self.dead_color, grid);

        let Some(image) = canvas.take_dirty().cloned() else { return };
        match &mut self.texture {
            Some(texture) => texture.set(image, egui::TextureOptions::NEAREST),
            None => self.texture = Some(ctx.load_texture("board", image, egui::TextureOptions::NEAREST)),
        }
    }
}
