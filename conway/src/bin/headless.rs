// headless.rs - Terminal runner: ticks one grid on a tokio interval and logs
// population per generation.
//
//     conway-headless [rows] [cols] [pattern.json] [generations] [speed]
//
// Stops at the generation limit, when the board empties, or on Ctrl-C.

use std::env;
use std::error::Error;
use std::path::PathBuf;

use log::{debug, info};
use tokio::time::{self, MissedTickBehavior};

use conway::{Controller, Render, SpeedController, config, patterns};
use life::grid::parse_dimension;
use life::{Cell, Grid};

/// Tallies what each generation changed instead of drawing it.
#[derive(Default)]
struct ChangeLog {
    births: u64,
    deaths: u64,
}

impl Render for ChangeLog {
    fn update(&mut self, cells: &[Cell]) {
        let born = cells.iter().filter(|cell| cell.is_alive()).count() as u64;
        self.births += born;
        self.deaths += cells.len() as u64 - born;
        debug!("{} cells changed ({born} born)", cells.len());
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

struct Args {
    rows: usize,
    cols: usize,
    pattern: Option<PathBuf>,
    generations: Option<u64>,
    speed: SpeedController,
}

impl Args {
    fn parse(mut args: impl Iterator<Item = String>) -> Result<Self, Box<dyn Error>> {
        let rows = match args.next() {
            Some(text) => parse_dimension(&text)?,
            None => config::GRID_ROWS,
        };
        let cols = match args.next() {
            Some(text) => parse_dimension(&text)?,
            None => config::GRID_COLS,
        };
        let pattern = args.next().map(PathBuf::from);
        let generations = args.next().map(|text| text.parse::<u64>()).transpose()?;
        let speed = match args.next() {
            Some(name) => SpeedController::from_mode(&name)
                .ok_or_else(|| format!("unknown speed mode '{name}'"))?,
            None => SpeedController::default(),
        };
        Ok(Self { rows, cols, pattern, generations, speed })
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse(env::args().skip(1))?;
    let grid = Grid::new(args.rows, args.cols)?;
    let mut controller = Controller::new(grid, ChangeLog::default());

    let pattern = match &args.pattern {
        Some(path) => patterns::load_file(path)?,
        None => patterns::PATTERNS[0].to_pattern(),
    };
    controller.load_centered(&pattern)?;
    controller.run();

    info!(
        "{}x{} board, pattern '{}', speed {} ({} ms)",
        args.rows,
        args.cols,
        pattern.name(),
        args.speed.mode(),
        args.speed.interval().as_millis()
    );

    let mut interval = time::interval(args.speed.interval());
    interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    loop {
        tokio::select! {
            _ = &mut ctrl_c => {
                info!("interrupted");
                break;
            }
            _ = interval.tick() => {
                if !controller.refresh() {
                    info!("board is empty");
                    break;
                }
                info!("generation {}: population {}", controller.cycles(), controller.population());
                if args.generations.is_some_and(|limit| controller.cycles() >= limit) {
                    break;
                }
            }
        }
    }

    let changes = controller.render();
    info!(
        "finished after {} generations: population {}, {} born, {} died",
        controller.cycles(),
        controller.population(),
        changes.births,
        changes.deaths
    );
    Ok(())
}
