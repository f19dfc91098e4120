// speed.rs - Named tick intervals, stepped up or down one mode at a time

use std::time::Duration;

/// (mode name, interval in ms), fastest first.
pub const MODES: [(&str, u64); 5] = [
    ("rocket", 15),
    ("fast", 75),
    ("normal", 150),
    ("slow", 400),
    ("lazy", 1000),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpeedController {
    index: usize,
}

impl SpeedController {
    /// Start at mode `index`, clamped to the slowest mode.
    pub fn new(index: usize) -> Self {
        Self { index: index.min(MODES.len() - 1) }
    }

    /// Look a mode up by name ("rocket" ... "lazy").
    pub fn from_mode(name: &str) -> Option<Self> {
        MODES.iter().position(|&(mode, _)| mode == name).map(Self::new)
    }

    pub fn interval(&self) -> Duration {
        Duration::from_millis(MODES[self.index].1)
    }

    pub fn mode(&self) -> &'static str {
        MODES[self.index].0
    }

    /// One mode faster; stays put at "rocket".
    pub fn up(&mut self) {
        self.index = self.index.saturating_sub(1);
    }

    /// One mode slower; stays put at "lazy".
    pub fn down(&mut self) {
        if self.index + 1 < MODES.len() {
            self.index += 1;
        }
    }
}

impl Default for SpeedController {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SPEED)
    }
}
