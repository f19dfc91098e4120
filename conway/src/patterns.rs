// patterns.rs - Built-in seed patterns plus *.json pattern files from disk
//
// Offsets are relative to the pattern's top-left corner; the controller
// centers them on whatever board it owns.

use std::error::Error;
use std::fs;
use std::path::Path;

use log::{debug, warn};

use life::Pattern;

pub struct BuiltinPattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

impl BuiltinPattern {
    pub fn to_pattern(&self) -> Pattern {
        Pattern::new(self.name, self.cells)
    }
}

pub const PATTERNS: &[BuiltinPattern] = &[
    BuiltinPattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    BuiltinPattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    BuiltinPattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    BuiltinPattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    BuiltinPattern {
        name: "Pulsar",
        cells: &[
            // Top half
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom half (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    BuiltinPattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    BuiltinPattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Every built-in pattern, in menu order.
pub fn builtin() -> Vec<Pattern> {
    PATTERNS.iter().map(BuiltinPattern::to_pattern).collect()
}

/// Read one `[[row, col], ...]` file; the pattern is named after the file stem.
pub fn load_file(path: &Path) -> Result<Pattern, Box<dyn Error>> {
    let name = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("pattern")
        .to_string();
    let json = fs::read_to_string(path)?;
    Ok(Pattern::from_json(name, &json)?)
}

/// Every readable *.json pattern in `dir`, sorted by name. Bad files are
/// skipped with a warning; a missing directory yields nothing.
pub fn load_dir(dir: &Path) -> Vec<Pattern> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(err) => {
            debug!("no pattern directory {}: {err}", dir.display());
            return Vec::new();
        }
    };

    let mut patterns: Vec<Pattern> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .filter_map(|path| match load_file(&path) {
            Ok(pattern) => Some(pattern),
            Err(err) => {
                warn!("skipping pattern {}: {err}", path.display());
                None
            }
        })
        .collect();
    patterns.sort_by(|a, b| a.name().cmp(b.name()));
    patterns
}

#[cfg(test)]
mod tests {
    use super::*;
    use life::Grid;

    fn scratch_dir(name: &str) -> std::path::PathBuf {
        let dir = std::env::temp_dir().join(format!("conway-patterns-{name}-{}", std::process::id()));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn builtins_fit_the_default_board() {
        for pattern in builtin() {
            let mut grid = Grid::new(crate::config::GRID_ROWS, crate::config::GRID_COLS).unwrap();
            let origin = pattern.centered_origin(grid.rows(), grid.cols());
            grid.update_many(pattern.cells_at(origin)).unwrap();
            assert_eq!(grid.population(), pattern.len(), "{}", pattern.name());
        }
    }

    #[test]
    fn pulsar_has_period_three() {
        let pulsar = PATTERNS[4].to_pattern();
        let mut grid = Grid::new(17, 17).unwrap();
        grid.update_many(pulsar.cells_at(life::Origin { row: 2, col: 2 })).unwrap();
        let start: Vec<_> = grid.cells().copied().collect();

        grid.tick();
        assert_ne!(grid.cells().copied().collect::<Vec<_>>(), start);
        grid.tick();
        grid.tick();
        assert_eq!(grid.cells().copied().collect::<Vec<_>>(), start);
    }

    #[test]
    fn r_pentomino_matches_pattern_file() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../patterns/r-pentomino.json");
        let from_file = load_file(&path).unwrap();
        let builtin = PATTERNS.iter().find(|p| p.name == "R-pentomino").unwrap().to_pattern();

        let sorted = |pattern: &Pattern| {
            let mut offsets = pattern.offsets().to_vec();
            offsets.sort();
            offsets
        };
        assert_eq!(sorted(&builtin), sorted(&from_file));

        // Still growing long after every small still life would have settled
        let mut grid = Grid::new(200, 200).unwrap();
        grid.update_many(builtin.cells_at(life::Origin { row: 100, col: 100 })).unwrap();
        for _ in 0..50 {
            grid.tick();
        }
        assert!(grid.population() > 30, "population {}", grid.population());
    }

    #[test]
    fn load_dir_skips_bad_files() {
        let dir = scratch_dir("mixed");
        fs::write(dir.join("blinker.json"), "[[0, 0], [0, 1], [0, 2]]").unwrap();
        fs::write(dir.join("broken.json"), "[[0, -1]]").unwrap();
        fs::write(dir.join("notes.txt"), "not a pattern").unwrap();

        let patterns = load_dir(&dir);
        assert_eq!(patterns.len(), 1);
        assert_eq!(patterns[0].name(), "blinker");
        assert_eq!(patterns[0].len(), 3);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_dir_is_empty() {
        assert!(load_dir(Path::new("/definitely/not/here")).is_empty());
    }
}
