use life::{Cell, Grid, Origin, Pattern};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn scanned_population(grid: &Grid) -> usize {
    grid.cells().filter(|cell| cell.is_alive()).count()
}

fn alive_positions(grid: &Grid) -> Vec<(usize, usize)> {
    grid.alive_cells().map(|c| (c.row(), c.col())).collect()
}

#[test]
fn population_matches_full_scan_after_random_operations() {
    for seed in 0..16u64 {
        let mut rng = StdRng::seed_from_u64(seed);
        let rows = rng.gen_range(1..12);
        let cols = rng.gen_range(1..12);
        let mut grid = Grid::new(rows, cols).unwrap();

        for _ in 0..200 {
            match rng.gen_range(0..10) {
                0..=4 => {
                    // Occasionally aim past the edges
                    let row = rng.gen_range(0..rows + 2);
                    let col = rng.gen_range(0..cols + 2);
                    let result = grid.update_one(Cell::new(row, col, rng.gen_bool(0.6)));
                    assert_eq!(result.is_ok(), row < rows && col < cols);
                }
                5 => {
                    let batch: Vec<Cell> = (0..rng.gen_range(0..8))
                        .map(|_| {
                            Cell::new(rng.gen_range(0..rows), rng.gen_range(0..cols), rng.gen_bool(0.5))
                        })
                        .collect();
                    grid.update_many(batch).unwrap();
                }
                6 => grid.clear(),
                _ => {
                    let before = scanned_population(&grid);
                    let changed = grid.tick();
                    let births = changed.iter().filter(|c| c.is_alive()).count();
                    let deaths = changed.len() - births;
                    assert_eq!(grid.population() + deaths, before + births);
                }
            }
            assert_eq!(grid.population(), scanned_population(&grid), "seed {seed}");
        }
    }
}

#[test]
fn tick_reports_changes_in_row_major_order() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut grid = Grid::new(20, 20).unwrap();
    let soup: Vec<Cell> = (0..20)
        .flat_map(|r| (0..20).map(move |c| (r, c)))
        .filter(|_| rng.gen_bool(0.35))
        .map(|(r, c)| Cell::alive(r, c))
        .collect();
    grid.update_many(soup).unwrap();

    for _ in 0..10 {
        let changed = grid.tick();
        let keys: Vec<(usize, usize)> = changed.iter().map(|c| (c.row(), c.col())).collect();
        let mut sorted = keys.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(keys, sorted);

        // Every reported cell holds its post-tick status in the grid
        for cell in &changed {
            assert_eq!(grid.get(cell.row(), cell.col()), Some(cell));
        }
    }
}

#[test]
fn glider_translates_diagonally_every_four_generations() {
    let glider = Pattern::from_json("glider", "[[0, 1], [1, 2], [2, 0], [2, 1], [2, 2]]").unwrap();
    let mut grid = Grid::new(12, 12).unwrap();
    grid.update_many(glider.cells_at(Origin { row: 1, col: 1 })).unwrap();

    for _ in 0..4 {
        grid.tick();
        assert_eq!(grid.population(), 5);
    }

    let expected: Vec<(usize, usize)> =
        glider.cells_at(Origin { row: 2, col: 2 }).map(|c| (c.row(), c.col())).collect();
    let mut expected = expected;
    expected.sort();
    assert_eq!(alive_positions(&grid), expected);
}

#[test]
fn seeding_twice_is_a_no_op() {
    let block = Pattern::new("block", vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    let mut grid = Grid::new(6, 6).unwrap();
    let origin = block.centered_origin(6, 6);

    grid.update_many(block.cells_at(origin)).unwrap();
    let first: Vec<Cell> = grid.cells().copied().collect();
    grid.update_many(block.cells_at(origin)).unwrap();

    assert_eq!(grid.cells().copied().collect::<Vec<_>>(), first);
    assert_eq!(grid.population(), 4);
}

#[test]
fn pattern_hanging_off_the_grid_is_rejected_part_way() {
    let line = Pattern::new("line", vec![(0, 0), (0, 1), (0, 2), (0, 3)]);
    let mut grid = Grid::new(3, 3).unwrap();
    assert!(grid.update_many(line.cells_at(Origin { row: 1, col: 1 })).is_err());
    assert_eq!(alive_positions(&grid), vec![(1, 1), (1, 2)]);
    assert_eq!(grid.population(), 2);
}
