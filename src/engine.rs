//! The Game of Life transition rule.
//!
//! Everything here is a pure function of its inputs: nothing mutates a
//! [`Grid`] in place, and the grid never wraps around its edges.

use crate::cell::Life;
use crate::grid::Grid;

/// A seed or recorded coordinate. Signed so that malformed input
/// (negative positions) can be represented and dropped.
pub type Coord = (i64, i64);

/// Builds an all-dead `width × height` grid, then marks every in-bounds
/// coordinate of `seed` alive. Out-of-bounds coordinates are ignored.
pub fn make_grid(width: usize, height: usize, seed: &[Coord]) -> Grid {
    let mut grid = Grid::new(width, height);
    for &(x, y) in seed {
        if x < 0 || y < 0 || !grid.contains(x as usize, y as usize) {
            tracing::debug!(x, y, "dropping out-of-bounds seed coordinate");
            continue;
        }
        grid.set_alive(x as usize, y as usize);
    }
    grid
}

/// Counts the live neighbors of `(x, y)` among the eight surrounding positions.
///
/// Positions outside the grid count as dead, so border cells simply have
/// fewer candidates than interior ones. The result is in `0..=8`.
pub fn count_live_neighbors(grid: &Grid, x: usize, y: usize) -> u8 {
    let mut count = 0;
    for dy in -1..=1i64 {
        for dx in -1..=1i64 {
            if dx == 0 && dy == 0 {
                continue;
            }

            let neighbor = grid.get_signed(x as i64 + dx, y as i64 + dy);
            if neighbor.map_or(false, |cell| cell.is_alive()) {
                count += 1;
            }
        }
    }
    count
}

/// Produces the next generation of `grid`:
///
/// * a dead cell with exactly three live neighbors is born
/// * a live cell with two or three live neighbors survives
/// * every other cell is dead in the next generation
pub fn advance(grid: &Grid) -> Grid {
    Grid::from_fn(grid.width(), grid.height(), |x, y| {
        let alive = grid.get(x, y).map_or(false, |cell| cell.is_alive());
        match (alive, count_live_neighbors(grid, x, y)) {
            (_, 3) | (true, 2) => Life::Alive,
            _ => Life::Dead,
        }
    })
}

/// Births and deaths between two generations of the same dimensions.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Changes {
    pub born: u64,
    pub died: u64,
}

impl Changes {
    pub fn between(prev: &Grid, next: &Grid) -> Changes {
        prev.cells()
            .zip(next.cells())
            .fold(Changes::default(), |mut changes, (before, after)| {
                match (before.is_alive(), after.is_alive()) {
                    (false, true) => changes.born += 1,
                    (true, false) => changes.died += 1,
                    _ => {}
                }
                changes
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;
    use rand::Rng;

    fn live_set(grid: &Grid) -> Vec<(usize, usize)> {
        let mut live: Vec<_> = grid.live_cells().map(|c| (c.x, c.y)).collect();
        live.sort();
        live
    }

    #[test]
    fn test_make_grid_drops_out_of_bounds_seeds() {
        let grid = make_grid(5, 4, &[(1, 1), (5, 0), (0, 4), (-1, 2), (3, -7), (4, 3)]);
        assert_eq!(live_set(&grid), vec![(1, 1), (4, 3)]);
    }

    #[test]
    fn test_make_grid_tolerates_duplicates() {
        let grid = make_grid(3, 3, &[(1, 1), (1, 1)]);
        assert_eq!(grid.population(), 1);
    }

    #[test]
    fn test_isolated_cell_dies() {
        let grid = make_grid(3, 3, &[(1, 1)]);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 0);
        assert_eq!(advance(&grid).population(), 0);
    }

    #[test]
    fn test_birth_on_three_neighbors() {
        let grid = make_grid(4, 4, &[(0, 0), (1, 0), (0, 1)]);
        assert_eq!(count_live_neighbors(&grid, 1, 1), 3);

        let next = advance(&grid);
        assert!(next.get(1, 1).unwrap().is_alive());
        assert_eq!(live_set(&next), vec![(0, 0), (0, 1), (1, 0), (1, 1)]);
    }

    #[test]
    fn test_survival_and_death_counts() {
        // Blinker: the center has two neighbors, the ends have one.
        let grid = make_grid(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = advance(&grid);
        assert!(next.get(2, 2).unwrap().is_alive());
        assert!(!next.get(1, 2).unwrap().is_alive());
        assert!(!next.get(3, 2).unwrap().is_alive());

        // Center of a plus sign has four neighbors and dies.
        let plus = make_grid(5, 5, &[(2, 2), (1, 2), (3, 2), (2, 1), (2, 3)]);
        assert_eq!(count_live_neighbors(&plus, 2, 2), 4);
        assert!(!advance(&plus).get(2, 2).unwrap().is_alive());

        // Corner of a block has three neighbors and survives.
        let block = make_grid(4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]);
        assert_eq!(count_live_neighbors(&block, 1, 1), 3);
        assert_eq!(advance(&block), block);
    }

    #[test]
    fn test_edges_do_not_wrap() {
        let (w, h) = (6, 5);
        let grid = make_grid(w, h, &[(w as i64 - 1, h as i64 - 1), (w as i64 - 1, 0), (0, h as i64 - 1)]);
        assert_eq!(count_live_neighbors(&grid, 0, 0), 0);

        let full = Grid::from_fn(w, h, |_, _| Life::Alive);
        assert_eq!(count_live_neighbors(&full, 0, 0), 3);
        assert_eq!(count_live_neighbors(&full, w - 1, h - 1), 3);
        assert_eq!(count_live_neighbors(&full, 2, 0), 5);
        assert_eq!(count_live_neighbors(&full, 2, 2), 8);
    }

    #[test]
    fn test_glider_translates_after_four_generations() {
        let glider = patterns::lookup("glider");
        let mut grid = make_grid(30, 30, glider);
        for _ in 0..4 {
            grid = advance(&grid);
        }

        let mut expected: Vec<(usize, usize)> = glider
            .iter()
            .map(|&(x, y)| (x as usize + 1, y as usize + 1))
            .collect();
        expected.sort();
        assert_eq!(live_set(&grid), expected);
    }

    #[test]
    fn test_oscillator_has_period_two() {
        let grid = make_grid(20, 20, patterns::lookup("oscillator"));
        let once = advance(&grid);
        assert_ne!(once, grid);
        assert_eq!(advance(&once), grid);
    }

    #[test]
    fn test_advance_leaves_input_untouched() {
        let mut rng = rand::thread_rng();
        for _ in 0..20 {
            let width = rng.gen_range(1..16);
            let height = rng.gen_range(1..16);
            let grid = Grid::from_fn(width, height, |_, _| {
                if rng.gen_bool(0.4) {
                    Life::Alive
                } else {
                    Life::Dead
                }
            });
            let snapshot = grid.clone();

            let next = advance(&grid);
            assert_eq!(grid, snapshot);
            assert_eq!((next.width(), next.height()), (width, height));

            for cell in next.cells() {
                let before = grid.get(cell.x, cell.y).unwrap().is_alive();
                let n = count_live_neighbors(&grid, cell.x, cell.y);
                assert!(n <= 8);
                assert_eq!(cell.is_alive(), n == 3 || (before && n == 2));
            }
        }
    }

    #[test]
    fn test_changes_between_generations() {
        let grid = make_grid(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let next = advance(&grid);
        assert_eq!(Changes::between(&grid, &next), Changes { born: 2, died: 2 });
    }
}
