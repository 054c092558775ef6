// rules.rs - Neighbor counting and the B3/S23 transition

use crate::grid::{Generations, Grid};

// Moore neighborhood, row-major around the center cell
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Live cells among the 8 toroidal neighbors of `(row, col)`.
///
/// On grids with a side shorter than 3 the offsets wrap onto the same
/// physical cell more than once and each visit is counted.
pub fn count_live_neighbors(grid: &Grid, row: isize, col: isize) -> u8 {
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        if grid.get(row + dr, col + dc) {
            count += 1;
        }
    }
    count
}

pub fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true,   // Survival
        (false, 3)            => true,   // Birth
        _                     => false,  // Death or stays dead
    }
}

/// Advances one generation. Every read hits the current grid and every
/// write hits the next one; the two trade places once all cells are done.
pub fn step(generations: &mut Generations) {
    let (current, next) = generations.split();
    debug_assert_eq!((current.rows(), current.cols()), (next.rows(), next.cols()));
    for row in 0..current.rows() as isize {
        for col in 0..current.cols() as isize {
            let live_neighbors = count_live_neighbors(current, row, col);
            next.set(row, col, next_state(current.get(row, col), live_neighbors));
        }
    }
    generations.swap();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns;

    fn generations_with(rows: usize, cols: usize, cells: &[(isize, isize)]) -> Generations {
        let mut generations = Generations::new(rows, cols);
        for &(row, col) in cells {
            generations.set(row, col, true);
        }
        generations
    }

    fn live_cells(grid: &Grid) -> Vec<(isize, isize)> {
        let mut cells = Vec::new();
        for row in 0..grid.rows() as isize {
            for col in 0..grid.cols() as isize {
                if grid.get(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    #[test]
    fn transition_table() {
        for n in 0..=8 {
            assert_eq!(next_state(true, n), n == 2 || n == 3, "alive with {n}");
            assert_eq!(next_state(false, n), n == 3, "dead with {n}");
        }
    }

    #[test]
    fn neighbors_wrap_around_corners() {
        let grid = generations_with(5, 5, &[(4, 4), (0, 4), (4, 0)]);
        assert_eq!(count_live_neighbors(grid.current(), 0, 0), 3);
    }

    #[test]
    fn neighbor_count_is_capped_at_eight() {
        let mut generations = Generations::new(4, 4);
        generations.current_mut().fill_with(|| true);
        for row in 0..4 {
            for col in 0..4 {
                assert_eq!(count_live_neighbors(generations.current(), row, col), 8);
            }
        }
    }

    #[test]
    fn tiny_grids_count_the_same_cell_repeatedly() {
        let single = generations_with(1, 1, &[(0, 0)]);
        assert_eq!(count_live_neighbors(single.current(), 0, 0), 8);

        let two = generations_with(2, 2, &[(0, 0)]);
        assert_eq!(count_live_neighbors(two.current(), 0, 0), 0);
        assert_eq!(count_live_neighbors(two.current(), 1, 1), 4);
    }

    #[test]
    fn empty_generations_step_cleanly() {
        let mut generations = Generations::new(0, 0);
        generations.set(1, 1, true);
        step(&mut generations);
        assert!(generations.current().is_empty());
        assert!(!generations.current().get(0, 0));
    }

    #[test]
    fn dead_grid_stays_dead() {
        let mut generations = Generations::new(8, 8);
        step(&mut generations);
        assert_eq!(generations.current().population(), 0);
    }

    #[test]
    fn lone_cell_dies() {
        let mut generations = generations_with(6, 6, &[(3, 3)]);
        step(&mut generations);
        assert_eq!(generations.current().population(), 0);
    }

    #[test]
    fn block_is_still() {
        let mut generations = Generations::new(6, 6);
        generations.current_mut().stamp(patterns::find("Block").unwrap(), 2, 2);
        let before = generations.current().clone();
        step(&mut generations);
        assert_eq!(generations.current(), &before);
    }

    #[test]
    fn blinker_has_period_two() {
        let mut generations = generations_with(16, 16, &[(8, 7), (8, 8), (8, 9)]);
        let horizontal = generations.current().clone();

        step(&mut generations);
        assert_eq!(live_cells(generations.current()), vec![(7, 8), (8, 8), (9, 8)]);

        step(&mut generations);
        assert_eq!(generations.current(), &horizontal);
    }

    #[test]
    fn glider_crosses_the_seam() {
        let mut generations = Generations::new(8, 8);
        generations.current_mut().stamp(patterns::find("Glider").unwrap(), 6, 6);
        let start = generations.current().clone();

        // A glider returns to its own shape one cell down-right every 4 steps
        for _ in 0..4 * 8 {
            step(&mut generations);
        }
        assert_eq!(generations.current(), &start);
    }

    #[test]
    fn step_is_deterministic() {
        let mut seed = 0x2545_f491_u32;
        let mut a = Generations::new(12, 12);
        a.current_mut().fill_with(|| {
            seed ^= seed << 13;
            seed ^= seed >> 17;
            seed ^= seed << 5;
            seed & 1 == 1
        });
        let mut b = a.clone();

        step(&mut a);
        step(&mut b);
        assert_eq!(a.current(), b.current());
    }
}
