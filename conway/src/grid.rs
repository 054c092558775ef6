// grid.rs - Toroidal cell storage for Conway's Game of Life

use crate::patterns::Pattern;

/// A `rows x cols` field of cells stored row-major: index = `row * cols + col`.
///
/// Coordinates passed to [`Grid::get`] and [`Grid::set`] are signed and wrap
/// around both edges, so the field behaves like the surface of a torus.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows  : usize,
    cols  : usize,
    cells : Vec<bool>,
}

impl Grid {
    /// An all-dead grid. `cells.len() == rows * cols` holds from here on.
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![false; rows * cols],
        }
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major view of every cell.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn index(&self, row: isize, col: isize) -> usize {
        wrap(row, self.rows) * self.cols + wrap(col, self.cols)
    }

    /// Always dead on an empty grid.
    pub fn get(&self, row: isize, col: isize) -> bool {
        if self.is_empty() {
            return false;
        }
        self.cells[self.index(row, col)]
    }

    /// No-op on an empty grid.
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        if self.is_empty() {
            return;
        }
        let index = self.index(row, col);
        self.cells[index] = alive;
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Overwrites every cell with the value produced by `alive`, in row-major order.
    pub fn fill_with(&mut self, mut alive: impl FnMut() -> bool) {
        for cell in &mut self.cells {
            *cell = alive();
        }
    }

    /// Sets the pattern's cells alive with its origin at `(row, col)`.
    /// Cells falling off an edge wrap to the opposite one.
    pub fn stamp(&mut self, pattern: &Pattern, row: isize, col: isize) {
        for &(dr, dc) in pattern.cells {
            self.set(row + dr, col + dc, true);
        }
    }
}

// Euclidean modulo: -1 lands on the last row/column, not on a panic.
fn wrap(x: isize, n: usize) -> usize {
    x.rem_euclid(n as isize) as usize
}

/// The current generation plus the buffer the next one is written into.
///
/// Both grids always share the same dimensions. Advancing a generation
/// exchanges the two by value; cell contents are never copied across.
#[derive(Debug, Clone)]
pub struct Generations {
    current : Grid,
    next    : Grid,
}

impl Generations {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            current: Grid::new(rows, cols),
            next: Grid::new(rows, cols),
        }
    }

    pub fn current(&self) -> &Grid {
        &self.current
    }

    /// Writes one cell of the current generation, wrapping like [`Grid::set`].
    pub fn set(&mut self, row: isize, col: isize, alive: bool) {
        self.current.set(row, col, alive);
    }

    // Crate-only: handing out the whole grid would let callers swap in one
    // whose size no longer matches `next`.
    pub(crate) fn current_mut(&mut self) -> &mut Grid {
        &mut self.current
    }

    /// Read access to the current generation alongside write access to the next.
    pub(crate) fn split(&mut self) -> (&Grid, &mut Grid) {
        (&self.current, &mut self.next)
    }

    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }
}
