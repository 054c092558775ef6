// raster.rs - Grid to pixel blocks

use egui::Color32;

use crate::config::CellSize;
use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub alive: Color32,
    pub dead: Color32,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            alive: Color32::from_rgb(0, 200, 0),
            dead: Color32::from_rgb(40, 40, 40),
        }
    }
}

/// Row-major pixels, `pixels.len() == width * height`.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
    width  : usize,
    height : usize,
    pixels : Vec<Color32>,
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, fill: Color32) -> Self {
        Self {
            width,
            height,
            pixels: vec![fill; width * height],
        }
    }

    /// Exactly the size needed to show `grid` at `cell` pixels per cell.
    pub fn for_grid(grid: &Grid, cell: CellSize, fill: Color32) -> Self {
        Self::new(grid.cols() * cell.x, grid.rows() * cell.y, fill)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// `[width, height]`, the order egui images use.
    pub fn size(&self) -> [usize; 2] {
        [self.width, self.height]
    }

    pub fn pixels(&self) -> &[Color32] {
        &self.pixels
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<Color32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.pixels[y * self.width + x])
    }
}

/// Paints every cell of `grid` as a solid `cell.x` by `cell.y` block.
///
/// `out` must have been sized with [`PixelBuffer::for_grid`] for the same
/// grid and cell size.
pub fn render(grid: &Grid, cell: CellSize, palette: &Palette, out: &mut PixelBuffer) {
    debug_assert_eq!(out.width, grid.cols() * cell.x);
    debug_assert_eq!(out.height, grid.rows() * cell.y);
    if grid.is_empty() {
        return;
    }

    let width = out.width;
    for (row, cells) in grid.cells().chunks_exact(grid.cols()).enumerate() {
        let top = row * cell.y * width;

        // First scanline of the row, cell by cell
        for (col, &alive) in cells.iter().enumerate() {
            let color = if alive { palette.alive } else { palette.dead };
            let start = top + col * cell.x;
            out.pixels[start..start + cell.x].fill(color);
        }

        // Remaining scanlines are identical
        for line in 1..cell.y {
            out.pixels.copy_within(top..top + width, top + line * width);
        }
    }
}
