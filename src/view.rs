use std::slice::ChunksExact;

use crate::cell::Cell;

/// Read-only window into the cells of a [`Grid`](crate::grid::Grid).
///
/// A view borrows the grid, so the grid can't advance or be toggled while a renderer holds one.
#[derive(Clone, Copy, Debug)]
pub struct GridView<'a> {
    width: u32,
    height: u32,
    cells: &'a [Cell],
}

impl<'a> GridView<'a> {
    pub(crate) fn new(width: u32, height: u32, cells: &'a [Cell]) -> Self {
        debug_assert_eq!(cells.len(), width as usize * height as usize);

        Self {
            width,
            height,
            cells,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Cells in row-major order
    pub fn cells(&self) -> &'a [Cell] {
        self.cells
    }

    /// One byte per cell, `0` dead and `1` alive, row-major.
    pub fn as_bytes(&self) -> &'a [u8] {
        let len = self.cells.len();
        let ptr = self.cells.as_ptr().cast::<u8>();

        // SAFETY: `Cell` is `repr(u8)` and every discriminant is a valid `u8`, so `len` cells
        // occupy exactly `len` initialized bytes, borrowed for as long as `cells` is.
        unsafe { std::slice::from_raw_parts(ptr, len) }
    }

    /// The cell at `(row, col)`, or `None` outside the grid.
    pub fn get(&self, row: u32, col: u32) -> Option<Cell> {
        if row >= self.height || col >= self.width {
            return None;
        }

        self.cells
            .get(row as usize * self.width as usize + col as usize)
            .copied()
    }

    /// Iterate over the rows, top to bottom
    pub fn rows(&self) -> ChunksExact<'a, Cell> {
        self.cells.chunks_exact(self.width as usize)
    }

    /// Iterate over the coordinates of live cells in row-major order
    pub fn live_cells(&self) -> impl Iterator<Item = (u32, u32)> + 'a {
        let width = self.width as usize;

        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(i, _)| ((i / width) as u32, (i % width) as u32))
    }
}
