use std::fmt;

use thiserror::Error;
use tracing::debug;
use tracing::trace;

use crate::cell::Cell;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;
use crate::view::GridView;

/// Side length of the default grid
pub const DEFAULT_SIZE: u32 = 80;

/// Glider used to seed the default grid. It travels down and to the right.
pub const GLIDER: [(u32, u32); 5] = [(36, 2), (37, 3), (38, 1), (38, 2), (38, 3)];

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum GridError {
    #[error("Invalid grid dimensions {width}x{height}")]
    InvalidDimension { width: u32, height: u32 },

    #[error("Cell ({row}, {col}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        row: u32,
        col: u32,
        width: u32,
        height: u32,
    },
}

/// A Life universe on a torus: the top edge touches the bottom edge and the left edge touches the
/// right edge.
#[derive(Clone)]
pub struct Grid {
    width: u32,
    height: u32,

    /// Current generation, row-major. The cell at `(row, col)` lives at `row * width + col`.
    cells: Vec<Cell>,

    /// Scratch buffer that `advance` writes the next generation into before swapping it with
    /// `cells`. Its contents are meaningless between calls.
    next: Vec<Cell>,

    /// Number of generations since creation or the last resize
    generation: u64,
}

impl Grid {
    /// Create a grid where only the cells in `seed` are alive.
    pub fn new<I>(width: u32, height: u32, seed: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let len = Self::buffer_len(width, height)?;

        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            generation: 0,
        };

        grid.set_cells(seed)?;

        Ok(grid)
    }

    /// An 80x80 grid with a single [`GLIDER`].
    pub fn with_glider() -> Self {
        let mut grid = Self::empty(DEFAULT_SIZE, DEFAULT_SIZE);

        for (row, col) in GLIDER {
            let i = grid.index(row, col);
            grid.cells[i] = Cell::Alive;
        }

        grid
    }

    /// Infallible constructor for dimensions known to be valid
    fn empty(width: u32, height: u32) -> Self {
        let len = width as usize * height as usize;

        Self {
            width,
            height,
            cells: vec![Cell::Dead; len],
            next: vec![Cell::Dead; len],
            generation: 0,
        }
    }

    fn buffer_len(width: u32, height: u32) -> Result<usize, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::InvalidDimension { width, height });
        }

        (width as usize)
            .checked_mul(height as usize)
            .ok_or(GridError::InvalidDimension { width, height })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of live cells in the current generation
    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    pub fn cell_state(&self, row: u32, col: u32) -> Result<Cell, GridError> {
        self.check(row, col)?;

        Ok(self.cells[self.index(row, col)])
    }

    pub fn is_alive(&self, row: u32, col: u32) -> Result<bool, GridError> {
        self.cell_state(row, col).map(Cell::is_alive)
    }

    /// Flip a single cell between alive and dead.
    pub fn toggle(&mut self, row: u32, col: u32) -> Result<(), GridError> {
        self.check(row, col)?;

        let i = self.index(row, col);
        self.cells[i].toggle();

        Ok(())
    }

    /// Bring every cell in `cells` to life.
    ///
    /// Coordinates are all checked before any cell changes, so on error the grid is untouched.
    pub fn set_cells<I>(&mut self, cells: I) -> Result<(), GridError>
    where
        I: IntoIterator<Item = (u32, u32)>,
    {
        let cells: Vec<_> = cells.into_iter().collect();

        for &(row, col) in &cells {
            self.check(row, col)?;
        }

        for (row, col) in cells {
            let i = self.index(row, col);
            self.cells[i] = Cell::Alive;
        }

        Ok(())
    }

    /// Kill every cell. The generation counter is kept.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Dead);
    }

    /// Change the width of the grid. Every cell dies and the generation counter restarts.
    pub fn set_width(&mut self, width: u32) -> Result<(), GridError> {
        self.resize(width, self.height)
    }

    /// Change the height of the grid. Every cell dies and the generation counter restarts.
    pub fn set_height(&mut self, height: u32) -> Result<(), GridError> {
        self.resize(self.width, height)
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), GridError> {
        let len = Self::buffer_len(width, height)?;

        debug!(width, height, "resizing grid");

        self.width = width;
        self.height = height;
        self.cells = vec![Cell::Dead; len];
        self.next = vec![Cell::Dead; len];
        self.generation = 0;

        Ok(())
    }

    /// Count the live cells among the 8 neighbors of `(row, col)`, wrapping around the edges.
    pub fn neighbor_count(&self, row: u32, col: u32) -> Result<u8, GridError> {
        self.check(row, col)?;

        Ok(count_neighbors(
            &self.cells,
            self.width,
            self.height,
            row,
            col,
        ))
    }

    /// Step the whole grid forward by one generation.
    ///
    /// Every cell is computed from the current generation into the scratch buffer, which then
    /// becomes the current generation.
    pub fn advance(&mut self) {
        let (width, height) = (self.width, self.height);
        let rules: RuleSet = B3S23;

        for row in 0..height {
            for col in 0..width {
                let i = row as usize * width as usize + col as usize;
                let neighbors = count_neighbors(&self.cells, width, height, row, col);

                self.next[i] = rules.next(self.cells[i], neighbors);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
        self.generation += 1;

        trace!(generation = self.generation, "advanced grid");
    }

    /// Read-only access to the current generation, for rendering.
    pub fn view(&self) -> GridView<'_> {
        GridView::new(self.width, self.height, &self.cells)
    }

    /// Text rendering, one line per row. Same as the `Display` output.
    pub fn render(&self) -> String {
        self.to_string()
    }

    fn check(&self, row: u32, col: u32) -> Result<(), GridError> {
        if row < self.height && col < self.width {
            Ok(())
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            })
        }
    }

    fn index(&self, row: u32, col: u32) -> usize {
        row as usize * self.width as usize + col as usize
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::with_glider()
    }
}

/// Live neighbors of `(row, col)` on a torus of the given size.
///
/// Offsets are applied as `(row + dr + height) % height`, so on grids narrower than 3 cells the
/// same cell can be counted more than once.
fn count_neighbors(cells: &[Cell], width: u32, height: u32, row: u32, col: u32) -> u8 {
    let (w, h) = (width as i64, height as i64);
    let (row, col) = (row as i64, col as i64);

    let mut count = 0;

    for dr in -1..=1 {
        for dc in -1..=1 {
            if dr == 0 && dc == 0 {
                continue;
            }

            let r = (row + dr + h) % h;
            let c = (col + dc + w) % w;

            count += cells[(r * w + c) as usize] as u8;
        }
    }

    count
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for line in self.view().rows() {
            for &cell in line {
                write!(f, "{}", cell.symbol())?;
            }

            writeln!(f)?;
        }

        Ok(())
    }
}

// The scratch buffer carries no state, so it takes no part in equality.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width
            && self.height == other.height
            && self.generation == other.generation
            && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl fmt::Debug for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("generation", &self.generation)
            .field("live", &self.live_count())
            .finish()
    }
}
