use crate::view::GridView;

/// Pixel geometry of a drawn grid, shared by the renderer and the input handler.
///
/// With gridlines, each cell is a `cell_size` square preceded by a 1 pixel line, and one more line
/// closes off the right and bottom edges:
///
/// ```notrust
/// |#|#|#|
///  ^ ^ cell_size pixels
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Layout {
    /// Never 0
    cell_size: usize,
    gridlines: bool,
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            cell_size: 1,
            gridlines: false,
        }
    }
}

impl Layout {
    pub fn new(cell_size: usize, gridlines: bool) -> Self {
        Self {
            cell_size: cell_size.max(1),
            gridlines,
        }
    }

    /// Side length of a cell square, in pixels
    pub fn cell_size(&self) -> usize {
        self.cell_size
    }

    pub fn gridlines(&self) -> bool {
        self.gridlines
    }

    fn line_width(&self) -> usize {
        usize::from(self.gridlines)
    }

    /// Distance in pixels between the top left corners of two adjacent cells
    pub fn pitch(&self) -> usize {
        self.cell_size + self.line_width()
    }

    /// Width and height in pixels needed to draw a `width` by `height` grid
    pub fn canvas_size(&self, width: u32, height: u32) -> (usize, usize) {
        let p = self.pitch();
        let l = self.line_width();

        (p * width as usize + l, p * height as usize + l)
    }

    /// Top left pixel of the square drawn for `(row, col)`
    pub fn cell_origin(&self, row: u32, col: u32) -> (usize, usize) {
        let p = self.pitch();
        let l = self.line_width();

        (col as usize * p + l, row as usize * p + l)
    }

    /// The `(row, col)` under pixel `(x, y)`.
    ///
    /// Pixels past the right or bottom edge are clamped to the last column or row.
    pub fn cell_at(&self, x: usize, y: usize, view: &GridView<'_>) -> (u32, u32) {
        let p = self.pitch();

        let row = (y / p).min(view.height() as usize - 1) as u32;
        let col = (x / p).min(view.width() as usize - 1) as u32;

        (row, col)
    }
}

#[cfg(test)]
mod tests {
    use super::Layout;
    use crate::grid::Grid;

    #[test]
    fn canvas_size_with_gridlines() {
        let layout = Layout::new(5, true);

        assert_eq!(layout.pitch(), 6);
        assert_eq!(layout.canvas_size(80, 40), (481, 241));
    }

    #[test]
    fn canvas_size_without_gridlines() {
        let layout = Layout::new(2, false);

        assert_eq!(layout.canvas_size(3, 4), (6, 8));
        assert_eq!(layout.cell_origin(1, 2), (4, 2));
    }

    #[test]
    fn zero_cell_size_is_bumped() {
        let layout = Layout::new(0, false);

        assert_eq!(layout.cell_size(), 1);
        assert_eq!(layout.pitch(), 1);
    }

    #[test]
    fn zero_cell_size_maps_clicks_without_panicking() {
        let grid = Grid::new(10, 8, []).unwrap();
        let layout = Layout::new(0, false);

        assert_eq!(layout.cell_at(3, 3, &grid.view()), (3, 3));
        assert_eq!(layout.cell_at(50, 50, &grid.view()), (7, 9));
    }

    #[test]
    fn cell_at_divides_by_pitch() {
        let grid = Grid::new(10, 8, []).unwrap();
        let layout = Layout::new(5, true);

        assert_eq!(layout.cell_at(0, 0, &grid.view()), (0, 0));
        assert_eq!(layout.cell_at(11, 6, &grid.view()), (1, 1));
        assert_eq!(layout.cell_at(12, 17, &grid.view()), (2, 2));
    }

    #[test]
    fn cell_at_clamps() {
        let grid = Grid::new(10, 8, []).unwrap();
        let layout = Layout::new(5, true);

        assert_eq!(layout.cell_at(10_000, 10_000, &grid.view()), (7, 9));
    }
}
