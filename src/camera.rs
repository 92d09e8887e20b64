use crate::layout::Layout;
use crate::view::GridView;

/// Hex values of braille dots
///
/// ```text
///  1   8
///  2  10
///  4  20
/// 40  80
/// ```
///
/// Where the base blank pattern is codepoint `0x2800` (or U+2800)
///
/// To get other configurations, just add the numbers above.
const BRAILLE_EMPTY: u32 = 0x2800;

/// Renders a grid into a string of braille characters, each one a 2x4 block of pixels.
pub struct Camera {
    /// The pixel buffer
    pb: Vec<bool>,

    /// The frame buffer.
    fb: String,

    /// Codepoints. This allows us to construct the framebuffer more easily
    cp: Vec<u32>,

    /// Width of the pixel buffer
    w: usize,

    /// Height of the pixel buffer
    h: usize,
}

impl Camera {
    pub fn new(w: usize, h: usize) -> Self {
        // For each braille character, we need 3 bytes:
        //  - The leader byte:     0b11100010
        //  - Continuation byte 1: 0b101000xx
        //  - Continuation byte 2: 0b10xxxxxx
        // For each newline, we need one byte: 0b00001010
        //
        // Let `w` and `h` refer to width and height of the pixel buffer. Then `bw = ceil(w / 2)`
        // and `bh = ceil(h / 4)` are the width and height of braille characters of our framebuffer
        // (that is, not accounting for the trailing newlines expected at the end of each line).
        let (bw, bh) = (w.div_ceil(2), h.div_ceil(4));

        Self {
            pb: vec![false; w * h],
            fb: String::with_capacity(3 * (bw * bh) + bh),
            cp: vec![BRAILLE_EMPTY; bw * bh],
            w,
            h,
        }
    }

    /// A camera just big enough to show the whole grid
    pub fn for_grid(view: &GridView<'_>, layout: Layout) -> Self {
        let (w, h) = layout.canvas_size(view.width(), view.height());

        Self::new(w, h)
    }

    /// Reset the pixel buffer
    pub fn reset(&mut self) {
        self.pb.fill(false);
    }

    /// Turns on a single pixel. Pixels outside the camera are ignored.
    pub fn draw_pixel(&mut self, x: usize, y: usize) {
        if x >= self.w || y >= self.h {
            return;
        }

        let i = self.xy_from(x, y);
        self.pb[i] = true;
    }

    /// Turns on a `s` by `s` square of pixels with its top left corner at `(x, y)`
    pub fn draw_square(&mut self, x: usize, y: usize, s: usize) {
        for dy in 0..s {
            for dx in 0..s {
                self.draw_pixel(x + dx, y + dy);
            }
        }
    }

    /// Draws the `width + 1` vertical and `height + 1` horizontal lines separating cells.
    ///
    /// Does nothing if the layout has no gridlines.
    pub fn draw_gridlines(&mut self, view: &GridView<'_>, layout: Layout) {
        if !layout.gridlines() {
            return;
        }

        let (cw, ch) = layout.canvas_size(view.width(), view.height());
        let p = layout.pitch();

        // vertical lines
        for i in 0..=view.width() as usize {
            for y in 0..ch {
                self.draw_pixel(i * p, y);
            }
        }

        // horizontal lines
        for i in 0..=view.height() as usize {
            for x in 0..cw {
                self.draw_pixel(x, i * p);
            }
        }
    }

    /// Draws a filled square for every live cell
    pub fn draw_cells(&mut self, view: &GridView<'_>, layout: Layout) {
        for (row, col) in view.live_cells() {
            let (x, y) = layout.cell_origin(row, col);

            self.draw_square(x, y, layout.cell_size());
        }
    }

    /// Clears the camera then draws the grid
    pub fn draw(&mut self, view: &GridView<'_>, layout: Layout) {
        self.reset();
        self.draw_gridlines(view, layout);
        self.draw_cells(view, layout);
    }

    /// Fundamentally, we have a buffer of every pixel on our screen, and we ask ourselves "Is
    /// this pixel on or off?". Each group of 2x4 pixels becomes one braille character.
    pub fn render(&mut self) -> &str {
        let bw = self.w.div_ceil(2);

        // compute new codepoints
        self.cp.fill(BRAILLE_EMPTY);

        for (n, &px) in self.pb.iter().enumerate() {
            if px {
                let (x, y) = self.xy_to(n);
                self.cp[(y / 4) * bw + (x / 2)] += Self::get_hex_value(x, y);
            }
        }

        // update framebuffer
        self.fb.clear();

        for (i, &c) in self.cp.iter().enumerate() {
            if i > 0 && i % bw == 0 {
                self.fb.push('\n');
            }

            // every codepoint in 0x2800..=0x28FF is a braille pattern
            self.fb.push(char::from_u32(c).unwrap_or(' '));
        }
        self.fb.push('\n');

        &self.fb
    }

    fn xy_to(&self, n: usize) -> (usize, usize) {
        (n % self.w, n / self.w)
    }

    fn xy_from(&self, x: usize, y: usize) -> usize {
        y * self.w + x
    }

    fn get_hex_value(x: usize, y: usize) -> u32 {
        match (x % 2, y % 4) {
            (0, 0) => 0x1,
            (1, 0) => 0x8,
            (0, 1) => 0x2,
            (1, 1) => 0x10,
            (0, 2) => 0x4,
            (1, 2) => 0x20,
            (0, 3) => 0x40,
            (1, 3) => 0x80,
            _ => unreachable!(),
        }
    }
}
