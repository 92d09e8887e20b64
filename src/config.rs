use std::path::PathBuf;

use clap::Parser;

use crate::grid::DEFAULT_SIZE;
use crate::grid::GLIDER;
use crate::layout::Layout;

const DEFAULT_FPS: u32 = 30;

/// Conway's Game of Life on a torus, in the terminal.
///
/// Click a cell to toggle it, `space` to play or pause, `n` to step, `c` to clear, `q` to quit.
///
/// Log verbosity is read from `RUST_LOG` (default `warn`). Logs are written to stderr, which is
/// the same terminal as the grid: pass `--log-file` or redirect stderr (`2>life.log`) to keep
/// them off the screen.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(name = "torus-life", version)]
pub struct Config {
    /// Number of columns
    #[arg(short = 'W', long, default_value_t = DEFAULT_SIZE)]
    pub width: u32,

    /// Number of rows
    #[arg(short = 'H', long, default_value_t = DEFAULT_SIZE)]
    pub height: u32,

    /// Side length of a cell, in braille dots
    #[arg(short, long, default_value_t = 1)]
    pub cell_size: usize,

    /// Draw lines between cells
    #[arg(short, long)]
    pub gridlines: bool,

    /// Frames (and generations, while playing) per second
    #[arg(short, long, default_value_t = DEFAULT_FPS)]
    pub fps: u32,

    /// Start playing right away
    #[arg(short, long)]
    pub play: bool,

    /// Print the grid as text after this many generations and exit
    #[arg(long, value_name = "GENERATIONS")]
    pub print: Option<u64>,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_SIZE,
            height: DEFAULT_SIZE,
            cell_size: 1,
            gridlines: false,
            fps: DEFAULT_FPS,
            play: false,
            print: None,
            log_file: None,
        }
    }
}

impl Config {
    pub fn layout(&self) -> Layout {
        Layout::new(self.cell_size, self.gridlines)
    }

    /// The glider seed, wrapped into the configured grid so it fits any size.
    pub fn seed(&self) -> Vec<(u32, u32)> {
        let (w, h) = (self.width.max(1), self.height.max(1));

        GLIDER
            .iter()
            .map(|&(row, col)| (row % h, col % w))
            .collect()
    }
}
