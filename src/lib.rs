pub mod camera;
pub mod cell;
pub mod config;
pub mod events;
pub mod grid;
pub mod io;
pub mod layout;
pub mod playback;
pub mod rule_set;
pub mod terminal;
pub mod view;

pub use cell::Cell;
pub use grid::Grid;
pub use grid::GridError;
pub use view::GridView;
