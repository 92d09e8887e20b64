#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    EngineEvent(EngineEvent),
    AppEvent(AppEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineEvent {
    /// Flip the cell at `(row, col)`
    Toggle { row: u32, col: u32 },

    /// Advance the grid by a single generation, whether playing or not
    Step,

    /// Kill every cell
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEvent {
    /// Switch between playing and paused
    TogglePlayback,

    /// The terminal was resized and needs a full redraw
    Resize,

    /// Exit the application
    Exit,
}
