use std::time::Duration;

use tracing::debug;

use crate::grid::Grid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Playback {
    Playing,
    #[default]
    Paused,
}

/// Drives a [`Grid`] forward, one generation per frame, while playing.
///
/// Pausing only takes effect on the next frame. A generation that has started always completes.
#[derive(Debug, Clone)]
pub struct Scheduler {
    state: Playback,
    frame_time: Duration,
}

impl Scheduler {
    /// A paused scheduler running at `fps` frames per second. `fps` of 0 is treated as 1.
    pub fn new(fps: u32) -> Self {
        let fps = fps.max(1);

        Self {
            state: Playback::Paused,
            frame_time: Duration::from_secs(1) / fps,
        }
    }

    pub fn state(&self) -> Playback {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == Playback::Playing
    }

    /// Time budget of a single frame
    pub fn frame_time(&self) -> Duration {
        self.frame_time
    }

    pub fn play(&mut self) {
        self.set(Playback::Playing);
    }

    pub fn pause(&mut self) {
        self.set(Playback::Paused);
    }

    /// Switch between playing and paused, returning the new state
    pub fn toggle(&mut self) -> Playback {
        match self.state {
            Playback::Playing => self.pause(),
            Playback::Paused => self.play(),
        }

        self.state
    }

    fn set(&mut self, state: Playback) {
        if self.state != state {
            debug!(?state, "playback changed");
        }

        self.state = state;
    }

    /// Called once per frame. Advances `grid` by one generation if playing, and returns whether it
    /// did.
    pub fn on_frame(&self, grid: &mut Grid) -> bool {
        if !self.is_playing() {
            return false;
        }

        grid.advance();

        true
    }
}

impl Default for Scheduler {
    fn default() -> Self {
        Self::new(30)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::Playback;
    use super::Scheduler;
    use crate::grid::Grid;

    #[test]
    fn starts_paused() {
        let scheduler = Scheduler::default();

        assert_eq!(scheduler.state(), Playback::Paused);
    }

    #[test]
    fn toggle_flips_state() {
        let mut scheduler = Scheduler::new(60);

        assert_eq!(scheduler.toggle(), Playback::Playing);
        assert_eq!(scheduler.toggle(), Playback::Paused);
    }

    #[test]
    fn advances_only_while_playing() {
        let mut grid = Grid::with_glider();
        let mut scheduler = Scheduler::new(60);

        assert!(!scheduler.on_frame(&mut grid));
        assert_eq!(grid.generation(), 0);

        scheduler.play();
        assert!(scheduler.on_frame(&mut grid));
        assert!(scheduler.on_frame(&mut grid));
        assert_eq!(grid.generation(), 2);

        scheduler.pause();
        assert!(!scheduler.on_frame(&mut grid));
        assert_eq!(grid.generation(), 2);
    }

    #[test]
    fn frame_time() {
        assert_eq!(Scheduler::new(4).frame_time(), Duration::from_millis(250));
        assert_eq!(Scheduler::new(0).frame_time(), Duration::from_secs(1));
    }
}
