use std::fs::File;
use std::io;
use std::io::Write;
use std::sync::Mutex;
use std::time::Instant;

use anyhow::Context;
use clap::Parser;
use crossterm::cursor;
use crossterm::event;
use crossterm::execute;
use crossterm::queue;
use crossterm::style;
use crossterm::terminal;
use tracing::info;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::BoxMakeWriter;

use torus_life::camera::Camera;
use torus_life::config::Config;
use torus_life::events::AppEvent;
use torus_life::events::EngineEvent;
use torus_life::events::Event;
use torus_life::grid::Grid;
use torus_life::io::convert_event;
use torus_life::layout::Layout;
use torus_life::playback::Playback;
use torus_life::playback::Scheduler;
use torus_life::terminal::TerminalGuard;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs share the terminal with the UI unless they go to a file
    let writer = match &config.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::stderr),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(writer)
        .with_ansi(config.log_file.is_none())
        .init();

    let mut grid = Grid::new(config.width, config.height, config.seed())
        .context("Failed to create the grid")?;

    info!(width = grid.width(), height = grid.height(), "created grid");

    if let Some(generations) = config.print {
        for _ in 0..generations {
            grid.advance();
        }

        print!("{grid}");

        return Ok(());
    }

    let mut guard = TerminalGuard::enter().context("Failed to set up the terminal")?;

    run(&mut grid, &config, guard.writer())
}

fn run(grid: &mut Grid, config: &Config, stdout: &mut io::Stdout) -> anyhow::Result<()> {
    let layout = config.layout();
    let mut scheduler = Scheduler::new(config.fps);
    let mut cam = Camera::for_grid(&grid.view(), layout);

    if config.play {
        scheduler.play();
    }

    let mut last_frame = Instant::now();
    let mut dirty = true;

    loop {
        if dirty {
            draw(stdout, &mut cam, layout, grid, &scheduler)?;
            dirty = false;
        }

        // Poll events until the next frame is due
        let time_left = scheduler.frame_time().saturating_sub(last_frame.elapsed());

        let event = if event::poll(time_left)? {
            convert_event(event::read()?, layout, &grid.view())
        } else {
            None
        };

        match event {
            None => {}
            Some(Event::AppEvent(AppEvent::Exit)) => break,
            Some(Event::AppEvent(AppEvent::TogglePlayback)) => {
                scheduler.toggle();
                dirty = true;
            }
            Some(Event::AppEvent(AppEvent::Resize)) => {
                execute!(stdout, terminal::Clear(terminal::ClearType::All))?;
                dirty = true;
            }
            Some(Event::EngineEvent(EngineEvent::Toggle { row, col })) => {
                if let Err(e) = grid.toggle(row, col) {
                    warn!("Ignoring click: {e}");
                }
                dirty = true;
            }
            Some(Event::EngineEvent(EngineEvent::Step)) => {
                grid.advance();
                dirty = true;
            }
            Some(Event::EngineEvent(EngineEvent::Clear)) => {
                grid.clear();
                dirty = true;
            }
        }

        if last_frame.elapsed() >= scheduler.frame_time() {
            last_frame = Instant::now();
            dirty |= scheduler.on_frame(grid);
        }
    }

    Ok(())
}

fn draw(
    stdout: &mut io::Stdout,
    cam: &mut Camera,
    layout: Layout,
    grid: &Grid,
    scheduler: &Scheduler,
) -> io::Result<()> {
    cam.draw(&grid.view(), layout);

    queue!(stdout, cursor::MoveTo(0, 0))?;

    for line in cam.render().lines() {
        queue!(stdout, style::Print(line), cursor::MoveToNextLine(1))?;
    }

    let state = match scheduler.state() {
        Playback::Playing => "playing",
        Playback::Paused => "paused",
    };

    queue!(
        stdout,
        terminal::Clear(terminal::ClearType::CurrentLine),
        style::Print(format!(
            "generation {} | {} live | {state} | space: play/pause  n: step  c: clear  q: quit",
            grid.generation(),
            grid.live_count(),
        )),
    )?;

    stdout.flush()
}
