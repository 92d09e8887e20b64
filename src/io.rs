use crossterm::event::Event as CrossTermEvent;
use crossterm::event::KeyCode;
use crossterm::event::KeyEvent;
use crossterm::event::KeyEventKind;
use crossterm::event::KeyModifiers;
use crossterm::event::MouseButton;
use crossterm::event::MouseEvent;
use crossterm::event::MouseEventKind;

use crate::events::AppEvent;
use crate::events::EngineEvent;
use crate::events::Event;
use crate::layout::Layout;
use crate::view::GridView;

/// Braille pixels per terminal column
const DOTS_PER_COL: usize = 2;

/// Braille pixels per terminal row
const DOTS_PER_ROW: usize = 4;

/// Converts a crossterm event into an application event.
///
/// The grid is assumed to be drawn from the top left corner of the terminal with `layout`, so a
/// click is mapped back to the cell it landed on.
pub fn convert_event(event: CrossTermEvent, layout: Layout, view: &GridView<'_>) -> Option<Event> {
    match event {
        CrossTermEvent::Key(KeyEvent {
            kind: KeyEventKind::Release,
            ..
        }) => None,

        CrossTermEvent::Key(key_event) => match key_event {
            KeyEvent {
                code: KeyCode::Char('q') | KeyCode::Esc,
                ..
            }
            | KeyEvent {
                code: KeyCode::Char('c'),
                modifiers: KeyModifiers::CONTROL,
                ..
            } => Some(Event::AppEvent(AppEvent::Exit)),
            KeyEvent {
                code: KeyCode::Char(' ') | KeyCode::Char('p'),
                ..
            } => Some(Event::AppEvent(AppEvent::TogglePlayback)),
            KeyEvent {
                code: KeyCode::Char('n') | KeyCode::Char('.'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Step)),
            KeyEvent {
                code: KeyCode::Char('c'),
                ..
            } => Some(Event::EngineEvent(EngineEvent::Clear)),
            _ => None,
        },

        CrossTermEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            ..
        }) => {
            let x = column as usize * DOTS_PER_COL;
            let y = row as usize * DOTS_PER_ROW;
            let (row, col) = layout.cell_at(x, y, view);

            Some(Event::EngineEvent(EngineEvent::Toggle { row, col }))
        }

        CrossTermEvent::Resize(..) => Some(Event::AppEvent(AppEvent::Resize)),

        _ => None,
    }
}
