use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind};

use crate::maze::Direction;

/// Whether arrow keys currently move the explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// The maze is shown, arrow keys are ignored
    Idle,
    /// Arrow keys move the explorer
    Exploring,
}

/// What the app loop should do in response to one terminal event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Step the explorer
    Move(Direction),
    /// Start exploring from the start cell, or stop exploring
    ToggleExplore,
    /// New maze with the same dimensions
    Regenerate,
    /// Ask for new dimensions, then generate a maze with them
    ChangeDimensions,
    /// Redraw everything, e.g. after a terminal resize
    Redraw,
    /// Leave the app
    Quit,
}

impl Command {
    /// Translates a terminal event into a command for the given mode.
    /// Unrecognized keys, key releases and other events map to `None`.
    pub fn from_event(event: &Event, mode: Mode) -> Option<Command> {
        match event {
            Event::Key(key_event) => Command::from_key(key_event, mode),
            Event::Resize(_, _) => Some(Command::Redraw),
            _ => None,
        }
    }

    fn from_key(key_event: &KeyEvent, mode: Mode) -> Option<Command> {
        if key_event.kind != KeyEventKind::Press {
            return None;
        }
        let command = match (key_event.code, mode) {
            (KeyCode::Esc, _) => Command::Quit,
            (KeyCode::Enter | KeyCode::Char('e'), _) => Command::ToggleExplore,
            (KeyCode::Up, Mode::Exploring) => Command::Move(Direction::Up),
            (KeyCode::Right, Mode::Exploring) => Command::Move(Direction::Right),
            (KeyCode::Down, Mode::Exploring) => Command::Move(Direction::Down),
            (KeyCode::Left, Mode::Exploring) => Command::Move(Direction::Left),
            (KeyCode::Char('q'), Mode::Idle) => Command::Quit,
            (KeyCode::Char('n'), Mode::Idle) => Command::Regenerate,
            (KeyCode::Char('d'), Mode::Idle) => Command::ChangeDimensions,
            _ => return None,
        };
        Some(command)
    }
}
