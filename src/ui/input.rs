//! Keyboard mapping

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::world::Direction;

/// Everything a key press can ask for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move(Direction),
    ToggleHelp,
    ZoomIn,
    ZoomOut,
    Restart,
    CycleRenderMode,
    Quit,
}

/// Map a key press to a command; unbound keys give `None`
pub fn command_for(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    let command = match key.code {
        KeyCode::Up => Command::Move(Direction::Up),
        KeyCode::Down => Command::Move(Direction::Down),
        KeyCode::Left => Command::Move(Direction::Left),
        KeyCode::Right => Command::Move(Direction::Right),
        KeyCode::Char('h') | KeyCode::Char('H') => Command::ToggleHelp,
        KeyCode::Char('+') | KeyCode::Char('=') => Command::ZoomIn,
        KeyCode::Char('-') | KeyCode::Char('_') => Command::ZoomOut,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Char('m') | KeyCode::Char('M') => Command::CycleRenderMode,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}
