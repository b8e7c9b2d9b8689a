use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::{Action, Direction};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    GameAction(Action),
    Quit,
    None,
}

pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle_key_event(&self, key: KeyEvent) -> KeyAction {
        // Handle Ctrl+C
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            return KeyAction::Quit;
        }

        match key.code {
            // Movement - Arrow keys
            KeyCode::Up => Self::movement(Direction::Up),
            KeyCode::Down => Self::movement(Direction::Down),
            KeyCode::Left => Self::movement(Direction::Left),
            KeyCode::Right => Self::movement(Direction::Right),

            // Movement - WASD
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'w') => Self::movement(Direction::Up),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'s') => Self::movement(Direction::Down),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'a') => Self::movement(Direction::Left),
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'d') => Self::movement(Direction::Right),

            // Controls
            KeyCode::Char(c) if c.eq_ignore_ascii_case(&'r') => {
                KeyAction::GameAction(Action::Restart)
            }
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => KeyAction::Quit,

            _ => KeyAction::None,
        }
    }

    fn movement(direction: Direction) -> KeyAction {
        KeyAction::GameAction(Action::Move(direction))
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
