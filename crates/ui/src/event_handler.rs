mod key_action;

pub use key_action::KeyAction;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result;

use crate::state::InputState;

/// Event handler for the TUI application
pub struct EventHandler;

impl EventHandler {
    /// Read a single event from the terminal
    pub fn read() -> Result<Option<Event>> {
        match crossterm::event::poll(std::time::Duration::from_millis(50)) {
            Ok(true) => Ok(Some(crossterm::event::read()?)),
            _ => Ok(None),
        }
    }

    /// Handle a keyboard event, editing `input` in place
    pub fn handle_key_event(event: KeyEvent, input: &mut InputState) -> Option<KeyAction> {
        if event.kind != KeyEventKind::Press {
            return None;
        }

        let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);

        match event.code {
            KeyCode::Enter => return Some(KeyAction::Send),
            KeyCode::Esc => return Some(KeyAction::Quit),
            KeyCode::Char('c') if ctrl => return Some(KeyAction::Quit),
            KeyCode::PageUp => return Some(KeyAction::PageUp),
            KeyCode::PageDown => return Some(KeyAction::PageDown),
            KeyCode::Char('u') if ctrl => return Some(KeyAction::PageUp),
            KeyCode::Char('d') if ctrl => return Some(KeyAction::PageDown),
            KeyCode::Char(_) if ctrl => (),
            KeyCode::Char(c) => input.insert_char(c),
            KeyCode::Backspace => input.backspace(),
            KeyCode::Delete => input.delete(),
            KeyCode::Left => input.move_left(),
            KeyCode::Right => input.move_right(),
            KeyCode::Home => input.move_home(),
            KeyCode::End => input.move_end(),
            KeyCode::Up => input.navigate_up(),
            KeyCode::Down => input.navigate_down(),
            _ => (),
        }
        None
    }
}
