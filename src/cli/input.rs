//! Keystroke input handling using crossterm
//!
//! Features:
//! - Line editing for the review form
//! - Gallery shortcuts (Tab, Ctrl+R)
//! - Ctrl+C / Esc graceful exit

use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::io::Result as IoResult;
use std::time::Duration;

/// What a keystroke means to the review form
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormAction {
    Insert(char),
    Backspace,
    Submit,
    NextExample,
    RandomExample,
    Clear,
    Exit,
}

/// Handles user input from terminal
pub struct InputHandler {
    /// Timeout for poll operations
    poll_timeout: Duration,
}

impl InputHandler {
    pub fn new() -> Self {
        InputHandler {
            poll_timeout: Duration::from_millis(50),
        }
    }

    pub fn enable_raw_mode() -> IoResult<()> {
        crossterm::terminal::enable_raw_mode()
    }

    pub fn disable_raw_mode() -> IoResult<()> {
        crossterm::terminal::disable_raw_mode()
    }

    /// Poll for keystroke with timeout (non-blocking)
    /// Returns Some(KeyEvent) if key pressed, None if timeout
    pub fn read_key(&self) -> IoResult<Option<KeyEvent>> {
        if event::poll(self.poll_timeout)? {
            match event::read()? {
                event::Event::Key(key_event) if key_event.kind != KeyEventKind::Release => {
                    Ok(Some(key_event))
                }
                _ => Ok(None),
            }
        } else {
            Ok(None)
        }
    }

    /// Map a key event to a form action
    pub fn action(key: &KeyEvent) -> Option<FormAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Char('c') if ctrl => Some(FormAction::Exit),
            KeyCode::Char('r') if ctrl => Some(FormAction::RandomExample),
            KeyCode::Char('u') if ctrl => Some(FormAction::Clear),
            KeyCode::Esc => Some(FormAction::Exit),
            KeyCode::Enter => Some(FormAction::Submit),
            KeyCode::Backspace => Some(FormAction::Backspace),
            KeyCode::Tab => Some(FormAction::NextExample),
            KeyCode::Char(c) if !ctrl && !key.modifiers.contains(KeyModifiers::ALT) => {
                Some(FormAction::Insert(c))
            }
            _ => None,
        }
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
