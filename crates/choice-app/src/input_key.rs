//! Abstract input key event, independent of terminal library.
//!
//! The dialog state machine reacts to `InputKey`s so that it can be driven
//! by a terminal, a scripted test, or any other frontend without depending
//! on crossterm.

/// Keyboard input understood by the dialog.
/// Converted from crossterm::event::KeyEvent at the TUI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKey {
    /// Regular character key (a-z, 0-9, symbols, space)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, ...)
    CharCtrl(char),

    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,

    Enter,
    Esc,
}

impl InputKey {
    /// Digit 1-9 as a zero-based row index
    pub fn quick_index(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => Some((*c as usize) - ('1' as usize)),
            _ => None,
        }
    }
}
