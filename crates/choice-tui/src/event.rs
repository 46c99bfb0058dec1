//! Key event sources for the dialog loop

use std::collections::VecDeque;
use std::time::Duration;

use choice_app::InputKey;
use choice_core::prelude::*;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Default wait for a key before redrawing
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Supplies key presses to the dialog loop, one at a time.
pub trait EventSource {
    /// Wait briefly for the next key press.
    ///
    /// Returns `Ok(None)` when no key arrived in time; the loop redraws and
    /// asks again.
    fn next_key(&mut self) -> Result<Option<InputKey>>;
}

/// Reads key presses from the real terminal via crossterm.
#[derive(Debug, Clone, Copy)]
pub struct CrosstermEvents {
    poll_interval: Duration,
}

impl CrosstermEvents {
    pub fn new(poll_interval: Duration) -> Self {
        Self { poll_interval }
    }
}

impl Default for CrosstermEvents {
    fn default() -> Self {
        Self::new(DEFAULT_POLL_INTERVAL)
    }
}

impl EventSource for CrosstermEvents {
    fn next_key(&mut self) -> Result<Option<InputKey>> {
        if !event::poll(self.poll_interval).map_err(|e| Error::terminal(e.to_string()))? {
            return Ok(None);
        }

        match event::read().map_err(|e| Error::terminal(e.to_string()))? {
            Event::Key(key) if key.kind == KeyEventKind::Press => Ok(key_event_to_input(key)),
            _ => Ok(None),
        }
    }
}

/// Replays a fixed sequence of keys.
///
/// Used to drive the dialog without a user, e.g. in tests or scripted
/// demos. Running out of keys is an error so a loop that never closes
/// cannot spin forever.
#[derive(Debug, Clone, Default)]
pub struct KeyScript {
    keys: VecDeque<InputKey>,
}

impl KeyScript {
    pub fn new(keys: impl IntoIterator<Item = InputKey>) -> Self {
        Self {
            keys: keys.into_iter().collect(),
        }
    }

    pub fn remaining(&self) -> usize {
        self.keys.len()
    }
}

impl EventSource for KeyScript {
    fn next_key(&mut self) -> Result<Option<InputKey>> {
        match self.keys.pop_front() {
            Some(key) => Ok(Some(key)),
            None => Err(Error::terminal("key script exhausted before dialog closed")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_conversion() {
        let key = KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), Some(InputKey::Char(' ')));
    }

    #[test]
    fn test_char_with_ctrl_conversion() {
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_navigation_keys() {
        for (code, expected) in [
            (KeyCode::Up, InputKey::Up),
            (KeyCode::Down, InputKey::Down),
            (KeyCode::Home, InputKey::Home),
            (KeyCode::End, InputKey::End),
            (KeyCode::PageUp, InputKey::PageUp),
            (KeyCode::PageDown, InputKey::PageDown),
        ] {
            assert_eq!(
                key_event_to_input(KeyEvent::new(code, KeyModifiers::NONE)),
                Some(expected)
            );
        }
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE)),
            Some(InputKey::Enter)
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Esc, KeyModifiers::NONE)),
            Some(InputKey::Esc)
        );
    }

    #[test]
    fn test_unsupported_keys_ignored() {
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE)),
            None
        );
        assert_eq!(
            key_event_to_input(KeyEvent::new(KeyCode::F(1), KeyModifiers::NONE)),
            None
        );
    }

    #[test]
    fn test_key_script_replays_then_fails() {
        let mut script = KeyScript::new([InputKey::Down, InputKey::Enter]);
        assert_eq!(script.remaining(), 2);
        assert_eq!(script.next_key().unwrap(), Some(InputKey::Down));
        assert_eq!(script.next_key().unwrap(), Some(InputKey::Enter));
        assert!(matches!(script.next_key(), Err(Error::Terminal { .. })));
    }
}
