//! Event handling for keyboard input

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Poll for a key press, waiting at most `timeout`
pub fn poll(timeout: Duration) -> std::io::Result<Option<KeyEvent>> {
    if event::poll(timeout)? {
        if let Event::Key(key) = event::read()? {
            // Ignore key release events on Windows
            if key.kind == KeyEventKind::Press {
                return Ok(Some(key));
            }
        }
    }
    Ok(None)
}

/// `q` or Ctrl+C
pub fn is_quit(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('q' | 'Q'),
            modifiers: KeyModifiers::NONE | KeyModifiers::SHIFT,
            ..
        } | KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
    )
}

pub fn is_escape(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Esc)
}

pub fn is_down(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Down | KeyCode::Char('j'))
}

pub fn is_up(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Up | KeyCode::Char('k'))
}

pub fn is_left(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Left)
}

pub fn is_right(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Right)
}

pub fn is_enter(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Enter)
}

pub fn is_space(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char(' '))
}

/// Space or Enter, the start/stop button
pub fn is_activate(key: &KeyEvent) -> bool {
    is_space(key) || is_enter(key)
}

/// A plain character key (case-insensitive), without Ctrl or Alt
pub fn is_key(key: &KeyEvent, c: char) -> bool {
    !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
        && matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&c))
}

pub fn is_help(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('?'))
}

/// Ctrl+S, save settings
pub fn is_save(key: &KeyEvent) -> bool {
    matches!(
        key,
        KeyEvent {
            code: KeyCode::Char('s' | 'S'),
            modifiers,
            ..
        } if modifiers.contains(KeyModifiers::CONTROL)
    )
}

/// Character typed into a text field
pub fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            Some(c)
        }
        _ => None,
    }
}

pub fn is_backspace(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Backspace)
}
