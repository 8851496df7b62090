//! Input handling for Committed TUI.
//!
//! Converts crossterm events into engine [`Event`]s. Releases and focus
//! changes are dropped; everything the composer cares about maps 1:1.

use anyhow::{Context, Result};
use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use committed_types::{Event, Key, KeyPress};

use crate::{HORIZONTAL_MARGIN, VERTICAL_MARGIN};

/// Block until the next terminal event the composer understands.
pub fn read_event() -> Result<Event> {
    loop {
        let raw = event::read().context("failed to read terminal event")?;
        if let Some(event) = to_event(raw) {
            return Ok(event);
        }
    }
}

#[must_use]
pub fn to_event(event: event::Event) -> Option<Event> {
    match event {
        event::Event::Key(key) => to_key_press(key).map(Event::Key),
        event::Event::Paste(text) => Some(Event::Paste(text)),
        event::Event::Resize(width, height) => Some(resize_event(width, height)),
        _ => None,
    }
}

/// A resize carrying the size panels draw into, inside the screen margins.
#[must_use]
pub fn resize_event(width: u16, height: u16) -> Event {
    Event::Resize {
        width: width.saturating_sub(2 * HORIZONTAL_MARGIN),
        height: height.saturating_sub(2 * VERTICAL_MARGIN),
    }
}

fn to_key_press(key: KeyEvent) -> Option<KeyPress> {
    if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
        return None;
    }

    let shift = key.modifiers.contains(KeyModifiers::SHIFT);
    let code = match key.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab if shift => Key::BackTab,
        KeyCode::Tab => Key::Tab,
        KeyCode::BackTab => Key::BackTab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::PageUp => Key::PageUp,
        KeyCode::PageDown => Key::PageDown,
        KeyCode::Esc => Key::Esc,
        _ => return None,
    };

    Some(KeyPress {
        key: code,
        alt: key.modifiers.contains(KeyModifiers::ALT),
        ctrl: key.modifiers.contains(KeyModifiers::CONTROL),
    })
}

#[cfg(test)]
mod tests {
    use crossterm::event::{self, KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    use committed_types::{Event, Key, KeyPress};

    use super::to_event;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> event::Event {
        event::Event::Key(KeyEvent::new(code, modifiers))
    }

    #[test]
    fn alt_digit_maps_to_alt_chord() {
        let event = to_event(key(KeyCode::Char('2'), KeyModifiers::ALT));
        assert_eq!(event, Some(Event::Key(KeyPress::alt(Key::Char('2')))));
    }

    #[test]
    fn ctrl_c_and_alt_enter() {
        assert_eq!(
            to_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Event::Key(KeyPress::ctrl(Key::Char('c'))))
        );
        assert_eq!(
            to_event(key(KeyCode::Enter, KeyModifiers::ALT)),
            Some(Event::Key(KeyPress::alt(Key::Enter)))
        );
    }

    #[test]
    fn shift_tab_variants_are_back_tab() {
        assert_eq!(
            to_event(key(KeyCode::BackTab, KeyModifiers::SHIFT)),
            Some(Event::key(Key::BackTab))
        );
        assert_eq!(
            to_event(key(KeyCode::Tab, KeyModifiers::SHIFT)),
            Some(Event::key(Key::BackTab))
        );
    }

    #[test]
    fn shifted_char_is_plain() {
        assert_eq!(
            to_event(key(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            Some(Event::key(Key::Char('A')))
        );
    }

    #[test]
    fn releases_are_dropped() {
        let release = event::Event::Key(KeyEvent {
            code: KeyCode::Char('a'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        });
        assert_eq!(to_event(release), None);
        assert_eq!(to_event(event::Event::FocusGained), None);
    }

    #[test]
    fn paste_passes_through_and_resize_drops_margins() {
        assert_eq!(
            to_event(event::Event::Paste("hi".to_string())),
            Some(Event::Paste("hi".to_string()))
        );
        assert_eq!(
            to_event(event::Event::Resize(100, 40)),
            Some(Event::Resize {
                width: 96,
                height: 38
            })
        );
    }
}
