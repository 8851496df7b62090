//! Backend-independent input events.
//!
//! The TUI converts terminal events into these so the engine never depends
//! on a terminal library.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Enter,
    Tab,
    BackTab,
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    PageUp,
    PageDown,
    Esc,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub alt: bool,
    pub ctrl: bool,
}

impl KeyPress {
    #[must_use]
    pub const fn plain(key: Key) -> Self {
        Self {
            key,
            alt: false,
            ctrl: false,
        }
    }

    #[must_use]
    pub const fn alt(key: Key) -> Self {
        Self {
            key,
            alt: true,
            ctrl: false,
        }
    }

    #[must_use]
    pub const fn ctrl(key: Key) -> Self {
        Self {
            key,
            alt: false,
            ctrl: true,
        }
    }

    /// No alt/ctrl chord: the key should reach text inputs.
    #[must_use]
    pub const fn is_plain(&self) -> bool {
        !self.alt && !self.ctrl
    }
}

impl fmt::Display for KeyPress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ctrl {
            f.write_str("ctrl+")?;
        }
        if self.alt {
            f.write_str("alt+")?;
        }
        match self.key {
            Key::Char(c) => write!(f, "{c}"),
            Key::Enter => f.write_str("enter"),
            Key::Tab => f.write_str("tab"),
            Key::BackTab => f.write_str("shift+tab"),
            Key::Backspace => f.write_str("backspace"),
            Key::Delete => f.write_str("delete"),
            Key::Left => f.write_str("left"),
            Key::Right => f.write_str("right"),
            Key::Up => f.write_str("up"),
            Key::Down => f.write_str("down"),
            Key::Home => f.write_str("home"),
            Key::End => f.write_str("end"),
            Key::PageUp => f.write_str("pgup"),
            Key::PageDown => f.write_str("pgdown"),
            Key::Esc => f.write_str("esc"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    Key(KeyPress),
    Paste(String),
    Resize { width: u16, height: u16 },
}

impl Event {
    #[must_use]
    pub fn key(key: Key) -> Self {
        Self::Key(KeyPress::plain(key))
    }

    #[must_use]
    pub fn as_key(&self) -> Option<&KeyPress> {
        match self {
            Self::Key(key) => Some(key),
            _ => None,
        }
    }
}

impl From<KeyPress> for Event {
    fn from(key: KeyPress) -> Self {
        Self::Key(key)
    }
}
