//! Free-form commit body editor.

use committed_types::{Event, Key, TextInput, normalize_line_endings, wrap};

use super::{Panel, to_u16};
use crate::Effect;

const TAB_SIZE: usize = 4;
/// Display columns before a body line soft-wraps.
const WRAP_WIDTH: usize = 72;
const HEIGHT: usize = 12;
const COMPACT_HEIGHT: usize = 3;
const PLACEHOLDER: &str = "Body (optional)";

#[derive(Debug, Clone, Default)]
pub struct BodyPanel {
    input: TextInput,
    focus: bool,
    /// The editor picks up focus one event after the panel does, so the key
    /// that moved focus here is never typed into the body.
    editing: bool,
    /// Shrink to a few lines while the emoji list is open.
    pub compact: bool,
}

impl BodyPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Body as committed: wrapped the way it is displayed, with trailing
    /// blanks dropped from each row and surrounding whitespace trimmed.
    #[must_use]
    pub fn value(&self) -> String {
        wrap(self.input.text(), WRAP_WIDTH)
            .iter()
            .map(|row| row.trim_end())
            .collect::<Vec<_>>()
            .join("\n")
            .trim()
            .to_string()
    }

    /// Body exactly as typed.
    #[must_use]
    pub fn raw_value(&self) -> &str {
        self.input.text()
    }

    pub fn set_value(&mut self, text: &str) {
        self.input.set_text(&normalize_line_endings(text));
    }

    pub fn reset(&mut self) {
        self.input.clear();
    }

    #[must_use]
    pub fn editing(&self) -> bool {
        self.editing
    }

    fn height(&self) -> usize {
        if self.compact { COMPACT_HEIGHT } else { HEIGHT }
    }

    /// First visible line, keeping the cursor on screen.
    fn scroll(&self) -> usize {
        let (row, _) = self.input.wrapped_cursor(WRAP_WIDTH);
        row.saturating_sub(self.height() - 1)
    }

    fn edit(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.input.enter_char(c),
            Key::Enter => self.input.enter_newline(),
            Key::Backspace => self.input.delete_char(),
            Key::Delete => self.input.delete_char_forward(),
            Key::Left => self.input.move_cursor_left(),
            Key::Right => self.input.move_cursor_right(),
            Key::Up => self.input.move_cursor_up(),
            Key::Down => self.input.move_cursor_down(),
            Key::Home => self.input.move_cursor_home(),
            Key::End => self.input.move_cursor_end(),
            _ => {}
        }
    }
}

impl Panel for BodyPanel {
    fn update(&mut self, event: &Event) -> Vec<Effect> {
        if self.focus
            && self.editing
            && matches!(event.as_key(), Some(press) if press.is_plain() && press.key == Key::Tab)
        {
            self.input.enter_text(&" ".repeat(TAB_SIZE));
        }

        match (self.focus, self.editing) {
            (true, false) => {
                self.editing = true;
                return Vec::new();
            }
            (false, true) => {
                self.editing = false;
                return Vec::new();
            }
            (false, false) => return Vec::new(),
            (true, true) => {}
        }

        match event {
            Event::Key(press) if press.is_plain() => self.edit(press.key),
            Event::Paste(text) => self.input.enter_text(&normalize_line_endings(text)),
            _ => {}
        }
        Vec::new()
    }

    fn view(&self) -> Vec<String> {
        let height = self.height();
        let mut lines: Vec<String> = if self.input.is_empty() && !self.focus {
            vec![PLACEHOLDER.to_string()]
        } else {
            wrap(self.input.text(), WRAP_WIDTH)
                .into_iter()
                .skip(self.scroll())
                .take(height)
                .collect()
        };
        lines.resize(height, String::new());
        lines
    }

    fn focus(&mut self) {
        self.focus = true;
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }

    fn cursor(&self) -> Option<(u16, u16)> {
        if !self.focus {
            return None;
        }
        let (row, col) = self.input.wrapped_cursor(WRAP_WIDTH);
        Some((to_u16(col), to_u16(row - self.scroll())))
    }
}
