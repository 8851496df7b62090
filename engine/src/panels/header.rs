//! Emoji picker and subject line.

use unicode_width::UnicodeWidthStr;

use committed_types::{Compatibility, Emoji, EmojiSet, Event, Key, KeyPress, TextInput};

use super::{Panel, to_u16};
use crate::Effect;
use crate::shortcut::pad_end;

/// Soft subject length shown by the counter.
pub const SUBJECT_LIMIT: usize = 50;
/// Hard cap on subject length.
pub const SUMMARY_MAX: usize = 72;

const EMOJI_CELL: usize = 2;
const SUMMARY_WIDTH: usize = 61;
const FILTER_PROMPT: &str = "emoji: ";
const LIST_ROWS: usize = 6;

/// Which half of the header receives keys while focused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    Emoji,
    Summary,
}

#[derive(Debug, Clone)]
pub struct HeaderPanel {
    emojis: EmojiSet,
    emoji: Option<Emoji>,
    filter: TextInput,
    highlight: usize,
    summary: TextInput,
    amend: bool,
    selection: Selection,
    compatibility: Compatibility,
    focus: bool,
    /// Show the emoji filter and list.
    pub expand: bool,
}

impl HeaderPanel {
    #[must_use]
    pub fn new(emojis: EmojiSet, compatibility: Compatibility) -> Self {
        Self {
            emojis,
            emoji: None,
            filter: TextInput::default(),
            highlight: 0,
            summary: TextInput::with_limit(SUMMARY_MAX),
            amend: false,
            selection: Selection::default(),
            compatibility,
            focus: false,
            expand: false,
        }
    }

    #[must_use]
    pub fn emoji(&self) -> Option<&Emoji> {
        self.emoji.as_ref()
    }

    /// Shortcode of the chosen emoji, empty when none is chosen.
    #[must_use]
    pub fn shortcode(&self) -> &str {
        self.emoji.as_ref().map_or("", |e| e.shortcode.as_str())
    }

    pub fn set_emoji(&mut self, emoji: Option<Emoji>) {
        self.emoji = emoji;
    }

    #[must_use]
    pub fn summary(&self) -> &str {
        self.summary.text()
    }

    pub fn set_summary(&mut self, summary: &str) {
        self.summary.set_text(&summary.replace('\n', " "));
    }

    pub fn reset_summary(&mut self) {
        self.summary.clear();
    }

    #[must_use]
    pub fn amend(&self) -> bool {
        self.amend
    }

    pub fn set_amend(&mut self, amend: bool) {
        self.amend = amend;
    }

    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    pub fn select_emoji(&mut self) {
        self.selection = Selection::Emoji;
    }

    pub fn select_summary(&mut self) {
        self.selection = Selection::Summary;
    }

    fn candidates(&self) -> Vec<&Emoji> {
        self.emojis.filter(self.filter.text())
    }

    fn choose_highlighted(&mut self) {
        let chosen = self.candidates().get(self.highlight).map(|e| (*e).clone());
        if let Some(emoji) = chosen {
            tracing::debug!(shortcode = %emoji.shortcode, "Selected emoji");
            self.emoji = Some(emoji);
            self.filter.clear();
            self.highlight = 0;
        }
    }

    fn update_emoji(&mut self, press: KeyPress) {
        if !self.expand {
            return;
        }
        match press.key {
            Key::Up => self.highlight = self.highlight.saturating_sub(1),
            Key::Down => {
                let last = self.candidates().len().saturating_sub(1);
                self.highlight = (self.highlight + 1).min(last);
            }
            Key::PageUp => self.highlight = self.highlight.saturating_sub(LIST_ROWS),
            Key::PageDown => {
                let last = self.candidates().len().saturating_sub(1);
                self.highlight = (self.highlight + LIST_ROWS).min(last);
            }
            Key::Enter => self.choose_highlighted(),
            Key::Backspace if self.filter.is_empty() => self.emoji = None,
            Key::Backspace => {
                self.filter.delete_char();
                self.highlight = 0;
            }
            Key::Char(c) => {
                self.filter.enter_char(c);
                self.highlight = 0;
            }
            _ => {}
        }
    }

    fn update_summary(&mut self, press: KeyPress) {
        match press.key {
            Key::Char(c) => self.summary.enter_char(c),
            Key::Backspace => self.summary.delete_char(),
            Key::Delete => self.summary.delete_char_forward(),
            Key::Left => self.summary.move_cursor_left(),
            Key::Right => self.summary.move_cursor_right(),
            Key::Home => self.summary.move_cursor_home(),
            Key::End => self.summary.move_cursor_end(),
            _ => {}
        }
    }

    /// Display width of the emoji, widened for terminals that draw
    /// variation-selector emoji two cells wide.
    fn emoji_width(&self, emoji: &Emoji) -> usize {
        if self.compatibility.wide_variation_emoji() && emoji.has_variation_selector() {
            2
        } else {
            emoji.character.width()
        }
    }

    fn emoji_cell(&self) -> String {
        match &self.emoji {
            Some(emoji) => {
                let fill = EMOJI_CELL.saturating_sub(self.emoji_width(emoji));
                format!("{}{}", emoji.character, " ".repeat(fill))
            }
            None => " ".repeat(EMOJI_CELL),
        }
    }

    /// Subject length as committed: the emoji and its separating space count.
    #[must_use]
    pub fn subject_len(&self) -> usize {
        let emoji = if self.emoji.is_some() { 2 } else { 0 };
        self.summary.grapheme_count() + emoji
    }

    fn subject_line(&self) -> String {
        let mut line = format!(
            "[{}] {} {:>2}/{SUBJECT_LIMIT}",
            self.emoji_cell(),
            pad_end(self.summary.text(), SUMMARY_WIDTH),
            self.subject_len(),
        );
        if self.amend {
            line.push_str(" amend");
        }
        line
    }

    fn list_lines(&self) -> Vec<String> {
        let mut lines = vec![format!("{FILTER_PROMPT}{}", self.filter.text())];
        let candidates = self.candidates();
        if candidates.is_empty() {
            lines.push("  no matching emoji".to_string());
            return lines;
        }
        let start = self.highlight.saturating_sub(LIST_ROWS - 1);
        for (row, emoji) in candidates.iter().enumerate().skip(start).take(LIST_ROWS) {
            let marker = if row == self.highlight { '>' } else { ' ' };
            let fill = EMOJI_CELL.saturating_sub(self.emoji_width(emoji));
            lines.push(format!(
                "{marker} {}{} {} {}",
                emoji.character,
                " ".repeat(fill),
                emoji.shortcode,
                emoji.description
            ));
        }
        lines
    }
}

impl Panel for HeaderPanel {
    fn update(&mut self, event: &Event) -> Vec<Effect> {
        if !self.focus {
            return Vec::new();
        }
        match (event, self.selection) {
            (Event::Key(press), Selection::Emoji) if press.is_plain() => self.update_emoji(*press),
            (Event::Key(press), Selection::Summary) if press.is_plain() => {
                self.update_summary(*press);
            }
            (Event::Paste(text), Selection::Summary) => {
                self.summary.enter_text(&text.replace(['\r', '\n'], " "));
            }
            (Event::Paste(text), Selection::Emoji) if self.expand => {
                self.filter.enter_text(text.trim());
                self.highlight = 0;
            }
            _ => {}
        }
        Vec::new()
    }

    fn view(&self) -> Vec<String> {
        let mut lines = vec![self.subject_line()];
        if self.expand {
            lines.extend(self.list_lines());
        }
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
        match self.selection {
            Selection::Summary => {
                // "[", emoji cell, "] "
                let col = 1 + EMOJI_CELL + 2 + self.summary.cursor_display_col();
                Some((to_u16(col), 0))
            }
            Selection::Emoji if self.expand => {
                let col = FILTER_PROMPT.width() + self.filter.cursor_display_col();
                Some((to_u16(col), 1))
            }
            Selection::Emoji => None,
        }
    }
}
