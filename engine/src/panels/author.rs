//! Author picker and branch summary.

use unicode_width::UnicodeWidthStr;

use committed_types::{Author, Branch, Event, HeadCommit, Key, TextInput};

use super::{Panel, to_u16};
use crate::Effect;

const FILTER_PROMPT: &str = "Filter: ";
const LIST_ROWS: usize = 5;

#[derive(Debug, Clone)]
pub struct AuthorPanel {
    authors: Vec<Author>,
    selected: Option<usize>,
    highlight: usize,
    filter: TextInput,
    branch: Branch,
    head: Option<HeadCommit>,
    focus: bool,
    /// Show the filter and the candidate list.
    pub expand: bool,
}

impl AuthorPanel {
    #[must_use]
    pub fn new(authors: Vec<Author>, branch: Branch, head: Option<HeadCommit>) -> Self {
        let selected = if authors.is_empty() { None } else { Some(0) };
        Self {
            authors,
            selected,
            highlight: 0,
            filter: TextInput::default(),
            branch,
            head,
            focus: false,
            expand: false,
        }
    }

    #[must_use]
    pub fn author(&self) -> Option<&Author> {
        self.selected.and_then(|i| self.authors.get(i))
    }

    #[must_use]
    pub fn name(&self) -> &str {
        self.author().map_or("", |a| a.name.as_str())
    }

    #[must_use]
    pub fn email(&self) -> &str {
        self.author().map_or("", |a| a.email.as_str())
    }

    /// Indices into `authors` matching the current filter.
    fn candidates(&self) -> Vec<usize> {
        let needle = self.filter.text().to_lowercase();
        self.authors
            .iter()
            .enumerate()
            .filter(|(_, a)| {
                needle.is_empty()
                    || a.name.to_lowercase().contains(&needle)
                    || a.email.to_lowercase().contains(&needle)
            })
            .map(|(i, _)| i)
            .collect()
    }

    fn select_highlighted(&mut self) {
        if let Some(index) = self.candidates().get(self.highlight).copied() {
            self.selected = Some(index);
            tracing::debug!(author = %self.authors[index], "Selected author");
        }
    }

    fn edit_filter(&mut self, key: Key) {
        match key {
            Key::Char(c) => self.filter.enter_char(c),
            Key::Backspace => self.filter.delete_char(),
            Key::Delete => self.filter.delete_char_forward(),
            Key::Left => self.filter.move_cursor_left(),
            Key::Right => self.filter.move_cursor_right(),
            _ => return,
        }
        self.highlight = 0;
    }

    fn branch_line(&self) -> String {
        let mut line = String::from("branch: ");
        if self.branch.local.is_empty() {
            line.push_str("(none)");
        } else {
            line.push_str(&self.branch.local);
        }
        if !self.branch.remote.is_empty() {
            line.push_str(" -> ");
            line.push_str(&self.branch.remote);
        }
        if !self.branch.refs.is_empty() {
            line.push_str(" (");
            line.push_str(&self.branch.refs.join(", "));
            line.push(')');
        }
        if let Some(head) = &self.head {
            let short: String = head.hash.chars().take(7).collect();
            line.push_str("  head: ");
            line.push_str(&short);
        }
        line
    }
}

impl Panel for AuthorPanel {
    fn update(&mut self, event: &Event) -> Vec<Effect> {
        if !(self.focus && self.expand) {
            return Vec::new();
        }

        match event {
            Event::Key(press) if press.is_plain() => match press.key {
                Key::Up => self.highlight = self.highlight.saturating_sub(1),
                Key::Down => {
                    let last = self.candidates().len().saturating_sub(1);
                    self.highlight = (self.highlight + 1).min(last);
                }
                Key::Enter => self.select_highlighted(),
                key => self.edit_filter(key),
            },
            Event::Paste(text) => {
                self.filter.enter_text(&text.replace('\n', " "));
                self.highlight = 0;
            }
            _ => {}
        }
        Vec::new()
    }

    fn view(&self) -> Vec<String> {
        let mut lines = vec![self.branch_line()];

        if !self.expand {
            let author = self
                .author()
                .map_or_else(|| "(unknown)".to_string(), ToString::to_string);
            lines.push(format!("author: {author}"));
            return lines;
        }

        lines.push(format!("{FILTER_PROMPT}{}", self.filter.text()));
        let candidates = self.candidates();
        if candidates.is_empty() {
            lines.push("  no matching authors".to_string());
            return lines;
        }
        let start = self.highlight.saturating_sub(LIST_ROWS - 1);
        for (row, index) in candidates.iter().enumerate().skip(start).take(LIST_ROWS) {
            let marker = if row == self.highlight { '>' } else { ' ' };
            let chosen = if Some(*index) == self.selected {
                " *"
            } else {
                ""
            };
            lines.push(format!("{marker} {}{chosen}", self.authors[*index]));
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
        if !(self.focus && self.expand) {
            return None;
        }
        let col = FILTER_PROMPT.width() + self.filter.cursor_display_col();
        Some((to_u16(col), 1))
    }
}
