//! Editable text buffer and small pure text helpers.

use std::iter;

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

#[must_use]
pub fn normalize_line_endings(text: &str) -> String {
    text.replace("\r\n", "\n").replace('\r', "\n")
}

/// Visual rows of `text`, each line soft-wrapped to `width` display columns.
///
/// Lines break after the last space that fits; a word wider than the row is
/// split. Break spaces stay at the end of their row, so joining the rows of a
/// line gives the line back. A `width` of zero disables wrapping.
#[must_use]
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    text.split('\n')
        .flat_map(|line| {
            let graphemes: Vec<&str> = line.graphemes(true).collect();
            let starts = row_starts(&graphemes, width);
            let ends: Vec<usize> = starts
                .iter()
                .skip(1)
                .copied()
                .chain(iter::once(graphemes.len()))
                .collect();
            starts
                .into_iter()
                .zip(ends)
                .map(|(start, end)| graphemes[start..end].concat())
                .collect::<Vec<_>>()
        })
        .collect()
}

/// Grapheme offsets where each wrapped row of a single line begins.
fn row_starts(graphemes: &[&str], width: usize) -> Vec<usize> {
    let mut starts = vec![0];
    if width == 0 {
        return starts;
    }

    let mut start = 0;
    let mut col = 0;
    let mut last_space = None;
    let mut i = 0;
    while i < graphemes.len() {
        let grapheme = graphemes[i];
        let w = grapheme.width();
        // Spaces may hang past the edge; they end the row they follow.
        if col + w > width && i > start && grapheme != " " {
            start = match last_space {
                Some(space) if space >= start => space + 1,
                _ => i,
            };
            starts.push(start);
            last_space = None;
            col = graphemes[start..i].iter().map(|g| g.width()).sum();
            continue;
        }
        if grapheme == " " {
            last_space = Some(i);
        }
        col += w;
        i += 1;
    }
    starts
}

/// Text editing with grapheme-cluster cursor positions.
///
/// `cursor` counts graphemes, not bytes, so emoji and combining marks move
/// as a single unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
    limit: Option<usize>,
}

impl TextInput {
    /// An input that refuses to grow beyond `limit` graphemes.
    #[must_use]
    pub fn with_limit(limit: usize) -> Self {
        Self {
            limit: Some(limit),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        let cursor_moved_right = self.cursor.saturating_add(1);
        self.cursor = self.clamp_cursor(cursor_moved_right);
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index();
        let mut buf = [0; 4];
        let inserted = new_char.encode_utf8(&mut buf);
        if !self.fits(index, inserted) {
            return;
        }
        self.text.insert_str(index, inserted);
        self.cursor = self.cursor_after(index + inserted.len());
    }

    pub fn enter_newline(&mut self) {
        self.enter_char('\n');
    }

    pub fn enter_text(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let index = self.byte_index();
        let text = match self.limit {
            Some(_) => {
                let mut kept = String::new();
                for grapheme in text.graphemes(true) {
                    let candidate = format!("{kept}{grapheme}");
                    if !self.fits(index, &candidate) {
                        break;
                    }
                    kept = candidate;
                }
                kept
            }
            None => text.to_string(),
        };
        self.text.insert_str(index, &text);
        self.cursor = self.cursor_after(index + text.len());
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn delete_char_forward(&mut self) {
        let grapheme_count = self.grapheme_count();
        if self.cursor >= grapheme_count {
            return;
        }

        let start = self.byte_index_at(self.cursor);
        let end = self.byte_index_at(self.cursor + 1);
        self.text.replace_range(start..end, "");
    }

    pub fn move_cursor_home(&mut self) {
        let (line, _) = self.cursor_line_col();
        self.cursor = self.line_start(line);
    }

    pub fn move_cursor_end(&mut self) {
        let (line, _) = self.cursor_line_col();
        let start = self.line_start(line);
        self.cursor = start + self.line_len(line);
    }

    pub fn move_cursor_up(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line == 0 {
            self.cursor = 0;
            return;
        }
        let target = line - 1;
        self.cursor = self.line_start(target) + col.min(self.line_len(target));
    }

    pub fn move_cursor_down(&mut self) {
        let (line, col) = self.cursor_line_col();
        if line + 1 >= self.line_count() {
            self.cursor = self.grapheme_count();
            return;
        }
        let target = line + 1;
        self.cursor = self.line_start(target) + col.min(self.line_len(target));
    }

    /// Empty the buffer and move the cursor to the start.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    /// Replace the whole buffer; the cursor lands at the end.
    pub fn set_text(&mut self, text: &str) {
        self.text = match self.limit {
            Some(limit) => text.graphemes(true).take(limit).collect(),
            None => text.to_string(),
        };
        self.cursor = self.grapheme_count();
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    #[must_use]
    pub fn byte_index(&self) -> usize {
        self.byte_index_at(self.cursor)
    }

    /// Zero-based (line, column) of the cursor, both in graphemes.
    #[must_use]
    pub fn cursor_line_col(&self) -> (usize, usize) {
        let mut line = 0;
        let mut col = 0;
        for grapheme in self.text.graphemes(true).take(self.cursor) {
            if grapheme == "\n" {
                line += 1;
                col = 0;
            } else {
                col += 1;
            }
        }
        (line, col)
    }

    /// Display width of the text between the start of the cursor's line and
    /// the cursor.
    #[must_use]
    pub fn cursor_display_col(&self) -> usize {
        let (line, col) = self.cursor_line_col();
        self.text
            .split('\n')
            .nth(line)
            .map(|l| l.graphemes(true).take(col).collect::<String>().width())
            .unwrap_or(0)
    }

    /// Cursor as (row, display column) once every line is soft-wrapped to
    /// `width` columns with [`wrap`].
    #[must_use]
    pub fn wrapped_cursor(&self, width: usize) -> (usize, usize) {
        let (line, col) = self.cursor_line_col();
        let mut row = 0;
        for text_line in self.text.split('\n').take(line) {
            let graphemes: Vec<&str> = text_line.graphemes(true).collect();
            row += row_starts(&graphemes, width).len();
        }

        let graphemes: Vec<&str> = self
            .text
            .split('\n')
            .nth(line)
            .map(|l| l.graphemes(true).collect())
            .unwrap_or_default();
        let starts = row_starts(&graphemes, width);
        let within = starts.iter().rposition(|&start| start <= col).unwrap_or(0);
        let start = starts.get(within).copied().unwrap_or(0);
        let display = graphemes
            .get(start..col)
            .map_or(0, |cells| cells.iter().map(|g| g.width()).sum());
        (row + within, display)
    }

    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    fn line_start(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .take(line)
            .map(|l| l.graphemes(true).count() + 1)
            .sum()
    }

    fn line_len(&self, line: usize) -> usize {
        self.text
            .split('\n')
            .nth(line)
            .map_or(0, |l| l.graphemes(true).count())
    }

    /// Whether inserting `inserted` at byte `index` keeps the text within the
    /// limit. Combining marks join the grapheme before them and add nothing.
    fn fits(&self, index: usize, inserted: &str) -> bool {
        self.limit.is_none_or(|limit| {
            let (head, tail) = self.text.split_at(index);
            format!("{head}{inserted}{tail}").graphemes(true).count() <= limit
        })
    }

    /// Grapheme cursor for a position just after byte `end`.
    fn cursor_after(&self, end: usize) -> usize {
        self.text[..end].graphemes(true).count()
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn clamp_cursor(&self, new_cursor_pos: usize) -> usize {
        let max = self.grapheme_count();
        new_cursor_pos.min(max)
    }
}
