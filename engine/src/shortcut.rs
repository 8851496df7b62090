//! Shortcut grid layout.
//!
//! A hint bar is a grid: one row per [`Modifier`] on the requested side and,
//! per shortcut, a key cell plus a label cell. Each grid column is padded to
//! its widest cell and returned as one multi-line string; the caller joins
//! the columns horizontally with [`join_horizontal`].
//!
//! ```text
//!   <Alt+1> Author  <Alt+2> Emoji        left side: key | label
//! <Shift+Tab> Emoji                      keys right-aligned, labels left
//! ```
//!
//! On the right side the pair is mirrored (label | key) so the key sits on
//! the outside of each pair.

use unicode_width::UnicodeWidthStr;

use committed_types::{Align, Modifier, Shortcut};

// Rows of the status bar, one per modifier group.
const NAVIGATE: i32 = 0;
const CYCLE: i32 = 1;
const QUIT: i32 = 2;
const COMMIT: i32 = 3;
const TOGGLE: i32 = 4;

/// A complete hint bar: modifier rows plus the shortcuts filling them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShortcutSet {
    pub modifiers: Vec<Modifier>,
    pub shortcuts: Vec<Shortcut>,
}

impl ShortcutSet {
    fn rows() -> Vec<Modifier> {
        vec![
            Modifier::new(NAVIGATE, Align::Left),
            Modifier::new(CYCLE, Align::Left),
            Modifier::new(QUIT, Align::Right),
            Modifier::new(COMMIT, Align::Right),
            Modifier::new(TOGGLE, Align::Right),
        ]
    }

    /// Everyday navigation. `next` and `previous` name the panels `tab` and
    /// `shift+tab` lead to; an empty name hides that hint.
    #[must_use]
    pub fn global(next: &str, previous: &str) -> Self {
        let mut shortcuts = vec![
            Shortcut::new(NAVIGATE, "", "Alt"),
            Shortcut::new(NAVIGATE, "1", "Author"),
            Shortcut::new(NAVIGATE, "2", "Emoji"),
            Shortcut::new(NAVIGATE, "3", "Summary"),
            Shortcut::new(NAVIGATE, "4", "Body"),
            Shortcut::new(CYCLE, "", ""),
        ];
        if !next.is_empty() {
            shortcuts.push(Shortcut::new(CYCLE, "Tab", next));
        }
        if !previous.is_empty() {
            shortcuts.push(Shortcut::new(CYCLE, "Shift+Tab", previous));
        }
        shortcuts.extend([
            Shortcut::new(QUIT, "Ctrl+C", "Cancel"),
            Shortcut::new(COMMIT, "Alt+Enter", "Commit"),
            Shortcut::new(TOGGLE, "Alt+/", "Help"),
        ]);
        Self {
            modifiers: Self::rows(),
            shortcuts,
        }
    }

    /// Less common toggles, shown while help is open.
    #[must_use]
    pub fn help() -> Self {
        let shortcuts = vec![
            Shortcut::new(NAVIGATE, "", "Alt"),
            Shortcut::new(NAVIGATE, "A", "Amend"),
            Shortcut::new(NAVIGATE, "S", "Sign-off"),
            Shortcut::new(NAVIGATE, "T", "Theme"),
            Shortcut::new(CYCLE, "", ""),
            Shortcut::new(CYCLE, "Enter", "Confirm"),
            Shortcut::new(CYCLE, "Up/Down", "Select"),
            Shortcut::new(QUIT, "Ctrl+C", "Cancel"),
            Shortcut::new(TOGGLE, "Alt+/", "Back"),
        ];
        Self {
            modifiers: Self::rows(),
            shortcuts,
        }
    }

    /// Render both sides into lines `width` cells wide, left block flush
    /// left and right block flush right.
    #[must_use]
    pub fn render(&self, width: usize) -> Vec<String> {
        let left = join_horizontal(
            &layout(Align::Left, &self.modifiers, &self.shortcuts, true),
            1,
        );
        let right = join_horizontal(
            &layout(Align::Right, &self.modifiers, &self.shortcuts, true),
            1,
        );
        let left_width = left.iter().map(|l| l.width()).max().unwrap_or(0);
        let right_width = right.iter().map(|l| l.width()).max().unwrap_or(0);
        let gap = width.saturating_sub(left_width + right_width).max(2);

        (0..left.len().max(right.len()))
            .map(|row| {
                let l = pad_end(left.get(row).map_or("", String::as_str), left_width);
                let r = right.get(row).map_or("", String::as_str);
                format!("{l}{}{r}", " ".repeat(gap))
                    .trim_end()
                    .to_string()
            })
            .collect()
    }
}

/// Lay out `shortcuts` grouped by `modifiers` for one side of the bar.
///
/// Returns the non-blank grid columns in order. No matching modifier means
/// no columns; a modifier with no shortcuts contributes a blank row.
#[must_use]
pub fn layout(
    align: Align,
    modifiers: &[Modifier],
    shortcuts: &[Shortcut],
    decorate: bool,
) -> Vec<String> {
    let rows: Vec<&Modifier> = modifiers.iter().filter(|m| m.align == align).collect();
    if rows.is_empty() {
        return Vec::new();
    }

    let width = rows
        .iter()
        .map(|m| shortcuts.iter().filter(|s| s.modifier == m.id).count())
        .max()
        .unwrap_or(0);

    let mut grid = vec![vec![String::new(); width * 2]; rows.len()];
    for (row, modifier) in rows.iter().enumerate() {
        let members = shortcuts.iter().filter(|s| s.modifier == modifier.id);
        for (i, shortcut) in members.enumerate() {
            let (key_col, label_col) = match align {
                Align::Left => (2 * i, 2 * i + 1),
                Align::Right => (2 * i + 1, 2 * i),
            };
            grid[row][key_col] = decorate_key(&shortcut.key, decorate);
            grid[row][label_col] = shortcut.label.clone();
        }
    }

    (0..width * 2)
        .filter_map(|col| {
            let cells: Vec<&str> = grid.iter().map(|row| row[col].as_str()).collect();
            render_column(&cells, cell_align(align, is_key_column(align, col)))
        })
        .collect()
}

/// Join multi-line columns side by side, separated by `gap` spaces.
///
/// Every column, the last one included, is padded to its own widest line and
/// shorter columns are extended with blank lines, so all rows share a width.
#[must_use]
pub fn join_horizontal(columns: &[String], gap: usize) -> Vec<String> {
    let split: Vec<Vec<&str>> = columns.iter().map(|c| c.split('\n').collect()).collect();
    let height = split.iter().map(Vec::len).max().unwrap_or(0);
    let widths: Vec<usize> = split
        .iter()
        .map(|lines| lines.iter().map(|l| l.width()).max().unwrap_or(0))
        .collect();
    let separator = " ".repeat(gap);

    (0..height)
        .map(|row| {
            split
                .iter()
                .zip(&widths)
                .map(|(lines, width)| pad_end(lines.get(row).copied().unwrap_or(""), *width))
                .collect::<Vec<_>>()
                .join(&separator)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CellAlign {
    Start,
    End,
}

const fn is_key_column(align: Align, col: usize) -> bool {
    match align {
        Align::Left => col % 2 == 0,
        Align::Right => col % 2 == 1,
    }
}

/// Keys and labels lean toward each other so every pair reads as one unit.
const fn cell_align(align: Align, key: bool) -> CellAlign {
    match (align, key) {
        (Align::Left, true) | (Align::Right, false) => CellAlign::End,
        (Align::Left, false) | (Align::Right, true) => CellAlign::Start,
    }
}

fn decorate_key(key: &str, decorate: bool) -> String {
    if decorate && !key.is_empty() {
        format!("<{key}>")
    } else {
        key.to_string()
    }
}

fn render_column(cells: &[&str], align: CellAlign) -> Option<String> {
    if cells.iter().all(|c| c.trim().is_empty()) {
        return None;
    }
    let width = cells.iter().map(|c| c.width()).max().unwrap_or(0);
    let rendered: Vec<String> = cells
        .iter()
        .map(|cell| match align {
            CellAlign::Start => pad_end(cell, width),
            CellAlign::End => pad_start(cell, width),
        })
        .collect();
    Some(rendered.join("\n"))
}

pub(crate) fn pad_end(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{s}{}", " ".repeat(fill))
}

pub(crate) fn pad_start(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(s.width());
    format!("{}{s}", " ".repeat(fill))
}

#[cfg(test)]
mod tests {
    use committed_types::{Align, Modifier, Shortcut};

    use unicode_width::UnicodeWidthStr;

    use super::{ShortcutSet, join_horizontal, layout};

    const ALT: i32 = 1;
    const PLAIN: i32 = 2;
    const CTRL: i32 = 3;

    #[test]
    fn no_matching_modifiers_yields_no_columns() {
        let modifiers = [Modifier::new(ALT, Align::Left)];
        let shortcuts = [Shortcut::new(ALT, "Alt+1", "Author")];
        assert!(layout(Align::Right, &modifiers, &shortcuts, true).is_empty());
        assert!(layout(Align::Left, &[], &shortcuts, true).is_empty());
    }

    #[test]
    fn modifier_without_shortcuts_contributes_no_column() {
        let modifiers = [Modifier::new(CTRL, Align::Left)];
        let shortcuts = [Shortcut::new(ALT, "Alt+1", "Author")];
        assert!(layout(Align::Left, &modifiers, &shortcuts, false).is_empty());
    }

    #[test]
    fn modifier_without_shortcuts_adds_blank_row() {
        let modifiers = [
            Modifier::new(ALT, Align::Left),
            Modifier::new(CTRL, Align::Left),
        ];
        let shortcuts = [Shortcut::new(ALT, "Alt+1", "Author")];
        let columns = layout(Align::Left, &modifiers, &shortcuts, false);
        assert_eq!(columns, vec!["Alt+1\n     ", "Author\n      "]);
    }

    #[test]
    fn left_side_pads_keys_to_the_right_and_labels_to_the_left() {
        let modifiers = [
            Modifier::new(ALT, Align::Left),
            Modifier::new(PLAIN, Align::Left),
        ];
        let shortcuts = [
            Shortcut::new(ALT, "Alt+1", "Author"),
            Shortcut::new(ALT, "Alt+2", "Emoji"),
            Shortcut::new(PLAIN, "Tab", "Next"),
        ];
        let columns = layout(Align::Left, &modifiers, &shortcuts, false);
        assert_eq!(
            columns,
            vec![
                "Alt+1\n  Tab",
                "Author\nNext  ",
                "Alt+2\n     ",
                "Emoji\n     ",
            ]
        );
    }

    #[test]
    fn right_side_mirrors_pairs_and_brackets_keys() {
        let modifiers = [
            Modifier::new(CTRL, Align::Right),
            Modifier::new(ALT, Align::Right),
        ];
        let shortcuts = [
            Shortcut::new(CTRL, "Ctrl+C", "Cancel"),
            Shortcut::new(ALT, "?", "Help"),
        ];
        let columns = layout(Align::Right, &modifiers, &shortcuts, true);
        assert_eq!(columns, vec!["Cancel\n  Help", "<Ctrl+C>\n<?>     "]);
    }

    #[test]
    fn rows_follow_modifier_order_not_shortcut_order() {
        let modifiers = [
            Modifier::new(PLAIN, Align::Left),
            Modifier::new(ALT, Align::Left),
        ];
        let shortcuts = [
            Shortcut::new(ALT, "A", "alt"),
            Shortcut::new(PLAIN, "P", "plain"),
        ];
        let columns = layout(Align::Left, &modifiers, &shortcuts, false);
        assert_eq!(columns, vec!["P\nA", "plain\nalt  "]);
    }

    #[test]
    fn entirely_blank_column_is_dropped() {
        let modifiers = [Modifier::new(ALT, Align::Left)];
        let shortcuts = [
            Shortcut::new(ALT, "", "Orphan label"),
            Shortcut::new(ALT, "Alt+2", "Emoji"),
        ];
        let columns = layout(Align::Left, &modifiers, &shortcuts, true);
        assert_eq!(columns, vec!["Orphan label", "<Alt+2>", "Emoji"]);
    }

    #[test]
    fn wide_characters_pad_by_display_width() {
        let modifiers = [
            Modifier::new(ALT, Align::Left),
            Modifier::new(PLAIN, Align::Left),
        ];
        let shortcuts = [
            Shortcut::new(ALT, "🎨", "emoji"),
            Shortcut::new(PLAIN, "abc", "x"),
        ];
        let columns = layout(Align::Left, &modifiers, &shortcuts, false);
        assert_eq!(columns[0], " 🎨\nabc");
    }

    #[test]
    fn joined_single_row_bar() {
        let modifiers = [Modifier::new(ALT, Align::Left)];
        let shortcuts = [
            Shortcut::new(ALT, "Alt+1", "Author"),
            Shortcut::new(ALT, "Alt+2", "Emoji"),
        ];
        let columns = layout(Align::Left, &modifiers, &shortcuts, true);
        let lines = join_horizontal(&columns, 1);
        assert_eq!(lines.len(), 1);
        insta::assert_snapshot!(lines[0], @"<Alt+1> Author <Alt+2> Emoji");
    }

    #[test]
    fn join_pads_short_columns() {
        let columns = vec!["ab\nc".to_string(), "x".to_string()];
        let rows = join_horizontal(&columns, 2);
        assert_eq!(rows, vec!["ab  x", "c    "]);
        assert!(rows.iter().all(|row| row.width() == 5));
    }

    #[test]
    fn global_set_fits_eighty_columns() {
        let lines = ShortcutSet::global("Summary", "Author").render(80);
        assert_eq!(lines.len(), 3);
        assert!(lines[0].starts_with("Alt   <1> Author"));
        assert!(lines[0].ends_with("Cancel <Ctrl+C>"));
        assert!(lines[1].contains("<Tab> Summary <Shift+Tab> Author"));
        assert!(lines[1].ends_with("Commit <Alt+Enter>"));
        assert_eq!(lines[1].width(), 80);
        assert_eq!(lines[2].trim(), "Help <Alt+/>");
    }

    #[test]
    fn global_set_hides_missing_cycle_hints() {
        let lines = ShortcutSet::global("", "Summary").render(80);
        assert!(!lines[1].contains("<Tab>"));
        assert!(lines[1].contains("<Shift+Tab> Summary"));
    }

    #[test]
    fn help_set_lists_toggles() {
        let lines = ShortcutSet::help().render(80);
        assert!(lines[0].contains("<A> Amend"));
        assert!(lines[0].contains("<T> Theme"));
        assert!(lines[2].ends_with("Back <Alt+/>"));
    }

    #[test]
    fn join_of_nothing_is_empty() {
        assert!(join_horizontal(&[], 1).is_empty());
    }
}
