//! Shortcut grid layout through the public API.

use committed_engine::ShortcutSet;
use committed_engine::shortcut::{join_horizontal, layout};
use committed_types::{Align, Modifier, Shortcut};

#[test]
fn left_grid_aligns_keys_toward_labels() {
    let modifiers = [Modifier::new(0, Align::Left), Modifier::new(1, Align::Left)];
    let shortcuts = [
        Shortcut::new(0, "a", "Apple"),
        Shortcut::new(0, "b", "Banana"),
        Shortcut::new(1, "Tab", "Next"),
    ];

    let columns = layout(Align::Left, &modifiers, &shortcuts, true);
    assert_eq!(columns.len(), 4);
    assert_eq!(columns[0], "  <a>\n<Tab>");

    let lines = join_horizontal(&columns, 1);
    assert_eq!(lines[0], "  <a> Apple <b> Banana");
    assert_eq!(lines[1].trim_end(), "<Tab> Next");
}

#[test]
fn right_grid_mirrors_pairs() {
    let modifiers = [Modifier::new(7, Align::Right)];
    let shortcuts = [Shortcut::new(7, "q", "Quit")];

    let columns = layout(Align::Right, &modifiers, &shortcuts, true);
    assert_eq!(columns, vec!["Quit".to_string(), "<q>".to_string()]);
    assert_eq!(join_horizontal(&columns, 1), vec!["Quit <q>".to_string()]);
}

#[test]
fn other_side_and_unknown_modifiers_yield_nothing() {
    let modifiers = [Modifier::new(0, Align::Right)];
    let shortcuts = [Shortcut::new(0, "q", "Quit")];
    assert!(layout(Align::Left, &modifiers, &shortcuts, true).is_empty());

    let stray = [Shortcut::new(9, "x", "Stray")];
    assert!(layout(Align::Right, &modifiers, &stray, false).is_empty());
}

#[test]
fn status_bar_fits_requested_width() {
    for width in [80, 120] {
        let lines = ShortcutSet::global("Summary", "Author").render(width);
        assert_eq!(lines.len(), 3);
        assert!(lines.iter().all(|line| line.chars().count() <= width));
        assert_eq!(lines[1].chars().count(), width);
        assert!(lines[1].ends_with("Commit <Alt+Enter>"));
    }
}
