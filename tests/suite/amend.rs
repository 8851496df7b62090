//! Amend mode and draft preservation across toggles.

use committed_types::{Key, Snapshot};

use crate::common::{Driver, session};

#[test]
fn toggling_amend_twice_restores_draft() {
    let mut driver = Driver::new(session());
    driver.alt('3').type_str("wip");
    assert!(!driver.composer.header().amend());

    driver.alt('a');
    let header = driver.composer.header();
    assert!(header.amend());
    assert_eq!(header.shortcode(), ":bug:");
    assert_eq!(header.summary(), "Fix crash on empty input");
    assert_eq!(
        driver.composer.body().raw_value(),
        "The parser assumed one line."
    );

    driver.alt('a');
    let header = driver.composer.header();
    assert!(!header.amend());
    assert!(header.emoji().is_none());
    assert_eq!(header.summary(), "wip");
    assert!(driver.composer.body().raw_value().is_empty());
}

#[test]
fn edits_in_both_modes_survive_toggles() {
    let mut driver = Driver::new(session());
    driver.alt('3').type_str("new work");
    driver.alt('a').type_str(" again");
    assert_eq!(
        driver.composer.header().summary(),
        "Fix crash on empty input again"
    );

    driver.alt('a');
    assert_eq!(driver.composer.header().summary(), "new work");
    driver.alt('a');
    assert_eq!(
        driver.composer.header().summary(),
        "Fix crash on empty input again"
    );
}

#[test]
fn amend_flag_starts_with_head_commit() {
    let mut state = session();
    state.options.amend = true;
    let mut driver = Driver::new(state);

    assert!(driver.composer.drafts().amend());
    assert!(driver.composer.header().amend());

    driver.alt_key(Key::Enter);
    let result = driver.composer.result();
    assert!(result.commit);
    assert!(result.amend);
    assert_eq!(
        result.message(),
        ":bug: Fix crash on empty input\n\nThe parser assumed one line.\n"
    );
}

#[test]
fn amend_without_head_starts_empty() {
    let mut state = session();
    state.repository.head = None;
    state.options.amend = true;
    let mut driver = Driver::new(state);

    assert!(driver.composer.header().amend());
    assert!(driver.composer.header().summary().is_empty());

    driver.alt_key(Key::Enter);
    assert!(!driver.quit());
}

#[test]
fn resumed_snapshot_lands_in_its_mode() {
    let mut state = session();
    state.snapshot = Some(Snapshot {
        amend: false,
        emoji: ":memo:".to_string(),
        summary: "Resumed".to_string(),
        body: "Notes".to_string(),
    });
    let mut driver = Driver::new(state);

    assert_eq!(driver.composer.header().shortcode(), ":memo:");
    assert_eq!(driver.composer.header().summary(), "Resumed");
    assert_eq!(driver.composer.body().raw_value(), "Notes");

    driver.alt('a').alt('a');
    assert_eq!(driver.composer.header().summary(), "Resumed");
    assert!(!driver.composer.header().amend());
}

#[test]
fn amend_snapshot_swaps_modes_at_startup() {
    let mut state = session();
    state.snapshot = Some(Snapshot {
        amend: true,
        emoji: String::new(),
        summary: "Reworded head".to_string(),
        body: String::new(),
    });
    let mut driver = Driver::new(state);

    assert!(driver.composer.header().amend());
    assert_eq!(driver.composer.header().summary(), "Reworded head");

    driver.alt('a');
    assert!(!driver.composer.header().amend());
    assert!(driver.composer.header().summary().is_empty());
}
