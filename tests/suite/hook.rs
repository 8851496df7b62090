//! prepare-commit-msg hook sessions.

use committed_engine::Hook;
use committed_types::Key;

use crate::common::{Driver, session};

const TEMPLATE: &str = "\
:memo: Update docs

Explain the new flags.

# Please enter the commit message for your changes. Lines starting
# with '#' will be ignored.
";

#[test]
fn hook_message_prefills_draft() {
    let mut state = session();
    state.hook = Hook {
        enabled: true,
        amend: false,
        message: TEMPLATE.to_string(),
    };
    let mut driver = Driver::new(state);

    assert_eq!(driver.composer.header().shortcode(), ":memo:");
    assert_eq!(driver.composer.header().summary(), "Update docs");
    assert_eq!(driver.composer.body().value(), "Explain the new flags.");

    driver.alt_key(Key::Enter);
    assert!(driver.quit());
    assert_eq!(
        driver.composer.result().message(),
        ":memo: Update docs\n\nExplain the new flags.\n"
    );
}

#[test]
fn hook_for_new_commit_keeps_head_in_reserve() {
    let mut state = session();
    state.hook = Hook {
        enabled: true,
        amend: false,
        message: TEMPLATE.to_string(),
    };
    let mut driver = Driver::new(state);

    driver.alt('a');
    assert!(driver.composer.header().amend());
    assert_eq!(driver.composer.header().summary(), "Fix crash on empty input");

    driver.alt('a');
    assert_eq!(driver.composer.header().summary(), "Update docs");
}

#[test]
fn hook_amend_edits_the_hook_message() {
    let mut state = session();
    state.hook = Hook {
        enabled: true,
        amend: true,
        message: ":bug: Fix crash on empty input\n\nReworded body.\n".to_string(),
    };
    let mut driver = Driver::new(state);

    assert!(driver.composer.drafts().amend());
    assert!(driver.composer.header().amend());
    assert_eq!(driver.composer.body().value(), "Reworded body.");

    driver.alt('a');
    assert!(!driver.composer.header().amend());
    assert!(driver.composer.header().summary().is_empty());
}

#[test]
fn empty_hook_message_starts_blank() {
    let mut state = session();
    state.hook = Hook {
        enabled: true,
        amend: false,
        message: "\n# Please enter the commit message\n".to_string(),
    };
    let driver = Driver::new(state);

    assert!(driver.composer.header().emoji().is_none());
    assert!(driver.composer.header().summary().is_empty());
    assert!(!driver.composer.header().amend());
}
