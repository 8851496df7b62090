//! End-to-end composer sessions.

use committed_engine::FocusState;
use committed_engine::panels::Panel;
use committed_types::{Author, Focus, Key};

use crate::common::{Driver, session};

#[test]
fn full_session_composes_message() {
    let mut state = session();
    state.options.authors = vec![Author::new("Sam", "sam@example.com")];
    let mut driver = Driver::new(state);
    assert_eq!(driver.composer.focus_state(), FocusState::Emoji);

    driver.type_str("bug").key(Key::Enter);
    assert_eq!(driver.composer.focus_state(), FocusState::Summary);
    assert_eq!(driver.composer.header().shortcode(), ":bug:");

    driver.type_str("Fix crash").key(Key::Enter);
    assert_eq!(driver.composer.focus_state(), FocusState::Body);
    assert_eq!(driver.composer.header().summary(), "Fix crash");

    // The Enter that moved focus is not typed into the body.
    driver.type_str("Details.");
    assert_eq!(driver.composer.body().raw_value(), "Details.");

    driver.alt('1').key(Key::Down).key(Key::Enter);
    assert_eq!(driver.composer.focus_state(), FocusState::Author);
    assert_eq!(driver.composer.author().name(), "Sam");

    driver.alt_key(Key::Enter);
    assert!(driver.quit());

    let result = driver.composer.into_result();
    assert!(result.commit);
    assert!(!result.amend);
    assert_eq!(result.email, "sam@example.com");
    assert_eq!(result.message(), ":bug: Fix crash\n\nDetails.\n");
}

#[test]
fn finalize_requires_summary() {
    let mut driver = Driver::new(session());

    driver.alt_key(Key::Enter);
    assert!(!driver.quit());
    assert!(!driver.composer.result().commit);
    assert_eq!(driver.composer.focus_state(), FocusState::Emoji);

    driver.alt('3').type_str("fix bug").alt_key(Key::Enter);
    assert!(driver.quit());
    assert!(driver.composer.result().commit);
    assert_eq!(driver.composer.result().summary, "fix bug");
    assert_eq!(driver.composer.result().message(), "fix bug\n");
}

#[test]
fn cancel_discards_draft() {
    let mut driver = Driver::new(session());
    driver.alt('3').type_str("half done").ctrl('c');

    assert!(driver.quit());
    assert!(!driver.composer.result().commit);
}

#[test]
fn signoff_toggle_adds_trailer() {
    let mut driver = Driver::new(session());
    driver.alt('s').alt('3').type_str("Add flag").alt_key(Key::Enter);

    let result = driver.composer.result();
    assert_eq!(result.footer, "Signed-off-by: Jo <jo@example.com>");
    assert_eq!(
        result.message(),
        "Add flag\n\nSigned-off-by: Jo <jo@example.com>\n"
    );
}

#[test]
fn status_bar_follows_focus() {
    let mut driver = Driver::new(session());
    let status = driver.composer.status().view();
    assert!(status.iter().any(|l| l.contains("<Tab> Summary")));
    assert!(status.iter().any(|l| l.contains("<Shift+Tab> Author")));

    driver.alt('1');
    let status = driver.composer.status().view();
    assert!(status.iter().any(|l| l.contains("<Tab> Emoji")));
    assert!(!status.iter().any(|l| l.contains("<Shift+Tab>")));

    driver.alt('/');
    let status = driver.composer.status().view();
    assert!(status.iter().any(|l| l.contains("<A> Amend")));
}

#[test]
fn tab_walks_every_panel_without_typing() {
    let mut state = session();
    state.options.focus = Focus::Author;
    let mut driver = Driver::new(state);

    let mut visited = vec![driver.composer.focus_state()];
    for _ in 0..4 {
        driver.key(Key::Tab);
        visited.push(driver.composer.focus_state());
    }
    assert_eq!(
        visited,
        vec![
            FocusState::Author,
            FocusState::Emoji,
            FocusState::Summary,
            FocusState::Body,
            FocusState::Body,
        ]
    );
    // Entering the body swallows one Tab; the next one indents.
    assert_eq!(driver.composer.body().raw_value(), "    ");
}
