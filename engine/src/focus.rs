//! Composer focus states.

use committed_types::Focus;

/// Which panel is interactive.
///
/// `Empty` only exists before [`crate::Composer::init`] resolves the
/// configured starting focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusState {
    #[default]
    Empty,
    Author,
    Emoji,
    Summary,
    Body,
}

impl FocusState {
    /// Forward cycle, clamped at `Body`.
    #[must_use]
    pub const fn next(self) -> Self {
        match self {
            FocusState::Empty => FocusState::Empty,
            FocusState::Author => FocusState::Emoji,
            FocusState::Emoji => FocusState::Summary,
            FocusState::Summary | FocusState::Body => FocusState::Body,
        }
    }

    /// Backward cycle, clamped at `Author`.
    #[must_use]
    pub const fn previous(self) -> Self {
        match self {
            FocusState::Empty => FocusState::Empty,
            FocusState::Author | FocusState::Emoji => FocusState::Author,
            FocusState::Summary => FocusState::Emoji,
            FocusState::Body => FocusState::Summary,
        }
    }

    /// Starting state for a configured focus. Unset starts on the emoji picker.
    #[must_use]
    pub const fn from_focus(focus: Focus) -> Self {
        match focus {
            Focus::Author => FocusState::Author,
            Focus::Summary => FocusState::Summary,
            Focus::Emoji | Focus::Unset => FocusState::Emoji,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            FocusState::Empty => "",
            FocusState::Author => "Author",
            FocusState::Emoji => "Emoji",
            FocusState::Summary => "Summary",
            FocusState::Body => "Body",
        }
    }

    /// Label of the state `tab` would move to, empty at the end of the cycle.
    #[must_use]
    pub fn next_label(self) -> &'static str {
        let next = self.next();
        if next == self { "" } else { next.label() }
    }

    /// Label of the state `shift+tab` would move to, empty at the start.
    #[must_use]
    pub fn previous_label(self) -> &'static str {
        let previous = self.previous();
        if previous == self { "" } else { previous.label() }
    }
}
