//! Everything a session starts from.

use committed_types::{Author, Compatibility, EmojiSet, Focus, Repository, Snapshot};

/// Options resolved from the command line and configuration file.
#[derive(Debug, Clone, Default)]
pub struct Options {
    /// Start in amend mode.
    pub amend: bool,
    pub signoff: bool,
    pub focus: Focus,
    pub compatibility: Compatibility,
    /// Extra authors from configuration, offered after the repository user.
    pub authors: Vec<Author>,
}

/// `prepare-commit-msg` hook metadata.
#[derive(Debug, Clone, Default)]
pub struct Hook {
    pub enabled: bool,
    /// The hook was invoked for an amend (`SOURCE == "commit"`).
    pub amend: bool,
    /// Content of the hook's message file.
    pub message: String,
}

#[derive(Debug, Clone, Default)]
pub struct SessionState {
    pub repository: Repository,
    pub options: Options,
    pub hook: Hook,
    /// Fields to resume into the first matching draft slot.
    pub snapshot: Option<Snapshot>,
    pub emojis: EmojiSet,
}

impl SessionState {
    /// Repository users followed by configured authors, without duplicates.
    #[must_use]
    pub fn authors(&self) -> Vec<Author> {
        let mut authors: Vec<Author> = Vec::new();
        for author in self
            .repository
            .users
            .iter()
            .chain(self.options.authors.iter())
        {
            if !authors.contains(author) {
                authors.push(author.clone());
            }
        }
        authors
    }
}

#[cfg(test)]
mod tests {
    use committed_types::Author;

    use super::SessionState;

    #[test]
    fn authors_dedupe_preserving_order() {
        let mut state = SessionState::default();
        state.repository.users = vec![Author::new("Jo", "jo@x.io")];
        state.options.authors = vec![
            Author::new("Sam", "sam@x.io"),
            Author::new("Jo", "jo@x.io"),
        ];
        let names: Vec<String> = state.authors().into_iter().map(|a| a.email).collect();
        assert_eq!(names, vec!["jo@x.io", "sam@x.io"]);
    }
}
