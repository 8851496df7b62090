//! Repository metadata and the session result.

use std::fmt;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Author {
    pub name: String,
    pub email: String,
}

impl Author {
    #[must_use]
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

impl fmt::Display for Author {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (self.name.is_empty(), self.email.is_empty()) {
            (false, false) => write!(f, "{} <{}>", self.name, self.email),
            (false, true) => f.write_str(&self.name),
            (true, false) => write!(f, "<{}>", self.email),
            (true, true) => Ok(()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Branch {
    pub local: String,
    pub remote: String,
    pub refs: Vec<String>,
}

/// The commit `HEAD` points at, used as the amend target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HeadCommit {
    pub hash: String,
    pub author: Author,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Repository {
    pub users: Vec<Author>,
    pub branch: Branch,
    pub head: Option<HeadCommit>,
}

/// Everything the session produced. `commit` is only true when the user
/// finalized a valid message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommitResult {
    pub commit: bool,
    pub amend: bool,
    pub name: String,
    pub email: String,
    pub emoji: String,
    pub summary: String,
    pub body: String,
    pub footer: String,
}

impl CommitResult {
    /// A result may only be committed with a subject.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.summary.is_empty()
    }

    /// Render as a commit message: subject, blank line, body, blank line,
    /// footer. Empty sections are omitted.
    #[must_use]
    pub fn message(&self) -> String {
        let subject = if self.emoji.is_empty() {
            self.summary.clone()
        } else {
            format!("{} {}", self.emoji, self.summary)
        };

        let mut sections = vec![subject];
        if !self.body.is_empty() {
            sections.push(self.body.clone());
        }
        if !self.footer.is_empty() {
            sections.push(self.footer.clone());
        }
        let mut message = sections.join("\n\n");
        message.push('\n');
        message
    }
}
