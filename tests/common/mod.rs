//! Shared test utilities and fixtures
//!
//! Sessions are built in memory; nothing here touches git or a terminal.

#![allow(dead_code)]

use committed_engine::{Composer, Effect, SessionState};
use committed_types::{Author, EmojiSet, Event, HeadCommit, Key, KeyPress};

/// A repository with one user on `main` and a head commit to amend.
pub fn session() -> SessionState {
    let mut state = SessionState {
        emojis: EmojiSet::gitmoji(),
        ..SessionState::default()
    };
    state.repository.users = vec![Author::new("Jo", "jo@example.com")];
    state.repository.branch.local = "main".to_string();
    state.repository.head = Some(HeadCommit {
        hash: "0123456789abcdef".to_string(),
        author: Author::new("Jo", "jo@example.com"),
        subject: ":bug: Fix crash on empty input".to_string(),
        body: "The parser assumed one line.".to_string(),
    });
    state
}

/// Drives a composer and records every effect it raised.
pub struct Driver {
    pub composer: Composer,
    pub effects: Vec<Effect>,
}

impl Driver {
    pub fn new(state: SessionState) -> Self {
        let (composer, effects) = Composer::new(state).init();
        Self { composer, effects }
    }

    pub fn send(&mut self, event: Event) -> &mut Self {
        let (composer, effects) = self.composer.clone().update(&event);
        self.composer = composer;
        self.effects.extend(effects);
        self
    }

    pub fn key(&mut self, key: Key) -> &mut Self {
        self.send(Event::key(key))
    }

    pub fn alt(&mut self, c: char) -> &mut Self {
        self.send(Event::Key(KeyPress::alt(Key::Char(c))))
    }

    pub fn alt_key(&mut self, key: Key) -> &mut Self {
        self.send(Event::Key(KeyPress::alt(key)))
    }

    pub fn ctrl(&mut self, c: char) -> &mut Self {
        self.send(Event::Key(KeyPress::ctrl(Key::Char(c))))
    }

    pub fn type_str(&mut self, text: &str) -> &mut Self {
        for c in text.chars() {
            self.key(Key::Char(c));
        }
        self
    }

    pub fn quit(&self) -> bool {
        self.effects.contains(&Effect::Quit)
    }
}
