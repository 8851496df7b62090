//! Core domain types for Committed.
//!
//! This crate is intentionally boring: no IO, no terminal, no git.
//!
//! - Configuration option tokens: [`Focus`], [`Compatibility`], [`Colour`]
//! - Emoji dataset and detection: [`Emoji`], [`EmojiSet`]
//! - Draft buffers: [`DraftSlot`], [`Snapshot`]
//! - Shortcut hint descriptions: [`Shortcut`], [`Modifier`], [`Align`]
//! - Backend-independent input: [`Event`], [`KeyPress`], [`Key`]
//! - Editable text: [`TextInput`]
//! - Session output and repository metadata: [`CommitResult`], [`Repository`]

mod commit;
mod draft;
mod emoji;
mod event;
mod options;
mod shortcut;
mod text;

pub use commit::{Author, Branch, CommitResult, HeadCommit, Repository};
pub use draft::{DraftSlot, Snapshot};
pub use emoji::{Emoji, EmojiSet, EmojiSetError, has_character, has_shortcode};
pub use event::{Event, Key, KeyPress};
pub use options::{Colour, Compatibility, Focus};
pub use shortcut::{Align, Modifier, Shortcut};
pub use text::{TextInput, normalize_line_endings, wrap};
