//! Core engine for Committed - focus state machine, drafts and panels.
//!
//! This crate has no terminal dependencies. The host converts terminal input
//! into [`committed_types::Event`]s, feeds them to [`Composer::update`] and
//! drains the returned [`Effect`]s.

mod composer;
mod drafts;
mod focus;
pub mod message;
pub mod panels;
pub mod repository;
pub mod shortcut;
mod state;

pub use composer::{Composer, PanelId, PanelView};
pub use drafts::{DraftDefaults, DraftManager, LiveDraft};
pub use focus::FocusState;
pub use shortcut::ShortcutSet;
pub use state::{Hook, Options, SessionState};

/// Side effects raised by a composer pass, handled by the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// End the session. Check [`Composer::result`] for whether to commit.
    Quit,
    /// Advance to the next colour theme.
    NextTheme,
}
