//! Draft slots preserved across amend toggles.
//!
//! Two slots are tracked: `current` belongs to the mode being edited and
//! `previous` to the other one. The manager never touches panel internals;
//! it reads and writes the live fields through [`LiveDraft`].

use std::mem;

use committed_types::{DraftSlot, Emoji};

use crate::message;
use crate::state::SessionState;

/// Narrow accessors onto the live editing widgets.
pub trait LiveDraft {
    fn amend(&self) -> bool;
    fn set_amend(&mut self, amend: bool);
    fn emoji(&self) -> Option<Emoji>;
    fn set_emoji(&mut self, emoji: Option<Emoji>);
    fn summary(&self) -> String;
    fn set_summary(&mut self, summary: &str);
    fn reset_summary(&mut self);
    /// Body exactly as typed, untrimmed.
    fn body(&self) -> String;
    fn set_body(&mut self, body: &str);
    fn reset_body(&mut self);
}

/// Drafts a session can start from.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftDefaults {
    /// From the hook's message file, tagged with the hook's amend flag.
    pub hook: DraftSlot,
    /// From the head commit, always tagged amend.
    pub amend: DraftSlot,
}

impl DraftDefaults {
    #[must_use]
    pub fn from_session(state: &SessionState) -> Self {
        let amend = match &state.repository.head {
            Some(head) => {
                let (emoji, summary) = message::split_subject(&head.subject, &state.emojis);
                DraftSlot {
                    amend: true,
                    emoji,
                    summary,
                    body: head.body.clone(),
                }
            }
            None => DraftSlot {
                amend: true,
                ..DraftSlot::default()
            },
        };

        let parsed = message::parse(&state.hook.message, &state.emojis);
        let hook = DraftSlot {
            amend: state.hook.amend,
            emoji: parsed.emoji,
            summary: parsed.summary,
            body: parsed.body,
        };

        Self { hook, amend }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DraftManager {
    current: DraftSlot,
    previous: DraftSlot,
    hook_enabled: bool,
    amend_requested: bool,
    amend: bool,
}

impl DraftManager {
    #[must_use]
    pub fn new(hook_enabled: bool, amend_requested: bool) -> Self {
        Self {
            hook_enabled,
            amend_requested,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn current(&self) -> &DraftSlot {
        &self.current
    }

    #[must_use]
    pub fn previous(&self) -> &DraftSlot {
        &self.previous
    }

    /// Whether the session started in amend mode.
    #[must_use]
    pub fn amend(&self) -> bool {
        self.amend
    }

    /// Seed both slots from the startup flags.
    pub fn set_saves(&mut self, hook_amend: bool, defaults: &DraftDefaults) {
        self.amend = self.amend_requested || hook_amend;

        if self.amend {
            self.current = if hook_amend {
                defaults.hook.clone()
            } else {
                defaults.amend.clone()
            };
        } else {
            if self.hook_enabled {
                self.current = defaults.hook.clone();
            }
            self.previous = if hook_amend {
                defaults.hook.clone()
            } else {
                defaults.amend.clone()
            };
        }

        tracing::debug!(
            amend = self.amend,
            hook = self.hook_enabled,
            "Initialized draft slots"
        );
    }

    /// Place `snapshot` into the slot for its mode. Returns false when no
    /// rule matched and nothing changed.
    ///
    /// The fallback rules overlap with the first two; their order is kept
    /// as-is and is a candidate for review.
    pub fn set_save(&mut self, snapshot: DraftSlot, live: &mut impl LiveDraft) -> bool {
        let has_content = !snapshot.is_empty();

        if self.current.amend == snapshot.amend {
            self.load_save(snapshot, live);
            return true;
        }
        if self.previous.amend == snapshot.amend {
            self.swap_save(live);
            self.load_save(snapshot, live);
            return true;
        }
        if has_content && !self.current.amend {
            self.load_save(snapshot, live);
            return true;
        }
        if has_content && !self.previous.amend {
            self.swap_save(live);
            self.load_save(snapshot, live);
            return true;
        }

        tracing::debug!("Snapshot matched no draft slot");
        false
    }

    /// Make `slot` current and write it into the live fields, clearing them
    /// first so no text from a longer value survives.
    pub fn load_save(&mut self, slot: DraftSlot, live: &mut impl LiveDraft) {
        live.reset_summary();
        live.reset_body();
        restore(live, &slot);
        self.current = slot;
    }

    /// Keep the live edits in `current`, then bring `previous` into the live
    /// fields.
    pub fn swap_save(&mut self, live: &mut impl LiveDraft) {
        self.current = capture(live);

        live.reset_summary();
        live.reset_body();

        mem::swap(&mut self.current, &mut self.previous);
        restore(live, &self.current);
    }
}

fn capture(live: &impl LiveDraft) -> DraftSlot {
    DraftSlot {
        amend: live.amend(),
        emoji: live.emoji(),
        summary: live.summary(),
        body: live.body(),
    }
}

fn restore(live: &mut impl LiveDraft, slot: &DraftSlot) {
    live.set_amend(slot.amend);
    live.set_emoji(slot.emoji.clone());
    live.set_summary(&slot.summary);
    live.set_body(&slot.body);
}
