//! Buffered commit drafts.

use crate::emoji::{Emoji, EmojiSet};

/// One buffered copy of the editable fields, tagged with the mode it
/// belongs to.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DraftSlot {
    pub amend: bool,
    pub emoji: Option<Emoji>,
    pub summary: String,
    pub body: String,
}

impl DraftSlot {
    /// True when no editable field carries content. The mode tag is not
    /// content.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emoji.is_none() && self.summary.is_empty() && self.body.is_empty()
    }
}

/// A transient record of editable fields, referencing the emoji by
/// shortcode or character rather than by value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub amend: bool,
    pub emoji: String,
    pub summary: String,
    pub body: String,
}

impl Snapshot {
    /// Resolve into a draft slot. An emoji reference missing from `emojis`
    /// is dropped.
    #[must_use]
    pub fn to_slot(&self, emojis: &EmojiSet) -> DraftSlot {
        DraftSlot {
            amend: self.amend,
            emoji: emojis.find(&self.emoji).cloned(),
            summary: self.summary.clone(),
            body: self.body.clone(),
        }
    }
}
