//! Emoji dataset and detection helpers.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GITMOJI_RAW: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/assets/gitmoji.json"));

static SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^:[a-z0-9_+\-]+:$").expect("shortcode pattern is valid"));

const ZERO_WIDTH_JOINER: char = '\u{200D}';
const VARIATION_SELECTOR: char = '\u{FE0F}';

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Emoji {
    pub name: String,
    pub character: String,
    pub description: String,
    pub shortcode: String,
}

impl Emoji {
    /// True when the character carries an explicit emoji presentation selector.
    #[must_use]
    pub fn has_variation_selector(&self) -> bool {
        self.character.contains(VARIATION_SELECTOR)
    }
}

#[derive(Debug, Error)]
#[error("invalid emoji dataset: {0}")]
pub struct EmojiSetError(#[from] serde_json::Error);

/// An ordered emoji dataset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmojiSet {
    emojis: Vec<Emoji>,
}

impl EmojiSet {
    #[must_use]
    pub fn new(emojis: Vec<Emoji>) -> Self {
        Self { emojis }
    }

    /// The bundled gitmoji dataset.
    #[must_use]
    pub fn gitmoji() -> Self {
        // Compiled in and covered by `gitmoji_set_loads_with_art_first`.
        Self::from_json(GITMOJI_RAW).unwrap_or_default()
    }

    pub fn from_json(raw: &str) -> Result<Self, EmojiSetError> {
        let emojis: Vec<Emoji> = serde_json::from_str(raw)?;
        Ok(Self { emojis })
    }

    #[must_use]
    pub fn emojis(&self) -> &[Emoji] {
        &self.emojis
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.emojis.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.emojis.is_empty()
    }

    /// Look up an emoji by shortcode (`:art:`) or by character (`🎨`).
    ///
    /// Character matching ignores a trailing variation selector so that
    /// `⚡` and `⚡️` resolve to the same entry.
    #[must_use]
    pub fn find(&self, needle: &str) -> Option<&Emoji> {
        let needle = needle.trim();
        if needle.is_empty() {
            return None;
        }
        if has_shortcode(needle) {
            return self.emojis.iter().find(|e| e.shortcode == needle);
        }
        let bare = strip_selector(needle);
        self.emojis
            .iter()
            .find(|e| strip_selector(&e.character) == bare)
    }

    /// Emojis whose name or description contains `filter` (case-insensitive).
    /// An empty filter returns the whole set.
    #[must_use]
    pub fn filter(&self, filter: &str) -> Vec<&Emoji> {
        let needle = filter.trim().to_lowercase();
        if needle.is_empty() {
            return self.emojis.iter().collect();
        }
        self.emojis
            .iter()
            .filter(|e| {
                e.name.contains(&needle) || e.description.to_lowercase().contains(&needle)
            })
            .collect()
    }
}

fn strip_selector(s: &str) -> String {
    s.chars().filter(|c| *c != VARIATION_SELECTOR).collect()
}

/// True when `s` is exactly one shortcode such as `:art:`.
#[must_use]
pub fn has_shortcode(s: &str) -> bool {
    SHORTCODE.is_match(s)
}

/// True when `s` contains at least one emoji character.
#[must_use]
pub fn has_character(s: &str) -> bool {
    s.chars().any(is_emoji_char)
}

fn is_emoji_char(c: char) -> bool {
    matches!(
        c as u32,
        0x1F000..=0x1FAFF   // pictographs, emoticons, transport, supplemental symbols
            | 0x2300..=0x23FF // misc technical (⌚, ⏪)
            | 0x2600..=0x27BF // misc symbols and dingbats (⚡, ✨, ➕)
            | 0x2B00..=0x2BFF // arrows (⬆, ⬇)
    ) || c == VARIATION_SELECTOR
        || c == ZERO_WIDTH_JOINER
}
