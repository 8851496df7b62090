//! Parsing existing commit messages into draft fields.

use committed_types::{Emoji, EmojiSet, has_character, has_shortcode, normalize_line_endings};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedMessage {
    pub emoji: Option<Emoji>,
    pub summary: String,
    pub body: String,
}

/// Split a full commit message into emoji, subject and body.
///
/// Lines starting with `#` are git comments and are dropped. The first
/// non-blank line is the subject; everything after the following blank
/// lines is the body.
#[must_use]
pub fn parse(text: &str, emojis: &EmojiSet) -> ParsedMessage {
    let text = normalize_line_endings(text);
    let mut lines = text
        .lines()
        .filter(|line| !line.starts_with('#'))
        .skip_while(|line| line.trim().is_empty());

    let Some(subject) = lines.next() else {
        return ParsedMessage::default();
    };
    let (emoji, summary) = split_subject(subject, emojis);

    let body = lines
        .skip_while(|line| line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n");

    ParsedMessage {
        emoji,
        summary,
        body: body.trim_end().to_string(),
    }
}

/// Separate a leading emoji (shortcode or character) from a subject line.
///
/// An emoji-looking token missing from `emojis` stays part of the summary.
#[must_use]
pub fn split_subject(subject: &str, emojis: &EmojiSet) -> (Option<Emoji>, String) {
    let subject = subject.trim();
    let (token, rest) = subject
        .split_once(char::is_whitespace)
        .unwrap_or((subject, ""));

    if (has_shortcode(token) || has_character(token))
        && let Some(emoji) = emojis.find(token)
    {
        return (Some(emoji.clone()), rest.trim_start().to_string());
    }
    (None, subject.to_string())
}
