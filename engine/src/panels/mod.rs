//! The five composer panels.
//!
//! Every panel implements [`Panel`]; the composer owns one of each and drives
//! them in a fixed order: author, header, body, footer, status.

mod author;
mod body;
mod footer;
mod header;
mod status;

pub use author::AuthorPanel;
pub use body::BodyPanel;
pub use footer::FooterPanel;
pub use header::{HeaderPanel, Selection};
pub use status::StatusPanel;

use committed_types::Event;

use crate::Effect;

/// Uniform lifecycle shared by all panels.
pub trait Panel {
    fn init(&mut self) -> Vec<Effect> {
        Vec::new()
    }

    fn update(&mut self, event: &Event) -> Vec<Effect>;

    /// Rendered lines, top to bottom.
    fn view(&self) -> Vec<String>;

    fn focus(&mut self);

    fn blur(&mut self);

    fn focused(&self) -> bool;

    /// Cursor position as `(column, line)` relative to the panel's first line.
    fn cursor(&self) -> Option<(u16, u16)> {
        None
    }
}

pub(crate) fn to_u16(value: usize) -> u16 {
    u16::try_from(value).unwrap_or(u16::MAX)
}
