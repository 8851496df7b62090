//! Key-hint descriptions consumed by the shortcut layout engine.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Align {
    Left,
    Right,
}

/// A row category in a hint grid. Shortcuts referencing the same modifier
/// id share one row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Modifier {
    pub id: i32,
    pub align: Align,
}

impl Modifier {
    #[must_use]
    pub const fn new(id: i32, align: Align) -> Self {
        Self { id, align }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    pub key: String,
    pub label: String,
    pub modifier: i32,
}

impl Shortcut {
    #[must_use]
    pub fn new(modifier: i32, key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            modifier,
        }
    }
}
