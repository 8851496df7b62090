//! Shortcut hint bar.

use committed_types::{Event, Key};

use super::Panel;
use crate::Effect;
use crate::shortcut::ShortcutSet;

const DEFAULT_WIDTH: usize = 80;

#[derive(Debug, Clone)]
pub struct StatusPanel {
    next: String,
    previous: String,
    help: bool,
    width: usize,
    focus: bool,
}

impl Default for StatusPanel {
    fn default() -> Self {
        Self {
            next: String::new(),
            previous: String::new(),
            help: false,
            width: DEFAULT_WIDTH,
            focus: false,
        }
    }
}

impl StatusPanel {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Name the panels reached by `tab` and `shift+tab`.
    pub fn set_labels(&mut self, next: &str, previous: &str) {
        next.clone_into(&mut self.next);
        previous.clone_into(&mut self.previous);
    }

    #[must_use]
    pub fn help(&self) -> bool {
        self.help
    }

    fn shortcuts(&self) -> ShortcutSet {
        if self.help {
            ShortcutSet::help()
        } else {
            ShortcutSet::global(&self.next, &self.previous)
        }
    }
}

impl Panel for StatusPanel {
    fn update(&mut self, event: &Event) -> Vec<Effect> {
        match event {
            Event::Key(press) if press.alt && !press.ctrl => match press.key {
                Key::Char('/') => {
                    self.help = !self.help;
                    Vec::new()
                }
                Key::Char('t') => vec![Effect::NextTheme],
                _ => Vec::new(),
            },
            Event::Resize { width, .. } => {
                self.width = usize::from(*width);
                Vec::new()
            }
            _ => Vec::new(),
        }
    }

    fn view(&self) -> Vec<String> {
        self.shortcuts().render(self.width)
    }

    fn focus(&mut self) {
        self.focus = true;
    }

    fn blur(&mut self) {
        self.focus = false;
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use committed_types::{Event, Key, KeyPress};

    use super::StatusPanel;
    use crate::Effect;
    use crate::panels::Panel;

    #[test]
    fn labels_appear_in_cycle_row() {
        let mut panel = StatusPanel::new();
        panel.set_labels("next", "previous");
        let view = panel.view();
        assert!(view[1].contains("<Tab> next"));
        assert!(view[1].contains("<Shift+Tab> previous"));
    }

    #[test]
    fn help_toggles_shortcut_set() {
        let mut panel = StatusPanel::new();
        panel.update(&Event::Key(KeyPress::alt(Key::Char('/'))));
        assert!(panel.help());
        assert!(panel.view()[0].contains("<A> Amend"));
        panel.update(&Event::Key(KeyPress::alt(Key::Char('/'))));
        assert!(!panel.help());
    }

    #[test]
    fn alt_t_requests_next_theme() {
        let mut panel = StatusPanel::new();
        let effects = panel.update(&Event::Key(KeyPress::alt(Key::Char('t'))));
        assert_eq!(effects, vec![Effect::NextTheme]);
        assert!(panel.update(&Event::key(Key::Char('t'))).is_empty());
    }

    #[test]
    fn resize_changes_bar_width() {
        let mut panel = StatusPanel::new();
        panel.set_labels("Summary", "Author");
        panel.update(&Event::Resize {
            width: 100,
            height: 40,
        });
        assert_eq!(panel.view()[1].chars().count(), 100);
    }
}
