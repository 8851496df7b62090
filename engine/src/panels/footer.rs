//! Sign-off trailer.

use committed_types::{Author, Event, Key};

use super::Panel;
use crate::Effect;

#[derive(Debug, Clone, Default)]
pub struct FooterPanel {
    signoff: bool,
    author: Option<Author>,
    focus: bool,
}

impl FooterPanel {
    #[must_use]
    pub fn new(signoff: bool) -> Self {
        Self {
            signoff,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn signoff(&self) -> bool {
        self.signoff
    }

    pub fn set_author(&mut self, author: Option<Author>) {
        self.author = author;
    }

    /// The trailer appended to the message, empty when sign-off is off or
    /// no author is known.
    #[must_use]
    pub fn footer(&self) -> String {
        match &self.author {
            Some(author) if self.signoff => format!("Signed-off-by: {author}"),
            _ => String::new(),
        }
    }
}

impl Panel for FooterPanel {
    fn update(&mut self, event: &Event) -> Vec<Effect> {
        if let Some(press) = event.as_key()
            && press.alt
            && !press.ctrl
            && press.key == Key::Char('s')
        {
            self.signoff = !self.signoff;
            tracing::debug!(signoff = self.signoff, "Toggled sign-off");
        }
        Vec::new()
    }

    fn view(&self) -> Vec<String> {
        let footer = self.footer();
        if footer.is_empty() {
            Vec::new()
        } else {
            vec![footer]
        }
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
    use committed_types::{Author, Event, Key, KeyPress};

    use super::FooterPanel;
    use crate::panels::Panel;

    #[test]
    fn trailer_needs_signoff_and_author() {
        let mut panel = FooterPanel::new(true);
        assert!(panel.footer().is_empty());
        panel.set_author(Some(Author::new("Jo", "jo@x.io")));
        assert_eq!(panel.footer(), "Signed-off-by: Jo <jo@x.io>");
        assert_eq!(panel.view(), vec!["Signed-off-by: Jo <jo@x.io>"]);
    }

    #[test]
    fn alt_s_toggles() {
        let mut panel = FooterPanel::new(false);
        panel.set_author(Some(Author::new("Jo", "jo@x.io")));
        assert!(panel.view().is_empty());

        panel.update(&Event::Key(KeyPress::alt(Key::Char('s'))));
        assert!(panel.signoff());
        panel.update(&Event::key(Key::Char('s')));
        assert!(panel.signoff());
    }
}
