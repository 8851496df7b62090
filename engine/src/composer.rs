//! The composer: focus state machine and panel orchestration.
//!
//! Every event runs the same pass:
//!
//! 1. global keys update the focus state (or end the pass early),
//! 2. all panels are blurred and their expand/compact flags cleared,
//! 3. flags for the new state are applied,
//! 4. the raw event goes to author, header, body, footer and status in
//!    that order, and their effects are collected.
//!
//! Later panels therefore see focus flags already updated for this event.

use std::ops::ControlFlow;

use committed_types::{CommitResult, DraftSlot, Emoji, Event, Key, KeyPress};

use crate::Effect;
use crate::drafts::{DraftDefaults, DraftManager, LiveDraft};
use crate::focus::FocusState;
use crate::panels::{AuthorPanel, BodyPanel, FooterPanel, HeaderPanel, Panel, StatusPanel};
use crate::state::SessionState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelId {
    Author,
    Header,
    Body,
    Footer,
    Status,
}

/// One panel's rendered output for the host to draw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PanelView {
    pub id: PanelId,
    pub focused: bool,
    pub lines: Vec<String>,
    /// `(column, line)` relative to the panel's first line.
    pub cursor: Option<(u16, u16)>,
}

#[derive(Debug, Clone)]
pub struct Composer {
    state: FocusState,
    initial: FocusState,
    author: AuthorPanel,
    header: HeaderPanel,
    body: BodyPanel,
    footer: FooterPanel,
    status: StatusPanel,
    drafts: DraftManager,
    snapshot: Option<DraftSlot>,
    result: CommitResult,
}

/// The header and body fields the draft manager reads and writes.
struct LiveFields<'a> {
    header: &'a mut HeaderPanel,
    body: &'a mut BodyPanel,
}

impl LiveDraft for LiveFields<'_> {
    fn amend(&self) -> bool {
        self.header.amend()
    }

    fn set_amend(&mut self, amend: bool) {
        self.header.set_amend(amend);
    }

    fn emoji(&self) -> Option<Emoji> {
        self.header.emoji().cloned()
    }

    fn set_emoji(&mut self, emoji: Option<Emoji>) {
        self.header.set_emoji(emoji);
    }

    fn summary(&self) -> String {
        self.header.summary().to_string()
    }

    fn set_summary(&mut self, summary: &str) {
        self.header.set_summary(summary);
    }

    fn reset_summary(&mut self) {
        self.header.reset_summary();
    }

    fn body(&self) -> String {
        self.body.raw_value().to_string()
    }

    fn set_body(&mut self, body: &str) {
        self.body.set_value(body);
    }

    fn reset_body(&mut self) {
        self.body.reset();
    }
}

impl Composer {
    #[must_use]
    pub fn new(session: SessionState) -> Self {
        let defaults = DraftDefaults::from_session(&session);
        let mut drafts = DraftManager::new(session.hook.enabled, session.options.amend);
        drafts.set_saves(session.hook.amend, &defaults);

        let snapshot = session
            .snapshot
            .as_ref()
            .map(|snapshot| snapshot.to_slot(&session.emojis));
        let authors = session.authors();
        let SessionState {
            repository,
            options,
            emojis,
            ..
        } = session;

        Self {
            state: FocusState::Empty,
            initial: FocusState::from_focus(options.focus),
            author: AuthorPanel::new(authors, repository.branch, repository.head),
            header: HeaderPanel::new(emojis, options.compatibility),
            body: BodyPanel::new(),
            footer: FooterPanel::new(options.signoff),
            status: StatusPanel::new(),
            drafts,
            snapshot,
            result: CommitResult::default(),
        }
    }

    /// Resolve the starting focus, load the starting draft and collect the
    /// panels' initial effects.
    #[must_use]
    pub fn init(mut self) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();
        for panel in self.panels_mut() {
            effects.extend(panel.init());
        }

        let current = self.drafts.current().clone();
        let mut live = LiveFields {
            header: &mut self.header,
            body: &mut self.body,
        };
        self.drafts.load_save(current, &mut live);
        if let Some(snapshot) = self.snapshot.take() {
            let handled = self.drafts.set_save(snapshot, &mut live);
            tracing::debug!(handled, "Offered resume snapshot");
        }

        if self.state == FocusState::Empty {
            self.state = self.initial;
        }
        self.apply_focus();

        tracing::info!(state = ?self.state, amend = self.drafts.amend(), "Composer started");
        (self, effects)
    }

    /// Process one event to completion.
    #[must_use]
    pub fn update(mut self, event: &Event) -> (Self, Vec<Effect>) {
        let mut effects = Vec::new();

        if let Some(press) = event.as_key()
            && self.handle_key(*press, event, &mut effects).is_break()
        {
            return (self, effects);
        }

        self.apply_focus();
        // Drafts swap once the focus flags for this pass are in place.
        let amend_toggle = matches!(
            event.as_key(),
            Some(press) if press.alt && !press.ctrl && press.key == Key::Char('a')
        );
        if amend_toggle {
            self.toggle_amend();
        }
        for panel in self.panels_mut() {
            effects.extend(panel.update(event));
        }
        (self, effects)
    }

    fn handle_key(
        &mut self,
        press: KeyPress,
        event: &Event,
        effects: &mut Vec<Effect>,
    ) -> ControlFlow<()> {
        match (press.alt, press.ctrl, press.key) {
            (true, false, Key::Char(c @ '1'..='4')) => {
                let target = match c {
                    '1' => FocusState::Author,
                    '2' => FocusState::Emoji,
                    '3' => FocusState::Summary,
                    _ => FocusState::Body,
                };
                if self.state == target {
                    return ControlFlow::Break(());
                }
                self.state = target;
            }
            (false, false, Key::Enter) => match self.state {
                FocusState::Emoji => {
                    effects.extend(self.header.update(event));
                    self.state = FocusState::Summary;
                }
                FocusState::Summary => self.state = FocusState::Body,
                _ => {}
            },
            (true, false, Key::Enter) => {
                self.result = self.build_result();
                if self.result.is_valid() {
                    self.result.commit = true;
                    tracing::info!(amend = self.result.amend, "Commit message finalized");
                    effects.push(Effect::Quit);
                    return ControlFlow::Break(());
                }
                tracing::debug!("Finalize ignored: empty summary");
            }
            (false, false, Key::Tab) => self.state = self.state.next(),
            (false, false, Key::BackTab) => self.state = self.state.previous(),
            (false, true, Key::Char('c')) => {
                self.result.commit = false;
                tracing::info!("Session cancelled");
                effects.push(Effect::Quit);
                return ControlFlow::Break(());
            }
            _ => {}
        }
        ControlFlow::Continue(())
    }

    /// Swap to the other mode's draft, keeping the live edits in the slot
    /// being left.
    fn toggle_amend(&mut self) {
        let before = self.header.amend();
        let mut live = LiveFields {
            header: &mut self.header,
            body: &mut self.body,
        };
        self.drafts.swap_save(&mut live);
        if self.header.amend() == before {
            self.header.set_amend(!before);
        }
        tracing::debug!(amend = self.header.amend(), "Toggled amend");
    }

    fn apply_focus(&mut self) {
        self.author.blur();
        self.author.expand = false;
        self.header.blur();
        self.header.expand = false;
        self.body.blur();
        self.body.compact = false;
        self.footer.blur();
        self.status.blur();

        match self.state {
            FocusState::Author => {
                self.author.focus();
                self.author.expand = true;
            }
            FocusState::Emoji => {
                self.header.focus();
                self.header.select_emoji();
                self.header.expand = true;
                self.body.compact = true;
            }
            FocusState::Summary => {
                self.header.focus();
                self.header.select_summary();
            }
            FocusState::Body => self.body.focus(),
            FocusState::Empty => {}
        }

        self.status
            .set_labels(self.state.next_label(), self.state.previous_label());
        self.footer.set_author(self.author.author().cloned());
    }

    fn build_result(&self) -> CommitResult {
        CommitResult {
            commit: false,
            amend: self.header.amend(),
            name: self.author.name().to_string(),
            email: self.author.email().to_string(),
            emoji: self.header.shortcode().to_string(),
            summary: self.header.summary().to_string(),
            body: self.body.value(),
            footer: self.footer.footer(),
        }
    }

    fn panels(&self) -> [(PanelId, &dyn Panel); 5] {
        [
            (PanelId::Author, &self.author),
            (PanelId::Header, &self.header),
            (PanelId::Body, &self.body),
            (PanelId::Footer, &self.footer),
            (PanelId::Status, &self.status),
        ]
    }

    fn panels_mut(&mut self) -> [&mut dyn Panel; 5] {
        [
            &mut self.author,
            &mut self.header,
            &mut self.body,
            &mut self.footer,
            &mut self.status,
        ]
    }

    #[must_use]
    pub fn panel_views(&self) -> Vec<PanelView> {
        self.panels()
            .into_iter()
            .map(|(id, panel)| PanelView {
                id,
                focused: panel.focused(),
                lines: panel.view(),
                cursor: panel.cursor(),
            })
            .collect()
    }

    /// All panels stacked vertically.
    #[must_use]
    pub fn view(&self) -> String {
        self.panels()
            .iter()
            .flat_map(|(_, panel)| panel.view())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[must_use]
    pub fn focus_state(&self) -> FocusState {
        self.state
    }

    #[must_use]
    pub fn result(&self) -> &CommitResult {
        &self.result
    }

    #[must_use]
    pub fn into_result(self) -> CommitResult {
        self.result
    }

    #[must_use]
    pub fn author(&self) -> &AuthorPanel {
        &self.author
    }

    #[must_use]
    pub fn header(&self) -> &HeaderPanel {
        &self.header
    }

    #[must_use]
    pub fn body(&self) -> &BodyPanel {
        &self.body
    }

    #[must_use]
    pub fn footer(&self) -> &FooterPanel {
        &self.footer
    }

    #[must_use]
    pub fn status(&self) -> &StatusPanel {
        &self.status
    }

    #[must_use]
    pub fn drafts(&self) -> &DraftManager {
        &self.drafts
    }
}
