//! Overlay modules for the TUI.
//!
//! Overlays are modal components that take over keyboard input while open.
//! Each one owns its state, key handler, and render function.
//!
//! - `confirm.rs`: delete confirmation
//! - `edit.rs`: post editor
//! - `notice.rs`: blocking failure notice
//! - `render_utils.rs`: shared rendering helpers

pub mod confirm;
pub mod edit;
pub mod notice;
pub mod render_utils;

pub use confirm::ConfirmDeleteState;
use crossterm::event::KeyEvent;
pub use edit::EditPostState;
pub use notice::NoticeState;
use ratatui::Frame;
use ratatui::layout::Rect;

use crate::effects::UiEffect;

/// Transition returned by overlay key handlers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OverlayTransition {
    Stay,
    Close,
}

/// Update returned by overlay key handlers.
#[derive(Debug)]
pub struct OverlayUpdate {
    pub transition: OverlayTransition,
    pub effects: Vec<UiEffect>,
}

impl OverlayUpdate {
    fn new(transition: OverlayTransition) -> Self {
        Self {
            transition,
            effects: Vec::new(),
        }
    }

    pub fn stay() -> Self {
        Self::new(OverlayTransition::Stay)
    }

    pub fn close() -> Self {
        Self::new(OverlayTransition::Close)
    }

    #[must_use]
    pub fn with_ui_effects(mut self, effects: Vec<UiEffect>) -> Self {
        self.effects = effects;
        self
    }
}

#[derive(Debug)]
pub enum Overlay {
    ConfirmDelete(ConfirmDeleteState),
    EditPost(EditPostState),
    Notice(NoticeState),
}

impl Overlay {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        match self {
            Overlay::ConfirmDelete(c) => c.render(frame, area),
            Overlay::EditPost(e) => e.render(frame, area),
            Overlay::Notice(n) => n.render(frame, area),
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match self {
            Overlay::ConfirmDelete(c) => c.handle_key(key),
            Overlay::EditPost(e) => e.handle_key(key),
            Overlay::Notice(n) => n.handle_key(key),
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        if let Overlay::EditPost(e) = self {
            e.handle_paste(text);
        }
    }
}

/// Extension trait for `Option<Overlay>` providing convenience render helpers.
pub trait OverlayExt {
    fn render(&self, frame: &mut Frame, area: Rect);
}

impl OverlayExt for Option<Overlay> {
    fn render(&self, frame: &mut Frame, area: Rect) {
        if let Some(overlay) = self {
            overlay.render(frame, area);
        }
    }
}
