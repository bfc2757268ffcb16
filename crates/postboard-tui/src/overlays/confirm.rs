//! Delete confirmation dialog.

use crossterm::event::{KeyCode, KeyEvent};
use postboard_core::feed::PendingDelete;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};
use crate::common::sanitize_for_display;
use crate::effects::UiEffect;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmDeleteState {
    pub pending: PendingDelete,
}

impl ConfirmDeleteState {
    pub fn open(pending: PendingDelete) -> Self {
        Self { pending }
    }

    /// `y`/Enter sends the delete; `n`/Esc closes without any effect.
    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Char('y' | 'Y') | KeyCode::Enter => OverlayUpdate::close()
                .with_ui_effects(vec![UiEffect::Perform(self.pending.clone().confirm())]),
            KeyCode::Char('n' | 'N') | KeyCode::Esc => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("y", "delete"), InputHint::new("n", "cancel")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Delete Post",
                border_color: Color::Yellow,
                width: 56,
                height: 7,
                hints: &hints,
            },
        );

        let body = Paragraph::new(sanitize_for_display(&self.pending.prompt()))
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, layout.body);
    }
}
