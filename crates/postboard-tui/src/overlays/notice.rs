//! Blocking notice shown when an action fails.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{InputHint, OverlayConfig, render_overlay};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoticeState {
    pub message: &'static str,
}

impl NoticeState {
    pub fn open(message: &'static str) -> Self {
        Self { message }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        match key.code {
            KeyCode::Enter | KeyCode::Esc | KeyCode::Char(' ') => OverlayUpdate::close(),
            _ => OverlayUpdate::stay(),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [InputHint::new("Enter", "dismiss")];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Error",
                border_color: Color::Red,
                width: 56,
                height: 6,
                hints: &hints,
            },
        );

        let body = Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true });
        frame.render_widget(body, layout.body);
    }
}

#[cfg(test)]
mod tests {
    use crossterm::event::KeyModifiers;

    use super::*;
    use crate::overlays::OverlayTransition;

    #[test]
    fn test_only_dismiss_keys_close() {
        let mut notice = NoticeState::open("Like failed");
        let stay = notice.handle_key(KeyEvent::new(KeyCode::Char('l'), KeyModifiers::NONE));
        assert_eq!(stay.transition, OverlayTransition::Stay);

        let close = notice.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert_eq!(close.transition, OverlayTransition::Close);
        assert!(close.effects.is_empty());
    }
}
