//! Post editor overlay.
//!
//! Opens prefilled with the post's title and content. Saving sends only
//! the fields that changed; saving with no changes just closes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use postboard_core::api::{Post, PostPatch};
use postboard_core::feed::Action;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use super::OverlayUpdate;
use super::render_utils::{
    InputHint, InputLine, OverlayConfig, render_input_line, render_overlay, render_separator,
};
use crate::common::{apply_edit_key, sanitize_for_display};
use crate::effects::UiEffect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Title,
    Content,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditPostState {
    pub post_id: i64,
    original_title: String,
    original_content: String,
    pub title: String,
    pub content: String,
    pub focus: EditField,
}

impl EditPostState {
    pub fn open(post: &Post) -> Self {
        Self {
            post_id: post.post_id,
            original_title: post.title.clone(),
            original_content: post.content.clone(),
            title: post.title.clone(),
            content: post.content.clone(),
            focus: EditField::Title,
        }
    }

    /// Fields that differ from what the post had when the editor opened.
    pub fn patch(&self) -> PostPatch {
        PostPatch {
            title: (self.title != self.original_title).then(|| self.title.clone()),
            content: (self.content != self.original_content).then(|| self.content.clone()),
        }
    }

    fn focused_mut(&mut self) -> &mut String {
        match self.focus {
            EditField::Title => &mut self.title,
            EditField::Content => &mut self.content,
        }
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            EditField::Title => EditField::Content,
            EditField::Content => EditField::Title,
        };
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> OverlayUpdate {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => OverlayUpdate::close(),
            KeyCode::Char('s') if ctrl => {
                let patch = self.patch();
                if patch.is_empty() {
                    return OverlayUpdate::close();
                }
                OverlayUpdate::close().with_ui_effects(vec![UiEffect::Perform(
                    Action::EditPost {
                        id: self.post_id,
                        patch,
                    },
                )])
            }
            KeyCode::Tab | KeyCode::BackTab => {
                self.toggle_focus();
                OverlayUpdate::stay()
            }
            KeyCode::Enter if self.focus == EditField::Title => {
                self.focus = EditField::Content;
                OverlayUpdate::stay()
            }
            _ => {
                let multiline = self.focus == EditField::Content;
                apply_edit_key(self.focused_mut(), key, multiline);
                OverlayUpdate::stay()
            }
        }
    }

    pub fn handle_paste(&mut self, text: &str) {
        match self.focus {
            EditField::Title => self.title.push_str(&text.replace(['\r', '\n'], " ")),
            EditField::Content => self.content.push_str(&text.replace('\r', "")),
        }
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let hints = [
            InputHint::new("Tab", "switch field"),
            InputHint::new("Ctrl+S", "save"),
            InputHint::new("Esc", "cancel"),
        ];
        let layout = render_overlay(
            frame,
            area,
            &OverlayConfig {
                title: "Edit Post",
                border_color: Color::Cyan,
                width: 70,
                height: 16,
                hints: &hints,
            },
        );
        let body = layout.body;

        render_input_line(
            frame,
            Rect::new(body.x, body.y, body.width, 1),
            &InputLine {
                value: &sanitize_for_display(&self.title),
                prompt: "Title: ",
                focused: self.focus == EditField::Title,
                accent: Color::Cyan,
            },
        );
        render_separator(frame, body, 1);

        let content_area = Rect::new(
            body.x,
            body.y + 2,
            body.width,
            body.height.saturating_sub(3),
        );
        let mut lines: Vec<Line> = sanitize_for_display(&self.content)
            .split('\n')
            .map(|line| Line::from(line.to_string()))
            .collect();
        if self.focus == EditField::Content
            && let Some(last) = lines.last_mut()
        {
            last.push_span(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: false }),
            content_area,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::overlays::OverlayTransition;

    fn post() -> Post {
        Post {
            post_id: 9,
            title: "Old".to_string(),
            content: "Body".to_string(),
            likes_count: 0,
            user_id: None,
            created_at: None,
            updated_at: None,
        }
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn save() -> KeyEvent {
        KeyEvent::new(KeyCode::Char('s'), KeyModifiers::CONTROL)
    }

    #[test]
    fn test_save_sends_only_changed_fields() {
        let mut state = EditPostState::open(&post());
        state.handle_key(key(KeyCode::Char('!')));

        let update = state.handle_key(save());

        assert_eq!(update.transition, OverlayTransition::Close);
        assert_eq!(
            update.effects,
            vec![UiEffect::Perform(Action::EditPost {
                id: 9,
                patch: PostPatch {
                    title: Some("Old!".to_string()),
                    content: None,
                },
            })]
        );
    }

    #[test]
    fn test_save_without_changes_just_closes() {
        let mut state = EditPostState::open(&post());
        let update = state.handle_key(save());
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.effects.is_empty());
    }

    #[test]
    fn test_enter_moves_to_content_then_inserts_newline() {
        let mut state = EditPostState::open(&post());
        state.handle_key(key(KeyCode::Enter));
        assert_eq!(state.focus, EditField::Content);

        state.handle_key(key(KeyCode::Enter));
        state.handle_key(key(KeyCode::Char('x')));
        assert_eq!(state.content, "Body\nx");
    }

    #[test]
    fn test_esc_discards_changes() {
        let mut state = EditPostState::open(&post());
        state.handle_key(key(KeyCode::Backspace));
        let update = state.handle_key(key(KeyCode::Esc));
        assert_eq!(update.transition, OverlayTransition::Close);
        assert!(update.effects.is_empty());
    }
}
