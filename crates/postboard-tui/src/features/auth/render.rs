use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use super::AuthFocus;
use crate::common::mask;
use crate::overlays::render_utils::{
    InputHint, InputLine, calculate_overlay_area, render_hints, render_input_line,
};
use crate::state::TuiState;

const FORM_WIDTH: u16 = 44;
const FORM_HEIGHT: u16 = 10;

pub fn render_auth(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let form = calculate_overlay_area(area, FORM_WIDTH, FORM_HEIGHT);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(" Postboard ")
        .title_alignment(Alignment::Center);
    let inner = block.inner(form);
    frame.render_widget(block, form);

    let focus = tui.auth.focus;
    let creds = &tui.feed.credentials;
    let row = |offset: u16| Rect::new(inner.x + 1, inner.y + offset, inner.width.saturating_sub(2), 1);

    render_input_line(
        frame,
        row(1),
        &InputLine {
            value: &creds.login,
            prompt: "Login:    ",
            focused: focus == AuthFocus::Login,
            accent: Color::Cyan,
        },
    );
    render_input_line(
        frame,
        row(3),
        &InputLine {
            value: &mask(&creds.password),
            prompt: "Password: ",
            focused: focus == AuthFocus::Password,
            accent: Color::Cyan,
        },
    );

    let buttons = Line::from(vec![
        button("Login", focus == AuthFocus::LoginButton),
        Span::raw("   "),
        button("Register", focus == AuthFocus::RegisterButton),
    ]);
    frame.render_widget(
        Paragraph::new(buttons).alignment(Alignment::Center),
        row(5),
    );

    if tui.is_signing_in() {
        frame.render_widget(
            Paragraph::new(Span::styled("Signing in…", Style::default().fg(Color::DarkGray)))
                .alignment(Alignment::Center),
            row(6),
        );
    }

    let hints_area = Rect::new(area.x, form.y + form.height, area.width, 1);
    render_hints(
        frame,
        hints_area,
        &[
            InputHint::new("Tab", "next"),
            InputHint::new("Enter", "submit"),
            InputHint::new("Esc", "quit"),
        ],
        Color::Cyan,
    );
}

fn button(label: &str, focused: bool) -> Span<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Cyan)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Cyan)
    };
    Span::styled(format!("[ {label} ]"), style)
}
