use postboard_core::api::Post;
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::PostsFocus;
use crate::common::{sanitize_for_display, truncate_with_ellipsis};
use crate::overlays::render_utils::{InputHint, InputLine, render_hints, render_input_line};
use crate::state::TuiState;

const COMPOSE_HEIGHT: u16 = 7;

/// Spinner frames shown while requests are in flight.
const SPINNER_FRAMES: &[&str] = &["◐", "◓", "◑", "◒"];

/// Content lines shown per post card before truncating.
const MAX_CONTENT_LINES: usize = 3;

pub fn render_posts(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(COMPOSE_HEIGHT),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    render_header(frame, chunks[0], tui);
    render_compose(frame, chunks[1], tui);
    render_list(frame, chunks[2], tui);
    render_hints(frame, chunks[3], &hints(tui.posts.focus), Color::Cyan);
}

fn render_header(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let mut spans = vec![Span::styled(
        " Posts",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];
    if let Some(profile) = &tui.feed.profile {
        spans.push(Span::styled(
            format!("  · {}", profile.login),
            Style::default().fg(Color::DarkGray),
        ));
    }
    if tui.is_busy() {
        let frame_str = SPINNER_FRAMES[tui.spinner_frame % SPINNER_FRAMES.len()];
        spans.push(Span::styled(
            format!("  {frame_str}"),
            Style::default().fg(Color::Yellow),
        ));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_compose(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let focus = tui.posts.focus;
    let border = if focus.is_compose() {
        Color::Cyan
    } else {
        Color::DarkGray
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(" New post ");
    let inner = block.inner(area);
    frame.render_widget(block, area);
    if inner.height == 0 {
        return;
    }

    let draft = &tui.feed.draft;
    render_input_line(
        frame,
        Rect::new(inner.x, inner.y, inner.width, 1),
        &InputLine {
            value: &sanitize_for_display(&draft.title),
            prompt: "Title: ",
            focused: focus == PostsFocus::ComposeTitle,
            accent: Color::Cyan,
        },
    );

    let content_area = Rect::new(
        inner.x,
        inner.y + 1,
        inner.width,
        inner.height.saturating_sub(1),
    );
    let mut lines: Vec<Line> = sanitize_for_display(&draft.content)
        .split('\n')
        .map(|line| Line::from(line.to_string()))
        .collect();
    if focus == PostsFocus::ComposeContent {
        if let Some(last) = lines.last_mut() {
            last.push_span(Span::styled("█", Style::default().fg(Color::Cyan)));
        }
    } else if draft.content.is_empty() {
        lines = vec![Line::from(Span::styled(
            "What's on your mind?",
            Style::default().fg(Color::DarkGray),
        ))];
    }
    // Keep the tail (where the cursor is) visible.
    let visible = content_area.height as usize;
    let skip = lines.len().saturating_sub(visible);
    let lines: Vec<Line> = lines.into_iter().skip(skip).collect();
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: false }),
        content_area,
    );
}

fn render_list(frame: &mut Frame, area: Rect, tui: &TuiState) {
    let posts = tui.feed.posts();
    if posts.is_empty() {
        let message = if tui.is_busy() {
            "Loading posts…"
        } else {
            "No posts yet. Press Tab to write one."
        };
        frame.render_widget(
            Paragraph::new(Span::styled(message, Style::default().fg(Color::DarkGray))),
            Rect::new(area.x + 1, area.y + 1, area.width.saturating_sub(2), 1),
        );
        return;
    }

    let width = area.width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = posts.iter().map(|post| post_card(post, width)).collect();
    let highlight = if tui.posts.focus == PostsFocus::List {
        Style::default().bg(Color::Rgb(40, 40, 40))
    } else {
        Style::default()
    };
    let list = List::new(items)
        .highlight_style(highlight)
        .highlight_symbol("▌ ");
    let mut state = ListState::default().with_selected(Some(tui.posts.selected()));
    frame.render_stateful_widget(list, area, &mut state);
}

fn post_card(post: &Post, width: usize) -> ListItem<'static> {
    let mut lines = vec![Line::from(Span::styled(
        truncate_with_ellipsis(&sanitize_for_display(&post.title), width),
        Style::default().add_modifier(Modifier::BOLD),
    ))];

    let content = sanitize_for_display(&post.content);
    let content_lines: Vec<&str> = content.lines().collect();
    for line in content_lines.iter().take(MAX_CONTENT_LINES) {
        lines.push(Line::from(truncate_with_ellipsis(line, width)));
    }
    if content_lines.len() > MAX_CONTENT_LINES {
        lines.push(Line::from(Span::styled(
            "…",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let mut meta = format!("👍 {}", post.likes_count);
    if let Some(created) = post.created_display() {
        meta.push_str(&format!("  · {created}"));
    }
    lines.push(Line::from(Span::styled(
        meta,
        Style::default().fg(Color::DarkGray),
    )));
    lines.push(Line::default());

    ListItem::new(Text::from(lines))
}

fn hints(focus: PostsFocus) -> Vec<InputHint<'static>> {
    if focus.is_compose() {
        vec![
            InputHint::new("Ctrl+S", "post"),
            InputHint::new("Tab", "next field"),
            InputHint::new("Esc", "back"),
        ]
    } else {
        vec![
            InputHint::new("↑↓", "select"),
            InputHint::new("l/u", "like/unlike"),
            InputHint::new("e", "edit"),
            InputHint::new("d", "delete"),
            InputHint::new("r", "refresh"),
            InputHint::new("Tab", "compose"),
            InputHint::new("Ctrl+O", "logout"),
            InputHint::new("q", "quit"),
        ]
    }
}
