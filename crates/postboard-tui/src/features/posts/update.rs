use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use postboard_core::feed::{Action, PendingDelete};

use super::PostsFocus;
use crate::common::apply_edit_key;
use crate::effects::UiEffect;
use crate::overlays::{ConfirmDeleteState, EditPostState, Overlay};
use crate::state::AppState;

/// Handles a key on the signed-in screen.
pub fn handle_posts_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    if ctrl && key.code == KeyCode::Char('o') {
        return logout(app);
    }

    if app.tui.posts.focus.is_compose() {
        return handle_compose_key(app, key);
    }

    let tui = &mut app.tui;
    let selected = tui.feed.posts().get(tui.posts.selected()).cloned();
    match key.code {
        KeyCode::Char('q') => vec![UiEffect::Quit],
        KeyCode::Up | KeyCode::Char('k') => {
            tui.posts.select_prev();
            vec![]
        }
        KeyCode::Down | KeyCode::Char('j') => {
            tui.posts.select_next(tui.feed.posts().len());
            vec![]
        }
        KeyCode::Tab | KeyCode::Char('n') => {
            tui.posts.focus = PostsFocus::ComposeTitle;
            vec![]
        }
        KeyCode::Char('r') => vec![UiEffect::Perform(Action::ListPosts)],
        KeyCode::Char('l') => selected
            .map(|post| vec![UiEffect::Perform(Action::Like { id: post.post_id })])
            .unwrap_or_default(),
        KeyCode::Char('u') => selected
            .map(|post| vec![UiEffect::Perform(Action::Unlike { id: post.post_id })])
            .unwrap_or_default(),
        KeyCode::Char('d') => {
            if let Some(post) = selected {
                app.overlay = Some(Overlay::ConfirmDelete(ConfirmDeleteState::open(
                    PendingDelete::for_post(&post),
                )));
            }
            vec![]
        }
        KeyCode::Char('e') => {
            if let Some(post) = selected {
                app.overlay = Some(Overlay::EditPost(EditPostState::open(&post)));
            }
            vec![]
        }
        _ => vec![],
    }
}

fn handle_compose_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
    let tui = &mut app.tui;
    match key.code {
        KeyCode::Esc => {
            tui.posts.focus = PostsFocus::List;
            vec![]
        }
        KeyCode::Char('s') if ctrl => {
            let draft = &tui.feed.draft;
            vec![UiEffect::Perform(Action::create_post(
                &draft.title,
                &draft.content,
            ))]
        }
        KeyCode::Tab => {
            tui.posts.focus = match tui.posts.focus {
                PostsFocus::ComposeTitle => PostsFocus::ComposeContent,
                PostsFocus::ComposeContent | PostsFocus::List => PostsFocus::List,
            };
            vec![]
        }
        KeyCode::BackTab => {
            tui.posts.focus = match tui.posts.focus {
                PostsFocus::ComposeContent => PostsFocus::ComposeTitle,
                PostsFocus::ComposeTitle | PostsFocus::List => PostsFocus::List,
            };
            vec![]
        }
        KeyCode::Enter if tui.posts.focus == PostsFocus::ComposeTitle => {
            tui.posts.focus = PostsFocus::ComposeContent;
            vec![]
        }
        _ => {
            match tui.posts.focus {
                PostsFocus::ComposeTitle => {
                    apply_edit_key(&mut tui.feed.draft.title, key, false);
                }
                PostsFocus::ComposeContent => {
                    apply_edit_key(&mut tui.feed.draft.content, key, true);
                }
                PostsFocus::List => {}
            }
            vec![]
        }
    }
}

pub fn handle_posts_paste(app: &mut AppState, text: &str) {
    let draft = &mut app.tui.feed.draft;
    match app.tui.posts.focus {
        PostsFocus::ComposeTitle => draft.title.push_str(&text.replace(['\r', '\n'], " ")),
        PostsFocus::ComposeContent => draft.content.push_str(&text.replace('\r', "")),
        PostsFocus::List => {}
    }
}

/// Signs out locally: drops the token, the list, and any open overlay.
pub fn logout(app: &mut AppState) -> Vec<UiEffect> {
    app.tui.feed.sign_out();
    app.tui.feed.draft.clear();
    app.tui.posts.reset();
    app.tui.queued_notices.clear();
    app.overlay = None;
    vec![UiEffect::ClearToken]
}
