//! TUI reducer (update function).
//!
//! All state mutations happen here. The runtime calls `update(app, event)`
//! and executes the returned effects.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use postboard_core::feed::{Action, Outcome, View};

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::overlays::{NoticeState, Overlay, OverlayTransition};
use crate::state::AppState;
use crate::{auth, posts};

/// Effects to run once before the first frame.
///
/// A persisted session goes straight to the list and the profile.
pub fn startup(app: &mut AppState) -> Vec<UiEffect> {
    let effects = if app.tui.feed.is_authenticated() {
        signed_in_effects()
    } else {
        vec![]
    };
    track_pending(app, &effects);
    effects
}

/// The main reducer function.
pub fn update(app: &mut AppState, event: UiEvent) -> Vec<UiEffect> {
    let effects = match event {
        UiEvent::Tick => {
            app.tui.spinner_frame = app.tui.spinner_frame.wrapping_add(1);
            vec![]
        }
        UiEvent::Terminal(term_event) => handle_terminal_event(app, term_event),
        UiEvent::ActionFinished { action, result } => {
            app.tui.pending = app.tui.pending.saturating_sub(1);
            if action.signs_in() {
                app.tui.signing_in = app.tui.signing_in.saturating_sub(1);
            }
            handle_action_finished(app, action, result)
        }
    };
    track_pending(app, &effects);
    effects
}

fn track_pending(app: &mut AppState, effects: &[UiEffect]) {
    for effect in effects {
        if let UiEffect::Perform(action) = effect {
            app.tui.pending += 1;
            if action.signs_in() {
                app.tui.signing_in += 1;
            }
        }
    }
}

fn signed_in_effects() -> Vec<UiEffect> {
    vec![
        UiEffect::Perform(Action::ListPosts),
        UiEffect::Perform(Action::WhoAmI),
    ]
}

fn handle_terminal_event(app: &mut AppState, event: Event) -> Vec<UiEffect> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => handle_key(app, key),
        Event::Paste(text) => {
            handle_paste(app, &text);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(app: &mut AppState, key: KeyEvent) -> Vec<UiEffect> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![UiEffect::Quit];
    }

    if let Some(overlay) = app.overlay.as_mut() {
        let update = overlay.handle_key(key);
        if update.transition == OverlayTransition::Close {
            app.overlay = None;
            show_next_notice(app);
        }
        return update.effects;
    }

    match app.tui.feed.view() {
        View::SignedOut => auth::handle_auth_key(&mut app.tui, key),
        View::SignedIn => posts::handle_posts_key(app, key),
    }
}

fn handle_paste(app: &mut AppState, text: &str) {
    if let Some(overlay) = app.overlay.as_mut() {
        overlay.handle_paste(text);
        return;
    }
    match app.tui.feed.view() {
        View::SignedOut => auth::handle_auth_paste(&mut app.tui, text),
        View::SignedIn => posts::handle_posts_paste(app, text),
    }
}

fn handle_action_finished(
    app: &mut AppState,
    action: Action,
    result: Result<Outcome, &'static str>,
) -> Vec<UiEffect> {
    // Results of requests sent before a logout no longer apply.
    if !action.signs_in() && !app.tui.feed.is_authenticated() {
        tracing::debug!(action = action.name(), "dropping result after logout");
        return vec![];
    }

    match result {
        Ok(Outcome::SignedIn { token }) => {
            app.tui.feed.sign_in(token.clone());
            app.tui.auth = auth::AuthState::default();
            app.tui.posts.reset();
            let mut effects = vec![UiEffect::PersistToken { token }];
            effects.extend(signed_in_effects());
            effects
        }
        Ok(outcome) => {
            app.tui.feed.apply(&action, outcome);
            app.tui.posts.clamp(app.tui.feed.posts().len());
            if matches!(action, Action::CreatePost(_)) {
                app.tui.posts.focus = posts::PostsFocus::List;
            }
            vec![]
        }
        // Profile loads are not user-initiated; the failure is already logged.
        Err(_) if matches!(action, Action::WhoAmI) => vec![],
        Err(notice) => {
            show_notice(app, notice);
            vec![]
        }
    }
}

fn show_notice(app: &mut AppState, notice: &'static str) {
    if app.overlay.is_some() {
        app.tui.queued_notices.push_back(notice);
    } else {
        app.overlay = Some(Overlay::Notice(NoticeState::open(notice)));
    }
}

fn show_next_notice(app: &mut AppState) {
    if let Some(notice) = app.tui.queued_notices.pop_front() {
        app.overlay = Some(Overlay::Notice(NoticeState::open(notice)));
    }
}
