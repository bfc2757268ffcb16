use crossterm::event::{KeyCode, KeyEvent};
use postboard_core::feed::Action;

use super::AuthFocus;
use crate::common::apply_edit_key;
use crate::effects::UiEffect;
use crate::state::TuiState;

/// Handles a key on the signed-out screen.
///
/// Enter submits a login, or a registration when the Register button has
/// focus. Submissions are ignored while another sign-in is in flight.
pub fn handle_auth_key(tui: &mut TuiState, key: KeyEvent) -> Vec<UiEffect> {
    match key.code {
        KeyCode::Esc => vec![UiEffect::Quit],
        KeyCode::Tab | KeyCode::Down => {
            tui.auth.focus = tui.auth.focus.next();
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            tui.auth.focus = tui.auth.focus.prev();
            vec![]
        }
        KeyCode::Enter => {
            if tui.is_signing_in() {
                return vec![];
            }
            let creds = &tui.feed.credentials;
            let action = if tui.auth.focus == AuthFocus::RegisterButton {
                Action::register(&creds.login, &creds.password, &tui.register)
            } else {
                Action::login(&creds.login, &creds.password)
            };
            vec![UiEffect::Perform(action)]
        }
        _ => {
            if let Some(field) = focused_field(tui) {
                apply_edit_key(field, key, false);
            }
            vec![]
        }
    }
}

pub fn handle_auth_paste(tui: &mut TuiState, text: &str) {
    if let Some(field) = focused_field(tui) {
        field.push_str(text.trim_end_matches(['\r', '\n']));
    }
}

fn focused_field(tui: &mut TuiState) -> Option<&mut String> {
    match tui.auth.focus {
        AuthFocus::Login => Some(&mut tui.feed.credentials.login),
        AuthFocus::Password => Some(&mut tui.feed.credentials.password),
        AuthFocus::LoginButton | AuthFocus::RegisterButton => None,
    }
}
