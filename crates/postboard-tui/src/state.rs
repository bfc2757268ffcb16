//! TUI state.
//!
//! `AppState` splits the screen state (`TuiState`) from the active modal
//! (`overlay`) so overlay handlers can borrow the rest of the state.

use std::collections::VecDeque;

use postboard_core::config::RegisterConfig;
use postboard_core::feed::FeedState;

use crate::auth::AuthState;
use crate::overlays::Overlay;
use crate::posts::PostsState;

pub struct AppState {
    pub tui: TuiState,
    pub overlay: Option<Overlay>,
}

impl AppState {
    pub fn new(token: Option<String>, register: RegisterConfig) -> Self {
        Self {
            tui: TuiState::new(token, register),
            overlay: None,
        }
    }
}

pub struct TuiState {
    pub should_quit: bool,
    pub feed: FeedState,
    pub auth: AuthState,
    pub posts: PostsState,
    /// Profile fields used to fill registration bodies.
    pub register: RegisterConfig,
    /// Actions spawned and not yet finished.
    pub pending: usize,
    /// Login and registration requests not yet finished.
    pub signing_in: usize,
    /// Notices waiting for the current overlay to close.
    pub queued_notices: VecDeque<&'static str>,
    pub spinner_frame: usize,
}

impl TuiState {
    pub fn new(token: Option<String>, register: RegisterConfig) -> Self {
        Self {
            should_quit: false,
            feed: FeedState::new(token),
            auth: AuthState::default(),
            posts: PostsState::default(),
            register,
            pending: 0,
            signing_in: 0,
            queued_notices: VecDeque::new(),
            spinner_frame: 0,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.pending > 0
    }

    pub fn is_signing_in(&self) -> bool {
        self.signing_in > 0
    }
}
