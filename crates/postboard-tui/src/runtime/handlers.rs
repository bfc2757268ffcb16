//! Effect handlers: the I/O behind each `UiEffect`.

use postboard_core::api::ApiClient;
use postboard_core::feed::{self, Action};
use postboard_core::session::TokenStore;

use crate::events::UiEvent;

/// Runs an action and reports back. The failure cause was logged by
/// `feed::perform`; only the notice travels to the reducer.
pub async fn perform_action(api: ApiClient, action: Action) -> UiEvent {
    let result = feed::perform(&api, &action)
        .await
        .map_err(|failed| failed.notice);
    UiEvent::ActionFinished { action, result }
}

pub fn persist_token(store: &TokenStore, token: &str) {
    if let Err(err) = store.save(token) {
        tracing::warn!(error = format!("{err:#}"), "failed to persist session token");
    }
}

pub fn clear_token(store: &TokenStore) {
    if let Err(err) = store.clear() {
        tracing::warn!(error = format!("{err:#}"), "failed to remove session token");
    }
}
