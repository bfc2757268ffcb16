//! UI effect types.
//!
//! Effects are commands returned by the reducer that the runtime executes.
//! The reducer never performs I/O or spawns tasks itself.

use postboard_core::feed::Action;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UiEffect {
    /// Quit the application.
    Quit,

    /// Run an action against the API in the background.
    Perform(Action),

    /// Write the session token to disk and attach it to the client.
    PersistToken { token: String },

    /// Remove the session token from disk and from the client.
    ClearToken,
}
