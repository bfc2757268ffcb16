//! Signed-out screen: login form with Login and Register buttons.

mod render;
mod state;
mod update;

pub use render::render_auth;
pub use state::{AuthFocus, AuthState};
pub use update::{handle_auth_key, handle_auth_paste};
