//! Full-screen TUI for Postboard.

pub mod common;
pub mod effects;
pub mod events;
pub mod features;
pub mod overlays;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stderr};

use anyhow::Result;
pub use features::{auth, posts};
use postboard_core::api::{ApiClient, ApiConfig};
use postboard_core::config::Config;
use postboard_core::session::TokenStore;
pub use runtime::TuiRuntime;

/// Runs the interactive feed until the user quits.
///
/// # Errors
/// Returns an error if stderr is not a terminal, the base URL is invalid,
/// or the terminal cannot be driven.
pub async fn run_interactive(config: &Config) -> Result<()> {
    if !stderr().is_terminal() {
        anyhow::bail!(
            "Interactive mode requires a terminal.\n\
             Use `postboard posts list` for non-interactive use."
        );
    }

    let store = TokenStore::default_location();
    let token = store.load().unwrap_or_else(|err| {
        tracing::warn!(error = format!("{err:#}"), "ignoring unreadable session file");
        None
    });

    let api = ApiClient::new(ApiConfig::from_config(config)?)?.with_token(token);
    tracing::info!(base_url = api.base_url(), "starting interactive session");

    let mut runtime = TuiRuntime::new(config, api, store)?;
    runtime.run()
}
