//! CLI command handlers.

pub mod auth;
pub mod config;
pub mod posts;

use std::io::{self, BufRead, Write};

use anyhow::{Context, Result};
use postboard_core::api::{ApiClient, ApiConfig};
use postboard_core::config::Config;
use postboard_core::feed::{self, Action, Outcome};
use postboard_core::session::TokenStore;

/// API client plus the token store it was primed from.
pub struct Session {
    pub api: ApiClient,
    pub store: TokenStore,
}

impl Session {
    pub fn open(config: &Config) -> Result<Self> {
        let store = TokenStore::default_location();
        let token = store.load()?;
        let api = ApiClient::new(ApiConfig::from_config(config)?)?.with_token(token);
        tracing::debug!(
            base_url = api.base_url(),
            signed_in = api.token().is_some(),
            "session opened"
        );
        Ok(Self { api, store })
    }

    /// Fails unless a session token is stored.
    pub fn require_login(&self) -> Result<()> {
        if self.api.token().is_none() {
            anyhow::bail!("Not logged in. Run `postboard login -l <LOGIN>` first.");
        }
        Ok(())
    }

    pub async fn perform(&self, action: &Action) -> Result<Outcome> {
        Ok(feed::perform(&self.api, action).await?)
    }
}

/// Prints `question [y/N]` and reads one line from stdin.
pub fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut response = String::new();
    io::stdin()
        .lock()
        .read_line(&mut response)
        .context("read confirmation")?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
