//! Runtime execution modes.
//!
//! - `tui`: Full-screen interactive terminal UI (optional feature)

#[cfg(feature = "tui")]
pub use postboard_tui::run_interactive;

#[cfg(not(feature = "tui"))]
pub async fn run_interactive(_config: &postboard_core::config::Config) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
