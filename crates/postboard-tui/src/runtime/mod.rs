//! TUI runtime - owns terminal, runs event loop, executes effects.
//!
//! All side effects happen here; the reducer stays pure.
//!
//! ## Inbox Pattern
//!
//! Spawned handlers send their `UiEvent` to `inbox_tx`; the runtime drains
//! `inbox_rx` every loop iteration.

mod handlers;

use std::future::Future;
use std::io::Stdout;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event;
use postboard_core::api::ApiClient;
use postboard_core::config::Config;
use postboard_core::interrupt;
use postboard_core::session::TokenStore;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tokio::sync::mpsc;

use crate::effects::UiEffect;
use crate::events::UiEvent;
use crate::state::AppState;
use crate::{render, terminal, update};

/// Tick interval while requests are in flight (spinner animation).
pub const FRAME_DURATION: Duration = Duration::from_millis(50);

/// Tick interval when idle.
pub const IDLE_POLL_DURATION: Duration = Duration::from_millis(250);

/// Full-screen TUI runtime.
///
/// Terminal state is restored on drop, panic, or a second Ctrl+C.
pub struct TuiRuntime {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    pub state: AppState,
    api: ApiClient,
    store: TokenStore,
    inbox_tx: mpsc::UnboundedSender<UiEvent>,
    inbox_rx: mpsc::UnboundedReceiver<UiEvent>,
    last_tick: Instant,
}

impl TuiRuntime {
    /// Creates the runtime and takes over the terminal.
    ///
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new(config: &Config, api: ApiClient, store: TokenStore) -> Result<Self> {
        terminal::install_panic_hook();
        interrupt::set_restore_hook(|| {
            let _ = terminal::restore_terminal();
        });
        if let Err(err) = interrupt::init() {
            tracing::debug!(error = format!("{err:#}"), "Ctrl+C handler not installed");
        }
        interrupt::reset();

        let terminal = terminal::setup_terminal().context("Failed to setup terminal")?;

        let state = AppState::new(api.token().map(str::to_string), config.register.clone());
        let (inbox_tx, inbox_rx) = mpsc::unbounded_channel();

        Ok(Self {
            terminal,
            state,
            api,
            store,
            inbox_tx,
            inbox_rx,
            last_tick: Instant::now(),
        })
    }

    /// Runs the main event loop until the user quits.
    ///
    /// # Errors
    /// Returns an error if drawing or reading terminal events fails.
    pub fn run(&mut self) -> Result<()> {
        terminal::enable_input_features()?;

        let effects = update::startup(&mut self.state);
        self.execute_effects(effects);
        let result = self.event_loop();

        let _ = terminal::disable_input_features();
        result
    }

    fn event_loop(&mut self) -> Result<()> {
        let mut dirty = true;

        while !self.state.tui.should_quit {
            if interrupt::is_interrupted() {
                self.state.tui.should_quit = true;
                break;
            }

            for event in self.collect_events()? {
                dirty = true;
                let effects = update::update(&mut self.state, event);
                self.execute_effects(effects);
            }

            if dirty {
                self.terminal.draw(|frame| {
                    render::render(&self.state, frame);
                })?;
                dirty = false;
            }
        }

        Ok(())
    }

    /// Collects inbox results, terminal input, and the tick.
    fn collect_events(&mut self) -> Result<Vec<UiEvent>> {
        let mut events = Vec::new();

        let tick_interval = if self.state.tui.is_busy() {
            FRAME_DURATION
        } else {
            IDLE_POLL_DURATION
        };

        while let Ok(ev) = self.inbox_rx.try_recv() {
            events.push(ev);
        }

        // Don't block when there is already work to process.
        let poll_duration = if events.is_empty() {
            tick_interval.saturating_sub(self.last_tick.elapsed())
        } else {
            Duration::ZERO
        };

        if event::poll(poll_duration)? {
            events.push(UiEvent::Terminal(event::read()?));
            while event::poll(Duration::ZERO)? {
                events.push(UiEvent::Terminal(event::read()?));
            }
        }

        if self.last_tick.elapsed() >= tick_interval {
            events.push(UiEvent::Tick);
            self.last_tick = Instant::now();
        }

        Ok(events)
    }

    fn execute_effects(&mut self, effects: Vec<UiEffect>) {
        for effect in effects {
            self.execute_effect(effect);
        }
    }

    /// Spawns an async handler whose result lands in the inbox.
    fn spawn_effect<F, Fut>(&self, f: F)
    where
        F: FnOnce() -> Fut + Send + 'static,
        Fut: Future<Output = UiEvent> + Send + 'static,
    {
        let tx = self.inbox_tx.clone();
        tokio::spawn(async move {
            let _ = tx.send(f().await);
        });
    }

    fn execute_effect(&mut self, effect: UiEffect) {
        match effect {
            UiEffect::Quit => {
                self.state.tui.should_quit = true;
            }
            UiEffect::Perform(action) => {
                let api = self.api.clone();
                self.spawn_effect(move || handlers::perform_action(api, action));
            }
            UiEffect::PersistToken { token } => {
                handlers::persist_token(&self.store, &token);
                self.api.set_token(Some(token));
            }
            UiEffect::ClearToken => {
                handlers::clear_token(&self.store);
                self.api.set_token(None);
            }
        }
    }
}

impl Drop for TuiRuntime {
    fn drop(&mut self) {
        let _ = terminal::restore_terminal();
    }
}
