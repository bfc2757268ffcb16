//! UI events consumed by the reducer.

use crossterm::event::Event;
use postboard_core::feed::{Action, Outcome};

/// Everything the reducer reacts to.
#[derive(Debug)]
pub enum UiEvent {
    /// Animation/render cadence.
    Tick,
    Terminal(Event),
    /// A spawned action finished. Failures carry only the action's notice.
    ActionFinished {
        action: Action,
        result: Result<Outcome, &'static str>,
    },
}
