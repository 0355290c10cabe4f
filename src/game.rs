//! Per-session game state machine
//!
//! Same shape as an Elm update loop: `transition` is pure, the engine
//! executes the effects it returns and feeds collaborator output back in
//! as events.

mod effect;
pub mod event;
mod reply;
pub mod state;
pub(crate) mod transition;
mod verdict;

#[cfg(test)]
mod proptests;

pub use effect::{Effect, LlmTask};
pub use event::Event;
pub use reply::help as help_text;
pub use state::{GameContext, HistoryEntry, Phase, Session, MAX_HINTS};
pub use transition::{transition, Rejection, TransitionResult};
pub use verdict::Verdict;
