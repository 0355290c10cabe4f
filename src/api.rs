//! HTTP API standing in for the chat-bot host
//!
//! The host forwards each chat message with its group/user identity and
//! relays the reply back into the chat.

mod handlers;
mod types;

pub use handlers::create_router;
#[allow(unused_imports)] // Public API re-exports
pub use types::*;

use crate::engine::ProductionEngine;
use std::sync::Arc;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ProductionEngine>,
}

impl AppState {
    pub fn new(engine: ProductionEngine) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }
}
