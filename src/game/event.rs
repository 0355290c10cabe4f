//! Events that drive the game state machine

use super::effect::LlmTask;
use crate::command::Command;

/// Events that trigger state transitions
#[derive(Debug, Clone)]
pub enum Event {
    /// A parsed chat command
    Command(Command),

    /// The collaborator answered a task requested through
    /// `Effect::RequestLlm`. Failures arrive as empty content.
    LlmCompleted { task: LlmTask, content: String },
}

impl Event {
    pub fn llm_completed(task: LlmTask, content: impl Into<String>) -> Self {
        Event::LlmCompleted {
            task,
            content: content.into(),
        }
    }
}
