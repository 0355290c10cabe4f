//! Command execution
//!
//! Parses a chat message, checks preconditions, then drives the game state
//! machine for the message's scope: each `RequestLlm` effect becomes one
//! collaborator call whose output is fed back as an event. The scope's lock
//! is held from load to store.

#[cfg(test)]
pub mod testing;

use crate::command::{Command, CommandParser};
use crate::config::{Config, LlmConfig};
use crate::game::{transition, Effect, Event, GameContext, LlmTask, Rejection, Session};
use crate::llm::{LlmRequest, LlmService};
use crate::prompts;
use crate::store::{MemorySessionStore, SessionStore};
use std::collections::VecDeque;
use std::sync::Arc;
use tokio::time::timeout;
use tracing::Instrument;

/// Type alias for the engine used by the server
pub type ProductionEngine = GameEngine<Arc<MemorySessionStore>, Arc<dyn LlmService>>;

/// Where a message came from
#[derive(Debug, Clone, Default)]
pub struct ChatContext {
    pub group_id: Option<String>,
    pub user_id: Option<String>,
}

impl ChatContext {
    /// Games are shared per group; private chats fall back to the user
    pub fn scope_id(&self) -> Option<&str> {
        self.group_id
            .as_deref()
            .filter(|id| !id.is_empty())
            .or_else(|| self.user_id.as_deref().filter(|id| !id.is_empty()))
    }
}

#[cfg(test)]
impl ChatContext {
    pub fn group(id: impl Into<String>) -> Self {
        Self {
            group_id: Some(id.into()),
            user_id: None,
        }
    }

    pub fn user(id: impl Into<String>) -> Self {
        Self {
            group_id: None,
            user_id: Some(id.into()),
        }
    }
}

/// Result of one handled command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub success: bool,
    /// Machine-readable reason for the host framework's logs
    pub reason: &'static str,
    pub reply: String,
}

impl CommandOutcome {
    fn rejected(rejection: &Rejection) -> Self {
        Self {
            success: false,
            reason: rejection.reason(),
            reply: rejection.to_string(),
        }
    }
}

pub struct GameEngine<S, L> {
    store: S,
    llm: L,
    parser: CommandParser,
    context: GameContext,
    enabled: bool,
    llm_config: LlmConfig,
}

impl<S: SessionStore, L: LlmService> GameEngine<S, L> {
    pub fn new(config: &Config, store: S, llm: L) -> Result<Self, regex::Error> {
        Ok(Self {
            store,
            llm,
            parser: CommandParser::new(&config.plugin.command_prefix)?,
            context: GameContext {
                unknown_action_starts_game: config.plugin.unknown_action_starts_game,
                ..GameContext::new(config.plugin.command_prefix.clone())
            },
            enabled: config.plugin.enabled,
            llm_config: config.llm.clone(),
        })
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn context(&self) -> &GameContext {
        &self.context
    }

    /// Handle a chat message. Returns `None` when the message is not a game
    /// command and should be left to other handlers.
    pub async fn handle(&self, chat: &ChatContext, text: &str) -> Option<CommandOutcome> {
        let command = self.parser.parse(text)?;
        let span = tracing::info_span!(
            "command",
            scope = chat.scope_id().unwrap_or(""),
            action = command.action.as_str()
        );

        let outcome = async {
            let outcome = match self.execute(chat, command).await {
                Ok(outcome) => outcome,
                Err(rejection) => CommandOutcome::rejected(&rejection),
            };
            tracing::info!(
                success = outcome.success,
                reason = outcome.reason,
                "Command handled"
            );
            outcome
        }
        .instrument(span)
        .await;

        Some(outcome)
    }

    async fn execute(
        &self,
        chat: &ChatContext,
        command: Command,
    ) -> Result<CommandOutcome, Rejection> {
        let scope = chat.scope_id().ok_or(Rejection::MissingContext)?;
        if !self.enabled {
            return Err(Rejection::PluginDisabled);
        }
        if !self.llm_config.is_complete() {
            return Err(Rejection::ConfigIncomplete);
        }

        let _lock = self.store.lock(scope).await;

        let mut current = if let Some(session) = self.store.get(scope).await {
            session
        } else {
            let session = Session::new(scope);
            self.store.put(scope, session.clone()).await;
            session
        };

        let mut replies = Vec::new();
        let mut reason = "";
        let mut pending = VecDeque::from([Event::Command(command)]);

        while let Some(event) = pending.pop_front() {
            let result = transition(&current, &self.context, event)?;
            current = result.new_session;
            reason = result.reason;

            for effect in result.effects {
                match effect {
                    Effect::Reply(text) => replies.push(text),
                    Effect::RequestLlm(task) => {
                        let content = self.request(&task, &current).await;
                        pending.push_back(Event::llm_completed(task, content));
                    }
                }
            }
        }

        self.store.put(scope, current).await;

        Ok(CommandOutcome {
            success: true,
            reason,
            reply: replies.join("\n"),
        })
    }

    /// One collaborator call. Any failure becomes empty content; the state
    /// machine substitutes its fallback reply for that.
    async fn request(&self, task: &LlmTask, session: &Session) -> String {
        let mut request = LlmRequest::prompt(prompts::SYSTEM_PROMPT, prompts::build(task, session));
        request.temperature = Some(self.llm_config.temperature);
        request.max_tokens = Some(self.llm_config.max_tokens);

        match timeout(self.llm_config.timeout(), self.llm.complete(&request)).await {
            Ok(Ok(response)) => response.text,
            Ok(Err(e)) => {
                tracing::warn!(
                    scope = %session.id,
                    task = task.as_str(),
                    kind = e.kind.as_str(),
                    error = %e.message,
                    "Collaborator failed, continuing with empty content"
                );
                String::new()
            }
            Err(_) => {
                tracing::warn!(
                    scope = %session.id,
                    task = task.as_str(),
                    timeout_secs = self.llm_config.timeout_secs,
                    "Collaborator timed out, continuing with empty content"
                );
                String::new()
            }
        }
    }
}
