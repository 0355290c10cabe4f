//! API request and response types

use crate::game::{Phase, Session};
use serde::{Deserialize, Serialize};

/// A chat message forwarded by the host
#[derive(Debug, Deserialize)]
pub struct MessageRequest {
    pub text: String,
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub user_id: Option<String>,
}

/// What the host should do with the message
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    /// False when the message is not a game command
    pub handled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reply: Option<String>,
}

impl MessageResponse {
    pub fn unhandled() -> Self {
        Self {
            handled: false,
            success: None,
            reason: None,
            reply: None,
        }
    }
}

/// Read-only view of a session; the answer stays hidden while playing
#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub id: String,
    pub phase: Phase,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer: Option<String>,
    pub hints_used: u32,
    pub hints_remaining: u32,
    /// Questions and guesses submitted so far
    pub history_len: usize,
}

impl From<Session> for SessionResponse {
    fn from(session: Session) -> Self {
        let phase = session.phase();
        let hints_remaining = session.hints_remaining();
        Self {
            id: session.id,
            phase,
            question: session.current_question,
            answer: (phase == Phase::Finished).then_some(session.current_answer),
            hints_used: session.hints_used,
            hints_remaining,
            history_len: session.history.len(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct HelpResponse {
    pub text: String,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
