//! Session data model

use serde::Serialize;

/// Hint allowance per puzzle
pub const MAX_HINTS: u32 = 3;

/// One submitted question or guess, kept for clue summaries
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum HistoryEntry {
    Question(String),
    Guess(String),
}

impl HistoryEntry {
    pub fn text(&self) -> &str {
        match self {
            HistoryEntry::Question(text) | HistoryEntry::Guess(text) => text,
        }
    }
}

/// Coarse game phase derived from the session flags
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    NoGame,
    InProgress,
    Finished,
}

/// Game state for one chat scope (group or private chat)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Session {
    pub id: String,
    pub current_question: String,
    pub current_answer: String,
    pub hints_used: u32,
    pub active: bool,
    pub over: bool,
    pub history: Vec<HistoryEntry>,
}

impl Session {
    /// Empty session with no game
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Default::default()
        }
    }

    /// Fresh session holding a newly generated puzzle
    pub fn started(
        id: impl Into<String>,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            current_question: question.into(),
            current_answer: answer.into(),
            hints_used: 0,
            active: true,
            over: false,
            history: Vec::new(),
        }
    }

    /// Same scope, everything else back to defaults
    pub fn reset(&self) -> Self {
        Self::new(self.id.clone())
    }

    pub fn phase(&self) -> Phase {
        match (self.active, self.over) {
            (true, false) => Phase::InProgress,
            (false, true) => Phase::Finished,
            _ => Phase::NoGame,
        }
    }

    pub fn is_in_progress(&self) -> bool {
        self.phase() == Phase::InProgress
    }

    pub fn hints_remaining(&self) -> u32 {
        MAX_HINTS.saturating_sub(self.hints_used)
    }
}

/// Static settings the transition function consults
#[derive(Debug, Clone)]
pub struct GameContext {
    /// Command prefix, used in help and usage replies
    pub prefix: String,
    /// Whether unrecognized text after the prefix starts a game
    pub unknown_action_starts_game: bool,
}

impl GameContext {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            unknown_action_starts_game: true,
        }
    }
}
