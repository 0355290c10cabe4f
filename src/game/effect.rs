//! Effects produced by state transitions

/// Content the collaborator is asked to produce
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LlmTask {
    /// Invent a new puzzle text
    GeneratePuzzle,
    /// Write the hidden solution for a freshly generated puzzle
    GenerateAnswer { question: String },
    /// Answer a player's question without giving the solution away
    AnswerQuestion { question: String },
    Hint,
    SummarizeClues,
    /// Classify a guess as 是 / 不是 / anything else
    ClassifyGuess { guess: String },
}

impl LlmTask {
    pub fn as_str(&self) -> &'static str {
        match self {
            LlmTask::GeneratePuzzle => "generate_puzzle",
            LlmTask::GenerateAnswer { .. } => "generate_answer",
            LlmTask::AnswerQuestion { .. } => "answer_question",
            LlmTask::Hint => "hint",
            LlmTask::SummarizeClues => "summarize_clues",
            LlmTask::ClassifyGuess { .. } => "classify_guess",
        }
    }
}

/// Effects to be executed after a state transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Call the collaborator and feed the result back as `Event::LlmCompleted`
    RequestLlm(LlmTask),

    /// Send text back to the chat
    Reply(String),
}

impl Effect {
    pub fn reply(text: impl Into<String>) -> Self {
        Effect::Reply(text.into())
    }
}
