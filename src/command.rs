//! Chat command parsing
//!
//! Recognizes `<prefix> [keyword] [argument]` messages. Anything that does
//! not start with the prefix is left for other handlers.

use regex::Regex;

/// Game actions a chat message can request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    Ask,
    Hint,
    Clues,
    ShowPuzzle,
    Guess,
    Reveal,
    Exit,
    Help,
    /// No recognized keyword: start a new game (or reject, depending on config)
    StartOrAsk,
}

impl Action {
    /// Keyword table, in the order shown by the help text
    pub const KEYWORDS: &'static [(&'static str, Action)] = &[
        ("问题", Action::Ask),
        ("提示", Action::Hint),
        ("整理线索", Action::Clues),
        ("汤面", Action::ShowPuzzle),
        ("猜谜", Action::Guess),
        ("退出", Action::Exit),
        ("揭秘", Action::Reveal),
        ("帮助", Action::Help),
    ];

    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::KEYWORDS
            .iter()
            .find(|(keyword, _)| *keyword == word)
            .map(|(_, action)| *action)
    }

    /// Short machine-readable name used in logs
    pub fn as_str(self) -> &'static str {
        match self {
            Action::Ask => "ask",
            Action::Hint => "hint",
            Action::Clues => "clues",
            Action::ShowPuzzle => "show_puzzle",
            Action::Guess => "guess",
            Action::Reveal => "reveal",
            Action::Exit => "exit",
            Action::Help => "help",
            Action::StartOrAsk => "start_or_ask",
        }
    }
}

/// A parsed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    /// Trailing free text. For `StartOrAsk` this holds the unrecognized
    /// text after the prefix, if any.
    pub argument: Option<String>,
}

impl Command {
    pub fn new(action: Action, argument: Option<String>) -> Self {
        Self { action, argument }
    }

    pub fn start() -> Self {
        Self::new(Action::StartOrAsk, None)
    }
}

/// Matches messages against the configured command prefix
#[derive(Debug, Clone)]
pub struct CommandParser {
    pattern: Regex,
}

impl CommandParser {
    pub fn new(prefix: &str) -> Result<Self, regex::Error> {
        let pattern = Regex::new(&format!(
            r"(?s)^{}(?:\s+(?P<action>\S+))?(?:\s+(?P<rest>.+?))?\s*$",
            regex::escape(prefix)
        ))?;
        Ok(Self { pattern })
    }

    /// Parse a raw message. Returns `None` when the message is not addressed
    /// to this command at all.
    pub fn parse(&self, text: &str) -> Option<Command> {
        let caps = self.pattern.captures(text.trim())?;
        let word = caps.name("action").map(|m| m.as_str());
        let rest = caps
            .name("rest")
            .map(|m| m.as_str().trim().to_string())
            .filter(|s| !s.is_empty());

        let Some(word) = word else {
            return Some(Command::start());
        };

        let command = match Action::from_keyword(word) {
            // "问题" alone asks for a new puzzle, "问题 <text>" asks a question
            Some(Action::Ask) if rest.is_none() => Command::start(),
            Some(action) => Command::new(action, rest),
            None => {
                let unrecognized = match rest {
                    Some(rest) => format!("{word} {rest}"),
                    None => word.to_string(),
                };
                Command::new(Action::StartOrAsk, Some(unrecognized))
            }
        };
        Some(command)
    }
}
