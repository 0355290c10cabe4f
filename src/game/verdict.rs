//! Guess classification outcome

/// How the collaborator judged a guess against the hidden answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Yes,
    No,
    Unrelated,
}

impl Verdict {
    /// Only the exact tokens "是" and "不是" count, everything else
    /// (including empty or chatty output) is `Unrelated`.
    pub fn parse(text: &str) -> Self {
        match text.trim().to_lowercase().as_str() {
            "是" => Verdict::Yes,
            "不是" => Verdict::No,
            _ => Verdict::Unrelated,
        }
    }
}
