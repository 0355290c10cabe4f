//! User-facing reply text

use super::state::{Session, MAX_HINTS};
use crate::command::Action;

/// Shown when the collaborator returned nothing usable
pub const NO_ANSWER: &str = "❌ LLM未返回回答";

/// Stored when a puzzle was generated but its solution came back empty
pub const MISSING_ANSWER: &str = "（暂无汤底）";

fn or_fallback(content: &str) -> &str {
    if content.is_empty() {
        NO_ANSWER
    } else {
        content
    }
}

pub fn help(prefix: &str) -> String {
    format!(
        "海龟汤游戏:\n\
         {prefix} 问题 (生成题目)\n\
         {prefix} 问题 <你的问题> (向bot提问)\n\
         {prefix} 提示 (获取提示)\n\
         {prefix} 整理线索 (整理线索)\n\
         {prefix} 汤面 (查看当前题目)\n\
         {prefix} 猜谜 <答案> (猜测汤底)\n\
         {prefix} 退出 (结束游戏)\n\
         {prefix} 揭秘 (直接查看答案并结束游戏)\n\
         {prefix} 帮助 (查看帮助)"
    )
}

pub fn new_puzzle(question: &str, prefix: &str) -> String {
    format!(
        "🤔 海龟汤题目:\n{question}\n💡 提示次数: 0/{MAX_HINTS}\n\
         💡 使用 {prefix} 问题 <问题> 提问，{prefix} 提示 获取提示，{prefix} 猜谜 <答案> 猜测汤底"
    )
}

pub fn puzzle_generation_failed() -> String {
    "❌ 暂时无法生成题目，请稍后再试".to_string()
}

pub fn answer(question: &str, content: &str) -> String {
    format!("❓ 你问: {question}\n💡 回答: {}", or_fallback(content))
}

pub fn hint(hints_used: u32, content: &str) -> String {
    format!("💡 提示 ({hints_used}/{MAX_HINTS}): {}", or_fallback(content))
}

pub fn clues(content: &str) -> String {
    format!("📝 线索整理:\n{}", or_fallback(content))
}

pub fn show_puzzle(session: &Session) -> String {
    format!("🍲 当前海龟汤题目:\n{}", session.current_question)
}

pub fn guess_correct(session: &Session) -> String {
    format!("🎉 猜对了！答案: {}", session.current_answer)
}

pub fn guess_wrong(session: &Session) -> String {
    format!("❌ 猜错了！提示次数: {}/{MAX_HINTS}", session.hints_used)
}

pub fn guess_unrelated() -> String {
    "❓ 你的回答与题目无关".to_string()
}

pub fn revealed(session: &Session) -> String {
    format!("🔓 当前海龟汤答案是:\n{}\n游戏结束。", session.current_answer)
}

pub fn exited() -> String {
    "🛑 游戏已退出".to_string()
}

/// Usage line for actions that need an argument
pub fn usage(action: Action, prefix: &str) -> String {
    match action {
        Action::Guess => format!("{prefix} 猜谜 <答案>"),
        Action::Ask => format!("{prefix} 问题 <问题>"),
        _ => format!("{prefix} 帮助"),
    }
}
