//! Prompt templates for the collaborator
//!
//! Templates are plain data: session fields and player input are
//! interpolated into fixed instructions.

use crate::game::{HistoryEntry, LlmTask, Session};

/// System message sent with every request
pub const SYSTEM_PROMPT: &str = "你是一个专业海龟汤故事生成器和解释者。";

/// Reference soups shown to the model when it invents a new puzzle
const REFERENCE_SOUPS: &str = r#"可以参考的海龟汤汤面和汤底（仅供参考，可以套用模板，但必须严格按照输出格式）：
1.【子的爱】
汤面：我的父母都不理我，但我还是很爱他们。
汤底：小时候爸爸妈妈总说喜欢的东西要放进冰箱才能保鲜。他们工作太辛苦，从没睡过好觉，于是我在他们的水里放了安眠药，再把他们放进冰箱。现在我都六十了，他们还是那么年轻。

2.【舞】
汤面：我六岁那年外公去世，我和姐姐在葬礼上玩捉迷藏，后来我对母亲说了一句话，把她吓昏了过去。
汤底：姐姐躲进了祭奠用的纸房子里。纸房子被点燃时，我看见姐姐在里面"跳舞"，就告诉妈妈姐姐在房子里跳舞。

3.【插进来】
汤面：他迅速地插进来，又迅速地拔出去，反反复复，我流血了。他满头大汗，露出了笑容。
汤底：他是实习护士，在给我扎针。针头进了血管会回血，说明终于成功了，满头大汗是因为扎了好几次。"#;

const PUZZLE_PROMPT: &str = r"你是一个专业的海龟汤故事生成器。
请生成一个新颖的海龟汤题目，不要使用经典题材（比如：餐馆、飞机、婚礼、海龟等）。
要求：
1. 题目简短，最好 25~50 字。
2. 题目必须是海龟汤风格的推理谜题，包含一个看似矛盾或奇怪的情境。
3. 不要在题目里包含答案。
4. 可以包含猎奇和恐怖元素。
5. 题目结尾应该留有悬念，让人好奇真相。
6. 生成的题目应该是原创的，不要复制已有例子。

请生成一个海龟汤题目，仅输出汤面。";

fn puzzle_prompt() -> String {
    format!("{PUZZLE_PROMPT}\n\n{REFERENCE_SOUPS}")
}

fn answer_prompt(question: &str) -> String {
    format!(
        "题目: {question}\n\
         你是一个专业的海龟汤故事专家。请生成对应的合理的答案，可以蕴含恐怖元素，\
         讲究逻辑和一些现实，不要解释。150字以内，仅输出汤底。\n\n{REFERENCE_SOUPS}"
    )
}

fn question_prompt(session: &Session, question: &str) -> String {
    format!(
        "你是一个海龟汤游戏专家。\n\
         当前题目: {}\n\
         当前答案: {}\n\
         用户提问: {question}\n\
         请用简短的回答回应玩家，不要透露答案。",
        session.current_question, session.current_answer
    )
}

fn hint_prompt(session: &Session) -> String {
    format!(
        "你是一个海龟汤游戏专家。\n\
         题目: {}\n\
         答案: {}\n\
         请提供一个不直接透露答案的提示。",
        session.current_question, session.current_answer
    )
}

fn clues_prompt(session: &Session) -> String {
    format!(
        "你是一个海龟汤游戏专家。\n\
         题目: {}\n\
         答案: {}\n\
         请整理关键线索，简明列出，不包含答案。\n\
         已有记录:\n{}",
        session.current_question,
        session.current_answer,
        history_lines(&session.history)
    )
}

fn guess_prompt(session: &Session, guess: &str) -> String {
    format!(
        "你是海龟汤游戏专家。\n\
         题目: {}\n\
         答案: {}\n\
         用户猜测: {guess}\n\
         请仅回答 是/不是/无关。",
        session.current_question, session.current_answer
    )
}

/// Submitted questions and guesses, one per line, oldest first
fn history_lines(history: &[HistoryEntry]) -> String {
    history
        .iter()
        .map(HistoryEntry::text)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Build the user prompt for a collaborator task
pub fn build(task: &LlmTask, session: &Session) -> String {
    match task {
        LlmTask::GeneratePuzzle => puzzle_prompt(),
        LlmTask::GenerateAnswer { question } => answer_prompt(question),
        LlmTask::AnswerQuestion { question } => question_prompt(session, question),
        LlmTask::Hint => hint_prompt(session),
        LlmTask::SummarizeClues => clues_prompt(session),
        LlmTask::ClassifyGuess { guess } => guess_prompt(session, guess),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        let mut session = Session::started("g1", "他笑了", "他是护士");
        session.history = vec![
            HistoryEntry::Question("他是医生吗".to_string()),
            HistoryEntry::Guess("他在打针".to_string()),
        ];
        session
    }

    #[test]
    fn test_answer_prompt_is_conditioned_on_question() {
        let prompt = build(
            &LlmTask::GenerateAnswer {
                question: "奇怪的电梯".to_string(),
            },
            &Session::new("g1"),
        );
        assert!(prompt.starts_with("题目: 奇怪的电梯"));
    }

    #[test]
    fn test_puzzle_prompt_has_no_session_data() {
        let prompt = build(&LlmTask::GeneratePuzzle, &session());
        assert!(!prompt.contains("他是护士"));
        assert!(prompt.contains("仅输出汤面"));
    }

    #[test]
    fn test_clues_prompt_lists_history_in_order() {
        let prompt = build(&LlmTask::SummarizeClues, &session());
        assert!(prompt.ends_with("已有记录:\n他是医生吗\n他在打针"));
    }

    #[test]
    fn test_guess_prompt_asks_for_three_tokens() {
        let prompt = build(
            &LlmTask::ClassifyGuess {
                guess: "打针".to_string(),
            },
            &session(),
        );
        assert!(prompt.contains("用户猜测: 打针"));
        assert!(prompt.contains("是/不是/无关"));
        assert!(prompt.contains("答案: 他是护士"));
    }
}
