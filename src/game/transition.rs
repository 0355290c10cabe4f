//! Pure state transition function
//!
//! Every rejected transition leaves the session untouched; the engine only
//! stores `new_session` from an `Ok` result.

use super::effect::{Effect, LlmTask};
use super::event::Event;
use super::reply;
use super::state::{GameContext, HistoryEntry, Phase, Session, MAX_HINTS};
use super::verdict::Verdict;
use crate::command::{Action, Command};
use thiserror::Error;

/// Result of a state transition
#[derive(Debug)]
pub struct TransitionResult {
    pub new_session: Session,
    pub effects: Vec<Effect>,
    /// Machine-readable outcome for logs and the host framework
    pub reason: &'static str,
}

impl TransitionResult {
    pub fn new(session: Session, reason: &'static str) -> Self {
        Self {
            new_session: session,
            effects: vec![],
            reason,
        }
    }

    pub fn with_effect(mut self, effect: Effect) -> Self {
        self.effects.push(effect);
        self
    }

    fn request(session: Session, task: LlmTask) -> Self {
        Self::new(session, "awaiting_llm").with_effect(Effect::RequestLlm(task))
    }
}

/// Requests that are refused with a user-visible message. The `Display`
/// text is what gets sent to the chat.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("❌ 插件已被禁用")]
    PluginDisabled,
    #[error("❌ LLM API 配置不完整")]
    ConfigIncomplete,
    #[error("❌ 无法获取聊天上下文信息")]
    MissingContext,
    #[error("❌ 当前没有进行中的游戏，请先使用 {prefix} 问题 生成题目")]
    NoGame { prefix: String },
    #[error("⚠️ 当前已经有题目在进行中，请先使用 {prefix} 揭秘 或 {prefix} 退出 再开始新题")]
    GameInProgress { prefix: String },
    #[error("💡 提示已用完")]
    HintsExhausted,
    #[error("❌ 游戏已结束，请使用 {prefix} 问题 开始新游戏")]
    GameOver { prefix: String },
    #[error("❌ 缺少内容，用法: {usage}")]
    MissingArgument { usage: String },
    #[error("❓ 无法识别的指令，使用 {prefix} 帮助 查看用法")]
    UnknownCommand { prefix: String },
}

impl Rejection {
    pub fn reason(&self) -> &'static str {
        match self {
            Rejection::PluginDisabled => "plugin_disabled",
            Rejection::ConfigIncomplete => "config_incomplete",
            Rejection::MissingContext => "missing_context",
            Rejection::NoGame { .. } => "no_game",
            Rejection::GameInProgress { .. } => "game_in_progress",
            Rejection::HintsExhausted => "hints_exhausted",
            Rejection::GameOver { .. } => "game_over",
            Rejection::MissingArgument { .. } => "missing_argument",
            Rejection::UnknownCommand { .. } => "unknown_command",
        }
    }
}

/// Pure transition function
///
/// Given the same session, context and event it always produces the same
/// result. Collaborator calls happen outside, through `Effect::RequestLlm`.
pub fn transition(
    session: &Session,
    context: &GameContext,
    event: Event,
) -> Result<TransitionResult, Rejection> {
    match event {
        Event::Command(command) => apply_command(session, context, command),
        Event::LlmCompleted { task, content } => apply_completion(session, context, task, content),
    }
}

fn no_game(context: &GameContext) -> Rejection {
    Rejection::NoGame {
        prefix: context.prefix.clone(),
    }
}

fn apply_command(
    session: &Session,
    context: &GameContext,
    command: Command,
) -> Result<TransitionResult, Rejection> {
    let phase = session.phase();

    match (command.action, phase) {
        // Static help, no state change
        (Action::Help, _) => Ok(TransitionResult::new(session.clone(), "help")
            .with_effect(Effect::reply(reply::help(&context.prefix)))),

        // Exit from any phase resets everything
        (Action::Exit, _) => {
            Ok(TransitionResult::new(session.reset(), "exited").with_effect(Effect::reply(reply::exited())))
        }

        (Action::StartOrAsk, _)
            if command.argument.is_some() && !context.unknown_action_starts_game =>
        {
            Err(Rejection::UnknownCommand {
                prefix: context.prefix.clone(),
            })
        }

        (Action::StartOrAsk, _) => start_game(session, context),

        (Action::Ask, Phase::InProgress) => match command.argument {
            Some(question) => {
                let mut next = session.clone();
                next.history.push(HistoryEntry::Question(question.clone()));
                Ok(TransitionResult::request(next, LlmTask::AnswerQuestion { question }))
            }
            None => Err(Rejection::MissingArgument {
                usage: reply::usage(Action::Ask, &context.prefix),
            }),
        },

        // Asking without a live game deals a new puzzle instead
        (Action::Ask, _) => start_game(session, context),

        (Action::Guess, Phase::Finished) => Err(Rejection::GameOver {
            prefix: context.prefix.clone(),
        }),

        (_, Phase::NoGame | Phase::Finished) => Err(no_game(context)),

        (Action::Hint, Phase::InProgress) if session.hints_used >= MAX_HINTS => {
            Err(Rejection::HintsExhausted)
        }

        (Action::Hint, Phase::InProgress) => {
            Ok(TransitionResult::request(session.clone(), LlmTask::Hint))
        }

        (Action::Clues, Phase::InProgress) => {
            Ok(TransitionResult::request(session.clone(), LlmTask::SummarizeClues))
        }

        (Action::ShowPuzzle, Phase::InProgress) => {
            Ok(TransitionResult::new(session.clone(), "show_puzzle")
                .with_effect(Effect::reply(reply::show_puzzle(session))))
        }

        (Action::Guess, Phase::InProgress) => match command.argument {
            Some(guess) => Ok(TransitionResult::request(
                session.clone(),
                LlmTask::ClassifyGuess { guess },
            )),
            None => Err(Rejection::MissingArgument {
                usage: reply::usage(Action::Guess, &context.prefix),
            }),
        },

        (Action::Reveal, Phase::InProgress) => {
            let mut next = session.clone();
            next.active = false;
            next.over = true;
            let text = reply::revealed(&next);
            Ok(TransitionResult::new(next, "revealed").with_effect(Effect::reply(text)))
        }
    }
}

fn start_game(session: &Session, context: &GameContext) -> Result<TransitionResult, Rejection> {
    if session.is_in_progress() {
        return Err(Rejection::GameInProgress {
            prefix: context.prefix.clone(),
        });
    }
    Ok(TransitionResult::request(session.clone(), LlmTask::GeneratePuzzle))
}

fn apply_completion(
    session: &Session,
    context: &GameContext,
    task: LlmTask,
    content: String,
) -> Result<TransitionResult, Rejection> {
    let content = content.trim();

    match task {
        LlmTask::GeneratePuzzle | LlmTask::GenerateAnswer { .. } if session.is_in_progress() => {
            Err(Rejection::GameInProgress {
                prefix: context.prefix.clone(),
            })
        }

        LlmTask::GeneratePuzzle => {
            if content.is_empty() {
                return Ok(TransitionResult::new(session.clone(), "puzzle_generation_failed")
                    .with_effect(Effect::reply(reply::puzzle_generation_failed())));
            }
            Ok(TransitionResult::request(
                session.clone(),
                LlmTask::GenerateAnswer {
                    question: content.to_string(),
                },
            ))
        }

        LlmTask::GenerateAnswer { question } => {
            let answer = if content.is_empty() {
                reply::MISSING_ANSWER
            } else {
                content
            };
            let next = Session::started(session.id.clone(), question, answer);
            let text = reply::new_puzzle(&next.current_question, &context.prefix);
            Ok(TransitionResult::new(next, "puzzle_created").with_effect(Effect::reply(text)))
        }

        // Everything below belongs to a live game
        _ if !session.is_in_progress() => Err(no_game(context)),

        LlmTask::AnswerQuestion { question } => {
            Ok(TransitionResult::new(session.clone(), "question_answered")
                .with_effect(Effect::reply(reply::answer(&question, content))))
        }

        LlmTask::Hint => {
            if session.hints_used >= MAX_HINTS {
                return Err(Rejection::HintsExhausted);
            }
            let mut next = session.clone();
            next.hints_used += 1;
            let text = reply::hint(next.hints_used, content);
            Ok(TransitionResult::new(next, "hint_given").with_effect(Effect::reply(text)))
        }

        LlmTask::SummarizeClues => Ok(TransitionResult::new(session.clone(), "clues_summarized")
            .with_effect(Effect::reply(reply::clues(content)))),

        LlmTask::ClassifyGuess { guess } => {
            let mut next = session.clone();
            next.history.push(HistoryEntry::Guess(guess));

            match Verdict::parse(content) {
                Verdict::Yes => {
                    next.active = false;
                    next.over = true;
                    let text = reply::guess_correct(&next);
                    Ok(TransitionResult::new(next, "guess_correct").with_effect(Effect::reply(text)))
                }
                Verdict::No => {
                    let text = reply::guess_wrong(&next);
                    Ok(TransitionResult::new(next, "guess_wrong").with_effect(Effect::reply(text)))
                }
                Verdict::Unrelated => Ok(TransitionResult::new(next, "guess_unrelated")
                    .with_effect(Effect::reply(reply::guess_unrelated()))),
            }
        }
    }
}
