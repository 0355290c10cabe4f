//! Property-based tests for the game state machine
//!
//! Random command/completion sequences are driven through `transition`
//! and the session invariants are checked after every step.

use super::*;
use crate::command::{Action, Command};
use proptest::prelude::*;

fn ctx() -> GameContext {
    GameContext::new("/hgt")
}

fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        Just(String::new()),
        Just("是".to_string()),
        Just("不是".to_string()),
        "[a-z\u{4e00}-\u{4e20} ]{1,12}",
    ]
}

fn arb_action() -> impl Strategy<Value = Action> {
    prop_oneof![
        Just(Action::Ask),
        Just(Action::Hint),
        Just(Action::Clues),
        Just(Action::ShowPuzzle),
        Just(Action::Guess),
        Just(Action::Reveal),
        Just(Action::Exit),
        Just(Action::Help),
        Just(Action::StartOrAsk),
    ]
}

fn arb_command() -> impl Strategy<Value = Command> {
    (arb_action(), proptest::option::of("[a-z]{1,8}"))
        .prop_map(|(action, argument)| Command::new(action, argument))
}

fn arb_session() -> impl Strategy<Value = Session> {
    (
        "[a-z]{1,10}",
        "[a-z]{1,10}",
        0..=MAX_HINTS,
        any::<bool>(),
        proptest::collection::vec("[a-z]{1,6}", 0..4),
    )
        .prop_map(|(question, answer, hints_used, finished, questions)| {
            let mut session = Session::started("g", question, answer);
            session.hints_used = hints_used;
            session.history = questions.into_iter().map(HistoryEntry::Question).collect();
            if finished {
                session.active = false;
                session.over = true;
            }
            session
        })
}

/// Run one command to completion, answering every collaborator request
/// with the next scripted reply.
fn run(session: &Session, command: Command, replies: &mut impl Iterator<Item = String>) -> Session {
    let mut current = session.clone();
    let mut pending = vec![Event::Command(command)];
    while let Some(event) = pending.pop() {
        let Ok(result) = transition(&current, &ctx(), event) else {
            return current;
        };
        current = result.new_session;
        for effect in result.effects {
            if let Effect::RequestLlm(task) = effect {
                pending.push(Event::llm_completed(task, replies.next().unwrap_or_default()));
            }
        }
    }
    current
}

fn assert_invariants(session: &Session) {
    assert!(session.hints_used <= MAX_HINTS);
    if session.active {
        assert!(!session.current_question.is_empty());
        assert!(!session.current_answer.is_empty());
    }
    assert!(!(session.active && session.over));
}

proptest! {
    #[test]
    fn prop_invariants_hold_for_any_sequence(
        commands in proptest::collection::vec(arb_command(), 1..30),
        replies in proptest::collection::vec(arb_text(), 0..60),
    ) {
        let mut replies = replies.into_iter();
        let mut session = Session::new("g");
        for command in commands {
            session = run(&session, command, &mut replies);
            assert_invariants(&session);
        }
    }

    #[test]
    fn prop_hint_cap(extra in 1usize..5, hint in arb_text()) {
        let mut session = Session::started("g", "Q", "A");
        for _ in 0..(MAX_HINTS as usize + extra) {
            session = run(&session, Command::new(Action::Hint, None), &mut std::iter::repeat(hint.clone()));
        }
        prop_assert_eq!(session.hints_used, MAX_HINTS);
        let rejected = transition(&session, &ctx(), Event::Command(Command::new(Action::Hint, None)));
        prop_assert_eq!(rejected.unwrap_err(), Rejection::HintsExhausted);
    }

    #[test]
    fn prop_start_never_replaces_live_puzzle(session in arb_session(), text in proptest::option::of("[a-z]{1,5}")) {
        prop_assume!(session.is_in_progress());
        let result = transition(&session, &ctx(), Event::Command(Command::new(Action::StartOrAsk, text)));
        prop_assert!(
            matches!(result, Err(Rejection::GameInProgress { .. })),
            "expected GameInProgress rejection"
        );
    }

    #[test]
    fn prop_exit_resets_fully(session in arb_session()) {
        let result = transition(&session, &ctx(), Event::Command(Command::new(Action::Exit, None))).unwrap();
        prop_assert_eq!(result.new_session, Session::new("g"));
    }

    #[test]
    fn prop_only_exact_yes_wins(content in arb_text()) {
        let session = Session::started("g", "Q", "A");
        let result = transition(
            &session,
            &ctx(),
            Event::llm_completed(LlmTask::ClassifyGuess { guess: "x".into() }, content.clone()),
        ).unwrap();
        let won = result.new_session.phase() == Phase::Finished;
        prop_assert_eq!(won, content.trim() == "是");
    }

    #[test]
    fn prop_help_never_changes_session(session in arb_session()) {
        let result = transition(&session, &ctx(), Event::Command(Command::new(Action::Help, None))).unwrap();
        prop_assert_eq!(result.new_session, session);
    }
}
