use parking_lot::RwLock;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::*;
use crate::bank::{CategoryId, QuestionId};
use crate::game::session::QuizSession;
use crate::output::mock::MockQuizOutput;
use crate::provider::mock::MockQuestionProvider;

fn science() -> Category {
    Category {
        id: CategoryId("science".to_owned()),
        name: "Science".to_owned(),
        description: "Physics, chemistry and biology".to_owned(),
        icon: "flask".to_owned(),
    }
}

fn question(position: u32) -> Question {
    Question {
        id: QuestionId(format!("qst-{}", position)),
        category_id: CategoryId("science".to_owned()),
        position,
        text: format!("Question {}?", position),
        options: vec![
            "a".to_owned(),
            "b".to_owned(),
            "c".to_owned(),
            "d".to_owned(),
        ],
        correct_answer: "a".to_owned(),
    }
}

fn poll_to_completion<O: QuizOutput>(state: &mut LoadingState<O>) {
    let start_time = Instant::now();
    let tick_duration = Duration::from_millis(10);
    loop {
        state.on_tick(tick_duration);
        if state.is_over() {
            break;
        }
        if Instant::now().duration_since(start_time) > Duration::from_secs(5) {
            panic!("Timed out waiting for loading phase to end");
        }
        std::thread::sleep(tick_duration);
    }
}

#[test]
fn announces_loading() {
    let session: SessionHandle = Arc::new(RwLock::new(QuizSession::new()));
    let provider = Arc::new(MockQuestionProvider::new(vec![science()], vec![question(1)]));
    let output = MockQuizOutput::new();
    let mut state = LoadingState::new(science(), provider, 10, session, output.clone());
    state.on_begin();
    assert!(output.contains_message(&Message::LoadingQuestions("Science".to_owned())));
}

#[test]
fn resolves_to_fetched_questions() {
    let session: SessionHandle = Arc::new(RwLock::new(QuizSession::new()));
    let provider = Arc::new(MockQuestionProvider::new(
        vec![science()],
        vec![question(2), question(1)],
    ));
    let output = MockQuizOutput::new();
    let mut state = LoadingState::new(science(), provider, 10, session, output);
    assert!(!state.is_over());
    poll_to_completion(&mut state);

    match state.outcome() {
        FetchState::Success(questions) => {
            let positions: Vec<u32> = questions.iter().map(|q| q.position).collect();
            assert_eq!(positions, vec![1, 2]);
        }
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[test]
fn resolves_to_failure_when_fetch_fails() {
    let session: SessionHandle = Arc::new(RwLock::new(QuizSession::new()));
    let provider = Arc::new(MockQuestionProvider::failing());
    let output = MockQuizOutput::new();
    let mut state = LoadingState::new(science(), provider, 10, session, output);
    poll_to_completion(&mut state);

    match state.outcome() {
        FetchState::Failure(_) => (),
        other => panic!("Unexpected outcome: {:?}", other),
    }
}

#[test]
fn ignores_completions_for_a_stale_session() {
    let session: SessionHandle = Arc::new(RwLock::new(QuizSession::new()));
    let provider = Arc::new(MockQuestionProvider::new(vec![science()], vec![question(1)]));
    let output = MockQuizOutput::new();
    let mut state = LoadingState::new(science(), provider, 10, session.clone(), output);

    session.write().reset();

    let start_time = Instant::now();
    while Instant::now().duration_since(start_time) < Duration::from_millis(200) {
        state.on_tick(Duration::from_millis(10));
        std::thread::sleep(Duration::from_millis(10));
    }
    assert!(!state.is_over());
}
