use parking_lot::RwLock;
use std::sync::Arc;

use super::*;
use crate::bank::{CategoryId, QuestionId};
use crate::game::session::{QuizSession, QUIZ_DURATION_SECONDS};
use crate::output::mock::MockQuizOutput;

struct ContextBuilder {
    question_count: u32,
}

impl ContextBuilder {
    fn new() -> Self {
        ContextBuilder { question_count: 3 }
    }

    fn question_count(mut self, count: u32) -> Self {
        self.question_count = count;
        self
    }

    fn build(self) -> Context {
        let questions: Vec<Question> = (1..=self.question_count).map(make_question).collect();
        let session: SessionHandle = Arc::new(RwLock::new(QuizSession::new()));
        let output = MockQuizOutput::new();
        let mut state = QuestionState::new(questions.clone(), session.clone(), output.clone());
        state.on_begin();
        output.flush();
        Context {
            state,
            questions,
            session,
            output,
        }
    }
}

struct Context {
    state: QuestionState<MockQuizOutput>,
    questions: Vec<Question>,
    session: SessionHandle,
    output: MockQuizOutput,
}

impl Context {
    fn correct_option_number(&self) -> usize {
        let index = self.session.read().current_question_index();
        let question = &self.questions[index];
        question
            .options
            .iter()
            .position(|o| *o == question.correct_answer)
            .unwrap()
            + 1
    }

    fn wrong_option_number(&self) -> usize {
        let index = self.session.read().current_question_index();
        let question = &self.questions[index];
        question
            .options
            .iter()
            .position(|o| *o != question.correct_answer)
            .unwrap()
            + 1
    }
}

fn make_question(position: u32) -> Question {
    Question {
        id: QuestionId(format!("qst-{}", position)),
        category_id: CategoryId("science".to_owned()),
        position,
        text: format!("Question {}?", position),
        options: vec![
            format!("right {}", position),
            format!("wrong {}a", position),
            format!("wrong {}b", position),
            format!("wrong {}c", position),
        ],
        correct_answer: format!("right {}", position),
    }
}

#[test]
fn announces_first_question_on_begin() {
    let questions: Vec<Question> = (1..=3).map(make_question).collect();
    let session: SessionHandle = Arc::new(RwLock::new(QuizSession::new()));
    let output = MockQuizOutput::new();
    let mut state = QuestionState::new(questions.clone(), session, output.clone());
    state.on_begin();
    assert!(output.contains_message(&Message::QuestionBegins(1, 3, questions[0].clone())));
}

#[test]
fn begin_activates_session() {
    let ctx = ContextBuilder::new().build();
    assert!(ctx.session.read().is_active());
}

#[test]
fn correct_answer_increments_count() {
    let mut ctx = ContextBuilder::new().build();
    let option = ctx.correct_option_number();
    ctx.state.select_answer(option).unwrap();
    ctx.state.submit_answer().unwrap();
    assert_eq!(ctx.session.read().correct_answers(), 1);
    assert_eq!(ctx.session.read().current_question_index(), 1);
}

#[test]
fn wrong_answer_leaves_count_unchanged() {
    let mut ctx = ContextBuilder::new().build();
    let option = ctx.wrong_option_number();
    ctx.state.select_answer(option).unwrap();
    ctx.state.submit_answer().unwrap();
    assert_eq!(ctx.session.read().correct_answers(), 0);
    assert_eq!(ctx.session.read().current_question_index(), 1);
}

#[test]
fn cannot_submit_without_a_selection() {
    let mut ctx = ContextBuilder::new().build();
    assert!(ctx.state.submit_answer().is_err());
    assert_eq!(ctx.session.read().current_question_index(), 0);
}

#[test]
fn selection_is_cleared_after_each_submission() {
    let mut ctx = ContextBuilder::new().build();
    let option = ctx.correct_option_number();
    ctx.state.select_answer(option).unwrap();
    ctx.state.submit_answer().unwrap();
    assert!(ctx.state.submit_answer().is_err());
}

#[test]
fn rejects_out_of_range_options() {
    let mut ctx = ContextBuilder::new().build();
    assert!(ctx.state.select_answer(0).is_err());
    assert!(ctx.state.select_answer(5).is_err());
}

#[test]
fn advancing_announces_the_next_question() {
    let mut ctx = ContextBuilder::new().build();
    let option = ctx.correct_option_number();
    ctx.state.select_answer(option).unwrap();
    ctx.output.flush();
    ctx.state.submit_answer().unwrap();
    assert!(ctx
        .output
        .contains_message(&Message::QuestionBegins(2, 3, ctx.questions[1].clone())));
}

#[test]
fn finishes_after_submitting_the_last_answer() {
    let mut ctx = ContextBuilder::new().question_count(2).build();
    for _ in 0..2 {
        let option = ctx.correct_option_number();
        ctx.state.select_answer(option).unwrap();
        ctx.state.submit_answer().unwrap();
    }
    assert!(ctx.state.is_over());
    assert_eq!(ctx.session.read().correct_answers(), 2);
}

#[test]
fn countdown_drops_once_per_second() {
    let mut ctx = ContextBuilder::new().build();
    ctx.state.on_tick(Duration::from_secs(1));
    assert_eq!(
        ctx.session.read().time_left_seconds(),
        QUIZ_DURATION_SECONDS - 1
    );
    ctx.state.on_tick(Duration::from_millis(500));
    assert_eq!(
        ctx.session.read().time_left_seconds(),
        QUIZ_DURATION_SECONDS - 1
    );
    ctx.state.on_tick(Duration::from_millis(500));
    assert_eq!(
        ctx.session.read().time_left_seconds(),
        QUIZ_DURATION_SECONDS - 2
    );
}

#[test]
fn countdown_never_drops_below_zero() {
    let ctx = ContextBuilder::new().build();
    ctx.session.write().set_time_left_seconds(2);
    let mut state = ctx.state;
    state.on_tick(Duration::from_secs(10));
    assert_eq!(ctx.session.read().time_left_seconds(), 0);
    assert!(state.is_over());
}

#[test]
fn countdown_ignores_inactive_sessions() {
    let ctx = ContextBuilder::new().build();
    ctx.session.write().set_active(false);
    let mut state = ctx.state;
    state.on_tick(Duration::from_secs(5));
    assert_eq!(
        ctx.session.read().time_left_seconds(),
        QUIZ_DURATION_SECONDS
    );
}

#[test]
fn expiry_discards_the_pending_selection() {
    let mut ctx = ContextBuilder::new().build();
    let option = ctx.correct_option_number();
    ctx.state.select_answer(option).unwrap();
    ctx.session.write().set_time_left_seconds(1);
    ctx.state.on_tick(Duration::from_secs(1));
    assert!(ctx.state.is_over());
    ctx.state.on_end();
    assert_eq!(ctx.session.read().correct_answers(), 0);
    assert!(ctx.output.contains_message(&Message::TimeUp));
}

#[test]
fn announces_time_remaining_thresholds() {
    let mut ctx = ContextBuilder::new().build();
    ctx.session.write().set_time_left_seconds(61);
    ctx.state.on_tick(Duration::from_secs(1));
    assert!(ctx.output.contains_message(&Message::TimeRemaining(60)));

    ctx.session.write().set_time_left_seconds(11);
    ctx.state.on_tick(Duration::from_secs(1));
    assert!(ctx.output.contains_message(&Message::TimeRemaining(10)));
}
