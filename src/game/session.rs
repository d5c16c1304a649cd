use parking_lot::RwLock;
use std::sync::Arc;

pub const QUIZ_DURATION_SECONDS: u32 = 300;

/// Identity of one quiz attempt. Changes on every reset so that work spawned
/// for an earlier attempt can be recognized and discarded.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct SessionId(u64);

#[derive(Clone, Debug)]
pub struct QuizSession {
    id: SessionId,
    current_question_index: usize,
    time_left_seconds: u32,
    is_active: bool,
    correct_answers: u32,
}

impl QuizSession {
    pub fn new() -> Self {
        QuizSession {
            id: SessionId(0),
            current_question_index: 0,
            time_left_seconds: QUIZ_DURATION_SECONDS,
            is_active: false,
            correct_answers: 0,
        }
    }

    pub fn id(&self) -> SessionId {
        self.id
    }

    pub fn current_question_index(&self) -> usize {
        self.current_question_index
    }

    pub fn time_left_seconds(&self) -> u32 {
        self.time_left_seconds
    }

    pub fn is_active(&self) -> bool {
        self.is_active
    }

    pub fn correct_answers(&self) -> u32 {
        self.correct_answers
    }

    pub fn set_current_question_index(&mut self, index: usize) {
        self.current_question_index = index;
    }

    pub fn set_time_left_seconds(&mut self, seconds: u32) {
        self.time_left_seconds = seconds;
    }

    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    pub fn set_correct_answers(&mut self, correct: u32) {
        self.correct_answers = correct;
    }

    pub fn advance_question(&mut self) {
        self.current_question_index += 1;
    }

    pub fn record_correct_answer(&mut self) {
        self.correct_answers += 1;
    }

    pub fn time_taken_seconds(&self) -> u32 {
        QUIZ_DURATION_SECONDS - self.time_left_seconds
    }

    pub fn reset(&mut self) {
        self.id = SessionId(self.id.0 + 1);
        self.current_question_index = 0;
        self.time_left_seconds = QUIZ_DURATION_SECONDS;
        self.is_active = false;
        self.correct_answers = 0;
    }
}

pub type SessionHandle = Arc<RwLock<QuizSession>>;
