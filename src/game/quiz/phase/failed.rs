use std::time::Duration;

use crate::game::quiz::State;
use crate::output::{Message, QuizOutput};

/// Terminal phase for a failed question fetch.
pub struct FailedState<O> {
    error: String,
    output: O,
}

impl<O> FailedState<O> {
    pub fn new(error: String, output: O) -> Self {
        FailedState { error, output }
    }
}

impl<O: QuizOutput> State for FailedState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::LoadFailed(self.error.clone()));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
