use std::time::Duration;

use crate::game::quiz::State;
use crate::output::{Message, QuizOutput};

/// Terminal phase for a category with no questions. Not an error.
pub struct EmptyState<O> {
    category_name: String,
    output: O,
}

impl<O> EmptyState<O> {
    pub fn new(category_name: String, output: O) -> Self {
        EmptyState {
            category_name,
            output,
        }
    }
}

impl<O: QuizOutput> State for EmptyState<O> {
    fn on_begin(&mut self) {
        self.output
            .say(&Message::NoQuestions(self.category_name.clone()));
    }

    fn on_tick(&mut self, _dt: Duration) {}

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
