use std::sync::Arc;
use std::time::Duration;

use crate::bank::{Category, Question};
use crate::fetch::{FetchHandle, FetchState};
use crate::game::quiz::State;
use crate::game::session::SessionHandle;
use crate::output::{Message, QuizOutput};
use crate::provider::QuestionProvider;

#[cfg(test)]
mod tests;

pub struct LoadingState<O> {
    fetch: FetchHandle<Vec<Question>>,
    outcome: FetchState<Vec<Question>>,
    category: Category,
    session: SessionHandle,
    output: O,
}

impl<O: QuizOutput> LoadingState<O> {
    pub fn new(
        category: Category,
        provider: Arc<dyn QuestionProvider>,
        question_limit: usize,
        session: SessionHandle,
        output: O,
    ) -> Self {
        let session_id = session.read().id();
        let category_id = category.id.clone();
        let fetch = FetchHandle::spawn(session_id, move || {
            provider.list_questions(&category_id, question_limit)
        });
        LoadingState {
            fetch,
            outcome: FetchState::InProgress,
            category,
            session,
            output,
        }
    }

    pub fn outcome(&self) -> FetchState<Vec<Question>> {
        self.outcome.clone()
    }
}

impl<O: QuizOutput> State for LoadingState<O> {
    fn on_begin(&mut self) {
        self.output
            .say(&Message::LoadingQuestions(self.category.name.clone()));
    }

    fn on_tick(&mut self, _dt: Duration) {
        if self.fetch.session_id() != self.session.read().id() {
            // The session moved on while the fetch was in flight.
            eprintln!("Discarding stale question fetch");
            return;
        }
        self.outcome = self.fetch.get_state();
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        match self.outcome {
            FetchState::InProgress => false,
            _ => true,
        }
    }
}
