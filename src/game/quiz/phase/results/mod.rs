use std::sync::Arc;
use std::time::Duration;

use crate::fetch::{FetchHandle, FetchState};
use crate::game::quiz::State;
use crate::game::session::SessionHandle;
use crate::output::{Message, QuizOutput};
use crate::provider::ScoreRecorder;
use crate::scores::ScoreEntry;


/// Terminal phase of a finished quiz. A failed leaderboard save only
/// produces a notice.
pub struct ResultsState<O> {
    entry: ScoreEntry,
    category_name: String,
    question_count: usize,
    session: SessionHandle,
    recorder: Arc<dyn ScoreRecorder>,
    save: Option<FetchHandle<()>>,
    output: O,
}

impl<O: QuizOutput> ResultsState<O> {
    pub fn new(
        entry: ScoreEntry,
        category_name: String,
        question_count: usize,
        session: SessionHandle,
        recorder: Arc<dyn ScoreRecorder>,
        output: O,
    ) -> Self {
        ResultsState {
            entry,
            category_name,
            question_count,
            session,
            recorder,
            save: None,
            output,
        }
    }
}

impl<O: QuizOutput> State for ResultsState<O> {
    fn on_begin(&mut self) {
        self.output.say(&Message::QuizComplete {
            entry: self.entry.clone(),
            category: self.category_name.clone(),
            question_count: self.question_count,
        });

        let recorder = Arc::clone(&self.recorder);
        let entry = self.entry.clone();
        let session_id = self.session.read().id();
        self.save = Some(FetchHandle::spawn(session_id, move || {
            recorder.record_score(&entry)
        }));
    }

    fn on_tick(&mut self, _dt: Duration) {
        let save = match self.save.take() {
            Some(save) => save,
            None => return,
        };
        if save.session_id() != self.session.read().id() {
            // The player already moved on.
            eprintln!("Discarding stale score save");
            return;
        }
        match save.get_state() {
            FetchState::InProgress => self.save = Some(save),
            FetchState::Success(_) => (),
            FetchState::Failure(error) => self.output.say(&Message::ScoreSaveFailed(error)),
        }
    }

    fn on_end(&mut self) {}

    fn is_over(&self) -> bool {
        false
    }
}
