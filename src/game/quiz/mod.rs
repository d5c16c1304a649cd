use anyhow::*;
use std::sync::Arc;
use std::time::Duration;

use self::phase::*;
use self::settings::Settings;
use crate::bank::{Category, Question};
use crate::fetch::FetchState;
use crate::game::player::Player;
use crate::game::score::compute_score;
use crate::game::session::SessionHandle;
use crate::output::QuizOutput;
use crate::provider::{QuestionProvider, ScoreRecorder};
use crate::scores::ScoreEntry;

mod phase;
pub mod settings;


trait State {
    fn on_begin(&mut self);
    fn on_tick(&mut self, dt: Duration);
    fn on_end(&mut self);
    fn is_over(&self) -> bool;
}

enum Phase<O> {
    Loading(LoadingState<O>),
    Question(QuestionState<O>),
    Results(ResultsState<O>),
    Empty(EmptyState<O>),
    Failed(FailedState<O>),
}

impl<O: QuizOutput> Phase<O> {
    fn get_state(&mut self) -> &mut dyn State {
        match self {
            Phase::Loading(s) => s,
            Phase::Question(s) => s,
            Phase::Results(s) => s,
            Phase::Empty(s) => s,
            Phase::Failed(s) => s,
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Phase::Loading(_) => "loading",
            Phase::Question(_) => "question",
            Phase::Results(_) => "results",
            Phase::Empty(_) => "empty",
            Phase::Failed(_) => "failed",
        }
    }
}

enum Transition {
    BeginQuestions(Vec<Question>),
    NoQuestions,
    LoadFailed(String),
    Finish,
}

pub struct Quiz<O: QuizOutput + Clone> {
    player: Player,
    category: Category,
    recorder: Arc<dyn ScoreRecorder>,
    session: SessionHandle,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput + Clone> Quiz<O> {
    pub fn new(
        player: Player,
        category: Category,
        provider: Arc<dyn QuestionProvider>,
        recorder: Arc<dyn ScoreRecorder>,
        session: SessionHandle,
        settings: &Settings,
        output: O,
    ) -> Quiz<O> {
        let loading = LoadingState::new(
            category.clone(),
            provider,
            settings.question_limit,
            session.clone(),
            output.clone(),
        );
        let mut quiz = Quiz {
            player,
            category,
            recorder,
            session,
            current_phase: Phase::Loading(loading),
            output,
        };
        quiz.current_phase.get_state().on_begin();
        quiz
    }

    pub fn tick(&mut self, dt: Duration) {
        let state = self.current_phase.get_state();
        state.on_tick(dt);
        if state.is_over() {
            self.advance();
        }
    }

    pub fn select_answer(&mut self, option_number: usize) -> Result<()> {
        match &mut self.current_phase {
            Phase::Question(state) => state.select_answer(option_number),
            _ => Err(anyhow!("There is no active question")),
        }
    }

    pub fn submit_answer(&mut self) -> Result<()> {
        let over = match &mut self.current_phase {
            Phase::Question(state) => {
                state.submit_answer()?;
                state.is_over()
            }
            _ => return Err(anyhow!("There is no active question")),
        };
        if over {
            self.advance();
        }
        Ok(())
    }

    pub fn category(&self) -> &Category {
        &self.category
    }

    pub fn phase_label(&self) -> &'static str {
        self.current_phase.label()
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        println!("Entering quiz phase: {}", phase.label());
        let state = self.current_phase.get_state();
        state.on_end();
        self.current_phase = phase;
        let state = self.current_phase.get_state();
        state.on_begin();
    }

    fn advance(&mut self) {
        let transition = match &self.current_phase {
            Phase::Loading(state) => match state.outcome() {
                FetchState::InProgress => None,
                FetchState::Success(questions) => {
                    if questions.is_empty() {
                        Some(Transition::NoQuestions)
                    } else {
                        Some(Transition::BeginQuestions(questions))
                    }
                }
                FetchState::Failure(error) => Some(Transition::LoadFailed(error)),
            },
            Phase::Question(_) => Some(Transition::Finish),
            Phase::Results(_) | Phase::Empty(_) | Phase::Failed(_) => None,
        };

        match transition {
            None => (),
            Some(Transition::BeginQuestions(questions)) => {
                let state =
                    QuestionState::new(questions, self.session.clone(), self.output.clone());
                self.set_current_phase(Phase::Question(state));
            }
            Some(Transition::NoQuestions) => {
                let state = EmptyState::new(self.category.name.clone(), self.output.clone());
                self.set_current_phase(Phase::Empty(state));
            }
            Some(Transition::LoadFailed(error)) => {
                let state = FailedState::new(error, self.output.clone());
                self.set_current_phase(Phase::Failed(state));
            }
            Some(Transition::Finish) => self.finish_quiz(),
        }
    }

    fn finish_quiz(&mut self) {
        let question_count = match &self.current_phase {
            Phase::Question(state) => state.question_count(),
            _ => return,
        };

        let entry = {
            let mut session = self.session.write();
            session.set_active(false);
            ScoreEntry {
                player: self.player.storage_name.clone(),
                category_id: self.category.id.clone(),
                score: compute_score(session.time_left_seconds(), session.correct_answers()),
                time_taken_seconds: session.time_taken_seconds(),
                correct_answers: session.correct_answers(),
            }
        };

        let state = ResultsState::new(
            entry,
            self.category.name.clone(),
            question_count,
            self.session.clone(),
            Arc::clone(&self.recorder),
            self.output.clone(),
        );
        self.set_current_phase(Phase::Results(state));
    }
}
