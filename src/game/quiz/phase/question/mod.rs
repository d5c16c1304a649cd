use anyhow::*;
use std::time::Duration;

use crate::bank::Question;
use crate::game::quiz::State;
use crate::game::session::SessionHandle;
use crate::output::{Message, QuizOutput};

#[cfg(test)]
mod tests;

pub struct QuestionState<O> {
    questions: Vec<Question>,
    session: SessionHandle,
    selected_answer: Option<String>,
    tick_carry: Duration,
    answered_all: bool,
    output: O,
}

impl<O: QuizOutput> QuestionState<O> {
    pub fn new(questions: Vec<Question>, session: SessionHandle, output: O) -> Self {
        QuestionState {
            questions,
            session,
            selected_answer: None,
            tick_carry: Duration::default(),
            answered_all: false,
            output,
        }
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn select_answer(&mut self, option_number: usize) -> Result<()> {
        let question = self.current_question()?;
        let answer = option_number
            .checked_sub(1)
            .and_then(|index| question.options.get(index))
            .with_context(|| format!("There is no option {}", option_number))?
            .clone();
        self.selected_answer = Some(answer.clone());
        self.output.say(&Message::AnswerSelected(answer));
        Ok(())
    }

    pub fn submit_answer(&mut self) -> Result<()> {
        let correct_answer = self.current_question()?.correct_answer.clone();
        let selected = self
            .selected_answer
            .take()
            .context("Choose an answer before moving on")?;

        let next_index = {
            let mut session = self.session.write();
            if selected == correct_answer {
                session.record_correct_answer();
            }
            session.advance_question();
            session.current_question_index()
        };

        if next_index >= self.questions.len() {
            self.answered_all = true;
        } else {
            self.announce_question(next_index);
        }
        Ok(())
    }

    fn current_question(&self) -> Result<&Question> {
        let index = self.session.read().current_question_index();
        self.questions
            .get(index)
            .context("Question index out of range")
    }

    fn announce_question(&self, index: usize) {
        if let Some(question) = self.questions.get(index) {
            self.output.say(&Message::QuestionBegins(
                index + 1,
                self.questions.len(),
                question.clone(),
            ));
        }
    }

    fn announce_time_remaining(&self, before: u32, after: u32) {
        let threshold_10 = before > 10 && after <= 10;
        let threshold_60 = before > 60 && after <= 60;
        if threshold_10 {
            self.output.say(&Message::TimeRemaining(10));
        } else if threshold_60 {
            self.output.say(&Message::TimeRemaining(60));
        }
    }
}

impl<O: QuizOutput> State for QuestionState<O> {
    fn on_begin(&mut self) {
        let index = {
            let mut session = self.session.write();
            session.set_active(true);
            session.current_question_index()
        };
        self.announce_question(index);
    }

    fn on_tick(&mut self, dt: Duration) {
        if !self.session.read().is_active() {
            return;
        }
        self.tick_carry += dt;
        let one_second = Duration::from_secs(1);
        while self.tick_carry >= one_second {
            self.tick_carry -= one_second;
            let before = self.session.read().time_left_seconds();
            if before == 0 {
                break;
            }
            let after = before - 1;
            self.session.write().set_time_left_seconds(after);
            self.announce_time_remaining(before, after);
        }
    }

    fn on_end(&mut self) {
        // A selection that was never submitted does not count.
        self.selected_answer = None;
        if !self.answered_all {
            self.output.say(&Message::TimeUp);
        }
    }

    fn is_over(&self) -> bool {
        self.answered_all || self.session.read().time_left_seconds() == 0
    }
}
