use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;
use std::time::Duration;

use crate::bank::{BankHandle, Category, QuestionId};
use crate::game::player::Player;
use crate::game::quiz::settings::Settings;
use crate::game::quiz::Quiz;
use crate::game::session::{QuizSession, SessionHandle};
use crate::output::{Message, QuizOutput};
use crate::provider::{QuestionProvider, ScoreRecorder};
use crate::scores::ScoresHandle;

pub mod player;
pub mod quiz;
pub mod score;
pub mod session;

enum Phase<O: QuizOutput + Clone> {
    Home,
    Quiz(Quiz<O>),
}

impl<O: QuizOutput + Clone> Phase<O> {
    fn label(&self) -> &'static str {
        match self {
            Phase::Home => "home",
            Phase::Quiz(_) => "quiz",
        }
    }
}

pub struct Game<O: QuizOutput + Clone> {
    player: Player,
    bank: BankHandle,
    scores: ScoresHandle,
    session: SessionHandle,
    settings: Settings,
    current_phase: Phase<O>,
    output: O,
}

impl<O: QuizOutput + Clone> Game<O> {
    pub fn new(player: Player, bank: BankHandle, scores: ScoresHandle, output: O) -> Game<O> {
        output.say(&Message::Welcome(player.display_name.clone()));
        Game {
            player,
            bank,
            scores,
            session: Arc::new(RwLock::new(QuizSession::new())),
            settings: Default::default(),
            current_phase: Phase::Home,
            output,
        }
    }

    pub fn tick(&mut self, dt: Duration) {
        match &mut self.current_phase {
            Phase::Home => (),
            Phase::Quiz(quiz) => quiz.tick(dt),
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn categories(&self) -> Result<()> {
        let categories = self
            .provider()
            .list_categories()
            .context("Could not load categories")?;
        self.output.say(&Message::CategoryList(categories));
        Ok(())
    }

    pub fn select_category(&mut self, name: &str) -> Result<()> {
        let category = self.find_category(name)?;

        // Selecting a category tears down whatever came before it.
        self.session.write().reset();
        let quiz = Quiz::new(
            self.player.clone(),
            category,
            self.provider(),
            self.recorder(),
            self.session.clone(),
            &self.settings,
            self.output.clone(),
        );
        self.set_current_phase(Phase::Quiz(quiz));
        Ok(())
    }

    pub fn select_answer(&mut self, option_number: usize) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => quiz.select_answer(option_number),
            Phase::Home => Err(anyhow!("No quiz in progress")),
        }
    }

    pub fn submit_answer(&mut self) -> Result<()> {
        match &mut self.current_phase {
            Phase::Quiz(quiz) => quiz.submit_answer(),
            Phase::Home => Err(anyhow!("No quiz in progress")),
        }
    }

    pub fn restart(&mut self) {
        self.session.write().reset();
        self.set_current_phase(Phase::Home);
    }

    pub fn leaderboard(&self, limit: usize) -> Result<()> {
        let entries = self
            .recorder()
            .top_scores(limit)
            .context("Could not load the leaderboard")?;
        self.output.say(&Message::LeaderboardRecap(entries));
        Ok(())
    }

    pub fn session_snapshot(&self) -> QuizSession {
        self.session.read().clone()
    }

    pub fn phase_label(&self) -> &'static str {
        match &self.current_phase {
            Phase::Home => "home",
            Phase::Quiz(quiz) => quiz.phase_label(),
        }
    }

    pub fn current_category(&self) -> Option<Category> {
        match &self.current_phase {
            Phase::Home => None,
            Phase::Quiz(quiz) => Some(quiz.category().clone()),
        }
    }

    pub fn list_questions(&self, category_name: &str) -> Result<()> {
        self.ensure_admin()?;
        let category = self.find_category(category_name)?;
        let questions = self.bank.read().questions_in(&category.id);
        self.output.say(&Message::QuestionList(questions));
        Ok(())
    }

    pub fn add_question(
        &mut self,
        category_name: &str,
        text: &str,
        options: Vec<String>,
        correct_answer: &str,
    ) -> Result<()> {
        self.ensure_admin()?;
        let category = self.find_category(category_name)?;
        let id = self
            .bank
            .write()
            .add_question(&category.id, text, options, correct_answer)?;
        self.output.say(&Message::QuestionAdded(id.to_string()));
        Ok(())
    }

    pub fn update_question(
        &mut self,
        id: &str,
        text: &str,
        options: Vec<String>,
        correct_answer: &str,
    ) -> Result<()> {
        self.ensure_admin()?;
        let id = QuestionId(id.to_owned());
        self.bank
            .write()
            .update_question(&id, text, options, correct_answer)?;
        self.output.say(&Message::QuestionUpdated(id.to_string()));
        Ok(())
    }

    pub fn remove_question(&mut self, id: &str) -> Result<()> {
        self.ensure_admin()?;
        let id = QuestionId(id.to_owned());
        self.bank.write().remove_question(&id)?;
        self.output.say(&Message::QuestionRemoved(id.to_string()));
        Ok(())
    }

    fn ensure_admin(&self) -> Result<()> {
        if self.player.is_admin {
            Ok(())
        } else {
            Err(anyhow!("Only an admin can manage the question bank"))
        }
    }

    fn find_category(&self, name: &str) -> Result<Category> {
        let name = name.trim();
        if name.is_empty() {
            return Err(anyhow!("Category name cannot be blank"));
        }
        let categories = self
            .provider()
            .list_categories()
            .context("Could not load categories")?;
        categories
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name) || c.id.0 == name)
            .with_context(|| format!("No category named {}", name))
    }

    fn provider(&self) -> Arc<dyn QuestionProvider> {
        self.bank.clone()
    }

    fn recorder(&self) -> Arc<dyn ScoreRecorder> {
        self.scores.clone()
    }

    fn set_current_phase(&mut self, phase: Phase<O>) {
        println!("Entering game phase: {}", phase.label());
        self.current_phase = phase;
    }
}
