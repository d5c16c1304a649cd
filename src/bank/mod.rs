use anyhow::*;
use itertools::Itertools;
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::convert::TryInto;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::provider::QuestionProvider;

pub mod category;
pub mod question;


pub use category::{Category, CategoryId};
pub use question::{generate_question_id, validate_question, Question, QuestionId, RawQuestion};

const CATEGORIES_FILE: &'static str = "categories.csv";
const QUESTIONS_FILE: &'static str = "questions.csv";
const ADMINS_FILE: &'static str = "admins.csv";

#[derive(Deserialize, Serialize)]
struct AdminRow {
    player: String,
}

/// File-backed question bank. Mutations persist immediately.
pub struct QuestionBank {
    directory: PathBuf,
    categories: Vec<Category>,
    questions: Vec<Question>,
    admins: HashSet<String>,
}

impl QuestionBank {
    pub fn open(directory: &Path) -> Result<QuestionBank> {
        std::fs::create_dir_all(directory)
            .with_context(|| format!("Could not create data directory {:?}", directory))?;

        let mut bank = QuestionBank {
            directory: directory.to_path_buf(),
            categories: Vec::new(),
            questions: Vec::new(),
            admins: HashSet::new(),
        };

        let categories_path = bank.directory.join(CATEGORIES_FILE);
        if categories_path.exists() {
            bank.categories = bank.load_categories(&categories_path)?;
        } else {
            bank.categories = default_categories();
            bank.save_categories()?;
        }

        let questions_path = bank.directory.join(QUESTIONS_FILE);
        if questions_path.exists() {
            bank.questions = bank.load_questions(&questions_path)?;
        }

        let admins_path = bank.directory.join(ADMINS_FILE);
        if admins_path.exists() {
            bank.admins = bank.load_admins(&admins_path)?;
        }

        Ok(bank)
    }

    fn load_categories(&self, path: &Path) -> Result<Vec<Category>> {
        let file = File::open(path)?;
        let mut csv_reader = csv::Reader::from_reader(file);
        let mut categories = Vec::new();
        for category in csv_reader.deserialize() {
            let category: Category = category?;
            categories.push(category);
        }
        Ok(categories)
    }

    fn load_questions(&self, path: &Path) -> Result<Vec<Question>> {
        let file = File::open(path)?;
        let mut csv_reader = csv::Reader::from_reader(file);
        let mut questions = Vec::new();
        for question in csv_reader.deserialize() {
            let raw_question: RawQuestion = question?;
            questions.push(raw_question.try_into()?);
        }
        Ok(questions)
    }

    fn load_admins(&self, path: &Path) -> Result<HashSet<String>> {
        let file = File::open(path)?;
        let mut csv_reader = csv::Reader::from_reader(file);
        let mut admins = HashSet::new();
        for row in csv_reader.deserialize() {
            let row: AdminRow = row?;
            admins.insert(row.player);
        }
        Ok(admins)
    }

    fn save_categories(&self) -> Result<()> {
        let path = self.directory.join(CATEGORIES_FILE);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Could not write {:?}", path))?;
        for category in &self.categories {
            writer.serialize(category)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn save_questions(&self) -> Result<()> {
        let path = self.directory.join(QUESTIONS_FILE);
        let mut writer = csv::Writer::from_path(&path)
            .with_context(|| format!("Could not write {:?}", path))?;
        for question in &self.questions {
            let raw: RawQuestion = question.into();
            writer.serialize(raw)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn is_admin(&self, storage_name: &str) -> bool {
        self.admins.contains(storage_name)
    }

    pub fn categories(&self) -> &Vec<Category> {
        &self.categories
    }

    pub fn category(&self, id: &CategoryId) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == *id)
    }

    /// Questions of a category in their stored sequence order.
    pub fn questions_in(&self, category_id: &CategoryId) -> Vec<Question> {
        self.questions
            .iter()
            .filter(|q| q.category_id == *category_id)
            .sorted_by_key(|q| q.position)
            .cloned()
            .collect()
    }

    pub fn add_question(
        &mut self,
        category_id: &CategoryId,
        text: &str,
        options: Vec<String>,
        correct_answer: &str,
    ) -> Result<QuestionId> {
        validate_question(text, &options, correct_answer)?;
        self.category(category_id)
            .with_context(|| format!("Unknown category {}", category_id))?;

        let id = loop {
            let id = generate_question_id();
            if !self.questions.iter().any(|q| q.id == id) {
                break id;
            }
        };

        let question = Question {
            id: id.clone(),
            category_id: category_id.clone(),
            position: self.next_position(category_id),
            text: text.trim().to_owned(),
            options,
            correct_answer: correct_answer.to_owned(),
        };
        self.questions.push(question);
        self.save_questions()?;
        Ok(id)
    }

    pub fn update_question(
        &mut self,
        id: &QuestionId,
        text: &str,
        options: Vec<String>,
        correct_answer: &str,
    ) -> Result<()> {
        validate_question(text, &options, correct_answer)?;
        let question = self
            .questions
            .iter_mut()
            .find(|q| q.id == *id)
            .with_context(|| format!("No question with id {}", id))?;
        question.text = text.trim().to_owned();
        question.options = options;
        question.correct_answer = correct_answer.to_owned();
        self.save_questions()?;
        Ok(())
    }

    pub fn remove_question(&mut self, id: &QuestionId) -> Result<()> {
        let count_before = self.questions.len();
        self.questions.retain(|q| q.id != *id);
        if self.questions.len() == count_before {
            return Err(anyhow!("No question with id {}", id));
        }
        self.save_questions()?;
        Ok(())
    }

    fn next_position(&self, category_id: &CategoryId) -> u32 {
        self.questions
            .iter()
            .filter(|q| q.category_id == *category_id)
            .map(|q| q.position)
            .max()
            .map(|p| p + 1)
            .unwrap_or(1)
    }
}

fn default_categories() -> Vec<Category> {
    let seed = [
        ("science", "Science", "Physics, chemistry and biology", "flask"),
        ("geography", "Geography", "Countries, capitals and landscapes", "globe"),
        ("literature", "Literature", "Books and the people who wrote them", "book-open"),
        ("music", "Music", "Artists, albums and instruments", "music"),
        ("movies", "Movies", "Cinema from silents to streaming", "film"),
        ("sports", "Sports", "Games, records and champions", "trophy"),
        ("technology", "Technology", "Computers, gadgets and the web", "cpu"),
        ("history", "History", "Events that shaped the world", "landmark"),
    ];
    seed.iter()
        .map(|(id, name, description, icon)| Category {
            id: CategoryId((*id).to_owned()),
            name: (*name).to_owned(),
            description: (*description).to_owned(),
            icon: (*icon).to_owned(),
        })
        .collect()
}

pub type BankHandle = Arc<RwLock<QuestionBank>>;

impl QuestionProvider for RwLock<QuestionBank> {
    fn list_categories(&self) -> Result<Vec<Category>> {
        Ok(self.read().categories().clone())
    }

    fn list_questions(&self, category_id: &CategoryId, limit: usize) -> Result<Vec<Question>> {
        let bank = self.read();
        bank.category(category_id)
            .with_context(|| format!("Unknown category {}", category_id))?;
        let mut questions = bank.questions_in(category_id);
        questions.truncate(limit);
        Ok(questions)
    }
}
