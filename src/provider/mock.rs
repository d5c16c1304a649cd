use anyhow::*;
use parking_lot::RwLock;
use std::sync::Arc;

use crate::bank::{Category, CategoryId, Question};
use crate::provider::{QuestionProvider, ScoreRecorder};
use crate::scores::ScoreEntry;

#[derive(Clone)]
pub struct MockQuestionProvider {
    categories: Vec<Category>,
    questions: Vec<Question>,
    fail: bool,
}

impl MockQuestionProvider {
    pub fn new(categories: Vec<Category>, questions: Vec<Question>) -> Self {
        MockQuestionProvider {
            categories,
            questions,
            fail: false,
        }
    }

    pub fn failing() -> Self {
        MockQuestionProvider {
            categories: Vec::new(),
            questions: Vec::new(),
            fail: true,
        }
    }
}

impl QuestionProvider for MockQuestionProvider {
    fn list_categories(&self) -> Result<Vec<Category>> {
        if self.fail {
            return Err(anyhow!("Could not reach the question store"));
        }
        Ok(self.categories.clone())
    }

    fn list_questions(&self, category_id: &CategoryId, limit: usize) -> Result<Vec<Question>> {
        if self.fail {
            return Err(anyhow!("Could not reach the question store"));
        }
        let mut questions: Vec<Question> = self
            .questions
            .iter()
            .filter(|q| q.category_id == *category_id)
            .cloned()
            .collect();
        questions.sort_by_key(|q| q.position);
        questions.truncate(limit);
        Ok(questions)
    }
}

#[derive(Clone)]
pub struct MockScoreRecorder {
    entries: Arc<RwLock<Vec<ScoreEntry>>>,
    fail: bool,
}

impl MockScoreRecorder {
    pub fn new() -> Self {
        MockScoreRecorder {
            entries: Arc::new(RwLock::new(Vec::new())),
            fail: false,
        }
    }

    pub fn failing() -> Self {
        MockScoreRecorder {
            entries: Arc::new(RwLock::new(Vec::new())),
            fail: true,
        }
    }

    pub fn recorded(&self) -> Vec<ScoreEntry> {
        self.entries.read().clone()
    }
}

impl ScoreRecorder for MockScoreRecorder {
    fn record_score(&self, entry: &ScoreEntry) -> Result<()> {
        if self.fail {
            return Err(anyhow!("Could not reach the score store"));
        }
        self.entries.write().push(entry.clone());
        Ok(())
    }

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>> {
        let mut entries = self.entries.read().clone();
        entries.truncate(limit);
        Ok(entries)
    }
}
