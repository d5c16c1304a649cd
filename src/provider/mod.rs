use anyhow::*;

use crate::bank::{Category, CategoryId, Question};
use crate::scores::ScoreEntry;

#[cfg(test)]
pub mod mock;

/// Read side of the hosted question data. May be queried from worker threads.
pub trait QuestionProvider: Send + Sync {
    fn list_categories(&self) -> Result<Vec<Category>>;

    /// Questions of a category in their stored sequence order, at most `limit` of them.
    fn list_questions(&self, category_id: &CategoryId, limit: usize) -> Result<Vec<Question>>;
}

pub trait ScoreRecorder: Send + Sync {
    fn record_score(&self, entry: &ScoreEntry) -> Result<()>;

    fn top_scores(&self, limit: usize) -> Result<Vec<ScoreEntry>>;
}
