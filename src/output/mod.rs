use crate::bank::{Category, Question};
use crate::scores::ScoreEntry;

pub mod console;
#[cfg(test)]
pub mod mock;

#[derive(Clone, Debug, PartialEq)]
pub enum Message {
    Welcome(String),
    CategoryList(Vec<Category>),
    LoadingQuestions(String),
    QuestionBegins(usize, usize, Question),
    AnswerSelected(String),
    TimeRemaining(u32),
    TimeUp,
    QuizComplete {
        entry: ScoreEntry,
        category: String,
        question_count: usize,
    },
    NoQuestions(String),
    LoadFailed(String),
    ScoreSaveFailed(String),
    LeaderboardRecap(Vec<ScoreEntry>),
    QuestionList(Vec<Question>),
    QuestionAdded(String),
    QuestionUpdated(String),
    QuestionRemoved(String),
}

pub trait QuizOutput {
    fn say(&self, message: &Message);
}
