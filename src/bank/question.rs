use anyhow::*;
use rand::distributions::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::fmt;

use crate::bank::category::CategoryId;

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
pub struct QuestionId(pub String);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

pub fn generate_question_id() -> QuestionId {
    let suffix: String = rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(8)
        .collect();
    QuestionId(format!("qst-{}", suffix.to_lowercase()))
}

/// One row of questions.csv. Options are stored as four flat columns.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RawQuestion {
    pub id: String,
    pub category_id: String,
    pub position: u32,
    pub question: String,
    pub option_1: String,
    pub option_2: String,
    pub option_3: String,
    pub option_4: String,
    pub correct_answer: String,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Question {
    pub id: QuestionId,
    pub category_id: CategoryId,
    pub position: u32,
    pub text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

/// Boundary validation for question content; the session state trusts its input.
pub fn validate_question(text: &str, options: &[String], correct_answer: &str) -> Result<()> {
    if text.trim().is_empty() {
        return Err(anyhow!("Question text cannot be blank"));
    }
    if options.len() != OPTION_COUNT {
        return Err(anyhow!("A question must have exactly {} options", OPTION_COUNT));
    }
    if options.iter().any(|option| option.trim().is_empty()) {
        return Err(anyhow!("Answer options cannot be blank"));
    }
    if !options.iter().any(|option| option == correct_answer) {
        return Err(anyhow!("The correct answer must be one of the options"));
    }
    Ok(())
}

impl TryFrom<RawQuestion> for Question {
    type Error = Error;

    fn try_from(raw: RawQuestion) -> Result<Self> {
        let options = vec![raw.option_1, raw.option_2, raw.option_3, raw.option_4];
        let id = raw.id;
        validate_question(&raw.question, &options, &raw.correct_answer)
            .with_context(|| format!("Invalid question {}", id))?;
        Ok(Question {
            id: QuestionId(id),
            category_id: CategoryId(raw.category_id),
            position: raw.position,
            text: raw.question,
            options,
            correct_answer: raw.correct_answer,
        })
    }
}

impl From<&Question> for RawQuestion {
    fn from(question: &Question) -> Self {
        RawQuestion {
            id: question.id.0.clone(),
            category_id: question.category_id.0.clone(),
            position: question.position,
            question: question.text.clone(),
            option_1: question.options[0].clone(),
            option_2: question.options[1].clone(),
            option_3: question.options[2].clone(),
            option_4: question.options[3].clone(),
            correct_answer: question.correct_answer.clone(),
        }
    }
}
