use crate::output::{Message, QuizOutput};

/// `m:ss` rendering for countdowns and leaderboard times.
pub fn format_time(seconds: u32) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Clone)]
pub struct ConsoleOutput;

impl QuizOutput for ConsoleOutput {
    fn say(&self, message: &Message) {
        match message {
            Message::Welcome(name) => {
                println!("Welcome to QuizMaster, {}!", name);
                println!("Type `help` to list commands, `categories` to see what you can play.");
            }
            Message::CategoryList(categories) => {
                println!("Categories:");
                for category in categories {
                    println!("  {:<12} {}", category.name, category.description);
                }
            }
            Message::LoadingQuestions(category) => {
                println!("Loading {} questions...", category);
            }
            Message::QuestionBegins(number, total, question) => {
                println!();
                println!("Question {}/{}: {}", number, total, question.text);
                for (index, option) in question.options.iter().enumerate() {
                    println!("  {}. {}", index + 1, option);
                }
                println!("Pick an answer with `pick <number>`, then `next` to lock it in.");
            }
            Message::AnswerSelected(answer) => {
                println!("Selected: {}", answer);
            }
            Message::TimeRemaining(seconds) => {
                println!("{} remaining!", format_time(*seconds));
            }
            Message::TimeUp => {
                println!("Time's up!");
            }
            Message::QuizComplete {
                entry,
                category,
                question_count,
            } => {
                println!();
                println!("Quiz complete! Category: {}", category);
                println!("Your score: {}", entry.score);
                println!(
                    "Correct answers: {} out of {}",
                    entry.correct_answers, question_count
                );
                println!("Time taken: {}", format_time(entry.time_taken_seconds));
                println!("Try `leaderboard` to see where you placed, or `play <category>` to go again.");
            }
            Message::NoQuestions(category) => {
                println!(
                    "No questions available for {}. Choose another category with `play <category>`.",
                    category
                );
            }
            Message::LoadFailed(error) => {
                println!("Could not load questions: {}", error);
                println!("Re-select the category to retry.");
            }
            Message::ScoreSaveFailed(error) => {
                println!("(Your score could not be saved to the leaderboard: {})", error);
            }
            Message::LeaderboardRecap(entries) => {
                println!("Leaderboard:");
                for (index, entry) in entries.iter().enumerate() {
                    println!(
                        "  #{:<3} {:<20} {:>5} pts  {}",
                        index + 1,
                        entry.player,
                        entry.score,
                        format_time(entry.time_taken_seconds)
                    );
                }
            }
            Message::QuestionList(questions) => {
                for question in questions {
                    println!("  [{}] #{} {}", question.id, question.position, question.text);
                    for option in &question.options {
                        let marker = if *option == question.correct_answer {
                            "*"
                        } else {
                            " "
                        };
                        println!("      {} {}", marker, option);
                    }
                }
            }
            Message::QuestionAdded(id) => {
                println!("Added question {}", id);
            }
            Message::QuestionUpdated(id) => {
                println!("Updated question {}", id);
            }
            Message::QuestionRemoved(id) => {
                println!("Removed question {}", id);
            }
        }
    }
}
