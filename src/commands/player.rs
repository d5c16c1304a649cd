use anyhow::*;

use crate::commands::GameHandle;
use crate::output::console::format_time;

const DEFAULT_LEADERBOARD_SIZE: usize = 10;

pub fn categories(game: &GameHandle) -> Result<()> {
    game.lock().categories()
}

pub fn play(game: &GameHandle, args: &str) -> Result<()> {
    game.lock().select_category(args)
}

pub fn pick(game: &GameHandle, args: &str) -> Result<()> {
    let option_number: usize = args.parse().context("Could not parse option number")?;
    game.lock().select_answer(option_number)
}

pub fn next(game: &GameHandle) -> Result<()> {
    game.lock().submit_answer()
}

pub fn status(game: &GameHandle) -> Result<()> {
    let game = game.lock();
    match game.current_category() {
        None => println!("No quiz in progress. `play <category>` to start one."),
        Some(category) => {
            let session = game.session_snapshot();
            if game.phase_label() == "question" {
                println!(
                    "{}: question {}, {} remaining, {} correct so far",
                    category.name,
                    session.current_question_index() + 1,
                    format_time(session.time_left_seconds()),
                    session.correct_answers()
                );
            } else {
                println!("{} ({})", category.name, game.phase_label());
            }
        }
    }
    Ok(())
}

pub fn leaderboard(game: &GameHandle, args: &str) -> Result<()> {
    let limit = if args.is_empty() {
        DEFAULT_LEADERBOARD_SIZE
    } else {
        args.parse().context("Could not parse leaderboard size")?
    };
    game.lock().leaderboard(limit)
}

pub fn restart(game: &GameHandle) -> Result<()> {
    game.lock().restart();
    Ok(())
}
