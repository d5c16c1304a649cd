use anyhow::*;

use crate::bank::question::OPTION_COUNT;
use crate::commands::GameHandle;

const ERROR_ADD_USAGE: &'static str =
    "Usage: add <category> | <question> | <opt> | <opt> | <opt> | <opt> | <correct #>";
const ERROR_EDIT_USAGE: &'static str =
    "Usage: edit <question-id> | <question> | <opt> | <opt> | <opt> | <opt> | <correct #>";

pub fn questions(game: &GameHandle, args: &str) -> Result<()> {
    game.lock().list_questions(args)
}

pub fn add(game: &GameHandle, args: &str) -> Result<()> {
    let fields = split_fields(args);
    if fields.len() != OPTION_COUNT + 3 {
        return Err(anyhow!(ERROR_ADD_USAGE));
    }
    let options = fields[2..2 + OPTION_COUNT].to_vec();
    let correct_answer = correct_option(&options, &fields[2 + OPTION_COUNT])?;
    game.lock()
        .add_question(&fields[0], &fields[1], options, &correct_answer)
}

pub fn edit(game: &GameHandle, args: &str) -> Result<()> {
    let fields = split_fields(args);
    if fields.len() != OPTION_COUNT + 3 {
        return Err(anyhow!(ERROR_EDIT_USAGE));
    }
    let options = fields[2..2 + OPTION_COUNT].to_vec();
    let correct_answer = correct_option(&options, &fields[2 + OPTION_COUNT])?;
    game.lock()
        .update_question(&fields[0], &fields[1], options, &correct_answer)
}

pub fn remove(game: &GameHandle, args: &str) -> Result<()> {
    if args.is_empty() {
        return Err(anyhow!("Usage: remove <question-id>"));
    }
    game.lock().remove_question(args)
}

fn split_fields(args: &str) -> Vec<String> {
    args.split('|').map(|field| field.trim().to_owned()).collect()
}

fn correct_option(options: &[String], field: &str) -> Result<String> {
    let number: usize = field
        .parse()
        .context("Could not parse correct option number")?;
    number
        .checked_sub(1)
        .and_then(|index| options.get(index))
        .cloned()
        .with_context(|| format!("Correct option number must be between 1 and {}", OPTION_COUNT))
}
