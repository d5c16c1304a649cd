use anyhow::*;
use parking_lot::Mutex;
use std::sync::Arc;

use crate::game::Game;
use crate::output::console::ConsoleOutput;

pub mod admin;
pub mod player;

pub type GameHandle = Arc<Mutex<Game<ConsoleOutput>>>;

/// Routes one input line to its command. Returns false when the player asked to quit.
pub fn dispatch(game: &GameHandle, line: &str) -> bool {
    let mut parts = line.splitn(2, char::is_whitespace);
    let command = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    let result = match command {
        "" => Ok(()),
        "help" => {
            print_help();
            Ok(())
        }
        "quit" | "exit" => return false,
        "categories" => player::categories(game),
        "play" => player::play(game, args),
        "pick" => player::pick(game, args),
        "next" | "finish" => player::next(game),
        "status" => player::status(game),
        "leaderboard" => player::leaderboard(game, args),
        "restart" => player::restart(game),
        "questions" => admin::questions(game, args),
        "add" => admin::add(game, args),
        "edit" => admin::edit(game, args),
        "remove" => admin::remove(game, args),
        other => Err(anyhow!("Unknown command: {} (try `help`)", other)),
    };

    if let Err(e) = result {
        eprintln!("{:#}", e);
    }
    true
}

fn print_help() {
    println!("Player commands:");
    println!("  categories            List quiz categories");
    println!("  play <category>       Start a quiz in a category");
    println!("  pick <number>         Select an answer option");
    println!("  next                  Lock in the selected answer");
    println!("  status                Show quiz progress and time left");
    println!("  leaderboard [count]   Show the best scores");
    println!("  restart               Abandon the quiz and go back home");
    println!("  quit                  Leave");
    println!("Admin commands:");
    println!("  questions <category>");
    println!("  add <category> | <question> | <opt> | <opt> | <opt> | <opt> | <correct #>");
    println!("  edit <question-id> | <question> | <opt> | <opt> | <opt> | <opt> | <correct #>");
    println!("  remove <question-id>");
}
