use anyhow::*;
use parking_lot::{Mutex, RwLock};
use std::io::BufRead;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

mod bank;
mod commands;
mod fetch;
mod game;
mod output;
mod provider;
mod scores;

use crate::bank::{BankHandle, QuestionBank};
use crate::commands::GameHandle;
use crate::game::player::{sanitize_name, Player};
use crate::game::Game;
use crate::output::console::ConsoleOutput;
use crate::scores::{ScoreBoard, ScoresHandle};

const SCORES_FILE: &'static str = "scores.csv";

fn data_directory() -> Result<PathBuf> {
    if let Some(dir) = std::env::var_os("QUIZMASTER_DATA") {
        return Ok(PathBuf::from(dir));
    }
    let mut dir = directories_next::BaseDirs::new()
        .context("Could not locate system directories")?
        .data_dir()
        .to_path_buf();
    dir.push("quizmaster");
    Ok(dir)
}

fn main() {
    if let Err(e) = run() {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let name = std::env::args()
        .nth(1)
        .context("Usage: quizmaster <player-name>")?;

    let directory = data_directory()?;
    let bank: BankHandle = Arc::new(RwLock::new(QuestionBank::open(&directory)?));
    let scores: ScoresHandle = Arc::new(RwLock::new(ScoreBoard::open(
        &directory.join(SCORES_FILE),
    )?));

    // The admin capability is resolved once at sign-in and carried on the
    // player, not re-checked against the store per command.
    let is_admin = bank.read().is_admin(&sanitize_name(&name)?);
    let player = Player::new(&name, is_admin)?;

    let game: GameHandle = Arc::new(Mutex::new(Game::new(player, bank, scores, ConsoleOutput)));

    let tick_interval = game.lock().settings().tick_interval;
    {
        let game = Arc::clone(&game);
        std::thread::spawn(move || {
            let mut last_tick = Instant::now();
            loop {
                std::thread::sleep(tick_interval);
                let now = Instant::now();
                let dt = now.duration_since(last_tick);
                last_tick = now;
                game.lock().tick(dt);
            }
        });
    }

    let stdin = std::io::stdin();
    for line in stdin.lock().lines() {
        let line = line?;
        if !commands::dispatch(&game, line.trim()) {
            break;
        }
    }
    Ok(())
}
