//! Strictly Minimax - Unified CLI
//!
//! Answers play requests, classifies boards, or runs a console game.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use std::io::{Read, Write};
use strictly_minimax::{
    ConsolePlayer, Contestant, EngineConfig, EnginePlayer, Match, MatchEvent, Oracle, Player,
    PlayRequest,
};
use tracing::{debug, info, instrument};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = EngineConfig::load(cli.config.as_deref())?;
    if let Some(ai) = cli.ai {
        config = config.with_ai_mark(ai);
    }

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.log_filter())),
        )
        .with_writer(std::io::stderr)
        .init();
    debug!(?config, "Configuration resolved");

    match cli.command {
        Command::Move { board } => run_move(&config, board),
        Command::Evaluate { board } => run_evaluate(&config, board),
        Command::Play => run_play(&config),
    }
}

/// Reads the request body from the argument or stdin.
fn read_request(board: Option<String>) -> Result<PlayRequest> {
    let body = match board {
        Some(body) => body,
        None => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("Failed to read request from stdin")?;
            body
        }
    };
    serde_json::from_str(&body).context("Malformed request")
}

/// Answer one play request
#[instrument(skip_all)]
fn run_move(config: &EngineConfig, board: Option<String>) -> Result<()> {
    let request = read_request(board)?;
    let response = Oracle::new(config).respond(&request)?;
    println!("{}", serde_json::to_string(&response)?);
    Ok(())
}

/// Print the status of a board
#[instrument(skip_all)]
fn run_evaluate(config: &EngineConfig, board: Option<String>) -> Result<()> {
    let request = read_request(board)?;
    let status = Oracle::new(config).status(&request)?;
    println!("{}", status);
    Ok(())
}

/// Play a console game against the engine
#[instrument(skip_all, fields(ai = %config.ai_mark()))]
fn run_play(config: &EngineConfig) -> Result<()> {
    info!("Starting console game");
    let ai = *config.ai_mark();

    let human: Box<dyn Contestant> = Box::new(ConsolePlayer::new(
        "You",
        std::io::stdin().lock(),
        std::io::stdout(),
    ));
    let engine: Box<dyn Contestant> = Box::new(EnginePlayer::new("Engine"));

    let (player_x, player_o) = match ai {
        Player::X => (engine, human),
        Player::O => (human, engine),
    };

    let report = Match::new(player_x, player_o).run(|event| {
        if let MatchEvent::MoveMade { player, mark, mv, .. } = event {
            println!("{} ({}) plays {} {}", player, mark, mv.label(), mv);
        }
    })?;

    println!("\n{}\n", report.board.display());
    match report.winner {
        Some(winner) if winner == ai => println!("The engine wins."),
        Some(_) => println!("You win."),
        None => println!("Draw."),
    }
    std::io::stdout().flush()?;
    Ok(())
}
