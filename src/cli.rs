//! Command-line interface for strictly_minimax.

use clap::{Parser, Subcommand};
use strictly_minimax::Player;

/// Strictly Minimax - perfect tic-tac-toe move oracle
#[derive(Parser, Debug)]
#[command(name = "strictly_minimax")]
#[command(about = "Exhaustive minimax move oracle for tic-tac-toe", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<std::path::PathBuf>,

    /// Mark the engine plays (X or O), overriding the config
    #[arg(long, global = true)]
    pub ai: Option<Player>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Answer a play request with the automated player's move (JSON in, JSON out)
    Move {
        /// Request body; read from stdin when omitted
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Print the status of a board without moving
    Evaluate {
        /// Request body; read from stdin when omitted
        #[arg(short, long)]
        board: Option<String>,
    },

    /// Play a console game against the engine (X moves first)
    Play,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ai_mark_is_case_insensitive() {
        let cli = Cli::try_parse_from(["strictly_minimax", "play", "--ai", "x"]).unwrap();
        assert_eq!(cli.ai, Some(Player::X));
        assert!(matches!(cli.command, Command::Play));
    }

    #[test]
    fn test_unknown_ai_mark_rejected() {
        assert!(Cli::try_parse_from(["strictly_minimax", "--ai", "Z", "play"]).is_err());
    }

    #[test]
    fn test_move_reads_board_argument() {
        let cli = Cli::try_parse_from(["strictly_minimax", "move", "--board", "{}"]).unwrap();
        match cli.command {
            Command::Move { board } => assert_eq!(board.as_deref(), Some("{}")),
            other => panic!("unexpected command {:?}", other),
        }
    }
}
