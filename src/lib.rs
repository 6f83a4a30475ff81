//! Strictly Minimax - a perfect tic-tac-toe move oracle.
//!
//! Given any board that is still in play, the engine returns the move that
//! guarantees the automated player the best reachable result against an
//! opponent who plays perfectly. It searches the whole remaining game tree
//! with plain minimax; the tree is small enough that no depth limit or
//! time budget is needed.
//!
//! # Architecture
//!
//! - **Rules**: terminal-state classification (`evaluate`)
//! - **Search**: exhaustive minimax (`Searcher`)
//! - **Protocol**: JSON request/response codec and the one-turn driver (`play`)
//! - **Session**: contestants and a match loop for console play
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, Outcome, Player, Searcher, play};
//!
//! let mut board = Board::new();
//! board.place(Move::new(0, 0).unwrap(), Player::X);
//!
//! let searcher = Searcher::new(Player::O);
//! let response = play(&mut board, &searcher);
//! assert_eq!(response.status, Outcome::Undecided);
//! assert_eq!(response.played(), Move::new(1, 1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod config;
mod games;
mod protocol;
mod session;

// Crate-level exports - Configuration
pub use config::{ConfigError, EngineConfig, Symbols};

// Crate-level exports - Game types and search
pub use games::tictactoe::rules::{evaluate, has_won, is_draw, is_full, winning_line};
pub use games::tictactoe::search::{DRAW, LOSS, WIN, score_of};
pub use games::tictactoe::{
    Board, Move, OffBoard, Outcome, Player, Score, SearchError, SearchReport, Searcher,
    Square,
};

// Crate-level exports - Protocol
pub use protocol::{
    BoardError, Oracle, PlayRequest, PlayResponse, ProtocolError, encode_board, play,
};

// Crate-level exports - Session management
pub use session::{
    ConsolePlayer, Contestant, EnginePlayer, FirstEmptyPlayer, Match, MatchEvent, MatchReport,
};
