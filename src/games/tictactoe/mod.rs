//! Tic-tac-toe: board types, rules and the minimax search.

pub mod rules;
pub mod search;
mod types;

pub use rules::Outcome;
pub use search::{Score, SearchError, SearchReport, Searcher};
pub use types::{Board, Move, OffBoard, Player, Square};
