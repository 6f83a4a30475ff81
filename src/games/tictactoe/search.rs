//! Exhaustive minimax search for the automated player.
//!
//! The search walks the complete remaining game tree. Each node places a
//! mark on a working copy of the board, recurses, and clears the cell
//! again before trying the next sibling, so every branch sees its parent
//! exactly as it was.
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Move, Player, Searcher};
//!
//! let mut board = Board::new();
//! board.place(Move::new(0, 0).unwrap(), Player::O);
//! board.place(Move::new(0, 1).unwrap(), Player::O);
//!
//! let searcher = Searcher::new(Player::O);
//! assert_eq!(searcher.best_move(&board).unwrap(), Move::new(0, 2).unwrap());
//! ```

use super::rules::{Outcome, evaluate};
use super::{Board, Move, Player};
use tracing::{debug, instrument, warn};

/// Comparison value of a position for the automated player.
pub type Score = i32;

/// Score of a position the automated player has won.
pub const WIN: Score = 10;
/// Score of a position the opponent has won.
pub const LOSS: Score = -10;
/// Score of a drawn position.
pub const DRAW: Score = 0;

/// Maps a terminal outcome to its score; `None` while undecided.
pub fn score_of(outcome: Outcome) -> Option<Score> {
    match outcome {
        Outcome::AiWins => Some(WIN),
        Outcome::OpponentWins => Some(LOSS),
        Outcome::Draw => Some(DRAW),
        Outcome::Undecided => None,
    }
}

/// Error returned when the search is asked to move on a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum SearchError {
    /// The board is already terminal; there is nothing to search.
    #[display("Game is already over ({})", _0)]
    GameOver(Outcome),
}

impl std::error::Error for SearchError {}

/// Result of a top-level search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Chosen move (first best in row-major order).
    pub best_move: Move,
    /// Guaranteed score of the chosen move.
    pub score: Score,
    /// Positions visited below the root.
    pub nodes: u64,
}

/// Minimax searcher playing on behalf of one side.
///
/// The searcher holds no state between calls. Every call copies the
/// caller's board into its own working board, so a single searcher can
/// be shared freely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Searcher {
    ai: Player,
}

impl Searcher {
    /// Creates a searcher maximizing for `ai`.
    pub fn new(ai: Player) -> Self {
        Self { ai }
    }

    /// The side this searcher plays for.
    pub fn ai(&self) -> Player {
        self.ai
    }

    /// Classifies the board from this searcher's side.
    #[instrument(level = "trace", skip(self, board), fields(ai = %self.ai))]
    pub fn evaluate(&self, board: &Board) -> Outcome {
        evaluate(board, self.ai)
    }

    /// Returns the move that maximizes the automated player's guaranteed score.
    ///
    /// Ties keep the first move in row-major order. The caller's board is
    /// not modified.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if the board is already terminal.
    #[instrument(skip(self, board), fields(ai = %self.ai))]
    pub fn best_move(&self, board: &Board) -> Result<Move, SearchError> {
        self.search(board).map(|report| report.best_move)
    }

    /// Runs the search and returns the chosen move with diagnostics.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::GameOver`] if the board is already terminal.
    #[instrument(skip(self, board), fields(ai = %self.ai))]
    pub fn search(&self, board: &Board) -> Result<SearchReport, SearchError> {
        let outcome = self.evaluate(board);
        if outcome.is_terminal() {
            warn!(%outcome, "Search requested on a finished game");
            return Err(SearchError::GameOver(outcome));
        }

        let mut work = *board;
        let mut walk = Walk {
            ai: self.ai,
            nodes: 0,
        };
        let mut best: Option<(Move, Score)> = None;

        for mv in Move::ALL {
            if !work.is_empty(mv) {
                continue;
            }
            work.place(mv, self.ai);
            let score = walk.minimax(&mut work, false);
            work.clear(mv);

            debug!(%mv, score, "Scored root move");
            if best.is_none_or(|(_, best_score)| score > best_score) {
                best = Some((mv, score));
            }
        }
        debug_assert_eq!(&work, board);

        // An undecided board always has an empty cell.
        let (best_move, score) = best.ok_or(SearchError::GameOver(outcome))?;
        debug!(%best_move, score, nodes = walk.nodes, "Search complete");

        Ok(SearchReport {
            best_move,
            score,
            nodes: walk.nodes,
        })
    }
}

/// Per-call search state.
struct Walk {
    ai: Player,
    nodes: u64,
}

impl Walk {
    /// Scores `board` with `maximizing` telling whose turn it is.
    ///
    /// Leaves `board` exactly as it found it.
    fn minimax(&mut self, board: &mut Board, maximizing: bool) -> Score {
        self.nodes += 1;

        if let Some(score) = score_of(evaluate(board, self.ai)) {
            return score;
        }

        let (mark, mut best) = if maximizing {
            (self.ai, Score::MIN)
        } else {
            (self.ai.opponent(), Score::MAX)
        };

        for mv in Move::ALL {
            if !board.is_empty(mv) {
                continue;
            }
            board.place(mv, mark);
            let score = self.minimax(board, !maximizing);
            board.clear(mv);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }
}
