//! Request/response codec around the search.
//!
//! A request carries a board as three rows of cell symbols:
//!
//! ```json
//! {"board": [["X", " ", " "], [" ", "X", " "], [" ", " ", "O"]]}
//! ```
//!
//! and the response reports the status after the automated player's move
//! together with the cell it played:
//!
//! ```json
//! {"status": "undecided", "move": [0, 2]}
//! ```
//!
//! `move` is `null` when the submitted board was already finished.

use crate::config::{EngineConfig, Symbols};
use crate::games::tictactoe::{Board, Move, Outcome, Player, Searcher, Square};
use derive_more::{Display, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Incoming play request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayRequest {
    /// Board rows, top to bottom, each holding three cell symbols.
    pub board: Vec<Vec<String>>,
}

/// Response to a play request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayResponse {
    /// Game status after the move (or of the submitted board if it was finished).
    pub status: Outcome,
    /// `[row, col]` of the move played, if any.
    #[serde(rename = "move")]
    pub next_move: Option<[u8; 2]>,
}

impl PlayResponse {
    /// The move played, as a [`Move`].
    pub fn played(&self) -> Option<Move> {
        self.next_move.and_then(|[row, col]| Move::new(row, col))
    }
}

/// Structural problem with a submitted board.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum BoardError {
    /// The board does not have exactly three rows.
    #[display("Board must have 3 rows, got {}", _0)]
    RowCount(usize),

    /// A row does not have exactly three cells.
    #[display("Row {} must have 3 cells, got {}", row, len)]
    ColumnCount {
        /// Offending row.
        row: usize,
        /// Number of cells found.
        len: usize,
    },

    /// A cell holds a symbol that is neither mark nor empty.
    #[display("Unknown symbol {:?} at ({}, {})", symbol, row, col)]
    UnknownSymbol {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        col: usize,
        /// Symbol found.
        symbol: String,
    },
}

impl std::error::Error for BoardError {}

/// Errors produced while handling a raw JSON request.
#[derive(Debug, Display, From)]
pub enum ProtocolError {
    /// The request body is not valid JSON or lacks a board.
    #[display("Malformed request: {}", _0)]
    Json(serde_json::Error),

    /// The board has the wrong shape or unknown symbols.
    #[display("Invalid board: {}", _0)]
    Board(BoardError),
}

impl std::error::Error for ProtocolError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ProtocolError::Json(e) => Some(e),
            ProtocolError::Board(e) => Some(e),
        }
    }
}

impl PlayRequest {
    /// Wraps a board using the given symbols.
    pub fn from_board(board: &Board, symbols: &Symbols) -> Self {
        Self {
            board: encode_board(board, symbols),
        }
    }

    /// Decodes the board, rejecting wrong shapes and unknown symbols.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] describing the first structural problem found.
    #[instrument(skip(self, symbols))]
    pub fn decode(&self, symbols: &Symbols) -> Result<Board, BoardError> {
        if self.board.len() != 3 {
            return Err(BoardError::RowCount(self.board.len()));
        }

        let mut rows = [[Square::Empty; 3]; 3];
        for (row, cells) in self.board.iter().enumerate() {
            if cells.len() != 3 {
                return Err(BoardError::ColumnCount {
                    row,
                    len: cells.len(),
                });
            }
            for (col, symbol) in cells.iter().enumerate() {
                rows[row][col] = decode_symbol(symbol, symbols).ok_or_else(|| {
                    BoardError::UnknownSymbol {
                        row,
                        col,
                        symbol: symbol.clone(),
                    }
                })?;
            }
        }

        let board = Board::from_rows(rows);
        let (xs, os) = (board.count(Player::X), board.count(Player::O));
        if xs.abs_diff(os) > 1 {
            warn!(xs, os, "Mark counts cannot come from alternating play");
        }
        Ok(board)
    }
}

fn decode_symbol(symbol: &str, symbols: &Symbols) -> Option<Square> {
    if symbol == symbols.x() {
        Some(Square::Occupied(Player::X))
    } else if symbol == symbols.o() {
        Some(Square::Occupied(Player::O))
    } else if symbol == symbols.empty() {
        Some(Square::Empty)
    } else {
        None
    }
}

/// Encodes a board as rows of symbols.
pub fn encode_board(board: &Board, symbols: &Symbols) -> Vec<Vec<String>> {
    board
        .to_rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|square| match square {
                    Square::Empty => symbols.empty().clone(),
                    Square::Occupied(Player::X) => symbols.x().clone(),
                    Square::Occupied(Player::O) => symbols.o().clone(),
                })
                .collect()
        })
        .collect()
}

/// Plays one automated turn on `board`.
///
/// A finished board is reported as is with no move. Otherwise the best
/// move is applied to `board` and the resulting status is returned.
#[instrument(skip(board, searcher), fields(ai = %searcher.ai()))]
pub fn play(board: &mut Board, searcher: &Searcher) -> PlayResponse {
    let status = searcher.evaluate(board);
    if status.is_terminal() {
        debug!(%status, "Board already finished");
        return PlayResponse {
            status,
            next_move: None,
        };
    }

    match searcher.best_move(board) {
        Ok(mv) => {
            board.place(mv, searcher.ai());
            let status = searcher.evaluate(board);
            info!(%mv, %status, "Automated move played");
            PlayResponse {
                status,
                next_move: Some([mv.row(), mv.col()]),
            }
        }
        Err(e) => {
            // Unreachable for an undecided board; report the board as it stands.
            warn!(error = %e, "Search declined an undecided board");
            PlayResponse {
                status,
                next_move: None,
            }
        }
    }
}

/// JSON front door: decodes requests, runs a turn, encodes the reply.
#[derive(Debug, Clone)]
pub struct Oracle {
    symbols: Symbols,
    searcher: Searcher,
}

impl Oracle {
    /// Builds an oracle from configuration.
    pub fn new(config: &EngineConfig) -> Self {
        Self {
            symbols: config.symbols().clone(),
            searcher: Searcher::new(*config.ai_mark()),
        }
    }

    /// The searcher used for every request.
    pub fn searcher(&self) -> &Searcher {
        &self.searcher
    }

    /// Handles a decoded request.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] for structurally invalid boards.
    pub fn respond(&self, request: &PlayRequest) -> Result<PlayResponse, BoardError> {
        let mut board = request.decode(&self.symbols)?;
        Ok(play(&mut board, &self.searcher))
    }

    /// Classifies the request's board without playing.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] for structurally invalid boards.
    pub fn status(&self, request: &PlayRequest) -> Result<Outcome, BoardError> {
        let board = request.decode(&self.symbols)?;
        Ok(self.searcher.evaluate(&board))
    }

    /// Handles a raw JSON request and returns the JSON response.
    ///
    /// # Errors
    ///
    /// Returns [`ProtocolError`] for malformed JSON or invalid boards.
    #[instrument(skip(self, body))]
    pub fn handle_json(&self, body: &str) -> Result<String, ProtocolError> {
        let request: PlayRequest = serde_json::from_str(body)?;
        let response = self.respond(&request)?;
        Ok(serde_json::to_string(&response)?)
    }
}
