//! Contestants and the match loop that drives a game between two of them.

use crate::games::tictactoe::rules::{is_full, winning_line};
use crate::games::tictactoe::{Board, Move, Player, Searcher};
use anyhow::{Result, bail};
use std::io::{BufRead, Write};
use strum::IntoEnumIterator;
use tracing::{debug, info, instrument};

/// Something that can pick a move for the side it is seated at.
pub trait Contestant {
    /// Chooses a move on `board` for `mark`.
    fn choose(&mut self, board: &Board, mark: Player) -> Result<Move>;

    /// Returns the contestant's display name.
    fn name(&self) -> &str;
}

/// Contestant backed by the minimax searcher.
#[derive(Debug, Clone)]
pub struct EnginePlayer {
    name: String,
}

impl EnginePlayer {
    /// Creates a new engine contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for EnginePlayer {
    fn choose(&mut self, board: &Board, mark: Player) -> Result<Move> {
        let report = Searcher::new(mark).search(board)?;
        debug!(
            engine = %self.name,
            mv = %report.best_move,
            score = report.score,
            nodes = report.nodes,
            "Engine chose move"
        );
        Ok(report.best_move)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Contestant that takes the first empty cell in row-major order.
#[derive(Debug, Clone)]
pub struct FirstEmptyPlayer {
    name: String,
}

impl FirstEmptyPlayer {
    /// Creates a new first-empty contestant.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl Contestant for FirstEmptyPlayer {
    fn choose(&mut self, board: &Board, _mark: Player) -> Result<Move> {
        match board.empty_cells().next() {
            Some(mv) => Ok(mv),
            None => bail!("No valid moves available"),
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Human contestant typing moves on a line-based console.
///
/// Accepts `row col` (0-based) or a cell number 1-9 and asks again on
/// anything else.
pub struct ConsolePlayer<R, W> {
    name: String,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> ConsolePlayer<R, W> {
    /// Creates a console contestant reading from `input` and prompting on `output`.
    pub fn new(name: impl Into<String>, input: R, output: W) -> Self {
        Self {
            name: name.into(),
            input,
            output,
        }
    }
}

impl<R: BufRead, W: Write> Contestant for ConsolePlayer<R, W> {
    fn choose(&mut self, board: &Board, mark: Player) -> Result<Move> {
        writeln!(self.output, "{}\n", board.display())?;
        loop {
            write!(self.output, "{} ({}) to move [row col | 1-9]: ", self.name, mark)?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                bail!("Input closed before {} chose a move", self.name);
            }

            match Move::parse(&line) {
                Some(mv) if board.is_empty(mv) => return Ok(mv),
                Some(mv) => writeln!(self.output, "{} is already taken.", mv.label())?,
                None => writeln!(self.output, "Could not read {:?} as a move.", line.trim())?,
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}

/// Events emitted while a match runs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MatchEvent {
    /// A contestant placed a mark.
    MoveMade {
        /// Name of the contestant.
        player: String,
        /// Mark placed.
        mark: Player,
        /// Cell played.
        mv: Move,
        /// Board after the move.
        board: Board,
    },
    /// The game ended; `None` means a draw.
    GameOver {
        /// Winning mark, if any.
        winner: Option<Player>,
    },
}

/// Final state of a finished match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchReport {
    /// Winning mark, or `None` for a draw.
    pub winner: Option<Player>,
    /// Final board.
    pub board: Board,
    /// Moves in play order.
    pub history: Vec<(Player, Move)>,
}

/// Runs a game between two contestants, X moving first.
pub struct Match {
    board: Board,
    player_x: Box<dyn Contestant>,
    player_o: Box<dyn Contestant>,
}

impl Match {
    /// Creates a match on an empty board.
    pub fn new(player_x: Box<dyn Contestant>, player_o: Box<dyn Contestant>) -> Self {
        Self {
            board: Board::new(),
            player_x,
            player_o,
        }
    }

    /// Plays until someone wins or the board fills, reporting each step to `on_event`.
    ///
    /// # Errors
    ///
    /// Fails if a contestant errors or returns an occupied cell.
    #[instrument(skip(self, on_event), fields(x = %self.player_x.name(), o = %self.player_o.name()))]
    pub fn run(&mut self, mut on_event: impl FnMut(&MatchEvent)) -> Result<MatchReport> {
        info!("Starting match");
        let mut history = Vec::new();
        let mut to_move = Player::X;

        let winner = loop {
            if let Some(winner) = self.winner() {
                break Some(winner);
            }
            if is_full(&self.board) {
                break None;
            }

            let contestant = match to_move {
                Player::X => &mut self.player_x,
                Player::O => &mut self.player_o,
            };

            debug!(player = %contestant.name(), mark = %to_move, "Waiting for move");
            let mv = contestant.choose(&self.board, to_move)?;
            if !self.board.is_empty(mv) {
                bail!("{} played occupied cell {}", contestant.name(), mv);
            }

            self.board.place(mv, to_move);
            history.push((to_move, mv));
            on_event(&MatchEvent::MoveMade {
                player: contestant.name().to_string(),
                mark: to_move,
                mv,
                board: self.board,
            });

            to_move = to_move.opponent();
        };

        info!(?winner, moves = history.len(), "Match finished");
        on_event(&MatchEvent::GameOver { winner });

        Ok(MatchReport {
            winner,
            board: self.board,
            history,
        })
    }

    fn winner(&self) -> Option<Player> {
        Player::iter().find(|p| winning_line(&self.board, *p).is_some())
    }
}
