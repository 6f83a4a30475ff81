//! Terminal-state classification from the automated player's point of view.

use super::super::{Board, Player};
use super::draw::is_full;
use super::win::has_won;
use serde::{Deserialize, Serialize};

/// How the game stands, seen from the automated player's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    /// The automated player owns a complete line.
    AiWins,
    /// The opponent owns a complete line.
    OpponentWins,
    /// The board is full and nobody owns a line.
    Draw,
    /// The game is still in progress.
    Undecided,
}

impl Outcome {
    /// Returns true for every outcome except `Undecided`.
    pub fn is_terminal(self) -> bool {
        self != Outcome::Undecided
    }
}

/// Classifies the board for the automated player `ai`.
///
/// A line owned by `ai` is reported even if the opponent also owns one.
/// That double win cannot arise from alternating play.
pub fn evaluate(board: &Board, ai: Player) -> Outcome {
    if has_won(board, ai) {
        Outcome::AiWins
    } else if has_won(board, ai.opponent()) {
        Outcome::OpponentWins
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::Undecided
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Move;
    use super::*;

    fn board_from(cells: &str) -> Board {
        let mut board = Board::new();
        for (mv, c) in Move::ALL.iter().zip(cells.chars()) {
            match c {
                'X' => board.place(*mv, Player::X),
                'O' => board.place(*mv, Player::O),
                _ => {}
            }
        }
        board
    }

    #[test]
    fn test_empty_board_is_undecided() {
        assert_eq!(evaluate(&Board::new(), Player::O), Outcome::Undecided);
    }

    #[test]
    fn test_ai_line_wins() {
        let board = board_from("OOOXX    ");
        assert_eq!(evaluate(&board, Player::O), Outcome::AiWins);
        assert_eq!(evaluate(&board, Player::X), Outcome::OpponentWins);
    }

    #[test]
    fn test_opponent_line() {
        let board = board_from("XO XO X  ");
        assert_eq!(evaluate(&board, Player::O), Outcome::OpponentWins);
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = board_from("XOXOXXOXO");
        assert_eq!(evaluate(&board, Player::O), Outcome::Draw);
        assert_eq!(evaluate(&board, Player::X), Outcome::Draw);
    }

    #[test]
    fn test_win_on_full_board_is_not_draw() {
        let board = board_from("OOOXXOXXO");
        assert_eq!(evaluate(&board, Player::O), Outcome::AiWins);
    }

    #[test]
    fn test_double_win_favours_ai() {
        let board = board_from("OOOXXX   ");
        assert_eq!(evaluate(&board, Player::O), Outcome::AiWins);
        assert_eq!(evaluate(&board, Player::X), Outcome::AiWins);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = board_from("XO  X  O ");
        let first = evaluate(&board, Player::O);
        assert_eq!(evaluate(&board, Player::O), first);
        assert_eq!(board, board_from("XO  X  O "));
    }

    #[test]
    fn test_terminal() {
        assert!(Outcome::AiWins.is_terminal());
        assert!(Outcome::OpponentWins.is_terminal());
        assert!(Outcome::Draw.is_terminal());
        assert!(!Outcome::Undecided.is_terminal());
    }
}
