//! Draw detection logic for tic-tac-toe.

use super::super::{Board, Player, Square};
use super::win::has_won;

/// Checks if the board is full (all squares occupied).
///
/// A full board with no winner indicates a draw.
pub fn is_full(board: &Board) -> bool {
    board.squares().iter().all(|s| *s != Square::Empty)
}

/// Checks if the board is a finished draw: full, and neither side owns a line.
pub fn is_draw(board: &Board) -> bool {
    is_full(board) && !has_won(board, Player::X) && !has_won(board, Player::O)
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
    fn test_empty_board_not_full() {
        let board = Board::new();
        assert!(!is_full(&board));
        assert!(!is_draw(&board));
    }

    #[test]
    fn test_partial_board_not_full() {
        let board = board_from("    X    ");
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let board = board_from("XXXXXXXXX");
        assert!(is_full(&board));
    }

    #[test]
    fn test_draw_detection() {
        // X O X / O X X / O X O
        let board = board_from("XOXOXXOXO");
        assert!(is_draw(&board));
    }

    #[test]
    fn test_not_draw_if_winner() {
        // Full board where X owns the top row
        let board = board_from("XXXOOXXOO");
        assert!(is_full(&board));
        assert!(!is_draw(&board));
    }
}
