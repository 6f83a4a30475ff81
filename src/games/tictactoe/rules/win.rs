//! Win detection logic for tic-tac-toe.

use super::super::{Board, Move, Player, Square};

/// The eight winning lines as row-major cell indices.
const LINES: [[usize; 3]; 8] = [
    // Rows
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    // Columns
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    // Diagonals
    [0, 4, 8],
    [2, 4, 6],
];

/// Returns the first line (rows, then columns, then diagonals) fully
/// occupied by `player`.
pub fn winning_line(board: &Board, player: Player) -> Option<[Move; 3]> {
    let owned = |i: usize| board.squares()[i] == Square::Occupied(player);

    LINES
        .iter()
        .find(|line| line.iter().all(|&i| owned(i)))
        .map(|line| line.map(|i| Move::ALL[i]))
}

/// Checks whether `player` owns a complete line.
pub fn has_won(board: &Board, player: Player) -> bool {
    winning_line(board, player).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Move {
        Move::new(row, col).unwrap()
    }

    fn fill(board: &mut Board, player: Player, cells: &[(u8, u8)]) {
        for &(row, col) in cells {
            board.place(cell(row, col), player);
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let mut board = Board::new();
            for i in line {
                board.place(Move::ALL[i], Player::O);
            }
            assert_eq!(
                winning_line(&board, Player::O),
                Some(line.map(|i| Move::ALL[i]))
            );
            assert!(!has_won(&board, Player::X));
        }
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new();
        fill(&mut board, Player::X, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(
            winning_line(&board, Player::X),
            Some([cell(0, 2), cell(1, 1), cell(2, 0)])
        );
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new();
        fill(&mut board, Player::X, &[(0, 0), (0, 1)]);
        assert!(!has_won(&board, Player::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let mut board = Board::new();
        fill(&mut board, Player::X, &[(0, 0), (0, 2)]);
        fill(&mut board, Player::O, &[(0, 1)]);
        assert!(!has_won(&board, Player::X));
        assert!(!has_won(&board, Player::O));
    }
}
