//! Core domain types for tic-tac-toe.

use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};

/// Side of the board: the mark a player places.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (moves first in a fresh game).
    X,
    /// Player O.
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Square {
    /// Empty square.
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

/// A cell coordinate on the board, `(row, col)` with both in `0..=2`.
///
/// Serializes as `[row, col]`; deserialization rejects off-board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "(u8, u8)", into = "(u8, u8)")]
pub struct Move {
    row: u8,
    col: u8,
}

impl Move {
    /// Every cell in row-major order: row 0 left to right, then row 1, then row 2.
    ///
    /// This is the enumeration order of the search, so it also fixes the
    /// tie-break between equally scored moves.
    pub const ALL: [Move; 9] = [
        Move { row: 0, col: 0 },
        Move { row: 0, col: 1 },
        Move { row: 0, col: 2 },
        Move { row: 1, col: 0 },
        Move { row: 1, col: 1 },
        Move { row: 1, col: 2 },
        Move { row: 2, col: 0 },
        Move { row: 2, col: 1 },
        Move { row: 2, col: 2 },
    ];

    /// Creates a move, or `None` if either coordinate is off the board.
    pub fn new(row: u8, col: u8) -> Option<Self> {
        (row < 3 && col < 3).then_some(Self { row, col })
    }

    /// Creates a move from a row-major cell index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row-major cell index (0-8).
    pub fn index(self) -> usize {
        self.row as usize * 3 + self.col as usize
    }

    /// Row coordinate.
    pub fn row(self) -> u8 {
        self.row
    }

    /// Column coordinate.
    pub fn col(self) -> u8 {
        self.col
    }

    /// Human-readable name of the cell.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }

    /// Parses "row col" (e.g. `1 2` or `1,2`) or a 1-based cell number (1-9).
    pub fn parse(s: &str) -> Option<Self> {
        let parts: Vec<&str> = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|p| !p.is_empty())
            .collect();

        match parts.as_slice() {
            [number] => {
                let number: usize = number.parse().ok()?;
                number.checked_sub(1).and_then(Self::from_index)
            }
            [row, col] => Self::new(row.parse().ok()?, col.parse().ok()?),
            _ => None,
        }
    }
}

/// Coordinates outside the 3x3 board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Cell ({}, {}) is off the board", row, col)]
pub struct OffBoard {
    /// Requested row.
    pub row: u8,
    /// Requested column.
    pub col: u8,
}

impl TryFrom<(u8, u8)> for Move {
    type Error = OffBoard;

    fn try_from((row, col): (u8, u8)) -> Result<Self, Self::Error> {
        Self::new(row, col).ok_or(OffBoard { row, col })
    }
}

impl From<Move> for (u8, u8) {
    fn from(mv: Move) -> Self {
        (mv.row, mv.col)
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            squares: [Square::Empty; 9],
        }
    }

    /// Builds a board from its three rows.
    pub fn from_rows(rows: [[Square; 3]; 3]) -> Self {
        let mut board = Self::new();
        for (mv, square) in Move::ALL.iter().zip(rows.iter().flatten()) {
            board.set(*mv, *square);
        }
        board
    }

    /// Returns the board as three rows.
    pub fn to_rows(&self) -> [[Square; 3]; 3] {
        let s = &self.squares;
        [[s[0], s[1], s[2]], [s[3], s[4], s[5]], [s[6], s[7], s[8]]]
    }

    /// Gets the square at the given cell.
    pub fn get(&self, mv: Move) -> Square {
        self.squares[mv.index()]
    }

    /// Sets the square at the given cell.
    pub fn set(&mut self, mv: Move, square: Square) {
        self.squares[mv.index()] = square;
    }

    /// Places a player's mark (unchecked; callers verify the cell is empty).
    pub fn place(&mut self, mv: Move, player: Player) {
        self.set(mv, Square::Occupied(player));
    }

    /// Clears a cell back to empty.
    pub fn clear(&mut self, mv: Move) {
        self.set(mv, Square::Empty);
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        self.get(mv) == Square::Empty
    }

    /// Empty cells in row-major order.
    pub fn empty_cells(&self) -> impl Iterator<Item = Move> + '_ {
        Move::ALL.into_iter().filter(|mv| self.is_empty(*mv))
    }

    /// Number of marks the player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.squares
            .iter()
            .filter(|s| **s == Square::Occupied(player))
            .count()
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based cell number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for row in 0..3 {
            for col in 0..3 {
                let pos = row * 3 + col;
                let symbol = match self.squares[pos] {
                    Square::Empty => (pos + 1).to_string(),
                    Square::Occupied(player) => player.to_string(),
                };
                result.push_str(&symbol);
                if col < 2 {
                    result.push('|');
                }
            }
            if row < 2 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_move_bounds() {
        assert!(Move::new(2, 2).is_some());
        assert!(Move::new(3, 0).is_none());
        assert!(Move::new(0, 3).is_none());
    }

    #[test]
    fn test_move_index_is_row_major() {
        for (i, mv) in Move::ALL.iter().enumerate() {
            assert_eq!(mv.index(), i);
            assert_eq!(Move::from_index(i), Some(*mv));
        }
        assert_eq!(Move::from_index(9), None);
    }

    #[test]
    fn test_move_parse() {
        assert_eq!(Move::parse("1 2"), Move::new(1, 2));
        assert_eq!(Move::parse(" 0,0 "), Move::new(0, 0));
        assert_eq!(Move::parse("5"), Move::new(1, 1));
        assert_eq!(Move::parse("9"), Move::new(2, 2));
        assert_eq!(Move::parse("0"), None);
        assert_eq!(Move::parse("10"), None);
        assert_eq!(Move::parse("3 0"), None);
        assert_eq!(Move::parse("center"), None);
        assert_eq!(Move::parse(""), None);
    }

    #[test]
    fn test_move_wire_form() {
        let mv: Move = serde_json::from_str("[0, 2]").unwrap();
        assert_eq!(mv, Move::new(0, 2).unwrap());
        assert_eq!(serde_json::to_string(&mv).unwrap(), "[0,2]");
    }

    #[test]
    fn test_off_board_move_rejected_on_deserialize() {
        let err = serde_json::from_str::<Move>("[7, 7]").unwrap_err();
        assert!(err.to_string().contains("Cell (7, 7) is off the board"));
        assert!(serde_json::from_str::<Move>("[0, 3]").is_err());
        assert!(serde_json::from_str::<Move>(r#"{"row": 7, "col": 7}"#).is_err());
        assert_eq!(Move::try_from((3, 0)), Err(OffBoard { row: 3, col: 0 }));
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("X".parse::<Player>(), Ok(Player::X));
        assert_eq!("o".parse::<Player>(), Ok(Player::O));
        assert!("Z".parse::<Player>().is_err());
    }

    #[test]
    fn test_place_and_clear() {
        let mut board = Board::new();
        let mv = Move::new(1, 1).unwrap();
        board.place(mv, Player::X);
        assert_eq!(board.get(mv), Square::Occupied(Player::X));
        assert_eq!(board.count(Player::X), 1);
        board.clear(mv);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_rows_round_trip() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let e = Square::Empty;
        let rows = [[x, e, o], [e, x, e], [o, e, e]];
        let board = Board::from_rows(rows);
        assert_eq!(board.get(Move::new(0, 2).unwrap()), o);
        assert_eq!(board.to_rows(), rows);
    }

    #[test]
    fn test_empty_cells_order() {
        let mut board = Board::new();
        board.place(Move::new(0, 0).unwrap(), Player::X);
        board.place(Move::new(1, 1).unwrap(), Player::O);
        let cells: Vec<usize> = board.empty_cells().map(Move::index).collect();
        assert_eq!(cells, vec![1, 2, 3, 5, 6, 7, 8]);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Move::new(0, 0).unwrap(), Player::X);
        board.place(Move::new(2, 2).unwrap(), Player::O);
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|5|6\n-+-+-\n7|8|O");
    }
}
