use crate::chess_errors::*;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// Chessboard squares on a 8x8 board.
//
// Numbered as follows (index = row * 8 + col):
//
//     a  b  c  d  e  f  g  h
//   ---------------------------
// 8 | 0  1  2  3  4  5  6  7  | 8   <- row 0, black back rank
// 7 | 8  9  10 11 12 13 14 15 | 7
// 6 | 16 17 18 19 20 21 22 23 | 6
// 5 | 24 25 26 27 28 29 30 31 | 5
// 4 | 32 33 34 35 36 37 38 39 | 4
// 3 | 40 41 42 43 44 45 46 47 | 3
// 2 | 48 49 50 51 52 53 54 55 | 2
// 1 | 56 57 58 59 60 61 62 63 | 1   <- row 7, white back rank
//   ---------------------------
//    a  b  c  d  e  f  g  h
//
// ---------------------------------------------
// Squares
// ---------------------------------------------

pub const BOARD_SIZE: u8 = 8;
pub const NUM_SQUARES: usize = (BOARD_SIZE * BOARD_SIZE) as usize;

#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Square(u8);

/// A (row, col) displacement. Adding it to a square walks off the board
/// gracefully by returning `None`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Offset(pub i8, pub i8);

impl FromStr for Square {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err_closure = || ChessError::InvalidSquare(s.to_string());
        let mut chars = s.trim().chars();

        let col = chars.next().ok_or_else(err_closure)?;
        let rank = chars
            .next()
            .and_then(|r| r.to_digit(10))
            .ok_or_else(err_closure)?;

        // Catch bad ranks early, else the row computation underflows
        if chars.next().is_some() || !('a'..='h').contains(&col) || !(1..=8).contains(&rank) {
            return Err(err_closure());
        }

        let row = BOARD_SIZE - rank as u8;
        let col = col as u8 - b'a';
        Ok(Square::from_row_col(row, col))
    }
}

impl Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_row_col();
        write!(f, "{}{}", (b'a' + col) as char, BOARD_SIZE - row)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (row, col) = self.to_row_col();
        write!(f, "{}({},{})", self, row, col)
    }
}

pub struct SquareIterator(u8);

impl Iterator for SquareIterator {
    type Item = Square;

    fn next(&mut self) -> Option<Self::Item> {
        if self.0 as usize >= NUM_SQUARES {
            None
        } else {
            self.0 += 1;
            Some(Square(self.0 - 1))
        }
    }
}

impl Square {
    /// Checked constructor. Returns `None` if row or col leave the board.
    pub fn new(row: u8, col: u8) -> Option<Square> {
        if Square::in_board(row as i16, col as i16) {
            Some(Square::from_row_col(row, col))
        } else {
            None
        }
    }

    /// Returns row and col of the square.
    /// Example: Square 63 (h1) is mapped to (7,7)
    pub const fn to_row_col(self) -> (u8, u8) {
        (self.0 / BOARD_SIZE, self.0 % BOARD_SIZE)
    }

    pub const fn row(self) -> u8 {
        self.0 / BOARD_SIZE
    }

    pub const fn col(self) -> u8 {
        self.0 % BOARD_SIZE
    }

    /// Transforms a row and a col to a square on the board.
    /// Row and col must correspond to a legal board position.
    pub fn from_row_col(row: u8, col: u8) -> Square {
        debug_assert!(Square::in_board(row as i16, col as i16));
        Square(row * BOARD_SIZE + col)
    }

    /// Checks if row and col belong to a legal board position.
    pub const fn in_board(row: i16, col: i16) -> bool {
        row >= 0 && col >= 0 && row < BOARD_SIZE as i16 && col < BOARD_SIZE as i16
    }

    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Allows to iterate over all squares on the board, row 0 first.
    pub fn all_squares() -> SquareIterator {
        SquareIterator(0)
    }

    /// Same row, different column. Used for castling partners.
    pub fn with_col(self, col: u8) -> Square {
        Square::from_row_col(self.row(), col)
    }
}

impl_op_ex!(+ |a: &Square, b: &Offset| -> Option<Square> {
    let (row, col) = a.to_row_col();
    let new_row = row as i16 + b.0 as i16;
    let new_col = col as i16 + b.1 as i16;
    if Square::in_board(new_row, new_col) {
        Some(Square::from_row_col(new_row as u8, new_col as u8))
    } else {
        None
    }
});

impl Offset {
    pub const fn scale(self, n: i8) -> Offset {
        Offset(self.0 * n, self.1 * n)
    }
}
