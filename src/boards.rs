use crate::chess_errors::*;
use crate::pieces::*;
use crate::positions::*;
use array_init::array_init;
use lazy_static::lazy_static;
use std::fmt::{self, Display};
use std::ops;
use std::str::FromStr;

// ---------------------------------------------
// Board Types
// ---------------------------------------------

const BACK_RANK: [PieceKind; BOARD_SIZE as usize] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;

lazy_static! {
    static ref STANDARD_BOARD: Board = Board::build_standard();
}

// Displays the first 64 items from an iterator in a chessboard style:
//
//   a b c d e f g h
// 8 i1 i2 i3 ...    8
// 7 ....
//
// Where i1,...i64 are the items of the iterator.
// It is required that the iterator has at least 64 items, else we will return with an error.
fn display_chessboard_style<I, C>(it: &mut I, f: &mut fmt::Formatter<'_>) -> fmt::Result
where
    I: Iterator<Item = C>,
    C: Display,
{
    write!(f, " ")?;
    for c in 'a'..='h' {
        write!(f, " {}", c)?;
    }
    for row in 0..BOARD_SIZE {
        write!(f, "\n{} ", BOARD_SIZE - row)?;
        for _col in 0..BOARD_SIZE {
            let i = it.next().ok_or(fmt::Error)?;
            write!(f, "{} ", i)?;
        }
        write!(f, "{}", BOARD_SIZE - row)?;
    }
    write!(f, "\n ")?;
    for c in 'a'..='h' {
        write!(f, " {}", c)?;
    }
    Ok(())
}

/// 8x8 mailbox board. Pure data: the rules live in `movegen`, `attacks`
/// and `rules`, and only `make_move` (see `moves`) relocates pieces.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Board {
    pieces: [Option<Piece>; NUM_SQUARES],
}

impl Board {
    pub fn empty() -> Board {
        Board {
            pieces: array_init(|_| None),
        }
    }

    /// Returns a board with the pieces placed on standard chess starting positions
    pub fn standard_setup() -> Board {
        STANDARD_BOARD.clone()
    }

    fn build_standard() -> Board {
        let mut board = Board::empty();
        for &color in [Color::White, Color::Black].iter() {
            for (col, &kind) in BACK_RANK.iter().enumerate() {
                board.pieces[Square::from_row_col(color.back_row(), col as u8).index()] =
                    Some(Piece::new(kind, color));
            }
            for col in 0..BOARD_SIZE {
                board.pieces[Square::from_row_col(color.pawn_row(), col).index()] =
                    Some(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    pub fn add(&mut self, sq: Square, piece: Piece) -> ChessResult<()> {
        match self.pieces[sq.index()] {
            Some(current) => Err(ChessError::Occupied(sq, current)),
            None => {
                self.pieces[sq.index()] = Some(piece);
                Ok(())
            }
        }
    }

    pub fn get(&self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()]
    }

    pub fn is_empty_at(&self, sq: Square) -> bool {
        self.pieces[sq.index()].is_none()
    }

    /// Removes and returns whatever stands on `sq`.
    pub fn take(&mut self, sq: Square) -> Option<Piece> {
        self.pieces[sq.index()].take()
    }

    /// Puts a piece on `sq`, returning what was there before.
    pub fn put(&mut self, sq: Square, piece: Piece) -> Option<Piece> {
        self.pieces[sq.index()].replace(piece)
    }

    /// Iterates over all occupied squares, row 0 first.
    pub fn iter(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all_squares().filter_map(move |sq| self.get(sq).map(|p| (sq, p)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.iter().filter(move |(_, p)| p.color == color)
    }

    pub fn count(&self, kind: PieceKind, color: Color) -> usize {
        self.iter().filter(|(_, p)| p.is(kind, color)).count()
    }

    /// Checks the invariant every session relies on: exactly one king per side.
    pub fn validate(&self) -> ChessResult<()> {
        for &color in [Color::White, Color::Black].iter() {
            let kings = self.count(PieceKind::King, color);
            if kings != 1 {
                return Err(ChessError::KingCount(color, kings));
            }
        }
        Ok(())
    }

    /// Whether a piece standing on `sq` could still be untouched by the game,
    /// used to infer `has_moved` when reading diagrams.
    fn on_home_square(sq: Square, piece: &Piece) -> bool {
        let (row, col) = sq.to_row_col();
        match piece.kind {
            PieceKind::Pawn => row == piece.color.pawn_row(),
            PieceKind::King => row == piece.color.back_row() && col == KING_START_COL,
            PieceKind::Rook => {
                row == piece.color.back_row()
                    && (col == KINGSIDE_ROOK_COL || col == QUEENSIDE_ROOK_COL)
            }
            _ => true,
        }
    }
}

/// Reads a board from eight rows of eight characters, row 0 (rank 8) first.
/// Piece letters as in `Piece::letter`, `.` for an empty square. Whitespace is
/// ignored, so rows may be laid out on separate lines.
impl FromStr for Board {
    type Err = ChessError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cells: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if cells.len() != NUM_SQUARES {
            return Err(ChessError::InvalidDiagram(format!(
                "expected {} squares, found {}",
                NUM_SQUARES,
                cells.len()
            )));
        }

        let mut board = Board::empty();
        for (sq, &c) in Square::all_squares().zip(cells.iter()) {
            if c == '.' {
                continue;
            }
            let mut piece = Piece::from_letter(c)?;
            piece.has_moved = !Board::on_home_square(sq, &piece);
            board.add(sq, piece)?;
        }
        Ok(board)
    }
}

impl ops::Index<Square> for Board {
    type Output = Option<Piece>;

    fn index(&self, index: Square) -> &Self::Output {
        &self.pieces[index.index()]
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut cells = self.pieces.iter().map(|p| match p {
            Some(piece) => piece.symbol(),
            None => '\u{00b7}',
        });
        display_chessboard_style(&mut cells, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_setup() {
        let b = Board::standard_setup();
        assert_eq!(b.iter().count(), 32);
        assert_eq!(b.count(PieceKind::Pawn, Color::White), 8);
        assert_eq!(b.count(PieceKind::Pawn, Color::Black), 8);
        assert_eq!(b.get(sq("e1")), Some(Piece::new(PieceKind::King, Color::White)));
        assert_eq!(b.get(sq("e8")), Some(Piece::new(PieceKind::King, Color::Black)));
        assert_eq!(b.get(sq("d1")), Some(Piece::new(PieceKind::Queen, Color::White)));
        assert_eq!(b.get(sq("d8")), Some(Piece::new(PieceKind::Queen, Color::Black)));
        assert_eq!(b.get(sq("a8")), Some(Piece::new(PieceKind::Rook, Color::Black)));
        assert_eq!(b.get(sq("g1")), Some(Piece::new(PieceKind::Knight, Color::White)));
        assert_eq!(b.get(sq("e2")), Some(Piece::new(PieceKind::Pawn, Color::White)));
        assert!(b.is_empty_at(sq("e4")));
        assert!(b.iter().all(|(_, p)| !p.has_moved));
        assert!(b.validate().is_ok());
    }

    #[test]
    fn test_add_occupied() {
        let mut b = Board::empty();
        let king = Piece::new(PieceKind::King, Color::White);
        b.add(sq("e1"), king).unwrap();
        assert_eq!(
            b.add(sq("e1"), Piece::new(PieceKind::Queen, Color::Black)),
            Err(ChessError::Occupied(sq("e1"), king))
        );
        assert_eq!(b[sq("e1")], Some(king));
    }

    #[test]
    fn test_diagram_matches_standard() {
        let b: Board = "
            rnbqkbnr
            pppppppp
            ........
            ........
            ........
            ........
            PPPPPPPP
            RNBQKBNR"
            .parse()
            .unwrap();
        assert_eq!(b, Board::standard_setup());
    }

    #[test]
    fn test_diagram_infers_moved_flags() {
        let b: Board = "
            ....k..r
            ........
            ........
            ...P....
            ........
            ........
            .......P
            R.....K.
        "
        .parse()
        .unwrap();
        assert!(!b.get(sq("e8")).unwrap().has_moved);
        assert!(!b.get(sq("h8")).unwrap().has_moved);
        assert!(!b.get(sq("a1")).unwrap().has_moved);
        assert!(b.get(sq("g1")).unwrap().has_moved);
        assert!(b.get(sq("d5")).unwrap().has_moved);
        assert!(!b.get(sq("h2")).unwrap().has_moved);
    }

    #[test]
    fn test_diagram_errors() {
        assert!(matches!(
            "rnbqkbnr".parse::<Board>(),
            Err(ChessError::InvalidDiagram(_))
        ));
        let bad = "x".repeat(64);
        assert!(matches!(
            bad.parse::<Board>(),
            Err(ChessError::InvalidDiagram(_))
        ));
    }

    #[test]
    fn test_validate_king_count() {
        let mut b = Board::empty();
        assert_eq!(b.validate(), Err(ChessError::KingCount(Color::White, 0)));
        b.add(sq("e1"), Piece::new(PieceKind::King, Color::White)).unwrap();
        assert_eq!(b.validate(), Err(ChessError::KingCount(Color::Black, 0)));
        b.add(sq("e8"), Piece::new(PieceKind::King, Color::Black)).unwrap();
        assert!(b.validate().is_ok());
        b.add(sq("a8"), Piece::new(PieceKind::King, Color::Black)).unwrap();
        assert_eq!(b.validate(), Err(ChessError::KingCount(Color::Black, 2)));
    }

    #[test]
    fn test_display() {
        let s = Board::standard_setup().to_string();
        assert!(s.starts_with("  a b c d e f g h"));
        assert_eq!(s.lines().count(), 10);
        assert!(s.contains("\u{265a}"));
    }
}
