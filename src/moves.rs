//! Describing the moves that can be done on a chessboard, and the one
//! primitive that carries them out.
use crate::boards::*;
use crate::pieces::*;
use crate::positions::*;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleSide {
    Kingside,
    Queenside,
}

impl CastleSide {
    /// Columns the rook travels from and to.
    pub fn rook_cols(self) -> (u8, u8) {
        match self {
            CastleSide::Kingside => (KINGSIDE_ROOK_COL, 5),
            CastleSide::Queenside => (QUEENSIDE_ROOK_COL, 3),
        }
    }

    /// Column the king lands on.
    pub fn king_col(self) -> u8 {
        match self {
            CastleSide::Kingside => 6,
            CastleSide::Queenside => 2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveKind {
    Standard,
    PawnTwostep,
    Castle(CastleSide),
    Promotion,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Move {
    pub start: Square,
    pub end: Square,
    /// The piece as it stood on `start` before moving.
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub kind: MoveKind,
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            MoveKind::Castle(CastleSide::Kingside) => write!(f, "O-O"),
            MoveKind::Castle(CastleSide::Queenside) => write!(f, "O-O-O"),
            _ => {
                write!(
                    f,
                    "{}{}{}{}",
                    self.piece.kind.algebraic(),
                    self.start,
                    if self.captured.is_some() { "x" } else { "" },
                    self.end
                )?;
                if self.kind == MoveKind::Promotion {
                    write!(f, "=Q")?;
                }
                Ok(())
            }
        }
    }
}

impl Move {
    /// Reads the move `start -> end` off a board snapshot. Does not check
    /// legality; returns `None` only if `start` is empty.
    pub fn infer(board: &Board, start: Square, end: Square) -> Option<Move> {
        let piece = board.get(start)?;
        let col_delta = end.col() as i16 - start.col() as i16;
        let row_delta = end.row() as i16 - start.row() as i16;

        let kind = match piece.kind {
            PieceKind::King if col_delta == 2 && row_delta == 0 => {
                MoveKind::Castle(CastleSide::Kingside)
            }
            PieceKind::King if col_delta == -2 && row_delta == 0 => {
                MoveKind::Castle(CastleSide::Queenside)
            }
            PieceKind::Pawn if end.row() == piece.color.promotion_row() => MoveKind::Promotion,
            PieceKind::Pawn if row_delta.abs() == 2 => MoveKind::PawnTwostep,
            _ => MoveKind::Standard,
        };

        Some(Move {
            start,
            end,
            piece,
            captured: board.get(end),
            kind,
        })
    }

    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl Board {
    /// Makes a move on the board and returns the captured piece, if any.
    /// Used for the live game as well as for hypothetical boards; it does not
    /// check legality.
    ///
    /// Order of effects: the mover is flagged as moved, a castling rook is
    /// relocated (and flagged), a pawn reaching the far row becomes a queen,
    /// the target square is cleared and the mover placed on it.
    pub fn make_move(&mut self, m: &Move) -> Option<Piece> {
        let mut piece = self.take(m.start)?;

        if piece.kind.tracks_moves() {
            piece.has_moved = true;
        }

        match m.kind {
            MoveKind::Castle(side) => {
                let (from_col, to_col) = side.rook_cols();
                if let Some(rook) = self.take(m.start.with_col(from_col)) {
                    self.put(m.start.with_col(to_col), rook.moved());
                }
            }
            MoveKind::Promotion => piece.kind = PieceKind::Queen,
            MoveKind::Standard | MoveKind::PawnTwostep => {}
        }

        self.put(m.end, piece)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_infer_kinds() {
        let b: Board = "
            r...k..r
            .P......
            ........
            ........
            ........
            ........
            P.......
            R...K..R"
            .parse()
            .unwrap();
        let m = |a: &str, z: &str| Move::infer(&b, sq(a), sq(z)).unwrap().kind;
        assert_eq!(m("e1", "g1"), MoveKind::Castle(CastleSide::Kingside));
        assert_eq!(m("e8", "c8"), MoveKind::Castle(CastleSide::Queenside));
        assert_eq!(m("e1", "f1"), MoveKind::Standard);
        assert_eq!(m("a2", "a4"), MoveKind::PawnTwostep);
        assert_eq!(m("a2", "a3"), MoveKind::Standard);
        assert_eq!(m("b7", "b8"), MoveKind::Promotion);
        assert_eq!(m("b7", "a8"), MoveKind::Promotion);
        assert!(Move::infer(&b, sq("d4"), sq("d5")).is_none());
    }

    #[test]
    fn test_make_simple_move() {
        let mut b = Board::standard_setup();
        let mv = Move::infer(&b, sq("e2"), sq("e4")).unwrap();
        assert_eq!(b.make_move(&mv), None);
        assert!(b.is_empty_at(sq("e2")));
        let pawn = b.get(sq("e4")).unwrap();
        assert!(pawn.is(PieceKind::Pawn, Color::White));
        assert!(pawn.has_moved);
    }

    #[test]
    fn test_make_capture() {
        let mut b = Board::standard_setup();
        let mv = Move::infer(&b, sq("b1"), sq("c7")).unwrap();
        assert!(mv.is_capture());
        assert_eq!(
            b.make_move(&mv),
            Some(Piece::new(PieceKind::Pawn, Color::Black))
        );
        assert!(b.get(sq("c7")).unwrap().is(PieceKind::Knight, Color::White));
        assert_eq!(b.count(PieceKind::Pawn, Color::Black), 7);
        // Knights do not track their first move
        assert!(!b.get(sq("c7")).unwrap().has_moved);
    }

    #[test]
    fn test_make_castle_moves_rook() {
        let mut b: Board = "
            r...k..r
            ........
            ........
            ........
            ........
            ........
            ........
            R...K..R"
            .parse()
            .unwrap();
        let mv = Move::infer(&b, sq("e1"), sq("g1")).unwrap();
        b.make_move(&mv);
        assert!(b.is_empty_at(sq("e1")));
        assert!(b.is_empty_at(sq("h1")));
        assert!(b.get(sq("g1")).unwrap().is(PieceKind::King, Color::White));
        assert!(b.get(sq("f1")).unwrap().is(PieceKind::Rook, Color::White));
        assert!(b.get(sq("g1")).unwrap().has_moved);
        assert!(b.get(sq("f1")).unwrap().has_moved);

        let mv = Move::infer(&b, sq("e8"), sq("c8")).unwrap();
        b.make_move(&mv);
        assert!(b.get(sq("c8")).unwrap().is(PieceKind::King, Color::Black));
        assert!(b.get(sq("d8")).unwrap().is(PieceKind::Rook, Color::Black));
        assert!(b.is_empty_at(sq("a8")));
        assert!(b.is_empty_at(sq("e8")));
    }

    #[test]
    fn test_make_promotion() {
        let mut b: Board = "
            ........
            ....k...
            ........
            ........
            ........
            ........
            .p..K...
            ..R.....
        "
        .parse()
        .unwrap();
        let mv = Move::infer(&b, sq("b2"), sq("c1")).unwrap();
        assert_eq!(mv.kind, MoveKind::Promotion);
        assert_eq!(
            b.make_move(&mv),
            Some(Piece::new(PieceKind::Rook, Color::White).moved())
        );
        let queen = b.get(sq("c1")).unwrap();
        assert!(queen.is(PieceKind::Queen, Color::Black));
    }

    #[test]
    fn test_display() {
        let b = Board::standard_setup();
        assert_eq!(Move::infer(&b, sq("e2"), sq("e4")).unwrap().to_string(), "Pe2e4");
        assert_eq!(Move::infer(&b, sq("g1"), sq("f3")).unwrap().to_string(), "Ng1f3");
        assert_eq!(Move::infer(&b, sq("d1"), sq("d7")).unwrap().to_string(), "Qd1xd7");
    }
}
