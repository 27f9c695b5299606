use crate::chess_errors::*;
use std::fmt::{self, Display};

// ---------------------------------------------
// Pieces
// ---------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}

/// A piece standing on the board. `has_moved` only matters for pawns
/// (double step) and kings and rooks (castling).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

impl Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl Color {
    pub fn opposite(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a pawn push. White walks towards row 0.
    pub fn forward(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    pub fn pawn_row(self) -> u8 {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// The row on which pawns of this color promote.
    pub fn promotion_row(self) -> u8 {
        self.opposite().back_row()
    }
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Rook,
        PieceKind::Queen,
        PieceKind::King,
    ];

    pub const fn as_index(self) -> usize {
        self as usize
    }

    /// Letter as used on boards and in move display (upper case).
    pub fn algebraic(self) -> char {
        match self {
            PieceKind::Pawn => 'P',
            PieceKind::Knight => 'N',
            PieceKind::Bishop => 'B',
            PieceKind::Rook => 'R',
            PieceKind::Queen => 'Q',
            PieceKind::King => 'K',
        }
    }

    /// Whether the first move of this kind has rules consequences.
    pub fn tracks_moves(self) -> bool {
        matches!(self, PieceKind::Pawn | PieceKind::Rook | PieceKind::King)
    }
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Piece {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    pub fn moved(self) -> Piece {
        Piece {
            has_moved: true,
            ..self
        }
    }

    pub fn is(&self, kind: PieceKind, color: Color) -> bool {
        self.kind == kind && self.color == color
    }

    pub fn symbol(&self) -> char {
        use PieceKind::*;
        match (self.color, self.kind) {
            (Color::White, King) => '\u{2654}',
            (Color::White, Queen) => '\u{2655}',
            (Color::White, Rook) => '\u{2656}',
            (Color::White, Bishop) => '\u{2657}',
            (Color::White, Knight) => '\u{2658}',
            (Color::White, Pawn) => '\u{2659}',
            (Color::Black, King) => '\u{265a}',
            (Color::Black, Queen) => '\u{265b}',
            (Color::Black, Rook) => '\u{265c}',
            (Color::Black, Bishop) => '\u{265d}',
            (Color::Black, Knight) => '\u{265e}',
            (Color::Black, Pawn) => '\u{265f}',
        }
    }

    /// Upper case for white, lower case for black.
    pub fn letter(&self) -> char {
        let c = self.kind.algebraic();
        match self.color {
            Color::White => c,
            Color::Black => c.to_ascii_lowercase(),
        }
    }

    pub fn from_letter(c: char) -> ChessResult<Piece> {
        let color = if c.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        let kind = match c.to_ascii_uppercase() {
            'P' => PieceKind::Pawn,
            'N' => PieceKind::Knight,
            'B' => PieceKind::Bishop,
            'R' => PieceKind::Rook,
            'Q' => PieceKind::Queen,
            'K' => PieceKind::King,
            _ => return Err(ChessError::InvalidDiagram(format!("unknown piece '{}'", c))),
        };
        Ok(Piece::new(kind, color))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_letters() {
        for &kind in PieceKind::ALL.iter() {
            for &color in [Color::White, Color::Black].iter() {
                let p = Piece::new(kind, color);
                assert_eq!(Piece::from_letter(p.letter()).unwrap(), p);
            }
        }
        assert!(Piece::from_letter('x').is_err());
        assert!(Piece::from_letter('.').is_err());
    }

    #[test]
    fn test_directions() {
        assert_eq!(Color::White.forward(), -1);
        assert_eq!(Color::Black.forward(), 1);
        assert_eq!(Color::White.promotion_row(), 0);
        assert_eq!(Color::Black.promotion_row(), 7);
        assert_eq!(Color::White.opposite(), Color::Black);
    }

    #[test]
    fn test_moved_flag() {
        let rook = Piece::new(PieceKind::Rook, Color::Black);
        assert!(!rook.has_moved);
        assert!(rook.moved().has_moved);
        assert!(rook.moved().is(PieceKind::Rook, Color::Black));
        assert_eq!(Piece::new(PieceKind::King, Color::White).to_string(), "\u{2654}");
    }
}
