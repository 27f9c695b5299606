use crate::boards::*;
use crate::movegen::{ALL_DIRECTIONS, DIAGONAL, KNIGHT_OFFSETS, ORTHOGONAL};
use crate::pieces::*;
use crate::positions::*;
use log::warn;

// ---------------------------------------------------------------------
// Attack detection
// ---------------------------------------------------------------------
//
// Attacks are computed backwards from the target square: we look where an
// attacker of each kind would have to stand and check whether one does.
// This never generates an attacker's move list, so castling can not recurse
// into check detection.

/// Returns true if any piece of color `by` could capture on `sq` with its
/// next move (ignoring whether that capture would be legal for `by`).
pub fn is_attacked(board: &Board, sq: Square, by: Color) -> bool {
    pawn_attacks(board, sq, by)
        || leaper_attacks(board, sq, by, &KNIGHT_OFFSETS, PieceKind::Knight)
        || leaper_attacks(board, sq, by, &ALL_DIRECTIONS, PieceKind::King)
        || slider_attacks(board, sq, by, &ORTHOGONAL, PieceKind::Rook)
        || slider_attacks(board, sq, by, &DIAGONAL, PieceKind::Bishop)
}

// A pawn of `by` attacks diagonally forward, so it stands one row behind the
// target from its own point of view.
fn pawn_attacks(board: &Board, sq: Square, by: Color) -> bool {
    let behind = -by.forward();
    [-1, 1].iter().any(|&side| {
        (sq + Offset(behind, side))
            .and_then(|from| board.get(from))
            .map_or(false, |p| p.is(PieceKind::Pawn, by))
    })
}

fn leaper_attacks(
    board: &Board,
    sq: Square,
    by: Color,
    offsets: &[Offset],
    kind: PieceKind,
) -> bool {
    offsets.iter().any(|off| {
        (sq + off)
            .and_then(|from| board.get(from))
            .map_or(false, |p| p.is(kind, by))
    })
}

/// `kind` is the slider owning these directions; queens always count.
fn slider_attacks(
    board: &Board,
    sq: Square,
    by: Color,
    directions: &[Offset],
    kind: PieceKind,
) -> bool {
    for dir in directions {
        let mut current = sq;
        while let Some(next) = current + dir {
            if let Some(p) = board.get(next) {
                if p.color == by && (p.kind == kind || p.kind == PieceKind::Queen) {
                    return true;
                }
                break;
            }
            current = next;
        }
    }
    false
}

pub fn find_king(board: &Board, color: Color) -> Option<Square> {
    board
        .pieces_of(color)
        .find(|(_, p)| p.kind == PieceKind::King)
        .map(|(sq, _)| sq)
}

/// Whether `color`'s king is attacked. A board without that king is never
/// in check; sessions validate their boards so this only shows up for
/// hand-built positions.
pub fn in_check(board: &Board, color: Color) -> bool {
    match find_king(board, color) {
        Some(king) => is_attacked(board, king, color.opposite()),
        None => {
            warn!("No {} king on the board, treating as not in check", color);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn test_standard_setup_attacks() {
        let b = Board::standard_setup();
        // Every square on row 5 (rank 3) is covered by white pawns or knights
        for col in 0..BOARD_SIZE {
            assert!(is_attacked(&b, Square::from_row_col(5, col), Color::White));
            assert!(is_attacked(&b, Square::from_row_col(2, col), Color::Black));
        }
        assert!(!is_attacked(&b, sq("e4"), Color::White));
        assert!(!is_attacked(&b, sq("e5"), Color::Black));
        assert!(!in_check(&b, Color::White));
        assert!(!in_check(&b, Color::Black));
    }

    #[test]
    fn test_pawn_attack_direction() {
        let mut b = Board::empty();
        b.add(sq("e4"), Piece::new(PieceKind::Pawn, Color::White)).unwrap();
        b.add(sq("d5"), Piece::new(PieceKind::Pawn, Color::Black)).unwrap();
        assert!(is_attacked(&b, sq("d5"), Color::White));
        assert!(is_attacked(&b, sq("f5"), Color::White));
        assert!(!is_attacked(&b, sq("e5"), Color::White));
        assert!(!is_attacked(&b, sq("d3"), Color::White));
        assert!(is_attacked(&b, sq("e4"), Color::Black));
        assert!(is_attacked(&b, sq("c4"), Color::Black));
        assert!(!is_attacked(&b, sq("d6"), Color::Black));
        assert!(!is_attacked(&b, sq("c6"), Color::Black));
    }

    #[test]
    fn test_sliders_are_blocked() {
        let b: Board = "
            ....k...
            ........
            ........
            ........
            ....p...
            ........
            ........
            ....R..B
        "
        .parse()
        .unwrap();
        assert!(is_attacked(&b, sq("e4"), Color::White));
        assert!(!is_attacked(&b, sq("e5"), Color::White));
        assert!(!in_check(&b, Color::Black));
        assert!(is_attacked(&b, sq("a1"), Color::White));
        // The pawn on e4 cuts the bishop's diagonal
        assert!(is_attacked(&b, sq("f3"), Color::White));
        assert!(!is_attacked(&b, sq("d5"), Color::White));
        assert!(!is_attacked(&b, sq("a8"), Color::White));
    }

    #[test]
    fn test_queen_and_king_attacks() {
        let mut b = Board::empty();
        b.add(sq("a1"), Piece::new(PieceKind::Queen, Color::Black)).unwrap();
        b.add(sq("h8"), Piece::new(PieceKind::King, Color::White)).unwrap();
        assert!(is_attacked(&b, sq("h8"), Color::Black));
        assert!(is_attacked(&b, sq("a8"), Color::Black));
        assert!(is_attacked(&b, sq("h1"), Color::Black));
        assert!(!is_attacked(&b, sq("b3"), Color::Black));
        assert!(is_attacked(&b, sq("g7"), Color::White));
        assert!(!is_attacked(&b, sq("f6"), Color::White));
        assert!(in_check(&b, Color::White));
    }

    #[test]
    fn test_knight_attacks() {
        let mut b = Board::empty();
        b.add(sq("g1"), Piece::new(PieceKind::Knight, Color::White)).unwrap();
        for s in &["e2", "f3", "h3"] {
            assert!(is_attacked(&b, sq(s), Color::White), "{}", s);
        }
        assert!(!is_attacked(&b, sq("g3"), Color::White));
    }

    #[test]
    fn test_missing_king_is_not_in_check() {
        let mut b = Board::empty();
        b.add(sq("a1"), Piece::new(PieceKind::Queen, Color::Black)).unwrap();
        assert_eq!(find_king(&b, Color::White), None);
        assert!(!in_check(&b, Color::White));
    }

    #[test]
    fn test_find_king() {
        let b = Board::standard_setup();
        assert_eq!(find_king(&b, Color::White), Some(sq("e1")));
        assert_eq!(find_king(&b, Color::Black), Some(sq("e8")));
    }
}
