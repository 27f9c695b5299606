use crate::boards::*;
use crate::moves::CastleSide;
use crate::pieces::*;
use crate::positions::*;

// ---------------------------------------------------------------------
// Movement tables
// ---------------------------------------------------------------------
//
// Offsets are saved as (row, col). Row 0 is the black back rank, so
// "up" on a printed board is a negative row offset.

pub const ORTHOGONAL: [Offset; 4] = [Offset(1, 0), Offset(-1, 0), Offset(0, 1), Offset(0, -1)];
pub const DIAGONAL: [Offset; 4] = [Offset(1, 1), Offset(1, -1), Offset(-1, 1), Offset(-1, -1)];
pub const ALL_DIRECTIONS: [Offset; 8] = [
    Offset(1, 0),
    Offset(-1, 0),
    Offset(0, 1),
    Offset(0, -1),
    Offset(1, 1),
    Offset(1, -1),
    Offset(-1, 1),
    Offset(-1, -1),
];
pub const KNIGHT_OFFSETS: [Offset; 8] = [
    Offset(2, 1),
    Offset(2, -1),
    Offset(-2, 1),
    Offset(-2, -1),
    Offset(1, 2),
    Offset(1, -2),
    Offset(-1, 2),
    Offset(-1, -2),
];

/// How a piece kind moves.
#[derive(Debug, Clone, Copy)]
pub enum Movement {
    Pawn,
    /// Single jumps to each offset.
    Leaper(&'static [Offset]),
    /// Rays along each offset until blocked.
    Slider(&'static [Offset]),
    /// Leaper on all directions plus castling.
    King,
}

/// Indexed by `PieceKind::as_index`.
const MOVEMENT_TABLE: [Movement; 6] = [
    Movement::Pawn,
    Movement::Leaper(&KNIGHT_OFFSETS),
    Movement::Slider(&DIAGONAL),
    Movement::Slider(&ORTHOGONAL),
    Movement::Slider(&ALL_DIRECTIONS),
    Movement::King,
];

pub fn movement(kind: PieceKind) -> Movement {
    MOVEMENT_TABLE[kind.as_index()]
}

// ---------------------------------------------------------------------
// Raw (pseudo-legal) moves
// ---------------------------------------------------------------------

/// Returns all destinations the piece on `sq` can reach by piece geometry and
/// occupancy alone. Whether the move exposes the mover's own king is not
/// considered here. An empty square has no moves.
pub fn raw_moves(board: &Board, sq: Square) -> Vec<Square> {
    let piece = match board.get(sq) {
        Some(p) => p,
        None => return Vec::new(),
    };

    let mut res = Vec::with_capacity(16);
    match movement(piece.kind) {
        Movement::Pawn => pawn_moves(board, sq, piece, &mut res),
        Movement::Leaper(offsets) => leaper_moves(board, sq, piece.color, offsets, &mut res),
        Movement::Slider(directions) => {
            slider_moves(board, sq, piece.color, directions, &mut res)
        }
        Movement::King => {
            leaper_moves(board, sq, piece.color, &ALL_DIRECTIONS, &mut res);
            castling_moves(board, sq, piece, &mut res);
        }
    }
    res
}

fn is_enemy(board: &Board, sq: Square, color: Color) -> bool {
    board.get(sq).map_or(false, |p| p.color != color)
}

fn pawn_moves(board: &Board, sq: Square, pawn: Piece, res: &mut Vec<Square>) {
    let forward = pawn.color.forward();

    if let Some(one) = sq + Offset(forward, 0) {
        if board.is_empty_at(one) {
            res.push(one);

            if !pawn.has_moved && sq.row() == pawn.color.pawn_row() {
                if let Some(two) = one + Offset(forward, 0) {
                    if board.is_empty_at(two) {
                        res.push(two);
                    }
                }
            }
        }
    }

    for &side in [-1, 1].iter() {
        if let Some(target) = sq + Offset(forward, side) {
            if is_enemy(board, target, pawn.color) {
                res.push(target);
            }
        }
    }
}

fn leaper_moves(
    board: &Board,
    sq: Square,
    color: Color,
    offsets: &[Offset],
    res: &mut Vec<Square>,
) {
    for off in offsets {
        if let Some(target) = sq + off {
            match board.get(target) {
                Some(p) if p.color == color => {}
                _ => res.push(target),
            }
        }
    }
}

fn slider_moves(
    board: &Board,
    sq: Square,
    color: Color,
    directions: &[Offset],
    res: &mut Vec<Square>,
) {
    for dir in directions {
        let mut current = sq;
        while let Some(target) = current + dir {
            match board.get(target) {
                None => res.push(target),
                Some(p) => {
                    if p.color != color {
                        res.push(target);
                    }
                    break;
                }
            }
            current = target;
        }
    }
}

/// Offers the two-square king slide when king and rook are unmoved, the king
/// stands on its starting square and the squares between them are empty.
/// Only occupancy is checked.
fn castling_moves(board: &Board, sq: Square, king: Piece, res: &mut Vec<Square>) {
    if king.has_moved || sq.row() != king.color.back_row() || sq.col() != KING_START_COL {
        return;
    }

    for &side in [CastleSide::Kingside, CastleSide::Queenside].iter() {
        let (rook_col, _) = side.rook_cols();
        let rook_ready = board
            .get(sq.with_col(rook_col))
            .map_or(false, |r| r.is(PieceKind::Rook, king.color) && !r.has_moved);
        if !rook_ready {
            continue;
        }

        let (lo, hi) = if rook_col > sq.col() {
            (sq.col() + 1, rook_col)
        } else {
            (rook_col + 1, sq.col())
        };
        let path_clear = (lo..hi).all(|col| board.is_empty_at(sq.with_col(col)));
        if path_clear {
            if let Some(target) = Square::new(sq.row(), side.king_col()) {
                res.push(target);
            }
        }
    }
}
