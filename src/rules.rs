use crate::attacks::in_check;
use crate::boards::*;
use crate::game_state::Status;
use crate::movegen::raw_moves;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;

// ---------------------------------------------------------------------
// Legal moves
// ---------------------------------------------------------------------

/// Plays `m` on a copy of `board` and reports whether the mover's king is
/// left attacked. The live board is never touched.
pub fn leaves_king_in_check(board: &Board, m: &Move) -> bool {
    let mut hypothetical = board.clone();
    hypothetical.make_move(m);
    in_check(&hypothetical, m.piece.color)
}

/// Raw moves of the piece on `sq` that do not leave its own king in check.
/// Destinations holding a king are never offered.
///
/// Castling is only checked for the king's final square, not for the squares
/// it passes.
pub fn legal_moves(board: &Board, sq: Square) -> Vec<Square> {
    raw_moves(board, sq)
        .into_iter()
        .filter_map(|end| Move::infer(board, sq, end))
        .filter(|m| !m.captured.map_or(false, |p| p.kind == PieceKind::King))
        .filter(|m| !leaves_king_in_check(board, m))
        .map(|m| m.end)
        .collect()
}

/// All legal moves of `color`, in board order.
pub fn all_legal_moves(board: &Board, color: Color) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(move |(start, _)| {
            legal_moves(board, start)
                .into_iter()
                .filter_map(move |end| Move::infer(board, start, end))
        })
        .collect()
}

pub fn has_legal_move(board: &Board, color: Color) -> bool {
    board
        .pieces_of(color)
        .any(|(start, _)| !legal_moves(board, start).is_empty())
}

/// Classifies the position for the player about to move.
pub fn classify(board: &Board, to_move: Color) -> Status {
    let check = in_check(board, to_move);
    match (check, has_legal_move(board, to_move)) {
        (true, false) => Status::Checkmate,
        (false, false) => Status::Stalemate,
        (true, true) => Status::Check,
        (false, true) => Status::Playing,
    }
}
