use crate::game_state::Status;
use crate::pieces::{Color, Piece};
use crate::positions::Square;
use thiserror::Error;

// ---------------------------------------------
// Error Handling
// ---------------------------------------------

/// Everything that can reject a request against a board or a session.
/// None of these are fatal: a session that returns one is left as it was,
/// apart from its selection being cleared.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    #[error("Invalid chess square {0:?}")]
    InvalidSquare(String),
    #[error("Invalid board diagram: {0}")]
    InvalidDiagram(String),
    #[error("Square {0} is not empty but holds {1}")]
    Occupied(Square, Piece),
    #[error("No piece on {0}")]
    EmptySquare(Square),
    #[error("Piece on {0} does not belong to {1}")]
    NotYourPiece(Square, Color),
    #[error("{0} is already selected")]
    AlreadySelected(Square),
    #[error("No piece selected")]
    NothingSelected,
    #[error("Illegal move {0} -> {1}")]
    IllegalMove(Square, Square),
    #[error("Game is over ({0})")]
    GameOver(Status),
    #[error("{0} has {1} kings on the board, expected exactly one")]
    KingCount(Color, usize),
}

pub type ChessResult<T> = std::result::Result<T, ChessError>;
