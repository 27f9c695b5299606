//! # Arcade chess
//!
//! The chess game of the arcade: an 8x8 board, move generation with
//! castling and auto-promotion, check, checkmate and stalemate detection,
//! and a click driven session a board UI can sit on.
//!
//! No en passant, no draw by repetition or 50-move rule, and pawns always
//! promote to queens.
#[macro_use]
extern crate impl_ops;

pub mod agents;
pub mod attacks;
pub mod boards;
pub mod chess_errors;
pub mod game;
pub mod game_state;
pub mod movegen;
pub mod moves;
pub mod pieces;
pub mod positions;
pub mod rules;
pub mod utils;

pub use boards::Board;
pub use chess_errors::{ChessError, ChessResult};
pub use game_state::{Click, GameState, Status};
pub use moves::{CastleSide, Move, MoveKind};
pub use pieces::{Color, Piece, PieceKind};
pub use positions::Square;
