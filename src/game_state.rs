use crate::boards::*;
use crate::chess_errors::*;
use crate::moves::*;
use crate::pieces::*;
use crate::positions::*;
use crate::rules;
use log::{debug, info};
use std::fmt::{self, Debug, Display};

// -------------------------------------
// Status
// ------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Playing,
    Check,
    Checkmate,
    Stalemate,
}

impl Status {
    pub fn is_over(self) -> bool {
        matches!(self, Status::Checkmate | Status::Stalemate)
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::Playing => "playing",
            Status::Check => "check",
            Status::Checkmate => "checkmate",
            Status::Stalemate => "stalemate",
        };
        write!(f, "{}", s)
    }
}

/// What a click on the board did to the session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Click {
    /// A piece was picked up; these are its legal destinations.
    Selected(Vec<Square>),
    /// The selected piece was moved.
    Moved(Move),
    /// The click was neither a selection nor a legal destination. Any
    /// selection has been dropped.
    Cleared,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Selection {
    square: Square,
    destinations: Vec<Square>,
}

/// Pieces taken so far, grouped by the color of the captured piece.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Captured {
    pub white: Vec<Piece>,
    pub black: Vec<Piece>,
}

impl Captured {
    fn push(&mut self, piece: Piece) {
        match piece.color {
            Color::White => self.white.push(piece),
            Color::Black => self.black.push(piece),
        }
    }

    pub fn of(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white,
            Color::Black => &self.black,
        }
    }
}

// -------------------------------------
// GameState
// ------------------------------------

/// A Game State is one chess session: the board, whose turn it is, the
/// position's classification and the pieces taken so far, plus the piece the
/// player currently holds. The board is only ever changed by `apply_move`.
#[derive(Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Color,
    status: Status,
    captured: Captured,
    selection: Option<Selection>,
    turn_count: u32,
    history: Vec<Move>,
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

// Public Interface
impl GameState {
    /// Returns a game with the figures placed on standard chess starting
    /// positions and white to move.
    pub fn new() -> GameState {
        GameState {
            board: Board::standard_setup(),
            current_player: Color::White,
            status: Status::Playing,
            captured: Captured::default(),
            selection: None,
            turn_count: 0,
            history: Vec::new(),
        }
    }

    /// Starts a session from an arbitrary position. The board must hold
    /// exactly one king per side; the status is classified for `to_move`.
    pub fn from_board(board: Board, to_move: Color) -> ChessResult<GameState> {
        board.validate()?;
        let status = rules::classify(&board, to_move);
        Ok(GameState {
            board,
            current_player: to_move,
            status,
            captured: Captured::default(),
            selection: None,
            turn_count: 0,
            history: Vec::new(),
        })
    }

    /// Throws the current game away and sets up a fresh one. This is the
    /// only way out of checkmate or stalemate.
    pub fn reset(&mut self) {
        info!("Resetting game after {} moves ({})", self.turn_count, self.status);
        *self = GameState::new();
    }

    /// Picks up the piece on `sq` and returns the squares it may move to.
    /// Rejected if the game is over, a piece is already held, or `sq` does not
    /// hold a piece of the player to move. A rejected request drops the
    /// current selection.
    pub fn select_square(&mut self, sq: Square) -> ChessResult<&[Square]> {
        let result = self.check_selectable(sq);
        if let Err(e) = result {
            self.selection = None;
            return Err(e);
        }

        let destinations = rules::legal_moves(&self.board, sq);
        debug!("Selected {} with {} legal moves", sq, destinations.len());
        let selection = self.selection.get_or_insert(Selection {
            square: sq,
            destinations,
        });
        Ok(&selection.destinations)
    }

    /// Moves the selected piece to `destination`, which has to be one of its
    /// legal destinations. On success the turn passes to the opponent and the
    /// new position is classified for them. The selection is cleared either
    /// way.
    pub fn apply_move(&mut self, destination: Square) -> ChessResult<Move> {
        if self.status.is_over() {
            self.selection = None;
            return Err(ChessError::GameOver(self.status));
        }
        let selection = self.selection.take().ok_or(ChessError::NothingSelected)?;
        if !selection.destinations.contains(&destination) {
            return Err(ChessError::IllegalMove(selection.square, destination));
        }
        let m = Move::infer(&self.board, selection.square, destination)
            .ok_or(ChessError::EmptySquare(selection.square))?;

        if let Some(captured) = self.board.make_move(&m) {
            self.captured.push(captured);
        }
        self.history.push(m.clone());
        self.advance_turn();
        debug!("{} played {}", m.piece.color, m);

        let previous = self.status;
        self.status = rules::classify(&self.board, self.current_player);
        if self.status != previous && self.status != Status::Playing {
            info!("{}: {}", self.status, self.status_message());
        }

        Ok(m)
    }

    /// Handles a click on `sq` the way the board UI does: without a selection
    /// it tries to pick up a piece, with one it tries to move there. Invalid
    /// clicks are never errors, they just clear the selection.
    pub fn click(&mut self, sq: Square) -> Click {
        if self.selection.is_none() {
            match self.select_square(sq) {
                Ok(destinations) => Click::Selected(destinations.to_vec()),
                Err(e) => {
                    debug!("Ignoring click on {}: {}", sq, e);
                    Click::Cleared
                }
            }
        } else {
            match self.apply_move(sq) {
                Ok(m) => Click::Moved(m),
                Err(e) => {
                    debug!("Ignoring click on {}: {}", sq, e);
                    Click::Cleared
                }
            }
        }
    }

    fn check_selectable(&self, sq: Square) -> ChessResult<()> {
        if self.status.is_over() {
            return Err(ChessError::GameOver(self.status));
        }
        if let Some(selection) = &self.selection {
            return Err(ChessError::AlreadySelected(selection.square));
        }
        let piece = self.board.get(sq).ok_or(ChessError::EmptySquare(sq))?;
        if piece.color != self.current_player {
            return Err(ChessError::NotYourPiece(sq, self.current_player));
        }
        Ok(())
    }

    fn advance_turn(&mut self) {
        self.turn_count = self.turn_count.saturating_add(1);
        self.current_player = self.current_player.opposite();
    }
}

// Read access
impl GameState {
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Color {
        self.current_player
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Pieces of `color` that have been captured, oldest first.
    pub fn captured(&self, color: Color) -> &[Piece] {
        self.captured.of(color)
    }

    pub fn selected(&self) -> Option<Square> {
        self.selection.as_ref().map(|s| s.square)
    }

    pub fn legal_destinations(&self) -> &[Square] {
        self.selection
            .as_ref()
            .map(|s| s.destinations.as_slice())
            .unwrap_or(&[])
    }

    pub fn turn_count(&self) -> u32 {
        self.turn_count
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// The winner, once the game ended in checkmate.
    pub fn winner(&self) -> Option<Color> {
        match self.status {
            Status::Checkmate => Some(self.current_player.opposite()),
            _ => None,
        }
    }

    pub fn status_message(&self) -> String {
        match self.status {
            Status::Playing => format!("{}'s turn", self.current_player),
            Status::Check => format!("{} is in check!", self.current_player),
            Status::Checkmate => format!("Checkmate! {} wins!", self.current_player.opposite()),
            Status::Stalemate => "Stalemate! The game is a draw.".to_string(),
        }
    }
}

fn write_pieces(f: &mut fmt::Formatter<'_>, pieces: &[Piece]) -> fmt::Result {
    for p in pieces {
        write!(f, "{}", p)?;
    }
    Ok(())
}

impl Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Turn: {}  {}", self.turn_count, self.status_message())?;
        write!(f, "Captured: ")?;
        write_pieces(f, &self.captured.white)?;
        write!(f, " | ")?;
        write_pieces(f, &self.captured.black)?;
        write!(f, "\n{}", self.board)
    }
}

impl Debug for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Turn: {}  Player: {}  Status: {}",
            self.turn_count, self.current_player, self.status
        )?;
        writeln!(
            f,
            "Selected: {:?} -> {:?}",
            self.selected(),
            self.legal_destinations()
        )?;
        writeln!(f, "Captured: {:?}", self.captured)?;
        write!(f, "{}", self.board)
    }
}
