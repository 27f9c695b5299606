use crate::game_state::*;
use crate::pieces::Color;
use crate::positions::Square;
use log::debug;

/// An agent is an object that can play chess by choosing moves appropriate to a
/// current game state. Returning `None` abandons the game.
pub trait Agent {
    fn play_move(&mut self, state: &GameState) -> Option<(Square, Square)>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Checkmate { winner: Color },
    Stalemate,
    Abandoned { by: Color },
}

/// Two agents sharing one session, driving it through the same click
/// interface a board UI would use.
pub struct Game<A1: Agent, A2: Agent> {
    white: A1,
    black: A2,
    state: GameState,
    verbose: bool,
}

impl<A1: Agent, A2: Agent> Game<A1, A2> {
    pub fn new(white: A1, black: A2) -> Game<A1, A2> {
        Game {
            white,
            black,
            state: GameState::new(),
            verbose: false,
        }
    }

    /// Prints the board before every move and complains about rejected input.
    pub fn verbose(mut self) -> Self {
        self.verbose = true;
        self
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Asks the agents for moves in turn until the game ends. A move the
    /// session rejects is asked for again from the same agent.
    pub fn play(&mut self) -> Outcome {
        loop {
            match self.state.status() {
                Status::Checkmate => {
                    return Outcome::Checkmate {
                        winner: self.state.current_player().opposite(),
                    }
                }
                Status::Stalemate => return Outcome::Stalemate,
                Status::Playing | Status::Check => {}
            }

            let player = self.state.current_player();
            if self.verbose {
                println!("{}\n", self.state);
            }

            let choice = match player {
                Color::White => self.white.play_move(&self.state),
                Color::Black => self.black.play_move(&self.state),
            };
            let (from, to) = match choice {
                Some(mv) => mv,
                None => return Outcome::Abandoned { by: player },
            };

            let selected = self.state.select_square(from).map(|_| ());
            match selected.and_then(|()| self.state.apply_move(to)) {
                Ok(m) => {
                    if self.verbose {
                        println!("{} played {}", player, m);
                    }
                }
                Err(e) => {
                    debug!("Rejected {} -> {} for {}: {}", from, to, player, e);
                    if self.verbose {
                        println!("{}, try again.", e);
                    }
                }
            }
        }
    }
}
