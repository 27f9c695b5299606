//! Differing kinds of agents that can play the game
use crate::game::Agent;
use crate::game_state::GameState;
use crate::positions::Square;
use crate::rules::legal_moves;
use std::collections::VecDeque;
use std::io::{stdout, Write};
use text_io::try_read;

/// Reads moves from stdin. Squares are entered in algebraic notation
/// (`e2`, then `e4`); `quit` or end of input resigns.
pub struct HumanAgent {}

impl HumanAgent {
    pub fn new() -> Self {
        HumanAgent {}
    }

    fn ask(prompt: &str) -> Option<Square> {
        loop {
            print!("{}", prompt);
            stdout().flush().ok()?;
            let input: String = try_read!("{}\n").ok()?;
            let input = input.trim();
            if input.eq_ignore_ascii_case("quit") {
                return None;
            }
            match input.parse() {
                Ok(sq) => return Some(sq),
                Err(e) => println!("{}", e),
            }
        }
    }
}

impl Default for HumanAgent {
    fn default() -> Self {
        HumanAgent::new()
    }
}

impl Agent for HumanAgent {
    fn play_move(&mut self, state: &GameState) -> Option<(Square, Square)> {
        println!("{}'s move: ", state.current_player());
        let from = HumanAgent::ask("From: ")?;
        let targets = legal_moves(state.board(), from);
        if !targets.is_empty() {
            let names: Vec<String> = targets.iter().map(|sq| sq.to_string()).collect();
            println!("Legal targets: {}", names.join(" "));
        }
        let to = HumanAgent::ask("To: ")?;
        Some((from, to))
    }
}

/// Plays a fixed list of moves, then resigns.
pub struct ScriptedAgent {
    moves: VecDeque<(Square, Square)>,
}

impl ScriptedAgent {
    pub fn new<I: IntoIterator<Item = (Square, Square)>>(moves: I) -> Self {
        ScriptedAgent {
            moves: moves.into_iter().collect(),
        }
    }

    /// Builds the script from algebraic square pairs such as `("e2", "e4")`.
    /// Pairs that do not parse are skipped.
    pub fn from_algebraic(moves: &[(&str, &str)]) -> Self {
        ScriptedAgent::new(
            moves
                .iter()
                .filter_map(|(from, to)| Some((from.parse().ok()?, to.parse().ok()?))),
        )
    }

    pub fn remaining(&self) -> usize {
        self.moves.len()
    }
}

impl Agent for ScriptedAgent {
    fn play_move(&mut self, _state: &GameState) -> Option<(Square, Square)> {
        self.moves.pop_front()
    }
}
