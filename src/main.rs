use arcade_chess::agents::HumanAgent;
use arcade_chess::game::{Game, Outcome};

// ---------------------------------------------
// Main
// ---------------------------------------------

// Hot-seat game on the terminal. Squares are entered as e.g. "e2" then "e4",
// "quit" resigns. Set RUST_LOG=debug to follow the session.
fn main() {
    env_logger::init();

    let mut game = Game::new(HumanAgent::new(), HumanAgent::new()).verbose();
    let outcome = game.play();
    println!("{}\n", game.state());
    match outcome {
        Outcome::Checkmate { winner } => println!("Checkmate! {} wins!", winner),
        Outcome::Stalemate => println!("Stalemate! The game is a draw."),
        Outcome::Abandoned { by } => println!("{} resigned.", by),
    }
}
