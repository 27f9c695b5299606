// Helpers for tests.

/// Creates a `Vec<Square>` from algebraic square names.
/// Panics on invalid names, so only use it in tests.
#[macro_export]
macro_rules! squares {
    ( $( $x:expr ),* ) => {
        {
            #[allow(unused_mut)]
            let mut base: Vec<$crate::positions::Square> = Vec::new();
            $(
                base.push(
                    $x.parse::<$crate::positions::Square>()
                        .expect("invalid square in squares!"),
                );
            )*
            base
        }
    };
}

#[cfg(test)]
pub use self::testing::*;

#[cfg(test)]
mod testing {
    use crate::boards::Board;
    use crate::moves::Move;
    use crate::pieces::Color;
    use crate::positions::Square;
    use crate::rules::all_legal_moves;
    use rand::seq::SliceRandom;
    use rand::Rng;

    /// Sorts squares so move lists can be compared regardless of generation order.
    pub fn sorted(mut squares: Vec<Square>) -> Vec<Square> {
        squares.sort();
        squares
    }

    /// Plays up to `plies` random legal moves from the standard setup and
    /// returns every position reached, together with the side to move there.
    /// Stops early when the side to move has no legal moves.
    pub fn random_playout(rng: &mut impl Rng, plies: usize) -> Vec<(Board, Color)> {
        let mut board = Board::standard_setup();
        let mut color = Color::White;
        let mut res = Vec::with_capacity(plies + 1);

        for _ in 0..plies {
            res.push((board.clone(), color));
            let moves: Vec<Move> = all_legal_moves(&board, color);
            let mv = match moves.choose(rng) {
                Some(mv) => mv.clone(),
                None => return res,
            };
            board.make_move(&mv);
            color = color.opposite();
        }
        res.push((board, color));
        res
    }
}
