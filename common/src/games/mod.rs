pub(crate) mod session_rng;

pub mod tictactoe;

pub use session_rng::{MoveRandom, SessionRng};
