mod ttt;

pub use ttt::{parse_human_turn, MoveInputError, TTTAction, TTTState, TTT};
