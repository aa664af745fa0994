use crate::mcts::game::{Action, State};
use std::io;

pub trait Game {
    type StateType: State<ActionType = Self::ActionType>;
    type ActionType: Action<StateType = Self::StateType>;
    fn visualise_state(&self, state: &Self::StateType);
    /// Blocks on stdin until the player enters a legal action.
    fn get_human_turn(&self, state: &Self::StateType) -> io::Result<Self::ActionType>;
    fn init_game(&self) -> Self::StateType;
}
