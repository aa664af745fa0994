use std::fmt::Debug;

/// Applying an action to a state never mutates the state; it produces the next one.
pub trait Action: Debug + Clone + Copy + Eq + std::hash::Hash {
    type StateType: State<ActionType = Self>;
    fn execute(&self, state: &Self::StateType) -> Self::StateType;
}

///
/// One of the two players of a two-player, zero-sum game.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum Player {
    /// The player who makes the opening move.
    First,
    Second,
}

impl Player {
    pub fn other(&self) -> Player {
        match self {
            Player::First => Player::Second,
            Player::Second => Player::First,
        }
    }
}

pub trait State: Clone {
    type ActionType: Action<StateType = Self>;
    fn permitted_actions(&self) -> Vec<Self::ActionType>;
    /// The player about to move.
    fn next_player(&self) -> Player;
    fn terminal(&self) -> bool;
    /// `None` for a draw, or for a state that isn't terminal yet.
    fn winner(&self) -> Option<Player>;
}
