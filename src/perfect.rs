//! Exhaustive game-tree solver, used as a perfect-play opponent.
use std::collections::HashMap;
use std::hash::Hash;

use crate::mcts::game::{Action, State};

pub struct PerfectPlayer<StateType: State + Eq + Hash> {
    values: HashMap<StateType, i8>,
}

impl<StateType: State + Eq + Hash> Default for PerfectPlayer<StateType> {
    fn default() -> Self {
        Self::new()
    }
}

impl<StateType: State + Eq + Hash> PerfectPlayer<StateType> {
    pub fn new() -> PerfectPlayer<StateType> {
        PerfectPlayer {
            values: HashMap::new(),
        }
    }

    ///
    /// Value of `state` for the player due to move under best play from both sides:
    /// 1 for a win, 0 for a draw, -1 for a loss.
    ///
    pub fn value(&mut self, state: &StateType) -> i8 {
        if let Some(&value) = self.values.get(state) {
            return value;
        }
        let value = if state.terminal() {
            match state.winner() {
                None => 0,
                Some(winner) if winner == state.next_player() => 1,
                Some(_) => -1,
            }
        } else {
            state
                .permitted_actions()
                .iter()
                .map(|action| -self.value(&action.execute(state)))
                .max()
                .unwrap_or(0)
        };
        self.values.insert(state.clone(), value);
        value
    }

    /// The first permitted action that achieves the best value. `None` once the game is over.
    pub fn best_action(&mut self, state: &StateType) -> Option<StateType::ActionType> {
        if state.terminal() {
            return None;
        }
        let mut best: Option<(StateType::ActionType, i8)> = None;
        for action in state.permitted_actions() {
            let value = -self.value(&action.execute(state));
            match best {
                Some((_, best_value)) if value <= best_value => {}
                _ => best = Some((action, value)),
            }
        }
        log::trace!("Perfect play picks {:?}", best);
        best.map(|(action, _)| action)
    }
}
