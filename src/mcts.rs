//! Monte Carlo tree search for two-player, zero-sum games with perfect information.
pub mod game;
pub mod node;
pub mod tree;

use game::State;
use log::{debug, log_enabled, Level};
use rand::Rng;
use thiserror::Error;
use tree::Tree;

/// Credit for the player who moved into a node when they went on to win.
pub const WIN_REWARD: f64 = 1.0;
/// Credit for every node on a path that ended in a draw.
pub const DRAW_REWARD: f64 = 0.1;

#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search needs at least one iteration")]
    ZeroIterations,
    #[error("no legal action from a terminal state")]
    TerminalRoot,
    #[error("no legal action from a non-terminal state")]
    NoLegalActions,
    #[error("rollout stalled at a non-terminal state with no legal actions")]
    DeadEnd,
    #[error("root has no children to choose from")]
    NoChildren,
}

///
/// Picks an action for the player to move in `state` by running `iterations` rounds of
/// selection, expansion, play out and back propagation over a fresh tree. The tree is dropped
/// once the action is chosen.
///
/// All randomness comes from `rng`, so a seeded generator makes the result reproducible.
///
pub fn search<StateType: State, R: Rng>(
    state: StateType,
    iterations: usize,
    rng: &mut R,
) -> Result<StateType::ActionType, SearchError> {
    if iterations == 0 {
        return Err(SearchError::ZeroIterations);
    }
    if state.terminal() {
        return Err(SearchError::TerminalRoot);
    }

    let mut tree = Tree::new(state);
    let root = tree.root();
    if tree.node(root).fully_expanded() {
        return Err(SearchError::NoLegalActions);
    }

    for _ in 0..iterations {
        tree.iterate(rng)?;
    }

    for &child in tree.node(root).children() {
        let node = tree.node(child);
        debug!(
            "Action {:?}: visits {}, wins {:.1}",
            node.action(),
            node.visits(),
            node.wins()
        );
    }
    if log_enabled!(Level::Trace) {
        tree.trace_log_children(root, 0);
    }

    let action = tree.best_pick().ok_or(SearchError::NoChildren)?;
    debug!(
        "Picked {:?} after {} iterations ({} nodes)",
        action,
        iterations,
        tree.len()
    );
    Ok(action)
}
