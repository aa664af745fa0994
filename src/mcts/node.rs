use super::game::State;
use log::trace;

/// Index of a node inside the tree's arena. Stable for the life of the tree.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct NodeId(pub usize);

#[derive(Debug)]
pub struct Node<StateType: State> {
    state: StateType,
    /// The action that led here from the parent
    action: Option<StateType::ActionType>,
    parent: Option<NodeId>,
    /// In order of expansion
    children: Vec<NodeId>,
    visits: u32,
    /// Sum of rewards for the player who moved into this node
    wins: f64,
    unexplored: Vec<StateType::ActionType>,
}

impl<StateType: State> Node<StateType> {
    pub fn new_root(state: StateType) -> Node<StateType> {
        create_node(state, None, None)
    }

    pub fn new_child(
        state: StateType,
        action: StateType::ActionType,
        parent: NodeId,
    ) -> Node<StateType> {
        create_node(state, Some(action), Some(parent))
    }

    pub fn state(&self) -> &StateType {
        &self.state
    }

    pub fn action(&self) -> Option<StateType::ActionType> {
        self.action
    }

    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    pub fn children(&self) -> &[NodeId] {
        &self.children
    }

    pub fn visits(&self) -> u32 {
        self.visits
    }

    pub fn wins(&self) -> f64 {
        self.wins
    }

    pub fn unexplored(&self) -> &[StateType::ActionType] {
        &self.unexplored
    }

    pub fn fully_expanded(&self) -> bool {
        self.unexplored.is_empty()
    }

    ///
    /// Exploitation plus exploration. A child that has never been visited scores 0.
    ///
    pub fn uct(&self, parent_visits: u32, constant: f64) -> f64 {
        if self.visits == 0 {
            return 0.0;
        }
        let visits = self.visits as f64;
        let q = self.wins / visits;
        let u = ((parent_visits as f64).ln() / visits).sqrt();
        trace!(
            "UCT action: {:?}, wins: {}, visits: {}, parent_visits: {}, q: {}, u: {}",
            self.action,
            self.wins,
            self.visits,
            parent_visits,
            q,
            u
        );
        q + constant * u
    }

    pub fn visit(&mut self, reward: f64) {
        self.visits += 1;
        self.wins += reward;
    }

    /// Takes the unexplored action at `index` out of the set. Order of the rest is kept.
    pub(super) fn take_unexplored(&mut self, index: usize) -> StateType::ActionType {
        self.unexplored.remove(index)
    }

    pub(super) fn push_child(&mut self, child: NodeId) {
        self.children.push(child);
    }
}

fn create_node<StateType: State>(
    state: StateType,
    action: Option<StateType::ActionType>,
    parent: Option<NodeId>,
) -> Node<StateType> {
    let unexplored = state.permitted_actions();
    Node {
        state,
        action,
        parent,
        children: Vec::new(),
        visits: 0,
        wins: 0.0,
        unexplored,
    }
}
