use super::game::{Action, Player, State};
use super::node::{Node, NodeId};
use super::{SearchError, DRAW_REWARD, WIN_REWARD};
use log::trace;
use rand::Rng;

///
/// A search tree for one decision. Nodes live in an arena and refer to each other by index,
/// so the parent links don't own anything.
///
pub struct Tree<StateType: State> {
    nodes: Vec<Node<StateType>>,
    constant: f64,
}

impl<StateType: State> Tree<StateType> {
    pub fn new(state: StateType) -> Tree<StateType> {
        Tree {
            nodes: vec![Node::new_root(state)],
            constant: 2.0_f64.sqrt(),
        }
    }

    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node(&self, id: NodeId) -> &Node<StateType> {
        &self.nodes[id.0]
    }

    fn node_mut(&mut self, id: NodeId) -> &mut Node<StateType> {
        &mut self.nodes[id.0]
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Never true; the root is there from construction.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    ///
    /// Descends by UCT from `from`, stopping at the first node that is unvisited, has untried
    /// actions, or has no children.
    ///
    pub fn selection(&self, from: NodeId) -> NodeId {
        let mut current = from;
        loop {
            let node = self.node(current);
            if node.visits() == 0 || !node.fully_expanded() || node.children().is_empty() {
                return current;
            }

            let mut best: Option<(NodeId, f64)> = None;
            for &child in node.children() {
                let uct = self.node(child).uct(node.visits(), self.constant);
                match best {
                    // Strictly greater, so the earliest child wins a tie
                    Some((_, best_uct)) if uct <= best_uct => {}
                    _ => best = Some((child, uct)),
                }
            }
            current = match best {
                Some((child, _)) => child,
                None => return current,
            };
        }
    }

    ///
    /// Materialises one random untried action of `id` as a new child. A fully expanded node is
    /// descended through with `selection` instead.
    ///
    pub fn expansion<R: Rng>(&mut self, id: NodeId, rng: &mut R) -> NodeId {
        if self.node(id).fully_expanded() {
            return self.selection(id);
        }

        let index = rng.gen_range(0..self.node(id).unexplored().len());
        let action = self.node_mut(id).take_unexplored(index);
        let state = action.execute(self.node(id).state());

        let child = NodeId(self.nodes.len());
        self.nodes.push(Node::new_child(state, action, id));
        self.node_mut(id).push_child(child);
        trace!("Expanded {:?} with {:?} into {:?}", id, action, child);
        child
    }

    ///
    /// Grows a path from `id` until it reaches a terminal state, alternating expansion and
    /// selection at each step. Returns the winner and the terminal node.
    ///
    pub fn play_out<R: Rng>(
        &mut self,
        id: NodeId,
        rng: &mut R,
    ) -> Result<(Option<Player>, NodeId), SearchError> {
        let mut current = id;
        loop {
            let state = self.node(current).state();
            if state.terminal() {
                trace!("Play out reached {:?}, winner {:?}", current, state.winner());
                return Ok((state.winner(), current));
            }

            let next = self.expansion(current, rng);
            if next == current {
                // Not terminal, nothing untried, and nowhere to descend
                return Err(SearchError::DeadEnd);
            }
            current = next;
        }
    }

    ///
    /// Walks from `id` up to the root. Each node is credited when the player due to move there
    /// is not the winner, i.e. the player who moved into it won. Draws credit everyone a little.
    ///
    pub fn propagate_reward(&mut self, id: NodeId, winner: Option<Player>) {
        let mut current = Some(id);
        while let Some(node_id) = current {
            let node = self.node_mut(node_id);
            let reward = match winner {
                None => DRAW_REWARD,
                Some(winner) if node.state().next_player() != winner => WIN_REWARD,
                Some(_) => 0.0,
            };
            node.visit(reward);
            current = node.parent();
        }
    }

    /// The action of the most visited child of the root; earliest expanded wins a tie.
    pub fn best_pick(&self) -> Option<StateType::ActionType> {
        let mut best: Option<&Node<StateType>> = None;
        for &child in self.node(self.root()).children() {
            let node = self.node(child);
            if best.map_or(true, |best| node.visits() > best.visits()) {
                best = Some(node);
            }
        }
        best.and_then(|node| node.action())
    }

    pub fn iterate<R: Rng>(&mut self, rng: &mut R) -> Result<(), SearchError> {
        let selected = self.selection(self.root());
        let (winner, terminal) = self.play_out(selected, rng)?;
        self.propagate_reward(terminal, winner);
        Ok(())
    }

    pub fn trace_log_children(&self, id: NodeId, level: usize) {
        for &child in self.node(id).children() {
            let node = self.node(child);
            trace!("{} {:?}", "         |-".repeat(level), node.action());
            trace!(
                "{} {:.6} {}",
                "         | ".repeat(level),
                node.wins(),
                node.visits()
            );
            if node.visits() > 0 {
                trace!(
                    "{} {:.6}",
                    "         | ".repeat(level),
                    node.wins() / node.visits() as f64
                );
            }
            self.trace_log_children(child, level + 1);
        }
        for action in self.node(id).unexplored() {
            trace!("{} ({:?})", "         |-".repeat(level), action);
        }
    }
}
