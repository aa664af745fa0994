use crate::mcts::game::{Action, Player, State};

///
/// A generic test game that can have injected winner, terminal state, and permitted actions
/// to test tree and node related things.
///
#[derive(Clone, Debug)]
pub struct TestGameState {
    pub injected_winner: Option<Player>,
    pub injected_terminal: bool,
    pub injected_permitted_actions: Vec<TestGameAction>,
    pub next_player: Player,
}

impl TestGameState {
    pub fn with_actions(actions: Vec<TestGameAction>) -> TestGameState {
        TestGameState {
            injected_winner: None,
            injected_terminal: false,
            injected_permitted_actions: actions,
            next_player: Player::First,
        }
    }
}

impl State for TestGameState {
    type ActionType = TestGameAction;
    fn permitted_actions(&self) -> Vec<Self::ActionType> {
        self.injected_permitted_actions.clone()
    }
    fn next_player(&self) -> Player {
        self.next_player
    }
    fn terminal(&self) -> bool {
        self.injected_terminal
    }
    fn winner(&self) -> Option<Player> {
        self.injected_winner
    }
}

#[derive(Hash, Copy, Clone, Eq, PartialEq, Debug)]
pub enum TestGameAction {
    /// The player making this move wins
    Win,
    Draw,
    WinInXTurns(u8),
    NextTurnInjectActionCount(u8),
    /// Leads to a state that isn't terminal but has nothing to play
    DeadEnd,
}

impl Action for TestGameAction {
    type StateType = TestGameState;
    fn execute(&self, state: &Self::StateType) -> Self::StateType {
        let next_player = state.next_player.other();
        match self {
            TestGameAction::NextTurnInjectActionCount(c) => TestGameState {
                injected_permitted_actions: (0..*c).map(TestGameAction::WinInXTurns).collect(),
                next_player,
                ..state.clone()
            },
            TestGameAction::WinInXTurns(turns) => TestGameState {
                injected_permitted_actions: if *turns > 0 {
                    vec![TestGameAction::WinInXTurns(turns - 1)]
                } else {
                    vec![TestGameAction::Win]
                },
                next_player,
                ..state.clone()
            },
            TestGameAction::Win => TestGameState {
                injected_terminal: true,
                injected_winner: Some(state.next_player),
                injected_permitted_actions: vec![],
                next_player,
            },
            TestGameAction::Draw => TestGameState {
                injected_terminal: true,
                injected_winner: None,
                injected_permitted_actions: vec![],
                next_player,
            },
            TestGameAction::DeadEnd => TestGameState {
                injected_permitted_actions: vec![],
                next_player,
                ..state.clone()
            },
        }
    }
}
