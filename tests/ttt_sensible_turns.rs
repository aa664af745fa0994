use rand::rngs::StdRng;
use rand::SeedableRng;
use test_log::test;
use tictac_mcts::game::Game;
use tictac_mcts::games::{TTTAction, TTTState, TTT};
use tictac_mcts::mcts::game::{Action, Player, State};
use tictac_mcts::mcts::{search, SearchError};
use tictac_mcts::perfect::PerfectPlayer;

const O: Option<Player> = Some(Player::First);
const X: Option<Player> = Some(Player::Second);
const E: Option<Player> = None;

#[test]
fn test_ttt_one_action_gets_win() {
    let state = TTTState::from_board([O, O, E, X, X, E, E, E, E]);
    assert_eq!(state.next_player(), Player::First);

    let trials = 20;
    let wins = (0..trials)
        .filter(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            search(state, 1000, &mut rng).unwrap() == TTTAction::Place(2)
        })
        .count();
    assert!(wins >= 19, "only {} of {} trials took the win", wins, trials);
}

#[test]
fn test_ttt_one_action_blocks_win() {
    let state = TTTState::from_board([O, E, E, X, X, E, O, E, E]);
    assert_eq!(state.next_player(), Player::First);

    let trials = 10;
    let blocks = (0..trials)
        .filter(|&seed| {
            let mut rng = StdRng::seed_from_u64(seed);
            search(state, 2000, &mut rng).unwrap() == TTTAction::Place(5)
        })
        .count();
    assert!(blocks >= 9, "only {} of {} trials blocked", blocks, trials);
}

#[test]
fn test_ttt_single_iteration_from_empty_board() {
    let state = TTT.init_game();
    let mut rng = StdRng::seed_from_u64(0);
    let action = search(state, 1, &mut rng).unwrap();
    assert!(state.permitted_actions().contains(&action));
}

#[test]
fn test_ttt_same_seed_same_action() {
    let positions = [
        TTT.init_game(),
        TTTState::from_board([O, E, E, E, X, E, E, E, E]),
        TTTState::from_board([O, X, E, E, O, E, E, E, X]),
    ];
    for state in positions {
        for seed in 0..3 {
            let first = search(state, 300, &mut StdRng::seed_from_u64(seed)).unwrap();
            let second = search(state, 300, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(first, second);
        }
    }
}

#[test]
fn test_ttt_finished_game_is_an_error() {
    let won = TTTState::from_board([O, O, O, X, X, E, E, E, E]);
    let mut rng = StdRng::seed_from_u64(0);
    assert!(matches!(
        search(won, 100, &mut rng),
        Err(SearchError::TerminalRoot)
    ));

    let drawn = TTTState::from_board([O, X, O, O, X, X, X, O, O]);
    assert!(matches!(
        search(drawn, 100, &mut rng),
        Err(SearchError::TerminalRoot)
    ));
}

#[test]
fn test_ttt_plays_through_without_crash() {
    let mut rng = StdRng::seed_from_u64(1);
    let mut state = TTT.init_game();
    while !state.terminal() {
        let action = search(state, 100, &mut rng).unwrap();
        assert!(state.permitted_actions().contains(&action));
        state = action.execute(&state);
    }
}

#[test]
fn test_ttt_never_loses_to_perfect_play() {
    let mut perfect = PerfectPlayer::new();
    for mcts_player in [Player::First, Player::Second] {
        for seed in 0..2 {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut state = TTT.init_game();
            while !state.terminal() {
                let action = if state.next_player() == mcts_player {
                    search(state, 30000, &mut rng).unwrap()
                } else {
                    perfect.best_action(&state).unwrap()
                };
                state = action.execute(&state);
            }
            assert_ne!(
                state.winner(),
                Some(mcts_player.other()),
                "search playing {:?} with seed {} lost:\n{}",
                mcts_player,
                seed,
                state
            );
        }
    }
}
