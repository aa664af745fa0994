//! Play tic-tac-toe against the tree search at the terminal
use std::error::Error;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictac_mcts::game::Game;
use tictac_mcts::games::TTT;
use tictac_mcts::mcts::game::{Action, Player, State};
use tictac_mcts::mcts::search;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Search iterations per AI move
    #[arg(short, long, default_value_t = 1000)]
    iterations: usize,

    /// Let the AI make the opening move
    #[arg(short, long)]
    ai_first: bool,

    /// Seed for the AI's random source
    #[arg(short, long)]
    seed: Option<u64>,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let ai_player = if args.ai_first {
        Player::First
    } else {
        Player::Second
    };

    let game = TTT;
    let mut state = game.init_game();
    while !state.terminal() {
        let action = if state.next_player() == ai_player {
            let action = search(state, args.iterations, &mut rng)?;
            println!("AI plays {:?}", action);
            action
        } else {
            game.visualise_state(&state);
            game.get_human_turn(&state)?
        };
        log::debug!("{:?} plays {:?}", state.next_player(), action);
        state = action.execute(&state);
    }

    game.visualise_state(&state);
    match state.winner() {
        None => println!("Draw"),
        Some(winner) if winner == ai_player => println!("AI wins"),
        Some(_) => println!("You win"),
    }
    Ok(())
}
