//! Benchmarks the search by just taking the first turn and timing it
use std::error::Error;
use std::time::Instant;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tictac_mcts::game::Game;
use tictac_mcts::games::TTT;
use tictac_mcts::mcts::search;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
    #[arg(short, long, default_value_t = 100000)]
    iterations: usize,
    #[arg(short, long, default_value_t = 10)]
    episodes: usize,
    #[arg(short, long, default_value_t = 0)]
    seed: u64,
}

fn run_benchmark<G: Game>(game: G, iterations: usize, rng: &mut StdRng) -> Result<f64, Box<dyn Error>> {
    let state = game.init_game();
    let start = Instant::now();
    search(state, iterations, rng)?;
    let elapsed = start.elapsed();
    let iterations_per_second = iterations as f64 / elapsed.as_secs_f64();
    println!(
        "{} iterations in {:.2} seconds ({:.2} iterations per second)",
        iterations,
        &elapsed.as_secs_f64(),
        iterations_per_second
    );
    Ok(elapsed.as_secs_f64())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    println!(
        "===\nIterations: {}, Episodes: {}, Seed: {}",
        args.iterations, args.episodes, args.seed
    );
    println!("---");
    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let mut rng = StdRng::seed_from_u64(args.seed);
    let durations = (0..args.episodes)
        .map(|_| run_benchmark(TTT, args.iterations, &mut rng))
        .collect::<Result<Vec<f64>, _>>()?;
    println!("---");
    println!(
        "Average duration: {:.2} seconds",
        durations.iter().sum::<f64>() / durations.len().max(1) as f64
    );
    println!(
        "Average iterations per second: {}",
        (args.episodes * args.iterations) as f64 / durations.iter().sum::<f64>()
    );
    Ok(())
}
