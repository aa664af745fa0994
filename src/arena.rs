//! Plays configurations of players against one another
use std::error::Error;
use std::hash::Hash;
use std::io::Write;
use std::{fs, thread};

use clap::Parser;
use env_logger::fmt::Formatter;
use log::Record;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use tictac_mcts::game::Game;
use tictac_mcts::games::TTT;
use tictac_mcts::mcts::game::{Action, Player, State};
use tictac_mcts::mcts::search;
use tictac_mcts::perfect::PerfectPlayer;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg()]
    config_file: String,
    /// Write a timestamped JSON report of the results into this folder
    #[arg(short, long)]
    reports_folder: Option<String>,
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,
}

#[derive(Debug, Deserialize, Serialize)]
struct ArenaSettings {
    episodes: usize,
    /// In seat order: the first entry opens every episode
    players: [PlayerSettings; 2],
}

#[derive(Debug, Deserialize, Serialize, Clone)]
#[serde(tag = "type")]
enum PlayerSettings {
    Random {
        seed: Option<u64>,
    },
    Mcts {
        iterations: usize,
        seed: Option<u64>,
    },
    Perfect,
}

enum Contestant<StateType: State + Eq + Hash> {
    Random(StdRng),
    Mcts { iterations: usize, rng: StdRng },
    Perfect(PerfectPlayer<StateType>),
}

fn seeded_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

impl<StateType: State + Eq + Hash> Contestant<StateType> {
    fn new(settings: &PlayerSettings) -> Contestant<StateType> {
        match settings {
            PlayerSettings::Random { seed } => Contestant::Random(seeded_rng(*seed)),
            PlayerSettings::Mcts { iterations, seed } => Contestant::Mcts {
                iterations: *iterations,
                rng: seeded_rng(*seed),
            },
            PlayerSettings::Perfect => Contestant::Perfect(PerfectPlayer::new()),
        }
    }

    fn pick(&mut self, state: &StateType) -> Result<StateType::ActionType, Box<dyn Error>> {
        match self {
            Contestant::Random(rng) => {
                let permitted_actions = state.permitted_actions();
                if permitted_actions.is_empty() {
                    return Err("no permitted actions for the random player".into());
                }
                Ok(permitted_actions[rng.gen_range(0..permitted_actions.len())])
            }
            Contestant::Mcts { iterations, rng } => Ok(search(state.clone(), *iterations, rng)?),
            Contestant::Perfect(player) => player
                .best_action(state)
                .ok_or_else(|| "perfect player asked to move in a finished game".into()),
        }
    }
}

#[derive(Debug, Default, Serialize)]
struct ArenaResults {
    first_wins: usize,
    second_wins: usize,
    draws: usize,
}

impl ArenaResults {
    fn record(&mut self, winner: Option<Player>) {
        match winner {
            Some(Player::First) => self.first_wins += 1,
            Some(Player::Second) => self.second_wins += 1,
            None => self.draws += 1,
        }
    }
}

#[derive(Debug, Serialize)]
struct ArenaReport<'a> {
    settings: &'a ArenaSettings,
    results: &'a ArenaResults,
}

fn run_episode<G: Game>(
    game: &G,
    contestants: &mut [Contestant<G::StateType>; 2],
) -> Result<Option<Player>, Box<dyn Error>>
where
    G::StateType: Eq + Hash,
{
    let mut state = game.init_game();
    while !state.terminal() {
        let player = state.next_player();
        let seat = match player {
            Player::First => 0,
            Player::Second => 1,
        };
        let action = contestants[seat].pick(&state)?;
        log::debug!("{:?} plays {:?}", player, action);
        state = action.execute(&state);
    }
    if log::log_enabled!(log::Level::Debug) {
        game.visualise_state(&state);
    }
    Ok(state.winner())
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    env_logger::Builder::new()
        .format(|buf: &mut Formatter, record: &Record| {
            let thread_id = thread::current().id();
            let timestamp = buf.timestamp_millis();
            writeln!(
                buf,
                "[{}] [Thread: {:?}] [{}] - {}",
                timestamp,
                thread_id,
                record.level(),
                record.args()
            )
        })
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config_file = fs::read_to_string(&args.config_file)?;
    let arena_settings: ArenaSettings = serde_json::from_str(&config_file)?;

    let mut contestants = [
        Contestant::new(&arena_settings.players[0]),
        Contestant::new(&arena_settings.players[1]),
    ];
    let mut results = ArenaResults::default();
    for episode in 0..arena_settings.episodes {
        log::info!("Starting episode {}", episode);
        let winner = run_episode(&TTT, &mut contestants)?;
        log::info!("Episode {} winner: {:?}", episode, winner);
        results.record(winner);
    }

    let total = arena_settings.episodes.max(1) as f64;
    println!("Player\tSettings\tResult\tPercentage");
    for (i, (settings, wins)) in arena_settings
        .players
        .iter()
        .zip([results.first_wins, results.second_wins])
        .enumerate()
    {
        println!(
            "{}\t{:?}\t{}\t{:>5.2}%",
            i + 1,
            settings,
            wins,
            (100.0 * wins as f64) / total
        );
    }
    println!(
        "Draws\t\t{}\t{:>5.2}%",
        results.draws,
        (100.0 * results.draws as f64) / total
    );

    if let Some(reports_folder) = args.reports_folder {
        fs::create_dir_all(&reports_folder)?;
        let filename = format!(
            "{}/{}.json",
            reports_folder,
            chrono::Local::now().format("%Y-%m-%d_%H-%M-%S")
        );
        let report = ArenaReport {
            settings: &arena_settings,
            results: &results,
        };
        fs::write(&filename, serde_json::to_string_pretty(&report)?)?;
        println!("Report written to {}", filename);
    }
    Ok(())
}
