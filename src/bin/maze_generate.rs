use docopt::Docopt;
use log::info;
use serde_derive::Deserialize;
use mazes::{
    errors::*,
    generators::{FrontierStrategy, MazeGenerator},
    units::LogicalSide,
    utils,
};
use std::{process, thread, time::Duration};

const USAGE: &str = "Maze generator

Prints a perfect maze as a json array of rows, 0 for a passage and 1 for a wall.

Usage:
    maze_generate -h | --help
    maze_generate [options] [<side> [<use-last> [<animate>]]]

Arguments:
    <side>                 Rooms along one side of the maze, the grid is 2*side-1 cells wide.
                           Defaults to 15.
    <use-last>             Extend the most recent frontier cell (true) or a random one (false).
                           Defaults to true.
    <animate>              Print every intermediate grid while carving. Defaults to false.

Options:
    -h --help              Show this screen.
    --seed=<n>             Random seed, for reproducing a maze.
    --delay-ms=<ms>        Pause between animation frames in milliseconds [default: 100].
";

#[derive(Debug, Deserialize)]
struct GenerateArgs {
    arg_side: Option<usize>,
    arg_use_last: Option<String>,
    arg_animate: Option<String>,
    flag_seed: Option<u64>,
    flag_delay_ms: u64,
}

/// Positional arguments with their defaults applied.
#[derive(Debug, PartialEq)]
struct GenerateSettings {
    side: LogicalSide,
    strategy: FrontierStrategy,
    animate: bool,
}

impl GenerateSettings {
    fn from_args(args: &GenerateArgs) -> Result<GenerateSettings> {
        let use_last = match args.arg_use_last {
            Some(ref flag) => utils::parse_bool_flag(flag)?,
            None => true,
        };
        let animate = match args.arg_animate {
            Some(ref flag) => utils::parse_bool_flag(flag)?,
            None => false,
        };

        Ok(GenerateSettings {
            side: LogicalSide(args.arg_side.unwrap_or(15)),
            strategy: if use_last {
                FrontierStrategy::MostRecent
            } else {
                FrontierStrategy::Random
            },
            animate,
        })
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(ref e) = run() {
        eprintln!("error: {}", e);
        for cause in e.iter().skip(1) {
            eprintln!("caused by: {}", cause);
        }
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: GenerateArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let settings = GenerateSettings::from_args(&args)?;
    let generator = match args.flag_seed {
        Some(seed) => MazeGenerator::with_seed(settings.side, settings.strategy, seed)?,
        None => MazeGenerator::new(settings.side, settings.strategy)?,
    };

    let delay = Duration::from_millis(args.flag_delay_ms);
    let maze = if settings.animate {
        generator.generate_with(|grid| {
            println!("{}", grid);
            thread::sleep(delay);
        })
    } else {
        generator.generate()
    };

    info!("Maze seed {}, {} connections", maze.stats.seed, maze.stats.connections);
    println!("{}", maze.grid.to_json_rows());
    Ok(())
}
