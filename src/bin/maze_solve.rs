use docopt::Docopt;
use error_chain::bail;
use itertools::Itertools;
use log::debug;
use serde_derive::Deserialize;
use mazes::{
    errors::*,
    grid::BinaryGrid,
    grid_displays::{render_grid, PathDisplay},
    pathing::{MazeSolver, SearchMode, SearchOutcome, SolverConfig, DEFAULT_ITERATION_CAP},
};
use std::{fs, path::Path, process, thread, time::Duration};

const USAGE: &str = "Maze solver

Finds a path from the top left to the bottom right cell of a json maze file,
an array of rows with 0 for a passage and 1 for a wall.

Usage:
    maze_solve -h | --help
    maze_solve [options] <maze-file>

Options:
    -h --help              Show this screen.
    --exact                Order the search by distance only, guaranteeing shortest distances.
    --max-iterations=<n>   Give up after expanding this many cells.
    --animate              Print the distance map after every expanded cell.
    --delay-ms=<ms>        Pause between animation frames in milliseconds [default: 100].
";

#[derive(Debug, Deserialize)]
struct SolveArgs {
    arg_maze_file: String,
    flag_exact: bool,
    flag_max_iterations: Option<usize>,
    flag_animate: bool,
    flag_delay_ms: u64,
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
    let args: SolveArgs = Docopt::new(USAGE).and_then(|d| d.deserialize())
        .unwrap_or_else(|e| e.exit());

    let grid = load_maze(&args.arg_maze_file)?;

    let config = SolverConfig {
        mode: if args.flag_exact { SearchMode::Exact } else { SearchMode::Heuristic },
        iteration_cap: args.flag_max_iterations.unwrap_or(DEFAULT_ITERATION_CAP),
    };
    let solver = MazeSolver::with_config(&grid, config);

    let result = if args.flag_animate {
        let delay = Duration::from_millis(args.flag_delay_ms);
        solver.solve_with(|current, locations| {
            println!("current location {}", current);
            println!("{}", render_grid(&grid, locations));
            thread::sleep(delay);
        })
    } else {
        solver.solve()
    };

    println!("{}", render_grid(&grid, &result));

    match *result.outcome() {
        SearchOutcome::Found(ref path) => {
            println!("Found it! {} steps", path.len() - 1);
            if let Some(from_start) = result.path_from_start() {
                println!("{}", render_grid(&grid, &PathDisplay::new(&from_start)));
            }
            println!("{}", path.iter().join(" <- "));
        }
        SearchOutcome::NoSolution => println!("No solution found!"),
        SearchOutcome::IterationCapExceeded(cap) => {
            println!("Gave up after {} iterations.", cap)
        }
    }
    debug!("{} cells finalized", result.iterations());

    Ok(())
}

fn load_maze(file_path: &str) -> Result<BinaryGrid> {
    let path = Path::new(file_path);
    if !path.is_file() {
        bail!(ErrorKind::NotAFile(file_path.to_string()));
    }
    let json = fs::read_to_string(path)
        .chain_err(|| format!("Failed to read maze file {}", file_path))?;
    BinaryGrid::from_json_str(&json)
        .chain_err(|| format!("Failed to load maze file {}", file_path))
}


#[cfg(test)]
mod tests {

    use super::*;
    use std::env;

    fn parse(argv: &[&str]) -> SolveArgs {
        Docopt::new(USAGE)
            .and_then(|d| d.argv(argv.iter().cloned()).deserialize())
            .unwrap()
    }

    #[test]
    fn maze_file_only() {
        let args = parse(&["maze_solve", "maze.json"]);
        assert_eq!(args.arg_maze_file, "maze.json");
        assert!(!args.flag_exact);
        assert!(!args.flag_animate);
        assert_eq!(args.flag_max_iterations, None);
        assert_eq!(args.flag_delay_ms, 100);
    }

    #[test]
    fn search_options() {
        let args = parse(&["maze_solve", "--exact", "--max-iterations=50", "maze.json"]);
        assert_eq!(args.arg_maze_file, "maze.json");
        assert!(args.flag_exact);
        assert_eq!(args.flag_max_iterations, Some(50));
    }

    #[test]
    fn maze_file_is_required() {
        let parsed = Docopt::new(USAGE)
            .and_then(|d| d.argv(vec!["maze_solve"]).deserialize::<SolveArgs>());
        assert!(parsed.is_err());
    }

    #[test]
    fn missing_or_directory_path_is_not_a_file() {
        let dir = env::temp_dir();
        for path in &["/nonexistent/maze.json".to_string(), dir.to_string_lossy().into_owned()] {
            match load_maze(path) {
                Err(Error(ErrorKind::NotAFile(ref reported), _)) => assert_eq!(reported, path),
                other => panic!("unexpected {:?}", other),
            }
        }
    }

    #[test]
    fn loads_json_maze_file() {
        let path = env::temp_dir().join(format!("maze_solve_test_{}.json", process::id()));
        fs::write(&path, "[[0, 1],\n [0, 0]]").unwrap();
        let loaded = load_maze(&path.to_string_lossy());
        fs::remove_file(&path).unwrap();

        let grid = loaded.unwrap();
        assert_eq!(grid.to_rows(), vec![vec![0, 1], vec![0, 0]]);
    }
}
