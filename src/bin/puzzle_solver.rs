use clap::{Parser, ValueEnum};
use eight_puzzle_solver::solver::{solve, Strategy};
use eight_puzzle_solver::utils::{format_solution, parse_instance};
use std::fs;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StrategyArg {
    Bfs,
    Astar,
    Idastar,
    Iddfs,
}

impl From<StrategyArg> for Strategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Bfs => Strategy::Bfs,
            StrategyArg::Astar => Strategy::AStar,
            StrategyArg::Idastar => Strategy::IdaStar,
            StrategyArg::Iddfs => Strategy::Iddfs,
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search strategy to run
    #[clap(short, long, value_enum, default_value_t = StrategyArg::Astar)]
    strategy: StrategyArg,

    /// Path to the instance file: 18 digits, start board then goal board
    /// (non-digit characters are ignored)
    instance_file: PathBuf,
}

fn main() {
    let args = Args::parse();

    let content = fs::read_to_string(&args.instance_file)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", args.instance_file.display(), e));
    let (start, goal) = parse_instance(&content)
        .unwrap_or_else(|e| panic!("Invalid instance in {}: {}", args.instance_file.display(), e));

    let started = Instant::now();
    let result = solve(&start, &goal, args.strategy.into());
    let elapsed = started.elapsed();

    match result {
        Some(solution) => println!("{}", format_solution(&solution)),
        None => println!("-1"),
    }
    println!("time: {}ms", elapsed.as_millis());
}
