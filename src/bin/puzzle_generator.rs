use clap::Parser;
use eight_puzzle_solver::engine::Board;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Seed for the first instance; instance i uses seed + i
    #[clap(short, long, default_value_t = 0)]
    seed: u64,

    /// Length of the random walk away from the solved board. The optimal
    /// solution of a generated instance is at most this many moves.
    #[clap(short = 'm', long, default_value_t = 20)]
    scramble_moves: u32,

    /// Number of instances to emit
    #[clap(short, long, default_value_t = 1)]
    count: u64,
}

fn main() {
    let args = Args::parse();

    // Each instance is a start line and a goal line, which is exactly the
    // 18-digit stream the solver binary parses. Instances are separated by
    // a blank line; the solver only consumes the first 18 digits it sees.
    for i in 0..args.count {
        if i > 0 {
            println!();
        }
        let start = Board::scrambled_with_seed(args.seed + i, args.scramble_moves);
        println!("{}", start);
        println!("{}", Board::solved());
    }
}
