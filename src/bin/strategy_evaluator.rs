use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::solver::{solve, Strategy};
use std::collections::HashMap;
use std::time::{Duration, Instant};

const NUM_RANDOM_INSTANCES: u64 = 10;
const START_SEED: u64 = 0;
// Kept modest so the uninformed IDDFS rounds stay affordable.
const SCRAMBLE_MOVES: u32 = 14;

fn main() {
    let goal = Board::solved();
    let mut timings: HashMap<&'static str, Vec<Duration>> = HashMap::new();
    for strategy in Strategy::ALL {
        timings.insert(strategy.name(), Vec::new());
    }

    println!(
        "Evaluating {} strategies on {} instances (scramble length {})...",
        Strategy::ALL.len(),
        NUM_RANDOM_INSTANCES,
        SCRAMBLE_MOVES
    );

    for instance_idx in 0..NUM_RANDOM_INSTANCES {
        let seed = START_SEED + instance_idx;
        let start = Board::scrambled_with_seed(seed, SCRAMBLE_MOVES);

        println!("\nInstance {} (seed {}): {}", instance_idx, seed, start);

        let mut optimal_steps: Option<u32> = None;
        for strategy in Strategy::ALL {
            let started = Instant::now();
            let solution = solve(&start, &goal, strategy);
            let elapsed = started.elapsed();

            let solution = match solution {
                Some(s) => s,
                None => {
                    // Scrambles are random walks from the goal, so this
                    // indicates a bug rather than a hard instance.
                    eprintln!(
                        "Error: {} reported no solution for seed {} although the \
                         instance is solvable by construction",
                        strategy.name(),
                        seed
                    );
                    continue;
                }
            };

            // BFS runs first and fixes the optimal count; every other
            // strategy must agree with it.
            match optimal_steps {
                None => optimal_steps = Some(solution.steps),
                Some(expected) => {
                    if solution.steps != expected {
                        eprintln!(
                            "Error: {} found {} steps on seed {}, expected {}",
                            strategy.name(),
                            solution.steps,
                            seed,
                            expected
                        );
                    }
                }
            }

            println!(
                "  Strategy: {:<6} Steps: {:<3} Time: {:?}",
                strategy.name(),
                solution.steps,
                elapsed
            );
            timings.get_mut(strategy.name()).unwrap().push(elapsed);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Instances evaluated: {}", NUM_RANDOM_INSTANCES);
    println!("\n--- Average Time ---");

    let mut averages: Vec<(&str, Duration)> = Vec::new();
    for strategy in Strategy::ALL {
        let runs = &timings[strategy.name()];
        if runs.is_empty() {
            println!("Strategy {}: no timings recorded.", strategy.name());
            continue;
        }
        let total: Duration = runs.iter().sum();
        averages.push((strategy.name(), total / runs.len() as u32));
    }

    // Fastest strategy first.
    averages.sort_by_key(|&(_, avg)| avg);

    for (name, avg) in averages {
        println!("Strategy {:<6}: Average Time = {:?}", name, avg);
    }
}
