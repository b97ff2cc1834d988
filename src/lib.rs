//! # Eight Puzzle Solver Library
//!
//! This library provides the core board mechanics for the classic 8-puzzle
//! (a 3x3 sliding-tile board with tiles 1-8 and one blank) and four search
//! strategies that find a shortest sequence of blank moves from a start
//! configuration to a goal configuration.
//!
//! It is used by three binaries:
//! - `puzzle_solver`: Reads an instance file (start and goal boards) and
//!   prints the optimal move count followed by the solution path.
//! - `puzzle_generator`: Emits seeded random solvable instances for testing
//!   and benchmarking.
//! - `strategy_evaluator`: Runs every strategy over a batch of generated
//!   instances, cross-checks the reported move counts, and compares timing.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), the blank-move
//!   adjacency table, the permutation encoder (Cantor expansion), the
//!   solvability parity check, and a seeded scrambler.
//! - `heuristics`: Defines the Manhattan-distance and misplaced-tile
//!   estimators used to guide the informed strategies.
//! - `solver`: Provides the four search drivers (BFS, A*, IDA*, IDDFS)
//!   behind a common `solve` entry point, plus the `Solution` type.
//! - `utils`: Provides utility functions, such as parsing instances from a
//!   free-form digit stream and formatting solution paths.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full path,
// e.g., `eight_puzzle_solver::solver::solve`. This keeps the top-level
// library namespace cleaner.
