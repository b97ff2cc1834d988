//! Core board mechanics for the 8-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Board`: a 3x3 tile configuration stored as a permutation of 0-8 with a
//!   cached blank position, plus the blank-move mechanics (`slide`).
//! - `Direction`: the four blank-move directions.
//! - `MOVE_TABLE`: the fixed adjacency table mapping a blank position and a
//!   direction to the blank's destination cell (or `None` at a board edge).
//! - `Board::encode`: a perfect hash ranking every permutation of 0-8 into
//!   `[0, 9!)` via Cantor expansion, used by the deduplicating searches.
//! - `is_solvable`: the inversion-parity check deciding mutual reachability
//!   of two configurations.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Number of cells on the board (3x3 grid).
pub const BOARD_CELLS: usize = 9;

/// Number of distinct board configurations: 9! permutations of nine cells.
///
/// This is the exact codomain size of `Board::encode` and the capacity the
/// solver's visited set is allocated with.
pub const STATE_SPACE_SIZE: usize = 362_880;

// FACT[k] = k!, precomputed for the Cantor expansion in `Board::encode`.
const FACT: [usize; BOARD_CELLS] = [1, 1, 2, 6, 24, 120, 720, 5040, 40320];

/// A blank-move direction.
///
/// Moving the blank `Up` slides the tile above the blank down into it, and
/// so on for the other directions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All four directions, in the fixed expansion order used by every
    /// search driver.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    fn index(self) -> usize {
        match self {
            Direction::Up => 0,
            Direction::Down => 1,
            Direction::Left => 2,
            Direction::Right => 3,
        }
    }
}

/// `MOVE_TABLE[blank_pos][direction] = Some(new_blank_pos)`, or `None` when
/// the move would leave the grid.
///
/// Cells are numbered row-major:
/// ```text
/// 0 1 2
/// 3 4 5
/// 6 7 8
/// ```
/// Direction order matches `Direction::ALL`: up, down, left, right.
pub const MOVE_TABLE: [[Option<u8>; 4]; BOARD_CELLS] = [
    [None, Some(3), None, Some(1)],
    [None, Some(4), Some(0), Some(2)],
    [None, Some(5), Some(1), None],
    [Some(0), Some(6), None, Some(4)],
    [Some(1), Some(7), Some(3), Some(5)],
    [Some(2), Some(8), Some(4), None],
    [Some(3), None, None, Some(7)],
    [Some(4), None, Some(6), Some(8)],
    [Some(5), None, Some(7), None],
];

/// A 3x3 sliding-tile board.
///
/// The nine cells hold a permutation of `{0, ..., 8}` in row-major order,
/// where `0` marks the blank. The blank's index is cached alongside the
/// cells so a move is a single table lookup plus a swap.
///
/// Invariant: `cells[blank_pos()] == 0` and every value 0-8 occurs exactly
/// once. Both are established by the constructors and preserved by `slide`.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::{Board, Direction};
///
/// let board = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
/// assert_eq!(board.blank_pos(), 7);
///
/// // Sliding the blank right yields the standard solved configuration.
/// let next = board.slide(Direction::Right).unwrap();
/// assert_eq!(next, Board::solved());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [u8; BOARD_CELLS],
    blank: u8,
}

impl Board {
    /// Creates a board from a row-major cell array, validating that it is a
    /// permutation of `{0, ..., 8}`.
    ///
    /// # Arguments
    /// * `cells`: The nine cell values in row-major order; `0` is the blank.
    ///
    /// # Returns
    /// * `Ok(Board)` if `cells` contains each value 0-8 exactly once.
    /// * `Err(String)` if a value is out of range or repeated.
    pub fn from_cells(cells: [u8; BOARD_CELLS]) -> Result<Self, String> {
        let mut seen = [false; BOARD_CELLS];
        for (i, &value) in cells.iter().enumerate() {
            if value as usize >= BOARD_CELLS {
                return Err(format!(
                    "Cell {} holds {}, expected a value in 0..=8",
                    i, value
                ));
            }
            if seen[value as usize] {
                return Err(format!("Value {} occurs more than once", value));
            }
            seen[value as usize] = true;
        }
        // The permutation check guarantees exactly one zero.
        let blank = cells.iter().position(|&v| v == 0).unwrap() as u8;
        Ok(Board { cells, blank })
    }

    /// Returns the standard solved configuration `1 2 3 4 5 6 7 8 0`.
    pub fn solved() -> Self {
        Board {
            cells: [1, 2, 3, 4, 5, 6, 7, 8, 0],
            blank: 8,
        }
    }

    /// Returns the nine cell values in row-major order.
    pub fn cells(&self) -> &[u8; BOARD_CELLS] {
        &self.cells
    }

    /// Returns the index of the blank cell (the position of value 0).
    pub fn blank_pos(&self) -> usize {
        self.blank as usize
    }

    /// Attempts to move the blank one cell in the given direction.
    ///
    /// # Returns
    /// * `Some(Board)` with the blank and the neighboring tile swapped, if
    ///   the move stays on the grid.
    /// * `None` if the blank sits on the corresponding board edge.
    pub fn slide(&self, direction: Direction) -> Option<Board> {
        let target = MOVE_TABLE[self.blank as usize][direction.index()]?;
        let mut cells = self.cells;
        cells.swap(self.blank as usize, target as usize);
        Some(Board {
            cells,
            blank: target,
        })
    }

    /// Ranks this board's permutation into `[0, 9!)` via Cantor expansion.
    ///
    /// For each position `i`, the number of smaller values to its right is
    /// weighted by `(8 - i)!` and accumulated. This is the factorial-number-
    /// system rank, a bijection between permutations of nine symbols and
    /// integers in `[0, STATE_SPACE_SIZE)`, which lets the BFS and A*
    /// drivers deduplicate states with one bit each.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, STATE_SPACE_SIZE};
    ///
    /// let first = Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
    /// assert_eq!(first.encode(), 0);
    ///
    /// let last = Board::from_cells([8, 7, 6, 5, 4, 3, 2, 1, 0]).unwrap();
    /// assert_eq!(last.encode(), STATE_SPACE_SIZE - 1);
    /// ```
    pub fn encode(&self) -> usize {
        let mut code = 0;
        for i in 0..BOARD_CELLS {
            let mut smaller_to_the_right = 0;
            for j in (i + 1)..BOARD_CELLS {
                if self.cells[j] < self.cells[i] {
                    smaller_to_the_right += 1;
                }
            }
            code += smaller_to_the_right * FACT[BOARD_CELLS - 1 - i];
        }
        code
    }

    /// Creates a scrambled board by a seeded random walk from `solved()`.
    ///
    /// Applies `walk_len` legal blank moves starting from the solved
    /// configuration, never immediately undoing the previous move. Because
    /// the walk only uses legal moves, the result is always solvable with
    /// respect to `Board::solved()`, and its optimal solution length is at
    /// most `walk_len`.
    ///
    /// The same seed always produces the same board, so generated instances
    /// are reproducible across runs.
    ///
    /// # Arguments
    /// * `seed`: Seed for the random number generator.
    /// * `walk_len`: Number of blank moves to apply.
    pub fn scrambled_with_seed(seed: u64, walk_len: u32) -> Self {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::solved();
        let mut prev_blank: Option<u8> = None;
        let mut applied = 0;
        while applied < walk_len {
            let direction = Direction::ALL[rng.gen_range(0..4usize)];
            if let Some(next) = board.slide(direction) {
                // Re-roll instead of undoing the move we just made.
                if Some(next.blank) == prev_blank {
                    continue;
                }
                prev_blank = Some(board.blank);
                board = next;
                applied += 1;
            }
        }
        board
    }
}

impl fmt::Display for Board {
    /// Formats the board as nine space-separated digits in row-major order,
    /// e.g. `1 2 3 4 5 6 7 8 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.cells.iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", value)?;
        }
        Ok(())
    }
}

/// Decides whether `goal` is reachable from `start`.
///
/// Computes the inversion count of each configuration (ordered pairs where a
/// larger tile precedes a smaller one, ignoring the blank). A legal blank
/// move never changes the parity of this count on a 3-wide board, so the two
/// configurations are mutually reachable iff their parities match.
///
/// The relation is symmetric: `is_solvable(a, b) == is_solvable(b, a)`.
pub fn is_solvable(start: &Board, goal: &Board) -> bool {
    inversions(start) % 2 == inversions(goal) % 2
}

fn inversions(board: &Board) -> u32 {
    let cells = board.cells();
    let mut count = 0;
    for i in 0..BOARD_CELLS {
        for j in (i + 1)..BOARD_CELLS {
            // cells[j] != 0 also rules out cells[i] == 0, since
            // cells[i] > cells[j] forces cells[i] >= 1.
            if cells[i] > cells[j] && cells[j] != 0 {
                count += 1;
            }
        }
    }
    count
}
