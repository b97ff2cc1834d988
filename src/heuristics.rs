//! Heuristic estimators for the informed search strategies.
//!
//! Both estimators are admissible (they never overestimate the true
//! remaining move count), which is what lets A* and IDA* claim optimal
//! solutions. Manhattan distance is additionally consistent: one blank move
//! relocates exactly one tile by one grid step, so the estimate changes by
//! at most 1 between adjacent boards. The A* driver relies on that to mark
//! states visited at generation time.
use crate::engine::{Board, BOARD_CELLS};

/// `MANHATTAN[a][b]` = grid distance between cell positions `a` and `b`
/// (sum of the row and column offsets). Precomputed for the 3x3 grid.
pub const MANHATTAN: [[u32; BOARD_CELLS]; BOARD_CELLS] = [
    [0, 1, 2, 1, 2, 3, 2, 3, 4],
    [1, 0, 1, 2, 1, 2, 3, 2, 3],
    [2, 1, 0, 3, 2, 1, 4, 3, 2],
    [1, 2, 3, 0, 1, 2, 1, 2, 3],
    [2, 1, 2, 1, 0, 1, 2, 1, 2],
    [3, 2, 1, 2, 1, 0, 3, 2, 1],
    [2, 3, 4, 1, 2, 3, 0, 1, 2],
    [3, 2, 3, 2, 1, 2, 1, 0, 1],
    [4, 3, 2, 3, 2, 1, 2, 1, 0],
];

/// Sum of Manhattan distances between each non-blank tile's position in
/// `state` and its position in `goal`.
///
/// Zero exactly when `state == goal`: every tile in place forces the blank
/// into place too. The double loop over positions costs 81 table lookups,
/// which is fine at this board size; per-tile position caches would risk the
/// admissibility argument for no measurable gain.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::engine::Board;
/// use eight_puzzle_solver::heuristics::manhattan;
///
/// let goal = Board::solved();
/// assert_eq!(manhattan(&goal, &goal), 0);
///
/// let one_away = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
/// assert_eq!(manhattan(&one_away, &goal), 1);
/// ```
pub fn manhattan(state: &Board, goal: &Board) -> u32 {
    let mut distance = 0;
    for i in 0..BOARD_CELLS {
        if state.cells()[i] == 0 {
            continue; // the blank does not count toward the estimate
        }
        for j in 0..BOARD_CELLS {
            if state.cells()[i] == goal.cells()[j] {
                distance += MANHATTAN[i][j];
            }
        }
    }
    distance
}

/// Number of non-blank tiles that are not on their goal cell.
///
/// Admissible (each misplaced tile needs at least one move) but dominated by
/// `manhattan`, which counts at least 1 for every misplaced tile. Kept as
/// the weaker comparison point for the strategy evaluator.
pub fn hamming(state: &Board, goal: &Board) -> u32 {
    let mut misplaced = 0;
    for i in 0..BOARD_CELLS {
        let value = state.cells()[i];
        if value != 0 && value != goal.cells()[i] {
            misplaced += 1;
        }
    }
    misplaced
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Direction;

    #[test]
    fn test_manhattan_table_matches_grid_distance() {
        for a in 0..BOARD_CELLS {
            for b in 0..BOARD_CELLS {
                let (ar, ac) = (a / 3, a % 3);
                let (br, bc) = (b / 3, b % 3);
                let expected = (ar.abs_diff(br) + ac.abs_diff(bc)) as u32;
                assert_eq!(MANHATTAN[a][b], expected, "entry [{}][{}]", a, b);
                assert_eq!(MANHATTAN[a][b], MANHATTAN[b][a]);
            }
        }
    }

    #[test]
    fn test_manhattan_zero_only_at_goal() {
        let goal = Board::solved();
        assert_eq!(manhattan(&goal, &goal), 0);

        for direction in Direction::ALL {
            if let Some(neighbor) = goal.slide(direction) {
                assert!(manhattan(&neighbor, &goal) > 0);
            }
        }
    }

    #[test]
    fn test_manhattan_one_move_instance() {
        let goal = Board::solved();
        let start = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(manhattan(&start, &goal), 1);
    }

    #[test]
    fn test_manhattan_nonstandard_goal() {
        // The estimator works for any goal permutation, not just solved().
        let goal = Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(manhattan(&goal, &goal), 0);
        let state = Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        assert_eq!(manhattan(&state, &goal), 1);
    }

    #[test]
    fn test_manhattan_is_consistent_across_moves() {
        // One move relocates one tile by one grid step, so the estimate
        // changes by at most 1.
        let goal = Board::solved();
        for seed in 0..10 {
            let board = Board::scrambled_with_seed(seed, 30);
            let h = manhattan(&board, &goal) as i64;
            for direction in Direction::ALL {
                if let Some(neighbor) = board.slide(direction) {
                    let hn = manhattan(&neighbor, &goal) as i64;
                    assert!((h - hn).abs() <= 1, "inconsistent step: {} -> {}", h, hn);
                }
            }
        }
    }

    #[test]
    fn test_hamming_counts_misplaced_tiles() {
        let goal = Board::solved();
        assert_eq!(hamming(&goal, &goal), 0);

        // 8 slid out of place: exactly one misplaced tile.
        let start = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        assert_eq!(hamming(&start, &goal), 1);
    }

    #[test]
    fn test_hamming_never_exceeds_manhattan() {
        let goal = Board::solved();
        for seed in 0..20 {
            let board = Board::scrambled_with_seed(seed, 35);
            assert!(hamming(&board, &goal) <= manhattan(&board, &goal));
        }
    }
}
