//! The four search drivers for the 8-puzzle.
//!
//! Every driver shares the same primitives from `engine` and `heuristics`
//! (move table, permutation encoder, solvability check, Manhattan estimate)
//! and differs only in its frontier discipline:
//! - `solve_bfs`: FIFO over an append-only node log; shortest path by
//!   construction since every move costs 1.
//! - `solve_astar`: binary min-heap ordered by `f = g + h`; optimal because
//!   the heuristic is admissible and consistent.
//! - `solve_idastar`: recursive DFS bounded by an `f` threshold that grows
//!   by 1 per failed round, starting at `h(start)`.
//! - `solve_iddfs`: the same control structure with a raw depth bound and no
//!   heuristic.
//!
//! BFS and A* deduplicate states with one bit per permutation rank
//! (`VisitedSet`); the iterative-deepening drivers instead refuse only the
//! immediately-reversing move, which is the single 2-cycle a blank move can
//! create. All drivers check solvability first, so the deepening loops
//! always terminate.
use crate::engine::{is_solvable, Board, Direction, STATE_SPACE_SIZE};
use crate::heuristics::manhattan;
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Selects one of the four search drivers for the shared `solve` entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Strategy {
    /// Uninformed breadth-first search.
    Bfs,
    /// Best-first search ordered by `g + manhattan`.
    AStar,
    /// Iterative deepening on the `g + manhattan` threshold.
    IdaStar,
    /// Iterative deepening on raw depth.
    Iddfs,
}

impl Strategy {
    /// All strategies, in the order the evaluator binary reports them.
    pub const ALL: [Strategy; 4] = [
        Strategy::Bfs,
        Strategy::AStar,
        Strategy::IdaStar,
        Strategy::Iddfs,
    ];

    /// Human-readable strategy name.
    pub fn name(self) -> &'static str {
        match self {
            Strategy::Bfs => "BFS",
            Strategy::AStar => "A*",
            Strategy::IdaStar => "IDA*",
            Strategy::Iddfs => "IDDFS",
        }
    }
}

/// Represents a solution found by one of the search drivers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Solution {
    /// Every board along the solution, start through goal inclusive.
    pub path: Vec<Board>,
    /// Number of blank moves, i.e. `path.len() - 1`.
    pub steps: u32,
}

/// Bit-per-state membership set over the full permutation space.
///
/// Allocated fresh for each solve call and sized to exactly
/// `STATE_SPACE_SIZE` states; it is never resized. A code outside the
/// encoder's range is a programming error and panics rather than being
/// reported, since `Board::encode` cannot produce one.
pub struct VisitedSet {
    bits: Vec<u64>,
}

impl VisitedSet {
    /// Creates an empty set covering all `STATE_SPACE_SIZE` codes.
    pub fn new() -> Self {
        VisitedSet {
            bits: vec![0; STATE_SPACE_SIZE.div_ceil(64)],
        }
    }

    /// Marks `code` as visited.
    ///
    /// # Panics
    /// Panics if `code >= STATE_SPACE_SIZE`.
    pub fn mark(&mut self, code: usize) {
        assert!(code < STATE_SPACE_SIZE, "state code {} out of range", code);
        self.bits[code / 64] |= 1 << (code % 64);
    }

    /// Returns whether `code` has been marked.
    ///
    /// # Panics
    /// Panics if `code >= STATE_SPACE_SIZE`.
    pub fn is_marked(&self, code: usize) -> bool {
        assert!(code < STATE_SPACE_SIZE, "state code {} out of range", code);
        self.bits[code / 64] & (1 << (code % 64)) != 0
    }
}

impl Default for VisitedSet {
    fn default() -> Self {
        Self::new()
    }
}

// One entry in the append-only discovery log shared by BFS and A*. Nodes
// are immutable once appended; parent links are indices into the same log,
// with `None` at the start node.
#[derive(Clone, Copy)]
struct LogNode {
    board: Board,
    parent: Option<usize>,
}

// Walk parent links from the terminal log entry back to the start, then
// flip the collected boards into start-to-goal order.
fn reconstruct(log: &[LogNode], terminal: usize) -> Solution {
    let mut path = Vec::new();
    let mut cursor = Some(terminal);
    while let Some(index) = cursor {
        path.push(log[index].board);
        cursor = log[index].parent;
    }
    path.reverse();
    Solution {
        steps: (path.len() - 1) as u32,
        path,
    }
}

/// Runs the selected strategy from `start` to `goal`.
///
/// # Returns
/// * `Some(Solution)` with an optimal-length path if `goal` is reachable.
/// * `None` if the instance is unsolvable (detected up front by the parity
///   check; no search is run).
pub fn solve(start: &Board, goal: &Board, strategy: Strategy) -> Option<Solution> {
    match strategy {
        Strategy::Bfs => solve_bfs(start, goal),
        Strategy::AStar => solve_astar(start, goal),
        Strategy::IdaStar => solve_idastar(start, goal),
        Strategy::Iddfs => solve_iddfs(start, goal),
    }
}

/// Breadth-first search over the deduplicated state space.
///
/// The frontier is a cursor into the append-only log: nodes are appended on
/// discovery and never removed, so the log doubles as the FIFO queue and as
/// the parent-link arena for path reconstruction. Unit move costs make the
/// first dequeued match an optimal one.
pub fn solve_bfs(start: &Board, goal: &Board) -> Option<Solution> {
    if !is_solvable(start, goal) {
        return None;
    }

    let mut visited = VisitedSet::new();
    let mut log = vec![LogNode {
        board: *start,
        parent: None,
    }];
    visited.mark(start.encode());

    let mut front = 0;
    while front < log.len() {
        let current = log[front];
        if current.board == *goal {
            return Some(reconstruct(&log, front));
        }
        for direction in Direction::ALL {
            if let Some(next) = current.board.slide(direction) {
                let code = next.encode();
                if !visited.is_marked(code) {
                    visited.mark(code);
                    log.push(LogNode {
                        board: next,
                        parent: Some(front),
                    });
                }
            }
        }
        front += 1;
    }
    // Unreachable once solvability holds; kept as a defensive fallback.
    None
}

// Frontier entry for A*. The ordering is inverted on `f` so that
// `BinaryHeap`, a max-heap, pops the minimum-f node first. Ties on `f` are
// resolved arbitrarily by the heap; any minimal-f path is optimal.
struct OpenNode {
    f: u32,
    g: u32,
    h: u32,
    board: Board,
    parent: Option<usize>,
}

impl Ord for OpenNode {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f.cmp(&self.f)
    }
}

impl PartialOrd for OpenNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OpenNode {
    fn eq(&self, other: &Self) -> bool {
        self.f == other.f
    }
}

impl Eq for OpenNode {}

/// A* with the Manhattan-distance heuristic.
pub fn solve_astar(start: &Board, goal: &Board) -> Option<Solution> {
    solve_astar_with(start, goal, manhattan)
}

/// A* with a caller-supplied heuristic.
///
/// `heuristic` must be admissible and consistent, and must be zero exactly
/// at the goal — the driver uses `h == 0` as the goal test and marks states
/// visited when they are *generated*, not when they are popped. Under a
/// consistent heuristic the first generation of a state already lies on an
/// optimal path to it, so later re-generations can only be worse and the
/// generation-time marking loses nothing. Both `manhattan` and `hamming`
/// satisfy all three conditions.
pub fn solve_astar_with(
    start: &Board,
    goal: &Board,
    heuristic: fn(&Board, &Board) -> u32,
) -> Option<Solution> {
    if !is_solvable(start, goal) {
        return None;
    }

    let mut visited = VisitedSet::new();
    let mut log: Vec<LogNode> = Vec::new();
    let mut open = BinaryHeap::new();

    let h_start = heuristic(start, goal);
    visited.mark(start.encode());
    open.push(OpenNode {
        f: h_start,
        g: 0,
        h: h_start,
        board: *start,
        parent: None,
    });

    while let Some(node) = open.pop() {
        log.push(LogNode {
            board: node.board,
            parent: node.parent,
        });
        let index = log.len() - 1;

        if node.h == 0 {
            return Some(reconstruct(&log, index));
        }

        for direction in Direction::ALL {
            if let Some(next) = node.board.slide(direction) {
                let code = next.encode();
                if visited.is_marked(code) {
                    continue;
                }
                visited.mark(code);
                let h = heuristic(&next, goal);
                open.push(OpenNode {
                    f: node.g + 1 + h,
                    g: node.g + 1,
                    h,
                    board: next,
                    parent: Some(index),
                });
            }
        }
    }
    // Unreachable once solvability holds; kept as a defensive fallback.
    None
}

/// IDA* with the Manhattan-distance heuristic.
///
/// Repeats a depth-first search bounded by `g + h <= max_f`, raising the
/// threshold by 1 per failed round from `h(start)`. Memory stays linear in
/// the solution depth; each round re-explores the previous rounds' work,
/// which a geometric-series argument bounds to a constant factor. The first
/// round that reaches the goal yields an optimal-length path because the
/// heuristic is integer-valued and admissible.
pub fn solve_idastar(start: &Board, goal: &Board) -> Option<Solution> {
    if !is_solvable(start, goal) {
        return None;
    }

    let mut max_f = manhattan(start, goal);
    loop {
        let mut unwind = Vec::new();
        if bounded_dfs(
            start,
            goal,
            0,
            manhattan(start, goal),
            None,
            Bound::CostThreshold(max_f),
            &mut unwind,
        ) {
            // The unwind stack holds the path goal-to-start.
            unwind.reverse();
            return Some(Solution {
                steps: (unwind.len() - 1) as u32,
                path: unwind,
            });
        }
        max_f += 1;
    }
}

/// Iterative-deepening depth-first search, no heuristic.
///
/// Identical control structure to `solve_idastar` with a raw depth bound
/// raised by 1 per failed round. The first depth at which a solution exists
/// is the optimal move count, at the price of a much larger search tree
/// than IDA* on hard instances.
pub fn solve_iddfs(start: &Board, goal: &Board) -> Option<Solution> {
    if !is_solvable(start, goal) {
        return None;
    }

    let mut max_depth = 1;
    loop {
        let mut unwind = Vec::new();
        if bounded_dfs(start, goal, 0, 0, None, Bound::Depth(max_depth), &mut unwind) {
            unwind.reverse();
            return Some(Solution {
                steps: (unwind.len() - 1) as u32,
                path: unwind,
            });
        }
        max_depth += 1;
    }
}

// Pruning rule for one round of iterative deepening.
#[derive(Clone, Copy)]
enum Bound {
    // Prune when g + h exceeds the threshold (IDA*).
    CostThreshold(u32),
    // Prune when g exceeds the depth limit (IDDFS).
    Depth(u32),
}

impl Bound {
    fn exceeded(self, g: u32, h: u32) -> bool {
        match self {
            Bound::CostThreshold(max_f) => g + h > max_f,
            Bound::Depth(max_depth) => g > max_depth,
        }
    }
}

// Shared recursive core of IDA* and IDDFS. On success the caller's `unwind`
// stack holds the full path in goal-to-start order. `h` is 0 for IDDFS so
// the cost check degenerates to the depth check.
fn bounded_dfs(
    current: &Board,
    goal: &Board,
    g: u32,
    h: u32,
    prev_blank: Option<usize>,
    bound: Bound,
    unwind: &mut Vec<Board>,
) -> bool {
    if current == goal {
        unwind.push(*current);
        return true;
    }
    if bound.exceeded(g, h) {
        return false;
    }
    for direction in Direction::ALL {
        if let Some(next) = current.slide(direction) {
            // Moving the blank back where it just came from is the only
            // 2-cycle a single move can close, so remembering one position
            // stands in for a visited set.
            if Some(next.blank_pos()) == prev_blank {
                continue;
            }
            let next_h = match bound {
                Bound::CostThreshold(_) => manhattan(&next, goal),
                Bound::Depth(_) => 0,
            };
            if bounded_dfs(
                &next,
                goal,
                g + 1,
                next_h,
                Some(current.blank_pos()),
                bound,
                unwind,
            ) {
                unwind.push(*current);
                return true;
            }
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::heuristics::hamming;

    // Every consecutive pair in the path must be one legal blank move apart,
    // and the endpoints must be the requested boards.
    fn assert_path_is_valid(solution: &Solution, start: &Board, goal: &Board) {
        assert_eq!(solution.path.first(), Some(start));
        assert_eq!(solution.path.last(), Some(goal));
        assert_eq!(solution.steps as usize, solution.path.len() - 1);
        for pair in solution.path.windows(2) {
            let reachable = Direction::ALL
                .iter()
                .filter_map(|&d| pair[0].slide(d))
                .any(|next| next == pair[1]);
            assert!(
                reachable,
                "path step {} -> {} is not a legal move",
                pair[0], pair[1]
            );
        }
    }

    #[test]
    fn test_visited_set_mark_and_query() {
        let mut visited = VisitedSet::new();
        assert!(!visited.is_marked(0));
        assert!(!visited.is_marked(STATE_SPACE_SIZE - 1));

        visited.mark(0);
        visited.mark(12345);
        visited.mark(STATE_SPACE_SIZE - 1);

        assert!(visited.is_marked(0));
        assert!(visited.is_marked(12345));
        assert!(visited.is_marked(STATE_SPACE_SIZE - 1));
        assert!(!visited.is_marked(12346));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_visited_set_rejects_out_of_range_code() {
        let mut visited = VisitedSet::new();
        visited.mark(STATE_SPACE_SIZE);
    }

    #[test]
    fn test_start_equals_goal_is_a_zero_step_solution() {
        let goal = Board::solved();
        for strategy in Strategy::ALL {
            let solution = solve(&goal, &goal, strategy)
                .unwrap_or_else(|| panic!("{} failed the identity instance", strategy.name()));
            assert_eq!(solution.steps, 0, "{}", strategy.name());
            assert_eq!(solution.path, vec![goal], "{}", strategy.name());
        }
    }

    #[test]
    fn test_one_move_instance() {
        let goal = Board::solved();
        let start = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        for strategy in Strategy::ALL {
            let solution = solve(&start, &goal, strategy).unwrap();
            assert_eq!(solution.steps, 1, "{}", strategy.name());
            assert_eq!(solution.path.len(), 2, "{}", strategy.name());
            assert_path_is_valid(&solution, &start, &goal);
        }
    }

    #[test]
    fn test_two_move_instance() {
        let goal = Board::solved();
        let start = Board::from_cells([1, 2, 3, 4, 5, 6, 0, 7, 8]).unwrap();
        for strategy in Strategy::ALL {
            let solution = solve(&start, &goal, strategy).unwrap();
            assert_eq!(solution.steps, 2, "{}", strategy.name());
            assert_path_is_valid(&solution, &start, &goal);
        }
    }

    #[test]
    fn test_unsolvable_instance_reports_none_without_searching() {
        let goal = Board::solved();
        // Tiles 7 and 8 swapped relative to the goal: odd parity mismatch.
        let start = Board::from_cells([1, 2, 3, 4, 5, 6, 8, 7, 0]).unwrap();
        for strategy in Strategy::ALL {
            assert!(
                solve(&start, &goal, strategy).is_none(),
                "{} should report the unsolvable instance",
                strategy.name()
            );
        }
    }

    #[test]
    fn test_all_strategies_agree_on_optimal_length() {
        let goal = Board::solved();
        for seed in 0..6 {
            let start = Board::scrambled_with_seed(seed, 12);
            let reference = solve_bfs(&start, &goal).unwrap();
            for strategy in [Strategy::AStar, Strategy::IdaStar, Strategy::Iddfs] {
                let solution = solve(&start, &goal, strategy).unwrap();
                assert_eq!(
                    solution.steps,
                    reference.steps,
                    "{} disagrees with BFS on seed {}",
                    strategy.name(),
                    seed
                );
                assert_path_is_valid(&solution, &start, &goal);
            }
        }
    }

    #[test]
    fn test_bfs_and_astar_agree_on_harder_instances() {
        // Deeper scrambles than the IDDFS test can afford.
        let goal = Board::solved();
        for seed in 0..4 {
            let start = Board::scrambled_with_seed(100 + seed, 40);
            let bfs = solve_bfs(&start, &goal).unwrap();
            let astar = solve_astar(&start, &goal).unwrap();
            let idastar = solve_idastar(&start, &goal).unwrap();
            assert_eq!(astar.steps, bfs.steps, "seed {}", seed);
            assert_eq!(idastar.steps, bfs.steps, "seed {}", seed);
            assert_path_is_valid(&astar, &start, &goal);
            assert_path_is_valid(&idastar, &start, &goal);
        }
    }

    #[test]
    fn test_astar_with_hamming_is_still_optimal() {
        let goal = Board::solved();
        for seed in 0..4 {
            let start = Board::scrambled_with_seed(seed, 20);
            let reference = solve_bfs(&start, &goal).unwrap();
            let solution = solve_astar_with(&start, &goal, hamming).unwrap();
            assert_eq!(solution.steps, reference.steps, "seed {}", seed);
            assert_path_is_valid(&solution, &start, &goal);
        }
    }

    #[test]
    fn test_manhattan_is_admissible_against_bfs_optima() {
        let goal = Board::solved();
        for seed in 0..10 {
            let start = Board::scrambled_with_seed(seed, 25);
            let optimal = solve_bfs(&start, &goal).unwrap().steps;
            assert!(
                manhattan(&start, &goal) <= optimal,
                "heuristic overestimates on seed {}",
                seed
            );
        }
    }

    #[test]
    fn test_nonstandard_goal_configuration() {
        // The goal is any permutation, not necessarily the solved board.
        let goal = Board::from_cells([0, 1, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        let start = Board::from_cells([1, 0, 2, 3, 4, 5, 6, 7, 8]).unwrap();
        for strategy in Strategy::ALL {
            let solution = solve(&start, &goal, strategy).unwrap();
            assert_eq!(solution.steps, 1, "{}", strategy.name());
            assert_path_is_valid(&solution, &start, &goal);
        }
    }

    #[test]
    fn test_known_optimal_instance() {
        // Blank in the top-left with 2 and 6 displaced; optimal length 4
        // (right, down, right, down), matching the Manhattan lower bound.
        let goal = Board::solved();
        let start = Board::from_cells([0, 1, 3, 4, 2, 5, 7, 8, 6]).unwrap();
        let reference = solve_bfs(&start, &goal).unwrap();
        assert_eq!(reference.steps, 4);
        for strategy in Strategy::ALL {
            assert_eq!(solve(&start, &goal, strategy).unwrap().steps, 4);
        }
    }
}
