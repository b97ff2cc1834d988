//! Parsing and formatting adapters around the search core.
//!
//! The instance format is deliberately forgiving: any character that is not
//! an ASCII digit is ignored, and the first 18 digits found populate the
//! start board then the goal board, row-major, with `0` marking the blank.
//! Whitespace, newlines, and arbitrary separators therefore all work.
use crate::engine::{Board, BOARD_CELLS};
use crate::solver::Solution;

/// Parses a start/goal instance from a free-form character stream.
///
/// Exactly 18 digits are consumed: the first 9 fill the start board, the
/// next 9 the goal board. Digits past the 18th are ignored.
///
/// # Returns
/// * `Ok((start, goal))` on success.
/// * `Err(String)` if fewer than 18 digits are present, if `9` appears as a
///   cell value, or if either block is not a permutation of 0-8.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::parse_instance;
///
/// let input = "1 2 3 4 5 6 7 0 8\n1 2 3 4 5 6 7 8 0\n";
/// let (start, goal) = parse_instance(input).unwrap();
/// assert_eq!(start.blank_pos(), 7);
/// assert_eq!(goal.blank_pos(), 8);
/// ```
pub fn parse_instance(input: &str) -> Result<(Board, Board), String> {
    let digits: Vec<u8> = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(2 * BOARD_CELLS)
        .map(|c| c as u8 - b'0')
        .collect();

    if digits.len() < 2 * BOARD_CELLS {
        return Err(format!(
            "Expected {} digit characters (start board then goal board), found {}",
            2 * BOARD_CELLS,
            digits.len()
        ));
    }

    let mut start_cells = [0u8; BOARD_CELLS];
    start_cells.copy_from_slice(&digits[..BOARD_CELLS]);
    let mut goal_cells = [0u8; BOARD_CELLS];
    goal_cells.copy_from_slice(&digits[BOARD_CELLS..]);

    let start = Board::from_cells(start_cells).map_err(|e| format!("Invalid start board: {}", e))?;
    let goal = Board::from_cells(goal_cells).map_err(|e| format!("Invalid goal board: {}", e))?;
    Ok((start, goal))
}

/// Formats a solution as the move count followed by one line per board
/// along the path, start through goal inclusive.
///
/// ```text
/// steps: 2
/// 1 2 3 4 5 6 0 7 8
/// 1 2 3 4 5 6 7 0 8
/// 1 2 3 4 5 6 7 8 0
/// ```
pub fn format_solution(solution: &Solution) -> String {
    let mut output = format!("steps: {}", solution.steps);
    for board in &solution.path {
        output.push('\n');
        output.push_str(&board.to_string());
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::solver::{solve_bfs, Strategy};

    #[test]
    fn test_parse_instance_space_separated() {
        let input = "1 2 3 4 5 6 7 0 8\n1 2 3 4 5 6 7 8 0\n";
        let (start, goal) = parse_instance(input).unwrap();
        assert_eq!(start.cells(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(goal, Board::solved());
    }

    #[test]
    fn test_parse_instance_ignores_arbitrary_separators() {
        let input = "start: 123,456,708 | goal: [123][456][780]";
        let (start, goal) = parse_instance(input).unwrap();
        assert_eq!(start.cells(), &[1, 2, 3, 4, 5, 6, 7, 0, 8]);
        assert_eq!(goal, Board::solved());
    }

    #[test]
    fn test_parse_instance_ignores_digits_past_the_18th() {
        let input = "123456708 123456780 999999999";
        let (_, goal) = parse_instance(input).unwrap();
        assert_eq!(goal, Board::solved());
    }

    #[test]
    fn test_parse_instance_too_few_digits() {
        let result = parse_instance("1 2 3 4 5");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("found 5"));
    }

    #[test]
    fn test_parse_instance_rejects_non_permutation() {
        // 1 repeated in the start block.
        let result = parse_instance("112345678 123456780");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid start board"));

        // 9 is never a valid cell value.
        let result = parse_instance("123456780 923456780");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Invalid goal board"));
    }

    #[test]
    fn test_format_solution_identity() {
        let goal = Board::solved();
        let solution = solve_bfs(&goal, &goal).unwrap();
        assert_eq!(format_solution(&solution), "steps: 0\n1 2 3 4 5 6 7 8 0");
    }

    #[test]
    fn test_format_solution_one_move_path() {
        let goal = Board::solved();
        let start = Board::from_cells([1, 2, 3, 4, 5, 6, 7, 0, 8]).unwrap();
        let solution = crate::solver::solve(&start, &goal, Strategy::AStar).unwrap();
        assert_eq!(
            format_solution(&solution),
            "steps: 1\n1 2 3 4 5 6 7 0 8\n1 2 3 4 5 6 7 8 0"
        );
    }
}
