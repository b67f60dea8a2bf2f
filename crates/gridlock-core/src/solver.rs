//! Backtracking search with an optional forward-checking lookahead.
//!
//! The board is treated as a constraint-satisfaction problem: empty cells are
//! the variables, `1..=9` the domain, and [`Grid::permits`] the constraint.
//! Search assigns in place and undoes with a single write per frame; the grid
//! is never copied per search node.

use crate::grid::{Grid, Position, SIZE};

/// Configuration for the backtracking solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Run the forward-checking lookahead before each assignment. Pruning
    /// only: switching it off changes performance, never satisfiability.
    pub forward_checking: bool,
    /// Upper bound on search steps (recursive calls); `None` is unbounded.
    pub step_limit: Option<u64>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            forward_checking: true,
            step_limit: None,
        }
    }
}

/// Errors that abort a solve before or during search.
///
/// An unsatisfiable puzzle is not an error: exhausting the search space is a
/// normal outcome and is reported through the `Ok` channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
    /// The input grid already violates the row/column/box rule.
    Inconsistent { pos: Position, value: u8 },
    /// The configured step budget ran out before the search finished.
    StepLimitExceeded,
}

impl std::fmt::Display for SolveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Inconsistent { pos, value } => write!(
                f,
                "clue {} at r{}c{} conflicts with its row, column, or box",
                value, pos.row, pos.col
            ),
            Self::StepLimitExceeded => write!(f, "step limit exceeded before the search finished"),
        }
    }
}

impl std::error::Error for SolveError {}

/// Outcome of one search frame. `OutOfSteps` unwinds through every frame with
/// the frame's assignment undone, so an aborted grid is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Search {
    Solved,
    Exhausted,
    OutOfSteps,
}

/// Backtracking Sudoku solver. Stateless: all search state is per-call.
pub struct Solver {
    config: SolverConfig,
}

impl Default for Solver {
    fn default() -> Self {
        Self::new()
    }
}

impl Solver {
    /// Create a solver with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Create a solver with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Solve without touching the input, returning the solved grid if one
    /// exists. `Ok(None)` means the search space was exhausted.
    pub fn solve(&self, grid: &Grid) -> Result<Option<Grid>, SolveError> {
        let mut working = grid.clone();
        Ok(if self.solve_in_place(&mut working)? {
            Some(working)
        } else {
            None
        })
    }

    /// Solve `grid` in place, returning whether a solution was found.
    ///
    /// On `Ok(false)` or `Err(_)` the grid is exactly as it was before the
    /// call: every speculative assignment has been undone.
    pub fn solve_in_place(&self, grid: &mut Grid) -> Result<bool, SolveError> {
        if let Some((pos, value)) = grid.first_conflict() {
            return Err(SolveError::Inconsistent { pos, value });
        }

        let mut steps = self.config.step_limit;
        match self.search(grid, &mut steps) {
            Search::Solved => Ok(true),
            Search::Exhausted => Ok(false),
            Search::OutOfSteps => Err(SolveError::StepLimitExceeded),
        }
    }

    /// Depth-first search over the first empty cell, candidates ascending.
    ///
    /// Invariant: the grid is a consistent partial assignment on entry, and
    /// is restored to that exact assignment before any non-`Solved` return.
    fn search(&self, grid: &mut Grid, steps: &mut Option<u64>) -> Search {
        if let Some(budget) = steps {
            if *budget == 0 {
                return Search::OutOfSteps;
            }
            *budget -= 1;
        }

        let Some(pos) = grid.find_empty() else {
            return Search::Solved;
        };

        for value in 1..=9 {
            if !grid.permits(pos, value) {
                continue;
            }
            if self.config.forward_checking && !remains_feasible(grid, pos, value) {
                continue;
            }

            grid.set(pos, value);
            match self.search(grid, steps) {
                Search::Solved => return Search::Solved,
                Search::Exhausted => grid.clear(pos),
                Search::OutOfSteps => {
                    grid.clear(pos);
                    return Search::OutOfSteps;
                }
            }
        }

        Search::Exhausted
    }
}

/// Speculative one-step lookahead: would writing `value` at `pos` leave every
/// other empty cell with at least one permitted digit?
///
/// Temporarily mutates the grid and always restores it before returning,
/// whatever the verdict. When `pos` is the last empty cell the scan is
/// vacuous and the placement is feasible by definition.
pub fn remains_feasible(grid: &mut Grid, pos: Position, value: u8) -> bool {
    let prev = grid.value(pos);
    grid.set(pos, value);

    let mut feasible = true;
    'scan: for row in 0..SIZE {
        for col in 0..SIZE {
            let cell = Position::new(row, col);
            if grid.value(cell) != 0 {
                continue;
            }
            if !(1..=9).any(|candidate| grid.permits(cell, candidate)) {
                feasible = false;
                break 'scan;
            }
        }
    }

    if prev == 0 {
        grid.clear(pos);
    } else {
        grid.set(pos, prev);
    }
    feasible
}

#[cfg(test)]
mod tests {
    use super::*;

    const EASY: &str =
        "530070000600195000098000060800060003400803001700020006060000280000419005000080079";

    /// A consistent clue set with no completion: row 0 pins `(0,0)` to 1,
    /// the 1 in column 0 takes it away.
    const DEAD_END: &str =
        "023456789100000000000000000000000000000000000000000000000000000000000000000000000";

    fn assert_valid_solution(grid: &Grid) {
        assert!(grid.is_complete());
        for unit in 0..SIZE {
            let mut row_seen = [false; SIZE + 1];
            let mut col_seen = [false; SIZE + 1];
            let mut box_seen = [false; SIZE + 1];
            for x in 0..SIZE {
                let row_value = grid.value(Position::new(unit, x)) as usize;
                let col_value = grid.value(Position::new(x, unit)) as usize;
                let box_pos = Position::new(3 * (unit / 3) + x / 3, 3 * (unit % 3) + x % 3);
                let box_value = grid.value(box_pos) as usize;

                assert!(!row_seen[row_value], "duplicate in row {}", unit);
                assert!(!col_seen[col_value], "duplicate in column {}", unit);
                assert!(!box_seen[box_value], "duplicate in box {}", unit);
                row_seen[row_value] = true;
                col_seen[col_value] = true;
                box_seen[box_value] = true;
            }
        }
    }

    #[test]
    fn test_solve_easy() {
        let puzzle = Grid::from_string(EASY).unwrap();
        let solution = Solver::new().solve(&puzzle).unwrap().unwrap();

        assert_valid_solution(&solution);
        // Clues survive into the solution.
        for row in 0..SIZE {
            for col in 0..SIZE {
                let pos = Position::new(row, col);
                if let Some(clue) = puzzle.get(pos) {
                    assert_eq!(solution.get(pos), Some(clue));
                }
            }
        }
    }

    #[test]
    fn test_solve_leaves_input_untouched() {
        let puzzle = Grid::from_string(EASY).unwrap();
        let before = puzzle.clone();
        Solver::new().solve(&puzzle).unwrap();

        assert_eq!(puzzle, before);
    }

    #[test]
    fn test_solve_empty_grid() {
        let solution = Solver::new().solve(&Grid::empty()).unwrap().unwrap();
        assert_valid_solution(&solution);
    }

    #[test]
    fn test_solve_in_place() {
        let mut grid = Grid::from_string(EASY).unwrap();
        assert!(Solver::new().solve_in_place(&mut grid).unwrap());
        assert_valid_solution(&grid);
    }

    #[test]
    fn test_pruning_does_not_change_satisfiability() {
        let puzzle = Grid::from_string(EASY).unwrap();

        let with_pruning = Solver::new().solve(&puzzle).unwrap();
        let without_pruning = Solver::with_config(SolverConfig {
            forward_checking: false,
            ..SolverConfig::default()
        })
        .solve(&puzzle)
        .unwrap();

        assert!(with_pruning.is_some());
        assert!(without_pruning.is_some());
    }

    #[test]
    fn test_unsatisfiable_is_a_normal_outcome() {
        let puzzle = Grid::from_string(DEAD_END).unwrap();
        assert_eq!(puzzle.first_conflict(), None);

        assert_eq!(Solver::new().solve(&puzzle).unwrap(), None);
    }

    #[test]
    fn test_failed_solve_restores_grid() {
        let mut grid = Grid::from_string(DEAD_END).unwrap();
        let before = grid.clone();

        assert!(!Solver::new().solve_in_place(&mut grid).unwrap());
        assert_eq!(grid, before);
    }

    #[test]
    fn test_inconsistent_clues_rejected() {
        let mut grid = Grid::empty();
        grid.set(Position::new(0, 0), 5);
        grid.set(Position::new(0, 1), 5);

        assert_eq!(
            Solver::new().solve_in_place(&mut grid),
            Err(SolveError::Inconsistent {
                pos: Position::new(0, 0),
                value: 5
            })
        );
    }

    #[test]
    fn test_step_limit_aborts_and_restores() {
        let mut grid = Grid::from_string(EASY).unwrap();
        let before = grid.clone();
        let solver = Solver::with_config(SolverConfig {
            step_limit: Some(1),
            ..SolverConfig::default()
        });

        assert_eq!(
            solver.solve_in_place(&mut grid),
            Err(SolveError::StepLimitExceeded)
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_generous_step_limit_still_solves() {
        let puzzle = Grid::from_string(EASY).unwrap();
        let solver = Solver::with_config(SolverConfig {
            step_limit: Some(1_000_000),
            ..SolverConfig::default()
        });

        assert!(solver.solve(&puzzle).unwrap().is_some());
    }

    #[test]
    fn test_forward_check_restores_on_feasible() {
        let mut grid = Grid::empty();
        assert!(remains_feasible(&mut grid, Position::new(0, 0), 5));
        assert_eq!(grid, Grid::empty());
    }

    #[test]
    fn test_forward_check_restores_on_infeasible() {
        // Pin (0,0)'s only candidate to 5: row 0 takes 1,2,3,4,6,7,8 and
        // column 0 takes 9. Placing 5 at (0,1) then starves (0,0).
        let mut grid = Grid::empty();
        for (col, value) in (2..SIZE).zip([1, 2, 3, 4, 6, 7, 8]) {
            grid.set(Position::new(0, col), value);
        }
        grid.set(Position::new(1, 0), 9);
        let before = grid.clone();

        assert!(!remains_feasible(&mut grid, Position::new(0, 1), 5));
        assert_eq!(grid, before);
    }

    #[test]
    fn test_forward_check_on_last_empty_cell() {
        let mut solved = Solver::new().solve(&Grid::from_string(EASY).unwrap()).unwrap().unwrap();
        let pos = Position::new(4, 4);
        let value = solved.value(pos);
        solved.clear(pos);
        let before = solved.clone();

        // The speculative placement fills the only remaining hole, so the
        // empty-cell scan is vacuous.
        assert!(remains_feasible(&mut solved, pos, value));
        assert_eq!(solved, before);
    }
}
