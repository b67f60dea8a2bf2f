//! Sudoku engine built around constrained backtracking search.
//!
//! The board is a constraint-satisfaction problem over a fixed 9x9 domain:
//! [`Grid::permits`] is the row/column/box constraint,
//! [`solver::remains_feasible`](remains_feasible) is a one-step
//! forward-checking lookahead, and [`Solver`] drives the depth-first search,
//! assigning in place and undoing on dead ends. [`Generator`] seeds sparse
//! random puzzles by constrained rejection sampling.
//!
//! ```
//! use gridlock_core::{Generator, Solver};
//!
//! let puzzle = Generator::with_seed(42).generate();
//! let solution = Solver::new().solve(&puzzle).unwrap();
//! assert!(solution.is_some());
//! ```

mod generator;
mod grid;
mod solver;

pub use generator::{Generator, GeneratorConfig};
pub use grid::{Grid, GridParseError, Position, BOX, SIZE};
pub use solver::{remains_feasible, SolveError, Solver, SolverConfig};
