//! Minimal tour of the gridlock engine.

use gridlock_core::{Generator, Grid, Solver};

fn main() {
    // Seed a sparse puzzle.
    let mut generator = Generator::with_seed(7);
    let puzzle = generator.generate();

    println!("Generated puzzle ({} clues):", puzzle.clue_count());
    println!("{}", puzzle);

    // Solve it.
    let solver = Solver::new();
    match solver.solve(&puzzle) {
        Ok(Some(solution)) => {
            println!("Solved:");
            println!("{}", solution);
        }
        Ok(None) => println!("No solution exists"),
        Err(err) => eprintln!("rejected: {err}"),
    }

    // Parse a puzzle from an 81-character line.
    let line = "530070000600195000098000060800060003400803001700020006060000280000419005000080079";
    let grid = Grid::from_string(line).expect("well-formed puzzle");
    println!("Parsed puzzle ({} clues):", grid.clue_count());
    println!("{}", grid);
}
