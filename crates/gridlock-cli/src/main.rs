mod render;
mod theme;

use clap::Parser;
use gridlock_core::{Generator, GeneratorConfig, Grid, Solver, SolverConfig};
use std::io;
use std::process::ExitCode;

/// Generate and solve Sudoku puzzles with backtracking and forward checking.
#[derive(Parser, Debug)]
#[command(name = "gridlock", version, about)]
struct Cli {
    /// Solve this 81-character puzzle instead of generating one.
    /// Digits 1-9 are clues; '0' or '.' mark empty cells.
    #[arg(long)]
    puzzle: Option<String>,

    /// Number of clues to seed when generating.
    #[arg(long, default_value_t = 17)]
    clues: usize,

    /// Seed for reproducible puzzle generation.
    #[arg(long)]
    seed: Option<u64>,

    /// Disable the forward-checking lookahead (pure backtracking).
    #[arg(long)]
    no_forward_checking: bool,

    /// Abort the search after this many steps.
    #[arg(long)]
    step_limit: Option<u64>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut stdout = io::stdout();

    let puzzle = match &cli.puzzle {
        Some(line) => Grid::from_string(line)?,
        None => {
            let config = GeneratorConfig {
                clue_count: cli.clues,
                ..GeneratorConfig::default()
            };
            let mut generator = match cli.seed {
                Some(seed) => Generator::seeded(config, seed),
                None => Generator::with_config(config),
            };
            generator.generate()
        }
    };

    println!("Puzzle ({} clues):", puzzle.clue_count());
    render::render_grid(&mut stdout, &puzzle)?;

    let solver = Solver::with_config(SolverConfig {
        forward_checking: !cli.no_forward_checking,
        step_limit: cli.step_limit,
    });

    match solver.solve(&puzzle)? {
        Some(solution) => {
            println!("\nSolved:");
            render::render_grid(&mut stdout, &solution)?;
        }
        None => println!("\nNo solution exists"),
    }

    Ok(())
}
