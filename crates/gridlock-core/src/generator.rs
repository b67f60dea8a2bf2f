//! Random puzzle seeding by constrained rejection sampling.

use crate::grid::{Grid, Position, SIZE};

/// Proposals tried for a single clue before the attempt is abandoned.
const PROPOSAL_CAP: usize = 1_000;

/// Configuration for puzzle seeding.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Number of clues to place. 17 is the documented minimum clue count for
    /// which a uniquely determined classic puzzle is known to exist.
    pub clue_count: usize,
    /// Full restarts before settling for a partially seeded grid.
    pub max_attempts: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            clue_count: 17,
            max_attempts: 100,
        }
    }
}

/// Sudoku puzzle generator.
///
/// Seeds a sparse grid by repeated constrained random placement. Every placed
/// clue respects the row/column/box rule at placement time; solvability and
/// uniqueness of the result are not verified.
pub struct Generator {
    config: GeneratorConfig,
    rng: SimpleRng,
}

impl Default for Generator {
    fn default() -> Self {
        Self::new()
    }
}

impl Generator {
    /// Create a generator with the default configuration.
    pub fn new() -> Self {
        Self {
            config: GeneratorConfig::default(),
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with custom configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self {
            config,
            rng: SimpleRng::new(),
        }
    }

    /// Create a generator with a specific seed for reproducible puzzles.
    pub fn with_seed(seed: u64) -> Self {
        Self::seeded(GeneratorConfig::default(), seed)
    }

    /// Create a generator with custom configuration and a specific seed.
    pub fn seeded(config: GeneratorConfig, seed: u64) -> Self {
        Self {
            config,
            rng: SimpleRng::with_seed(seed),
        }
    }

    /// Generate a sparse puzzle grid.
    pub fn generate(&mut self) -> Grid {
        let mut last = Grid::empty();
        for _ in 0..self.config.max_attempts.max(1) {
            match self.seed_attempt() {
                Ok(grid) => return grid,
                Err(grid) => last = grid,
            }
        }
        // Every attempt hit the proposal cap, astronomically unlikely at
        // sane clue counts. The partial grid is still rule-consistent.
        last
    }

    /// One full seeding attempt. `Err` carries the partial grid when the
    /// proposal cap was hit before every clue landed.
    fn seed_attempt(&mut self) -> Result<Grid, Grid> {
        let mut grid = Grid::empty();
        for _ in 0..self.config.clue_count.min(SIZE * SIZE) {
            if !self.place_clue(&mut grid) {
                return Err(grid);
            }
        }
        Ok(grid)
    }

    /// Rejection-sample one clue: propose a random cell and value, retry
    /// while the cell is occupied or the value breaks a rule.
    fn place_clue(&mut self, grid: &mut Grid) -> bool {
        for _ in 0..PROPOSAL_CAP {
            let pos = Position::new(self.rng.next_index(SIZE), self.rng.next_index(SIZE));
            let value = self.rng.next_index(SIZE) as u8 + 1;
            if grid.value(pos) == 0 && grid.permits(pos, value) {
                grid.set(pos, value);
                return true;
            }
        }
        false
    }
}

/// Small PCG-style PRNG. Keeps the core free of heavyweight RNG dependencies
/// and WASM-friendly: seeding goes through `getrandom`.
struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    fn new() -> Self {
        let mut seed_bytes = [0u8; 8];
        getrandom::getrandom(&mut seed_bytes).unwrap_or_else(|_| {
            // Entropy source unavailable; fall back to a process-local counter.
            static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);
            let n = COUNTER.fetch_add(1, std::sync::atomic::Ordering::Relaxed);
            seed_bytes = n.to_le_bytes();
        });
        Self::with_seed(u64::from_le_bytes(seed_bytes))
    }

    fn with_seed(seed: u64) -> Self {
        Self {
            state: seed.wrapping_add(1),
        }
    }

    fn next_u32(&mut self) -> u32 {
        self.state = self
            .state
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        let xorshifted = (((self.state >> 18) ^ self.state) >> 27) as u32;
        let rot = (self.state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_index(&mut self, bound: usize) -> usize {
        (self.next_u32() as usize) % bound
    }
}
