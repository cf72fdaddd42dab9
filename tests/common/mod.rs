pub mod macros;

use golident_core::{History, Identicon, IdenticonConfig};
use golident_data::{Board, Field};

#[allow(dead_code)]
pub struct IdenticonBuilder {
    seed: String,
    config: IdenticonConfig,
}

#[allow(dead_code)]
impl IdenticonBuilder {
    pub fn new() -> Self {
        Self {
            seed: "golident".to_string(),
            config: IdenticonConfig::new(16, 40, 5),
        }
    }

    pub fn with_seed(mut self, seed: &str) -> Self {
        self.seed = seed.to_string();
        self
    }

    pub fn with_size(mut self, size: usize) -> Self {
        self.config.size = size;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.config.iterations = iterations;
        self
    }

    pub fn with_colors(mut self, num_colors: usize) -> Self {
        self.config.num_colors = num_colors;
        self
    }

    pub fn config(&self) -> IdenticonConfig {
        self.config
    }

    pub fn build(self) -> Identicon {
        Identicon::build(&self.seed, &self.config).expect("Failed to build identicon in test builder")
    }
}

/// Textbook last-true index: scan every frame, keep the latest live step.
#[allow(dead_code)]
pub fn brute_force_last_true(history: &History) -> Field {
    let mut field = Field::new(history.width(), history.height(), 0);
    for t in 0..history.len() {
        let board = history.board(t).expect("frame in range");
        for r in 0..board.height() {
            for c in 0..board.width() {
                if board[(r, c)] {
                    field[(r, c)] = t;
                }
            }
        }
    }
    field
}

/// Builds a board from rows of `#` (alive) and `.` (dead).
#[allow(dead_code)]
pub fn board_from_ascii(rows: &[&str]) -> Board {
    let cells = rows
        .iter()
        .map(|row| row.chars().map(|ch| ch == '#').collect())
        .collect();
    Board::from_rows(cells).expect("rectangular board")
}
