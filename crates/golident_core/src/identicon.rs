//! Identicon assembly: seed -> board -> history -> field -> normalized -> tiled.

use crate::automaton::run;
use crate::board::init_board;
use crate::compress::{compress, last_true_frames};
use crate::config::{FrameNormalization, IdenticonConfig};
use crate::error::Result;
use crate::gradient::{ColorGradient, Colormap};
use crate::history::History;
use crate::metrics::{Stage, StageTimings};
use crate::normalize::{normalize, normalize_frames};
use crate::seed::{derive, Seed};
use crate::tile::tile;
use golident_data::{Board, Field, Grid, Intensity, Rgb};

/// A fully generated identicon together with every intermediate stage.
///
/// Everything is computed in [`Identicon::build`]; the value is read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct Identicon {
    seed_string: String,
    seed: Seed,
    config: IdenticonConfig,
    board: Board,
    gradient: ColorGradient,
    history: History,
    field: Field,
    array: Intensity,
    timings: StageTimings,
}

impl Identicon {
    /// Runs the whole pipeline.
    ///
    /// Configuration is validated and the history size checked before any
    /// simulation state is allocated. Generator draws happen in a fixed order:
    /// all board cells, then all gradient channels.
    pub fn build(seed_string: &str, config: &IdenticonConfig) -> Result<Self> {
        config.validate()?;
        config.history_cells()?;

        let mut timings = StageTimings::new();
        let (seed, mut rng) = timings.measure(Stage::Seed, || derive(seed_string));
        let board = timings.measure(Stage::Board, || init_board(&mut rng, config.size))?;
        let gradient = timings.measure(Stage::Gradient, || {
            ColorGradient::random(&mut rng, config.num_colors)
        })?;
        let history = timings.measure(Stage::Automaton, || run(&board, config.iterations))?;
        let field = timings.measure(Stage::Compress, || compress(&history));

        if field.iter().min() == field.iter().max() {
            tracing::warn!(
                seed_hash = %seed,
                value = field.iter().next().copied().unwrap_or_default(),
                "Compressed field is constant; normalization leaves it unscaled"
            );
        }

        let normalized = timings.measure(Stage::Normalize, || normalize(&field.to_intensity()));
        let array = timings.measure(Stage::Tile, || tile(&normalized));

        tracing::info!(
            seed_hash = %seed,
            size = config.size,
            iterations = config.iterations,
            initial_alive = board.alive_count(),
            final_alive = history.population().last().copied().unwrap_or_default(),
            duration_ms = timings.total().as_millis() as u64,
            "Identicon built"
        );

        Ok(Self {
            seed_string: seed_string.to_string(),
            seed,
            config: *config,
            board,
            gradient,
            history,
            field,
            array,
            timings,
        })
    }

    pub fn seed_string(&self) -> &str {
        &self.seed_string
    }

    pub fn seed(&self) -> &Seed {
        &self.seed
    }

    /// Hex SHA-256 of the seed string.
    pub fn seed_hash(&self) -> String {
        self.seed.hex()
    }

    pub fn config(&self) -> &IdenticonConfig {
        &self.config
    }

    /// The initial random board (history frame 0).
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Last-true-index field before normalization and tiling.
    pub fn field(&self) -> &Field {
        &self.field
    }

    /// The `(2 * size, 2 * size)` identicon array, values in [0, 255] unless
    /// the field was constant.
    pub fn array(&self) -> &Intensity {
        &self.array
    }

    pub fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }

    pub fn timings(&self) -> &StageTimings {
        &self.timings
    }

    /// Running last-true-index field after every step.
    pub fn frames(&self) -> Vec<Field> {
        last_true_frames(&self.history)
    }

    /// Frames ready for animation: normalized per `mode`, then tiled.
    pub fn animation_frames(&self, mode: FrameNormalization) -> Vec<Intensity> {
        normalize_frames(&self.frames(), mode)
            .iter()
            .map(tile)
            .collect()
    }

    pub fn colormap(&self, lut_size: usize) -> Result<Colormap> {
        Colormap::new(&self.gradient, lut_size)
    }

    /// RGB pixels of the identicon through this seed's gradient.
    pub fn render(&self, lut_size: usize) -> Result<Grid<Rgb>> {
        Ok(self.colormap(lut_size)?.render(&self.array))
    }

    pub fn into_parts(self) -> (Intensity, ColorGradient) {
        (self.array, self.gradient)
    }
}

/// `build(seed_string, size, iterations, num_colors) -> (array, gradient)`.
pub fn build(
    seed_string: &str,
    size: usize,
    iterations: usize,
    num_colors: usize,
) -> Result<(Intensity, ColorGradient)> {
    let config = IdenticonConfig::new(size, iterations, num_colors);
    Identicon::build(seed_string, &config).map(Identicon::into_parts)
}
