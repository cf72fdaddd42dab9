//! Stage timing and structured logging for the generation pipeline.

use std::fmt;
use std::time::{Duration, Instant};
use tracing_subscriber::EnvFilter;

/// Pipeline stages in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Seed,
    Board,
    Gradient,
    Automaton,
    Compress,
    Normalize,
    Tile,
}

impl Stage {
    pub fn as_str(self) -> &'static str {
        match self {
            Stage::Seed => "seed",
            Stage::Board => "board",
            Stage::Gradient => "gradient",
            Stage::Automaton => "automaton",
            Stage::Compress => "compress",
            Stage::Normalize => "normalize",
            Stage::Tile => "tile",
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Wall-clock duration of each stage of one build.
#[derive(Debug, Clone, Default)]
pub struct StageTimings {
    stages: Vec<(Stage, Duration)>,
}

impl StageTimings {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `f`, records how long it took under `stage`, and returns its value.
    pub fn measure<T, F>(&mut self, stage: Stage, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        let start = Instant::now();
        let value = f();
        self.record(stage, start.elapsed());
        value
    }

    pub fn record(&mut self, stage: Stage, duration: Duration) {
        tracing::debug!(
            stage = stage.as_str(),
            duration_us = duration.as_micros() as u64,
            "Pipeline stage finished"
        );
        self.stages.push((stage, duration));
    }

    #[must_use]
    pub fn get(&self, stage: Stage) -> Option<Duration> {
        self.stages
            .iter()
            .find(|(s, _)| *s == stage)
            .map(|&(_, d)| d)
    }

    #[must_use]
    pub fn total(&self) -> Duration {
        self.stages.iter().map(|&(_, d)| d).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(Stage, Duration)> {
        self.stages.iter()
    }
}

/// Initialize tracing subscriber for logging.
///
/// `RUST_LOG` overrides `level`. Logs go to stderr so stdout stays free for
/// exported documents. Calling this twice is harmless.
pub fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .ok();
}
