//! Command-line surface of the `golident` binary.

use anyhow::Context;
use clap::{Args, Parser, Subcommand, ValueEnum};
use golident_core::{AppConfig, FrameNormalization};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about = "Deterministic Game of Life identicons", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Log level (trace, debug, info, warn, error); RUST_LOG takes precedence
    #[arg(long, global = true)]
    pub log_level: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Build an identicon and write it as a JSON document
    Generate(GenerateArgs),
    /// Rebuild a JSON document and check that it reproduces exactly
    Verify {
        /// Document to check
        path: PathBuf,
    },
    /// Print the SHA-256 seed hash of a string
    Hash {
        seed: String,
    },
    /// Print the effective configuration as TOML
    Config {
        /// Custom config file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct GenerateArgs {
    /// Any string; equal strings give equal identicons
    pub seed: String,

    /// Board side length (the identicon is twice as wide)
    #[arg(long)]
    pub size: Option<usize>,

    /// Number of Game of Life steps
    #[arg(long)]
    pub iterations: Option<usize>,

    /// Number of gradient colors
    #[arg(long)]
    pub num_colors: Option<usize>,

    /// Custom config file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Output file; stdout when absent
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Attach the RGB pixel grid
    #[arg(long)]
    pub pixels: bool,

    /// Attach per-step animation frames
    #[arg(long)]
    pub frames: bool,

    /// Scaling used for animation frames
    #[arg(long, value_enum)]
    pub frame_normalization: Option<FrameMode>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FrameMode {
    PerFrame,
    Global,
}

impl From<FrameMode> for FrameNormalization {
    fn from(mode: FrameMode) -> Self {
        match mode {
            FrameMode::PerFrame => FrameNormalization::PerFrame,
            FrameMode::Global => FrameNormalization::Global,
        }
    }
}

/// Defaults, then the config file, then explicit flags.
pub fn load_config(path: Option<&PathBuf>) -> anyhow::Result<AppConfig> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            AppConfig::from_toml(&content)
                .with_context(|| format!("parsing config {}", path.display()))
        }
        None => Ok(AppConfig::default()),
    }
}

/// `--log-level` wins over `[logging] level`.
pub fn apply_log_level(config: &mut AppConfig, log_level: Option<&str>) {
    if let Some(level) = log_level {
        config.logging.level = level.to_string();
    }
}

impl GenerateArgs {
    /// Effective configuration for this invocation, validated.
    pub fn resolve(&self, log_level: Option<&str>) -> anyhow::Result<AppConfig> {
        let mut config = load_config(self.config.as_ref())?;

        if let Some(size) = self.size {
            config.identicon.size = size;
        }
        if let Some(iterations) = self.iterations {
            config.identicon.iterations = iterations;
        }
        if let Some(num_colors) = self.num_colors {
            config.identicon.num_colors = num_colors;
        }
        if self.pixels {
            config.render.include_pixels = true;
        }
        if self.frames {
            config.render.include_frames = true;
        }
        if let Some(mode) = self.frame_normalization {
            config.render.frame_normalization = mode.into();
        }
        apply_log_level(&mut config, log_level);

        config.validate()?;
        Ok(config)
    }
}
