//! Subcommand implementations. Each writes its result to `out` so callers
//! decide between stdout and a buffer.

use crate::cli::{apply_log_level, load_config, Cli, Command, GenerateArgs};
use anyhow::{bail, Context};
use golident_core::{init_logging, AppConfig, Identicon, Seed};
use golident_io::{verify_document, write_json_to, IdenticonDocument};
use std::io::Write;
use std::path::Path;

/// Installs logging and dispatches.
pub fn run<W: Write>(cli: Cli, out: &mut W) -> anyhow::Result<()> {
    let log_level = cli.log_level.as_deref();

    match cli.command {
        Command::Generate(args) => {
            let config = args.resolve(log_level)?;
            init_logging(&config.logging.level);
            generate(&args, &config, out)
        }
        Command::Verify { path } => {
            init_logging(&default_logging(log_level)?);
            verify(&path, out)
        }
        Command::Hash { seed } => {
            init_logging(&default_logging(log_level)?);
            hash(&seed, out)
        }
        Command::Config { config } => {
            let mut config = load_config(config.as_ref())?;
            apply_log_level(&mut config, log_level);
            config.validate()?;
            out.write_all(config.to_toml()?.as_bytes())?;
            Ok(())
        }
    }
}

/// Log level for subcommands that take no config file, validated.
fn default_logging(log_level: Option<&str>) -> anyhow::Result<String> {
    let mut config = AppConfig::default();
    apply_log_level(&mut config, log_level);
    config.validate()?;
    Ok(config.logging.level)
}

pub fn generate<W: Write>(
    args: &GenerateArgs,
    config: &AppConfig,
    out: &mut W,
) -> anyhow::Result<()> {
    let ident = Identicon::build(&args.seed, &config.identicon)
        .with_context(|| format!("building identicon for {:?}", args.seed))?;
    let doc = IdenticonDocument::from_identicon(&ident, config)?;

    match &args.output {
        Some(path) => {
            doc.save(path)?;
            tracing::info!(path = %path.display(), seed_hash = %doc.seed_hash, "Document written");
        }
        None => write_json_to(&doc, &mut *out)?,
    }
    Ok(())
}

pub fn verify<W: Write>(path: &Path, out: &mut W) -> anyhow::Result<()> {
    let doc = IdenticonDocument::load(path)
        .with_context(|| format!("loading document {}", path.display()))?;

    if let Err(e) = verify_document(&doc) {
        if e.is_mismatch() {
            bail!("{} does not reproduce: {e}", path.display());
        }
        return Err(e).with_context(|| format!("verifying {}", path.display()));
    }

    writeln!(out, "OK {} {}", doc.seed_hash, doc.seed_string)?;
    Ok(())
}

pub fn hash<W: Write>(seed: &str, out: &mut W) -> anyhow::Result<()> {
    writeln!(out, "{}", Seed::derive(seed))?;
    Ok(())
}
