use anyhow::Result;
use clap::Parser;
use golident_lib::cli::Cli;
use golident_lib::commands;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let stdout = std::io::stdout();
    commands::run(cli, &mut stdout.lock())
}
