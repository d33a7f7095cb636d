use clap::Parser;
use edgediff::config::Cli;
use edgediff::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Convert CLI args to Config - this validates immediately
    let config = Config::try_from(cli)?;

    edgediff::commands::check::run(&config)?;

    Ok(())
}
