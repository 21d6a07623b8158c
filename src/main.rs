mod calculator;
mod chart;
mod cli;
mod error;
mod events;
mod insights;
mod report;
mod sources;

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use log::info;

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    info!("Starting DORA metrics calculator");
    cli.execute()?;

    Ok(())
}
