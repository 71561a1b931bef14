mod cli;
mod config;
mod generator;
mod logging;
mod output;
mod request;
mod validate;

use anyhow::Result;
use clap::Parser;
use cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli::run(cli)
}
