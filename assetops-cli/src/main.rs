//! assetops-cli: Postman collection and Excel tooling for the asset
//! management services.

mod cli;
mod excel;
mod postman;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = cli::Cli::parse();
    cli::run(args)
}
