// src/main.rs
use std::error::Error;

use tracing_subscriber::EnvFilter;

use fs_scrape::cli;
use fs_scrape::params::Params;
use fs_scrape::runner;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("fs_scrape=info")),
        )
        .init();

    let mut params = Params::new();
    cli::parse_cli(&mut params)?;

    // Changed and unchanged both exit 0; "no new data" is a no-op, not a
    // failure (visible in the logs only).
    runner::run(&params)?;
    Ok(())
}
