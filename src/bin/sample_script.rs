use anyhow::{Context, Result};
use clap::Parser;
use sample_package::jobs::run_demo_script;
use std::io;

/// Show a small range from the compute session.
#[derive(Debug, Parser)]
#[command(version, about)]
struct CLI {}

fn main() {
    env_logger::Builder::new()
        .format_timestamp_millis()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();

    if let Err(error) = run_cli() {
        log::error!("{error:#?}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<()> {
    let args = CLI::parse();
    log::debug!("{args:#?}");

    run_demo_script(&mut io::stdout().lock()).context("failed to run demo script")
}
