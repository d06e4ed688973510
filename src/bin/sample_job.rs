use anyhow::Result;
use clap::Parser;
use sample_package::jobs::run_sample_job;
use std::io;

/// Example job entry point.
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

    run_sample_job(&mut io::stdout().lock())
}
