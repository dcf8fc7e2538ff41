pub mod cli;
pub mod spl;

use clap::Parser;
use std::io;

pub fn run() -> anyhow::Result<()> {
    // Keep stdout for results; diagnostics go to stderr via RUST_LOG
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = cli::Cli::parse();
    log::debug!("Parsed command line: {:?}", cli);

    let stdin = io::stdin();
    let stdout = io::stdout();
    cli::execute(&cli, stdin.lock(), stdout.lock())
}
