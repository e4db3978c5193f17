use clap::Parser;
use env_logger::Target;
use eyre::{Report, Result};
use log::debug;
use reddit_background_completion::cli::Cli;
use std::fs::OpenOptions;

// Logs go to a file; stdout is the shell's candidate buffer.
fn setup_logging() -> Result<(), Report> {
    let log_dir = dirs::data_local_dir()
        .ok_or_else(|| eyre::eyre!("Could not determine local data directory"))?
        .join("reddit-background")
        .join("logs");

    std::fs::create_dir_all(&log_dir)?;
    let log_file_path = log_dir.join("completion.log");

    let log_file = OpenOptions::new().create(true).append(true).open(&log_file_path)?;

    env_logger::Builder::from_env(env_logger::Env::default().filter_or("RUST_LOG", "info"))
        .target(Target::Pipe(Box::new(log_file)))
        .init();

    Ok(())
}

fn main() {
    // Completion must keep working even when the log file can't be opened
    let _ = setup_logging();

    let cli = Cli::parse();
    debug!("Starting reddit-background-complete {:?}", cli.command);

    if let Err(e) = cli.execute() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
