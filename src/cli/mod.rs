pub mod commands;

use eyre::Result;
use std::path::PathBuf;

use crate::config::CONFIG_ENV;

pub use commands::{CheckCommand, CompleteCommand, InitCommand, TokensCommand};

/// Name the registration scripts call back into.
pub const PROGRAM: &str = "reddit-background-complete";

/// Shell completion for reddit_background
#[derive(Debug, clap::Parser)]
#[command(name = PROGRAM, version, about = "Shell completion for reddit_background")]
pub struct Cli {
    /// Path to the completion config
    #[arg(long, global = true, env = CONFIG_ENV, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, clap::Subcommand)]
pub enum Commands {
    /// Print the shell registration script
    Init(InitCommand),
    /// Resolve candidates for the word under the cursor
    Complete(CompleteCommand),
    /// List the completion vocabulary
    Tokens(TokensCommand),
    /// Verify completions against the reddit_background option parser
    Check(CheckCommand),
}

impl Cli {
    pub fn execute(&self) -> Result<()> {
        let config = self.config.as_deref();
        match &self.command {
            Commands::Init(cmd) => cmd.execute(config),
            Commands::Complete(cmd) => cmd.execute(config),
            Commands::Tokens(cmd) => cmd.execute(),
            Commands::Check(cmd) => cmd.execute(config),
        }
    }
}
