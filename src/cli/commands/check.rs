use colored::Colorize;
use eyre::Result;
use std::path::Path;

use crate::config::Config;
use crate::error::CompletionError;
use crate::host::unknown_tokens;
use crate::vocab::Vocabulary;

#[derive(Debug, clap::Args)]
pub struct CheckCommand {}

impl CheckCommand {
    pub fn execute(&self, config: Option<&Path>) -> Result<()> {
        let config = Config::load(config)?;
        let vocab = Vocabulary::reddit_background();

        let unknown = unknown_tokens(&vocab);
        if !unknown.is_empty() {
            return Err(CompletionError::UnknownTokens {
                command: config.command,
                tokens: unknown,
            }
            .into());
        }

        println!(
            "{} {} completions match {}",
            "ok:".green().bold(),
            vocab.len(),
            config.commands().join(", ").blue()
        );
        Ok(())
    }
}
