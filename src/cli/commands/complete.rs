use eyre::Result;
use log::{debug, warn};
use std::io::{self, Write};
use std::path::Path;

use crate::config::Config;
use crate::registry::{CompletionRegistry, CompletionRequest};

#[derive(Debug, clap::Args)]
pub struct CompleteCommand {
    /// Index of the word being completed
    #[arg(long, default_value_t = 0)]
    pub cword: usize,

    /// The full command line, split into words
    #[arg(last = true, allow_hyphen_values = true)]
    pub words: Vec<String>,
}

impl CompleteCommand {
    pub fn execute(&self, config: Option<&Path>) -> Result<()> {
        let config = Config::load(config).unwrap_or_else(|e| {
            warn!("{e}; completing with defaults");
            Config::default()
        });
        let registry = CompletionRegistry::from_config(&config);

        let request = CompletionRequest::new(self.words.clone(), self.cword);
        debug!("completion request: {:?}", request);

        let mut stdout = io::stdout().lock();
        for candidate in registry.dispatch(&request) {
            writeln!(stdout, "{candidate}")?;
        }
        Ok(())
    }
}
