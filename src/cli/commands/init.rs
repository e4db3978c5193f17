use eyre::Result;
use log::{info, warn};
use std::path::Path;

use crate::cli::PROGRAM;
use crate::config::Config;
use crate::shell::Shell;

#[derive(Debug, clap::Args)]
pub struct InitCommand {
    /// Shell to register with (default: detected from $SHELL)
    #[arg(value_enum)]
    pub shell: Option<Shell>,

    /// Program the script calls back into
    #[arg(long, default_value = PROGRAM)]
    pub program: String,
}

impl InitCommand {
    pub fn execute(&self, config: Option<&Path>) -> Result<()> {
        let Some(shell) = self.shell.or_else(Shell::detect) else {
            // Unsupported shells get no registration rather than an error
            warn!("no supported shell detected, skipping registration");
            return Ok(());
        };

        let config = Config::load(config)?;
        let commands = config.commands();
        info!("registering {} for {:?}", shell, commands);

        print!("{}", shell.registration_script(&self.program, &commands));
        Ok(())
    }
}
