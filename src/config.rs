use log::debug;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CompletionError;

pub const DEFAULT_COMMAND: &str = "reddit_background";
pub const CONFIG_ENV: &str = "REDDIT_BACKGROUND_COMPLETION_CONFIG";

fn default_command() -> String {
    DEFAULT_COMMAND.to_string()
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Name the host tool is invoked under
    #[serde(default = "default_command")]
    pub command: String,

    /// Additional names bound to the same completions
    #[serde(default)]
    pub aliases: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            command: default_command(),
            aliases: vec![],
        }
    }
}

impl Config {
    /// `~/.config/reddit-background/completion.yml` or the platform equivalent.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("reddit-background").join("completion.yml"))
    }

    /// Loads from `path`, or the default location when `None`.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load(path: Option<&Path>) -> Result<Self, CompletionError> {
        let path = match path {
            Some(path) => expand(path)?,
            None => match Self::default_path() {
                Some(path) => path,
                None => {
                    debug!("no config directory on this platform, using defaults");
                    return Ok(Self::default());
                }
            },
        };

        if !path.exists() {
            debug!("config {} not found, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|e| CompletionError::Config {
            path: path.clone(),
            error: e.to_string(),
        })?;
        let config = Self::from_yaml(&content).map_err(|error| CompletionError::Config {
            path: path.clone(),
            error,
        })?;

        debug!("loaded config from {}", path.display());
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, String> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Config = serde_yaml::from_str(content).map_err(|e| e.to_string())?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), String> {
        for name in self.commands() {
            if name.is_empty() || name.chars().any(char::is_whitespace) {
                return Err(format!("invalid command name '{name}'"));
            }
        }
        Ok(())
    }

    /// The command followed by its aliases, first occurrence wins.
    pub fn commands(&self) -> Vec<&str> {
        let mut commands: Vec<&str> = Vec::with_capacity(self.aliases.len() + 1);
        for name in std::iter::once(&self.command).chain(self.aliases.iter()) {
            if !commands.contains(&name.as_str()) {
                commands.push(name);
            }
        }
        commands
    }
}

fn expand(path: &Path) -> Result<PathBuf, CompletionError> {
    expanduser::expanduser(path.to_string_lossy()).map_err(|e| CompletionError::Config {
        path: path.to_path_buf(),
        error: e.to_string(),
    })
}
