use colored::Colorize;
use std::fmt;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    DuplicateToken {
        token: String,
    },
    UnsupportedShell {
        name: String,
    },
    Config {
        path: PathBuf,
        error: String,
    },
    UnknownTokens {
        command: String,
        tokens: Vec<String>,
    },
}

impl fmt::Display for CompletionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CompletionError::DuplicateToken { token } => {
                write!(
                    f,
                    "{}: The option '{}' is declared more than once in the vocabulary",
                    "error".red().bold(),
                    token.yellow()
                )
            }

            CompletionError::UnsupportedShell { name } => {
                write!(
                    f,
                    "{}: Shell '{}' has no completion support\n\nSupported shells: [{}]",
                    "error".red().bold(),
                    name.yellow(),
                    ["bash", "zsh", "fish"].map(|s| s.green().to_string()).join(", ")
                )
            }

            CompletionError::Config { path, error } => {
                write!(
                    f,
                    "{}: Failed to load config '{}'\n\n{}",
                    "error".red().bold(),
                    path.display().to_string().yellow(),
                    error
                )
            }

            CompletionError::UnknownTokens { command, tokens } => {
                writeln!(
                    f,
                    "{}: The following completions are not accepted by '{}':",
                    "error".red().bold(),
                    command.blue()
                )?;
                for token in tokens {
                    writeln!(f, "    {}", token.yellow())?;
                }
                write!(f, "\nUpdate the vocabulary to match the {} option parser.", command)
            }
        }
    }
}

impl std::error::Error for CompletionError {}
