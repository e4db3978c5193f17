pub mod cli;
pub mod config;
pub mod error;
pub mod host;
pub mod registry;
pub mod shell;
pub mod vocab;

pub use config::Config;
pub use error::CompletionError;
pub use registry::{CompletionRegistry, CompletionRequest};
pub use shell::Shell;
pub use vocab::{OptionToken, REDDIT_BACKGROUND_FLAGS, Resolver, Vocabulary};
