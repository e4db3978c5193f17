pub mod check;
pub mod complete;
pub mod init;
pub mod tokens;

pub use check::CheckCommand;
pub use complete::CompleteCommand;
pub use init::InitCommand;
pub use tokens::TokensCommand;
