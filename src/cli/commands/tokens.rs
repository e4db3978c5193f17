use eyre::Result;

use crate::vocab::Vocabulary;

#[derive(Debug, clap::Args)]
pub struct TokensCommand {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

impl TokensCommand {
    pub fn execute(&self) -> Result<()> {
        let vocab = Vocabulary::reddit_background();

        if self.json {
            println!("{}", serde_json::to_string_pretty(vocab.tokens())?);
            return Ok(());
        }

        for token in vocab.tokens() {
            println!("{token}");
        }
        Ok(())
    }
}
