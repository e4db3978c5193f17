//! Command-name to resolver bindings

use log::debug;
use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use crate::config::Config;
use crate::vocab::{OptionToken, Resolver, Vocabulary};

/// What the shell hands over on a completion keypress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompletionRequest {
    pub words: Vec<String>,
    pub cword: usize,
    pub current: String,
}

impl CompletionRequest {
    /// A cursor index past the last word means the cursor sits after a
    /// trailing space, so the word being completed is empty.
    pub fn new(words: Vec<String>, cword: usize) -> Self {
        let current = words.get(cword).cloned().unwrap_or_default();
        Self { words, cword, current }
    }

    /// Basename of the first word, e.g. `reddit_background` for
    /// `~/bin/reddit_background`.
    pub fn command(&self) -> Option<&str> {
        let first = self.words.first()?;
        Path::new(first).file_name().and_then(|name| name.to_str())
    }
}

#[derive(Default, Clone)]
pub struct CompletionRegistry {
    bindings: HashMap<String, Arc<dyn Resolver>>,
}

impl CompletionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds the configured command and its aliases to the built-in vocabulary.
    pub fn from_config(config: &Config) -> Self {
        let vocab: Arc<dyn Resolver> = Arc::new(Vocabulary::reddit_background());
        let mut registry = Self::new();
        for command in config.commands() {
            registry.register(command, Arc::clone(&vocab));
        }
        registry
    }

    /// Last registration under a name wins.
    pub fn register(&mut self, command: impl Into<String>, resolver: Arc<dyn Resolver>) {
        let command = command.into();
        if self.bindings.insert(command.clone(), resolver).is_some() {
            debug!("replaced completion binding for '{command}'");
        } else {
            debug!("registered completion binding for '{command}'");
        }
    }

    pub fn is_registered(&self, command: &str) -> bool {
        self.bindings.contains_key(command)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn commands(&self) -> Vec<&str> {
        let mut commands: Vec<&str> = self.bindings.keys().map(String::as_str).collect();
        commands.sort_unstable();
        commands
    }

    pub fn dispatch(&self, request: &CompletionRequest) -> Vec<OptionToken> {
        let Some(command) = request.command() else {
            debug!("empty completion request");
            return vec![];
        };

        match self.bindings.get(command) {
            Some(resolver) => resolver.resolve(&request.current),
            None => {
                debug!("no completion binding for '{command}'");
                vec![]
            }
        }
    }
}

impl std::fmt::Debug for CompletionRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionRegistry")
            .field("commands", &self.commands())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(words: &[&str], cword: usize) -> CompletionRequest {
        CompletionRequest::new(words.iter().map(|w| w.to_string()).collect(), cword)
    }

    fn texts(tokens: Vec<OptionToken>) -> Vec<&'static str> {
        tokens.into_iter().map(|t| t.as_str()).collect()
    }

    #[test]
    fn test_request_current_word() {
        let req = request(&["reddit_background", "--d"], 1);
        assert_eq!(req.current, "--d");
        assert_eq!(req.command(), Some("reddit_background"));
    }

    #[test]
    fn test_request_cursor_past_end_is_empty_word() {
        let req = request(&["reddit_background", "--what"], 2);
        assert_eq!(req.current, "");
    }

    #[test]
    fn test_request_command_uses_basename() {
        let req = request(&["/usr/local/bin/reddit_background", "-"], 1);
        assert_eq!(req.command(), Some("reddit_background"));
        let req = request(&["./reddit_background"], 1);
        assert_eq!(req.command(), Some("reddit_background"));
    }

    #[test]
    fn test_request_without_words() {
        let req = request(&[], 0);
        assert_eq!(req.command(), None);
        assert_eq!(req.current, "");
    }

    #[test]
    fn test_dispatch_bound_command() {
        let registry = CompletionRegistry::from_config(&Config::default());
        let result = registry.dispatch(&request(&["reddit_background", "--d"], 1));
        assert_eq!(texts(result), vec!["--desktop"]);
    }

    #[test]
    fn test_dispatch_unbound_command_is_empty() {
        let registry = CompletionRegistry::from_config(&Config::default());
        assert!(registry.dispatch(&request(&["otto", "--"], 1)).is_empty());
        assert!(registry.dispatch(&request(&[], 0)).is_empty());
    }

    #[test]
    fn test_dispatch_positional_word_is_empty() {
        let registry = CompletionRegistry::from_config(&Config::default());
        let req = request(&["reddit_background", "--desktop", "2", "Earth"], 3);
        assert!(registry.dispatch(&req).is_empty());
    }

    #[test]
    fn test_reregistration_replaces_binding() {
        let mut registry = CompletionRegistry::new();
        registry.register("reddit_background", Arc::new(Vocabulary::reddit_background()));
        registry.register(
            "reddit_background",
            Arc::new(|_: &str| vec![OptionToken::new("--only")]),
        );

        assert_eq!(registry.len(), 1);
        assert_eq!(registry.commands(), vec!["reddit_background"]);
        let result = registry.dispatch(&request(&["reddit_background", "--"], 1));
        assert_eq!(texts(result), vec!["--only"]);
    }

    #[test]
    fn test_aliases_share_vocabulary() {
        let config = Config {
            command: "reddit_background".to_string(),
            aliases: vec!["reddit-background".to_string(), "rbg".to_string()],
        };
        let registry = CompletionRegistry::from_config(&config);

        assert_eq!(registry.commands(), vec!["rbg", "reddit-background", "reddit_background"]);
        for command in registry.commands() {
            let result = registry.dispatch(&request(&[command, "-v"], 1));
            assert_eq!(texts(result), vec!["-v"]);
        }
    }

    #[test]
    fn test_empty_registry() {
        let registry = CompletionRegistry::new();
        assert!(registry.is_empty());
        assert!(!registry.is_registered("reddit_background"));
    }
}
