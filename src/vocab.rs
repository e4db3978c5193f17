//! Option-flag vocabulary and prefix resolution

use log::debug;
use serde::Serialize;
use std::collections::HashSet;
use std::fmt;

use crate::error::CompletionError;

/// Flags recognized by `reddit_background`, in the order they are offered.
///
/// Must stay in sync with the host's option parser; see [`crate::host`].
pub const REDDIT_BACKGROUND_FLAGS: &[&str] = &[
    "--background-setting",
    "--image-count",
    "--desktop",
    "--what",
    "-v",
    "--version",
    "-h",
    "--help",
];

/// A single recognized flag, long or short form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct OptionToken(&'static str);

impl OptionToken {
    pub const fn new(token: &'static str) -> Self {
        Self(token)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl AsRef<str> for OptionToken {
    fn as_ref(&self) -> &str {
        self.0
    }
}

impl fmt::Display for OptionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

impl PartialEq<&str> for OptionToken {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// Anything that can turn the word under the cursor into candidates.
pub trait Resolver: Send + Sync {
    fn resolve(&self, current: &str) -> Vec<OptionToken>;
}

impl<F> Resolver for F
where
    F: Fn(&str) -> Vec<OptionToken> + Send + Sync,
{
    fn resolve(&self, current: &str) -> Vec<OptionToken> {
        self(current)
    }
}

/// Fixed, ordered, duplicate-free set of option tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vocabulary {
    tokens: Vec<OptionToken>,
}

impl Vocabulary {
    pub fn new(tokens: &[&'static str]) -> Result<Self, CompletionError> {
        let mut seen = HashSet::new();
        for token in tokens {
            if !seen.insert(*token) {
                return Err(CompletionError::DuplicateToken {
                    token: token.to_string(),
                });
            }
        }

        Ok(Self {
            tokens: tokens.iter().copied().map(OptionToken::new).collect(),
        })
    }

    /// The vocabulary shipped for `reddit_background`.
    pub fn reddit_background() -> Self {
        Self {
            tokens: REDDIT_BACKGROUND_FLAGS.iter().copied().map(OptionToken::new).collect(),
        }
    }

    pub fn tokens(&self) -> &[OptionToken] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t.as_str() == token)
    }

    /// Tokens that have `current` as a literal, case-sensitive prefix.
    ///
    /// Only flags are completed: a non-empty word that does not start with
    /// `-` yields nothing. Declared order is preserved.
    pub fn resolve(&self, current: &str) -> Vec<OptionToken> {
        if !current.is_empty() && !current.starts_with('-') {
            debug!("not completing positional word '{current}'");
            return vec![];
        }

        let matches: Vec<OptionToken> = self
            .tokens
            .iter()
            .filter(|token| token.as_str().starts_with(current))
            .copied()
            .collect();

        debug!("resolved '{}' to {} candidate(s)", current, matches.len());
        matches
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::reddit_background()
    }
}

impl Resolver for Vocabulary {
    fn resolve(&self, current: &str) -> Vec<OptionToken> {
        Vocabulary::resolve(self, current)
    }
}
