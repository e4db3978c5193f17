//! Option declaration of the `reddit_background` host tool.
//!
//! The completion vocabulary is a second copy of these flags. Keeping the
//! host's parser described here lets the two be compared in tests and via
//! `reddit-background-complete check`.

use clap::{ArgAction, CommandFactory};

use crate::vocab::Vocabulary;

/// Set desktop background image from reddit
#[derive(Debug, clap::Parser)]
#[command(
    name = "reddit_background",
    version = "2.1beta",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct HostArgs {
    /// A list of subreddits
    #[arg(value_name = "SUBREDDITS")]
    pub subreddits: Vec<String>,

    /// Set background for this desktop (default: sets background for all desktops)
    #[arg(long, default_value_t = 0)]
    pub desktop: u32,

    /// Log to stderr (use -vv for even more info)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,

    /// Number of images to download (this only downloads the images, it doesn't set the background)
    #[arg(long)]
    pub image_count: Option<u32>,

    /// Directory to use to store images
    #[arg(long)]
    pub download_directory: Option<String>,

    /// Display what images are downloaded for each desktop
    #[arg(long)]
    pub what: bool,

    /// Imprint the title in images at this position, horizontal:vertical (ex: bottom:left)
    #[arg(long)]
    pub imprint_position: Option<String>,

    /// Box options for title imprinting, width:margin:padding:transparency
    #[arg(long)]
    pub imprint_size: Option<String>,

    /// Font options for title imprinting, filename:size:color
    #[arg(long)]
    pub imprint_font: Option<String>,

    /// Set the desktop background setting (see the feh man page for options)
    #[arg(long)]
    pub background_setting: Option<String>,

    /// Print version
    #[arg(long, action = ArgAction::Version)]
    pub version: Option<bool>,

    /// Print help
    #[arg(short, long, action = ArgAction::Help)]
    pub help: Option<bool>,
}

/// Every flag spelling the host accepts, short forms first per argument.
pub fn host_flags() -> Vec<String> {
    let cmd = HostArgs::command();
    let mut flags = Vec::new();
    for arg in cmd.get_arguments() {
        if let Some(short) = arg.get_short() {
            flags.push(format!("-{short}"));
        }
        if let Some(long) = arg.get_long() {
            flags.push(format!("--{long}"));
        }
    }
    flags
}

/// Vocabulary tokens that the host's option parser would reject.
pub fn unknown_tokens(vocab: &Vocabulary) -> Vec<String> {
    let flags = host_flags();
    vocab
        .tokens()
        .iter()
        .filter(|token| !flags.iter().any(|flag| flag == token.as_str()))
        .map(|token| token.to_string())
        .collect()
}
