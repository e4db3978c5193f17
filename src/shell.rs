//! Registration scripts for interactive shells
//!
//! Each script defines a function that forwards the command line to
//! `<program> complete` and installs it as the completion callback for the
//! configured command names. The binding statement is guarded so that a
//! shell without a completion hook simply skips it.

use log::debug;
use std::env;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::error::CompletionError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
}

impl Shell {
    /// Shell named by `$SHELL`, if it is one we can register with.
    pub fn detect() -> Option<Self> {
        let shell = env::var("SHELL").ok()?;
        Self::from_path(&shell)
    }

    pub fn from_path(path: &str) -> Option<Self> {
        let name = Path::new(path).file_name()?.to_str()?;
        match name.parse() {
            Ok(shell) => Some(shell),
            Err(e) => {
                debug!("{e}");
                None
            }
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
        }
    }

    /// Renders the one-time registration for `commands`, calling back into
    /// `program` on each completion request.
    pub fn registration_script(&self, program: &str, commands: &[&str]) -> String {
        if commands.is_empty() {
            return String::new();
        }
        let func = function_name(commands[0]);
        match self {
            Shell::Bash => bash_script(&func, program, commands),
            Shell::Zsh => zsh_script(&func, program, commands),
            Shell::Fish => fish_script(&func, program, commands),
        }
    }
}

impl fmt::Display for Shell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Shell {
    type Err = CompletionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bash" => Ok(Shell::Bash),
            "zsh" => Ok(Shell::Zsh),
            "fish" => Ok(Shell::Fish),
            _ => Err(CompletionError::UnsupportedShell { name: s.to_string() }),
        }
    }
}

/// `reddit_background` -> `_reddit_background`, `reddit-background` -> `_reddit_background`
fn function_name(command: &str) -> String {
    let body: String = command
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .collect();
    format!("_{body}")
}

fn bash_script(func: &str, program: &str, commands: &[&str]) -> String {
    let mut script = format!("{func}() {{\n");
    script.push_str("    local IFS=$'\\n'\n");
    script.push_str(&format!(
        "    COMPREPLY=( $({program} complete --cword \"${{COMP_CWORD}}\" -- \"${{COMP_WORDS[@]}}\" 2>/dev/null) )\n"
    ));
    script.push_str("    return 0\n");
    script.push_str("}\n");
    script.push_str("if type complete >/dev/null 2>&1; then\n");
    script.push_str(&format!("    complete -F {func} {}\n", commands.join(" ")));
    script.push_str("fi\n");

    script
}

fn zsh_script(func: &str, program: &str, commands: &[&str]) -> String {
    let mut script = format!("#compdef {}\n\n", commands.join(" "));
    script.push_str(&format!("{func}() {{\n"));
    script.push_str("    local -a candidates\n");
    script.push_str(&format!(
        "    candidates=(\"${{(@f)$({program} complete --cword $((CURRENT - 1)) -- \"${{words[@]}}\" 2>/dev/null)}}\")\n"
    ));
    script.push_str("    (( ${#candidates[@]} )) && [[ -n \"${candidates[1]}\" ]] && compadd -a candidates\n");
    script.push_str("    return 0\n");
    script.push_str("}\n\n");
    script.push_str("if (( $+functions[compdef] )); then\n");
    script.push_str(&format!("    compdef {func} {}\n", commands.join(" ")));
    script.push_str("fi\n");

    script
}

fn fish_script(func: &str, program: &str, commands: &[&str]) -> String {
    let func = format!("_{func}_complete");
    let mut script = format!("function {func}\n");
    script.push_str("    set -l tokens (commandline -opc) (commandline -ct)\n");
    script.push_str(&format!(
        "    {program} complete --cword (math (count $tokens) - 1) -- $tokens 2>/dev/null\n"
    ));
    script.push_str("end\n\n");
    for command in commands {
        script.push_str(&format!("complete -c {command} -f -a '({func})'\n"));
    }

    script
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROGRAM: &str = "reddit-background-complete";

    #[test]
    fn test_from_path() {
        assert_eq!(Shell::from_path("/bin/bash"), Some(Shell::Bash));
        assert_eq!(Shell::from_path("/usr/local/bin/zsh"), Some(Shell::Zsh));
        assert_eq!(Shell::from_path("fish"), Some(Shell::Fish));
        assert_eq!(Shell::from_path("/bin/tcsh"), None);
        assert_eq!(Shell::from_path(""), None);
    }

    #[test]
    fn test_from_str_unsupported() {
        assert_eq!(
            "nu".parse::<Shell>(),
            Err(CompletionError::UnsupportedShell { name: "nu".to_string() })
        );
    }

    #[test]
    fn test_function_name() {
        assert_eq!(function_name("reddit_background"), "_reddit_background");
        assert_eq!(function_name("reddit-background"), "_reddit_background");
    }

    #[test]
    fn test_bash_registration() {
        let script = Shell::Bash.registration_script(PROGRAM, &["reddit_background"]);
        assert!(script.starts_with("_reddit_background() {\n"));
        assert!(script.contains("reddit-background-complete complete --cword \"${COMP_CWORD}\" -- \"${COMP_WORDS[@]}\""));
        assert!(script.contains("    complete -F _reddit_background reddit_background\n"));
        assert!(script.contains("if type complete >/dev/null 2>&1; then"));
    }

    #[test]
    fn test_bash_registration_with_aliases() {
        let script = Shell::Bash.registration_script(PROGRAM, &["reddit_background", "rbg"]);
        assert!(script.contains("complete -F _reddit_background reddit_background rbg\n"));
        assert_eq!(script.matches("complete -F").count(), 1);
    }

    #[test]
    fn test_zsh_registration() {
        let script = Shell::Zsh.registration_script(PROGRAM, &["reddit_background"]);
        assert!(script.starts_with("#compdef reddit_background\n"));
        assert!(script.contains("--cword $((CURRENT - 1))"));
        assert!(script.contains("if (( $+functions[compdef] )); then\n    compdef _reddit_background reddit_background\nfi\n"));
    }

    #[test]
    fn test_fish_registration() {
        let script = Shell::Fish.registration_script(PROGRAM, &["reddit_background", "rbg"]);
        assert!(script.starts_with("function __reddit_background_complete\n"));
        assert!(script.contains("complete -c reddit_background -f -a '(__reddit_background_complete)'\n"));
        assert!(script.contains("complete -c rbg -f -a '(__reddit_background_complete)'\n"));
    }

    #[test]
    fn test_no_commands_no_script() {
        for shell in [Shell::Bash, Shell::Zsh, Shell::Fish] {
            assert!(shell.registration_script(PROGRAM, &[]).is_empty());
        }
    }
}
