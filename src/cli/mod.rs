//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - add: Add command arguments
//! - hosts: Hosts command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub mod add;
pub mod completions;
pub mod hosts;

pub use add::AddArgs;
pub use completions::CompletionsArgs;
pub use hosts::HostsArgs;

/// hostwire - message extensions for Teams app projects
///
/// Register message extensions in the app manifest and wire them into existing bots.
#[derive(Parser, Debug)]
#[command(
    name = "hostwire",
    author,
    version,
    color = clap::ColorChoice::Always,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Adds message extensions to Teams app projects",
    long_about = "hostwire registers message extensions in the Teams app manifest and wires \
                  them into the bot classes of a generated project (imports, a decorated field \
                  and the constructor statement), leaving the rest of the code untouched.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  hostwire add --name Weather                \x1b[90m# Wire into the existing bot\x1b[0m\n   \
                  hostwire add --name Weather --host new     \x1b[90m# Wire into a freshly generated bot\x1b[0m\n   \
                  hostwire add --name Weather --dry-run      \x1b[90m# Preview the changes\x1b[0m\n   \
                  hostwire hosts                             \x1b[90m# List bots and their ids\x1b[0m\n   \
                  hostwire check                             \x1b[90m# Validate the manifest schema\x1b[0m\n   \
                  hostwire versions                          \x1b[90m# List manifest versions\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Project directory (defaults to current directory)
    #[arg(long, short = 'w', global = true, env = "HOSTWIRE_WORKSPACE")]
    pub workspace: Option<PathBuf>,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a message extension to the project
    Add(AddArgs),

    /// List bot classes and their ids
    Hosts(HostsArgs),

    /// Validate the manifest against the supported versions
    Check,

    /// List supported manifest versions
    Versions,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing_check() {
        let cli = Cli::try_parse_from(["hostwire", "check"]).unwrap();
        assert!(matches!(cli.command, Commands::Check));
    }

    #[test]
    fn test_cli_parsing_versions() {
        let cli = Cli::try_parse_from(["hostwire", "versions"]).unwrap();
        assert!(matches!(cli.command, Commands::Versions));
    }

    #[test]
    fn test_cli_parsing_version() {
        let cli = Cli::try_parse_from(["hostwire", "version"]).unwrap();
        assert!(matches!(cli.command, Commands::Version));
    }

    #[test]
    fn test_cli_global_options() {
        let cli =
            Cli::try_parse_from(["hostwire", "-v", "-w", "/tmp/project", "hosts"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_global_options_after_subcommand() {
        let cli = Cli::try_parse_from(["hostwire", "check", "--workspace", "/tmp/project"])
            .unwrap();
        assert_eq!(cli.workspace, Some(PathBuf::from("/tmp/project")));
    }

    #[test]
    fn test_cli_parsing_completions() {
        let cli = Cli::try_parse_from(["hostwire", "completions", "bash"]).unwrap();
        match cli.command {
            Commands::Completions(args) => {
                assert_eq!(args.shell, "bash");
            }
            _ => panic!("Expected Completions command"),
        }
    }

    #[test]
    fn test_cli_requires_subcommand() {
        assert!(Cli::try_parse_from(["hostwire"]).is_err());
    }
}
