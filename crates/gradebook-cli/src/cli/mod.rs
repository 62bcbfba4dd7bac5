//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "gradebook",
    bin_name = "gradebook",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "Student grade analyzer",
    long_about = "Gradebook keeps an in-memory roster of students and their grades, \
                  and reports averages, extremes and the top performer.",
    after_help = "EXAMPLES:\n\
        \x20 gradebook                       # start the interactive menu\n\
        \x20 gradebook run --max-attempts 5\n\
        \x20 gradebook --output-format json run\n\
        \x20 gradebook completions bash > /usr/share/bash-completion/completions/gradebook",
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute; the interactive menu when omitted.
    #[command(subcommand)]
    pub command: Option<Commands>,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Start the interactive grade analyzer menu.
    #[command(
        visible_alias = "r",
        about = "Start the interactive menu",
        after_help = "MENU:\n\
            \x20 1. Add a new student\n\
            \x20 2. Add grades for a student\n\
            \x20 3. Generate a full report\n\
            \x20 4. Find the top student\n\
            \x20 5. Exit program"
    )]
    Run(RunArgs),

    /// Initialise a Gradebook configuration file.
    #[command(
        about = "Initialise configuration",
        after_help = "EXAMPLES:\n\
            \x20 gradebook init                  # default location\n\
            \x20 gradebook init --path ./gb.toml"
    )]
    Init(InitArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 gradebook completions bash > ~/.local/share/bash-completion/completions/gradebook\n\
            \x20 gradebook completions zsh  > ~/.zfunc/_gradebook\n\
            \x20 gradebook completions fish > ~/.config/fish/completions/gradebook.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Gradebook configuration.
    #[command(
        about = "Configuration inspection",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 gradebook config get input.max_attempts\n\
            \x20 gradebook config list\n\
            \x20 gradebook config path"
    )]
    Config(ConfigCommands),
}

// ── run ───────────────────────────────────────────────────────────────────────

/// Arguments for `gradebook run`.
#[derive(Debug, Clone, Default, Args)]
pub struct RunArgs {
    /// Override `input.max_attempts` for this session.
    #[arg(
        short = 'a',
        long = "max-attempts",
        value_name = "N",
        value_parser = clap::value_parser!(u32).range(1..),
        help = "Invalid entries allowed in a row before giving up"
    )]
    pub max_attempts: Option<u32>,
}

// ── init ──────────────────────────────────────────────────────────────────────

/// Arguments for `gradebook init`.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Write here instead of the platform config directory.
    #[arg(short = 'p', long = "path", value_name = "FILE", help = "Config file to create")]
    pub path: Option<PathBuf>,

    /// Overwrite an existing config file.
    #[arg(short = 'f', long = "force", help = "Overwrite existing configuration")]
    pub force: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `gradebook completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `gradebook config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `input.max_attempts`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the default configuration file.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn no_subcommand_means_interactive() {
        let cli = Cli::parse_from(["gradebook"]);
        assert!(cli.command.is_none());
    }

    #[test]
    fn parse_run_with_attempts() {
        let cli = Cli::parse_from(["gradebook", "run", "--max-attempts", "5"]);
        match cli.command {
            Some(Commands::Run(args)) => assert_eq!(args.max_attempts, Some(5)),
            other => panic!("expected Run command, got {other:?}"),
        }
    }

    #[test]
    fn zero_attempts_rejected() {
        assert!(Cli::try_parse_from(["gradebook", "run", "-a", "0"]).is_err());
    }

    #[test]
    fn run_alias() {
        let cli = Cli::parse_from(["gradebook", "r"]);
        assert!(matches!(cli.command, Some(Commands::Run(_))));
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = Cli::parse_from(["gradebook", "run", "--output-format", "json", "-vv"]);
        assert_eq!(cli.global.output_format, OutputFormat::Json);
        assert_eq!(cli.global.verbose, 2);
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["gradebook", "--quiet", "--verbose", "run"]);
        assert!(result.is_err());
    }
}
