//! cli::args
//!
//! Command-line argument definitions using clap derive.
//!
//! # Global Flags
//!
//! These flags are available on all commands:
//! - `--help` / `-h`: Show help
//! - `--version`: Show version
//! - `--path <DIR>`: Run against that project directory
//! - `--debug`: Enable debug logging
//! - `--quiet` / `-q`: Minimal output; implies --no-interactive
//! - `--no-interactive`: Disable prompts

use clap::{Parser, Subcommand};
use std::io::IsTerminal;
use std::path::PathBuf;

/// Hookshot - Git hooks made easy
#[derive(Parser, Debug)]
#[command(name = "hookshot")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "\
EXAMPLES:
    # Set up .hookshot/ and install wrappers into .git/hooks
    hookshot init

    # Run formatting and lints before every commit
    hookshot add pre-commit \"cargo fmt --check\" \"cargo clippy -- -D warnings\"

    # See which hooks are configured
    hookshot list-hooks

    # Re-install wrappers after a fresh clone
    hookshot install")]
pub struct Cli {
    /// Run against this project directory instead of the current one
    #[arg(long, global = true, value_name = "DIR")]
    pub path: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    /// Minimal output; implies --no-interactive
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable interactive prompts
    #[arg(long, global = true)]
    pub no_interactive: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Parser::parse()
    }

    /// Determine if interactive mode is enabled.
    ///
    /// Interactive unless `--no-interactive` or `--quiet` was given or
    /// stdin is not a TTY (hooks invoked by git often run without one).
    pub fn interactive(&self) -> bool {
        if self.no_interactive || self.quiet {
            false
        } else {
            std::io::stdin().is_terminal()
        }
    }
}

/// Available commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize hookshot in a git repository
    #[command(long_about = "Initialize hookshot in a git repository.\n\n\
        Creates the .hookshot/ configuration directory and installs a \
        dispatcher wrapper for every supported hook into .git/hooks/. \
        Safe to re-run: the directory is kept and wrappers are rewritten \
        in place.")]
    Init,

    /// Add or replace a hook's command list
    #[command(long_about = "Add or replace a hook's command list.\n\n\
        Stores the given commands, in order, as the definition for the \
        hook. Running the same command again replaces the definition \
        entirely. The commands run with fail-fast semantics: the first \
        failure aborts the hook.")]
    Add {
        /// Hook to configure (e.g. pre-commit)
        #[arg(value_name = "HOOK")]
        hook: String,

        /// Commands to run, in order
        #[arg(value_name = "COMMAND", required = true)]
        commands: Vec<String>,
    },

    /// Install wrapper scripts into .git/hooks (e.g. after cloning)
    Install,

    /// Remove hookshot-managed wrappers from .git/hooks
    Uninstall {
        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },

    /// List supported hooks and whether each is configured
    ListHooks,

    /// Run a configured hook (invoked by the installed wrappers)
    Run {
        /// Hook name passed by the wrapper
        #[arg(value_name = "HOOK")]
        hook: Option<String>,

        /// Arguments forwarded from git
        #[arg(value_name = "ARG", trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Generate shell completion scripts
    #[command(after_help = "\
EXAMPLES:
    # Bash
    hookshot completion bash > ~/.local/share/bash-completion/completions/hookshot

    # Zsh
    hookshot completion zsh > ~/.zfunc/_hookshot

    # Fish
    hookshot completion fish > ~/.config/fish/completions/hookshot.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Supported shells for completion
#[derive(clap::ValueEnum, Debug, Clone, Copy)]
#[allow(clippy::enum_variant_names)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn quiet_disables_interactive() {
        let cli = Cli::try_parse_from(["hookshot", "--quiet", "init"]).unwrap();
        assert!(!cli.interactive());
    }

    #[test]
    fn add_requires_at_least_one_command() {
        assert!(Cli::try_parse_from(["hookshot", "add", "pre-commit"]).is_err());
    }

    #[test]
    fn run_accepts_hyphenated_args() {
        let cli =
            Cli::try_parse_from(["hookshot", "run", "pre-push", "origin", "--tags"]).unwrap();
        match cli.command {
            Command::Run { hook, args } => {
                assert_eq!(hook.as_deref(), Some("pre-push"));
                assert_eq!(args, ["origin", "--tags"]);
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn run_allows_missing_hook_name() {
        let cli = Cli::try_parse_from(["hookshot", "run"]).unwrap();
        assert!(matches!(cli.command, Command::Run { hook: None, .. }));
    }
}
