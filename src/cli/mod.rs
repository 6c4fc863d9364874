//! cli
//!
//! Command-line interface layer for Hookshot.
//!
//! # Responsibilities
//!
//! - Parse command-line arguments and global flags
//! - Build the execution context (flags plus [`DEBUG_ENV`], read once)
//! - Delegate to command handlers
//!
//! # Architecture
//!
//! The CLI layer is thin. It parses arguments via clap and dispatches to
//! handlers that compose [`crate::engine`] operations; all hook storage
//! and wrapper generation lives below this layer.

pub mod args;
pub mod commands;

pub use args::{Cli, Shell};

use crate::engine::Context;
use anyhow::Result;

/// Environment variable that enables debug logging (same effect as
/// `--debug`). Any value other than `1` - including absence - leaves
/// debug logging off.
pub const DEBUG_ENV: &str = "HOOKSHOT_DEBUG";

/// Run the CLI application.
///
/// This is the main entry point called from `main.rs`. Returns the
/// process exit code: 0 on success, and for `run` the hook's own exit
/// code so git sees it unchanged.
pub fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // The environment toggle is read exactly once, here; the context is
    // immutable from this point on.
    let env_debug = std::env::var(DEBUG_ENV).map(|v| v == "1").unwrap_or(false);

    let ctx = Context {
        path: cli.path.clone(),
        debug: cli.debug || env_debug,
        quiet: cli.quiet,
        interactive: cli.interactive(),
    };

    commands::dispatch(cli.command, &ctx)
}
