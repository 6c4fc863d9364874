//! cli::commands
//!
//! Command dispatch and handlers.
//!
//! # Architecture
//!
//! Each command handler:
//! 1. Validates command-specific arguments
//! 2. Calls the engine to execute the operation
//! 3. Formats and displays output
//!
//! Handlers do NOT touch the filesystem directly; storage and wrapper
//! generation live in [`crate::core`] and [`crate::engine`].

mod add;
mod completion;
mod init;
mod install;
mod list_hooks;
mod run_hook;
mod uninstall;

// Re-export command functions for testing and direct invocation
pub use add::add;
pub use completion::completion;
pub use init::init;
pub use install::install;
pub use list_hooks::list_hooks;
pub use run_hook::run_hook;
pub use uninstall::uninstall;

use anyhow::{Context as _, Result};

use crate::cli::args::Command;
use crate::core::paths::ProjectPaths;
use crate::engine::{Context, Lifecycle};

/// Dispatch a command to its handler.
///
/// Returns the process exit code. Every handler except `run` maps
/// success to 0; `run` forwards the hook's own exit code.
pub fn dispatch(command: Command, ctx: &Context) -> Result<i32> {
    match command {
        Command::Init => {
            init(ctx)?;
            Ok(0)
        }
        Command::Add { hook, commands } => {
            add(ctx, &hook, &commands)?;
            Ok(0)
        }
        Command::Install => {
            install(ctx)?;
            Ok(0)
        }
        Command::Uninstall { yes } => {
            uninstall(ctx, yes)?;
            Ok(0)
        }
        Command::ListHooks => {
            list_hooks(ctx)?;
            Ok(0)
        }
        Command::Run { hook, args } => run_hook(ctx, hook.as_deref(), &args),
        Command::Completion { shell } => {
            completion(shell)?;
            Ok(0)
        }
    }
}

/// Build the lifecycle for the project the CLI was pointed at.
pub(crate) fn lifecycle(ctx: &Context) -> Result<Lifecycle> {
    let paths = ProjectPaths::resolve(ctx.path.as_deref())
        .context("failed to resolve project directory")?;
    Ok(Lifecycle::new(paths, ctx.verbosity()))
}
