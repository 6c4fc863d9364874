//! run command - Execute a configured hook
//!
//! This is the runner entry point the installed wrappers call:
//! `hookshot run <hook> [args...]`. The wrapper contract requires a
//! missing hook name to exit 1 with a logged error (clap's usage error
//! would exit 2), hence the optional argument and the explicit bail.

use anyhow::{bail, Result};

use crate::core::hooks::HookName;
use crate::engine::{Context, HookExecutor};

/// Run the definition for `hook`, forwarding `args`, and return its
/// exit code for the process boundary.
pub fn run_hook(ctx: &Context, hook: Option<&str>, args: &[String]) -> Result<i32> {
    let Some(hook) = hook else {
        bail!("hook name not provided");
    };
    let hook: HookName = hook.parse()?;

    let lifecycle = super::lifecycle(ctx)?;
    let store = lifecycle.store();
    let executor = HookExecutor::new(&store, ctx.verbosity());

    Ok(executor.run(hook, args))
}
