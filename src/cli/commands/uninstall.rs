//! uninstall command - Remove hookshot-managed wrappers

use anyhow::Result;

use crate::engine::Context;
use crate::ui::{output, prompts};

/// Remove every hookshot-owned wrapper from `.git/hooks`.
///
/// Prompts for confirmation unless `--yes` was given; in non-interactive
/// mode the prompt fails instead of assuming consent. Hook definitions
/// under `.hookshot/` are left untouched so a later `install` restores
/// the previous behavior.
pub fn uninstall(ctx: &Context, yes: bool) -> Result<()> {
    let verbosity = ctx.verbosity();

    if !yes {
        let confirmed = prompts::confirm(
            "Remove hookshot-managed hooks from .git/hooks?",
            false,
            ctx.interactive,
        )?;
        if !confirmed {
            output::print("Aborted.", verbosity);
            return Ok(());
        }
    }

    let lifecycle = super::lifecycle(ctx)?;
    let removed = lifecycle.uninstall()?;

    output::success(format!("Removed {removed} hookshot hook(s)"), verbosity);
    Ok(())
}
