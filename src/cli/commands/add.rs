//! add command - Store a hook's command list

use anyhow::Result;

use crate::core::hooks::HookName;
use crate::engine::Context;
use crate::ui::output;

/// Add (or replace) the definition for `hook`.
///
/// The name is validated here, at the boundary, so an unsupported hook
/// fails before any file is created.
pub fn add(ctx: &Context, hook: &str, commands: &[String]) -> Result<()> {
    let hook: HookName = hook.parse()?;

    let lifecycle = super::lifecycle(ctx)?;
    lifecycle.add_hook(hook, commands)?;

    output::success(
        format!("Added {hook} hook with {} command(s)", commands.len()),
        ctx.verbosity(),
    );
    Ok(())
}
