//! list-hooks command - Show supported hooks and their status

use anyhow::Result;

use crate::core::paths::CONFIG_DIR_NAME;
use crate::engine::Context;
use crate::ui::output;

/// List every supported hook, marking the ones with a stored definition.
pub fn list_hooks(ctx: &Context) -> Result<()> {
    let lifecycle = super::lifecycle(ctx)?;
    let verbosity = ctx.verbosity();

    output::print("Supported git hooks:", verbosity);
    for status in lifecycle.store().statuses() {
        let mark = if status.defined { "+" } else { "-" };
        output::print(format!("  {mark} {}", status.name), verbosity);
    }
    output::print(
        format!("\n+ = configured in {CONFIG_DIR_NAME}/\n- = not configured"),
        verbosity,
    );
    Ok(())
}
