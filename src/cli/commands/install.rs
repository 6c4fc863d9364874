//! install command - Re-install wrapper scripts
//!
//! Useful after a fresh clone (`.git/hooks` starts empty) and as a
//! repair path when wrappers were deleted or edited.

use anyhow::Result;

use crate::engine::Context;
use crate::ui::output;

/// Install (or reinstall) the dispatcher wrappers into `.git/hooks`.
pub fn install(ctx: &Context) -> Result<()> {
    let lifecycle = super::lifecycle(ctx)?;
    lifecycle.install()?;

    output::success("Git hooks installed successfully", ctx.verbosity());
    Ok(())
}
