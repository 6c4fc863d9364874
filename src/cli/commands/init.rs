//! init command - Initialize hookshot in this repository

use anyhow::Result;

use crate::core::paths::CONFIG_DIR_NAME;
use crate::engine::Context;
use crate::ui::output;

/// Initialize hookshot: create the config directory and install the
/// dispatcher wrappers.
pub fn init(ctx: &Context) -> Result<()> {
    let lifecycle = super::lifecycle(ctx)?;
    lifecycle.init()?;

    let verbosity = ctx.verbosity();
    output::success("hookshot initialized successfully", verbosity);
    output::print("\nNext steps:", verbosity);
    output::print(
        format!("  1. Add hook scripts to the {CONFIG_DIR_NAME}/ directory"),
        verbosity,
    );
    output::print(
        "  2. Or use 'hookshot add <hook> <command>...' to add hooks via the CLI",
        verbosity,
    );
    output::print(
        "\nExample:\n  hookshot add pre-commit \"cargo fmt --check\" \"cargo test\"",
        verbosity,
    );
    Ok(())
}
