//! engine
//!
//! Hook execution and lifecycle orchestration.
//!
//! # Architecture
//!
//! The engine composes the core building blocks into the operations the
//! CLI exposes:
//!
//! - [`lifecycle`] - init / install / uninstall against one project
//! - [`exec`] - runs one configured hook as a child process
//!
//! # Invariants
//!
//! - The [`Context`] is built once from CLI flags (plus the single debug
//!   environment variable, read at startup) and is immutable afterwards;
//!   nothing below the CLI layer reads the environment or global state.
//! - Repository preconditions are checked before any file is written.

pub mod exec;
pub mod lifecycle;

pub use exec::HookExecutor;
pub use lifecycle::{Lifecycle, LifecycleError};

use std::path::PathBuf;

use crate::ui::output::Verbosity;

/// Execution context for commands.
///
/// Contains global settings derived from CLI flags that affect command
/// behavior.
#[derive(Debug, Clone)]
pub struct Context {
    /// Project directory override.
    pub path: Option<PathBuf>,
    /// Debug logging enabled.
    pub debug: bool,
    /// Quiet mode (minimal output).
    pub quiet: bool,
    /// Interactive mode enabled.
    pub interactive: bool,
}

impl Context {
    /// Output verbosity implied by the quiet/debug flags.
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.debug)
    }
}

impl Default for Context {
    fn default() -> Self {
        Self {
            path: None,
            debug: false,
            quiet: false,
            interactive: false,
        }
    }
}
