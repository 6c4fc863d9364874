//! engine::lifecycle
//!
//! Composes the store and wrapper generator into init / install /
//! uninstall, and enforces repository preconditions.
//!
//! # Preconditions
//!
//! - `init` and `install` require a git repository (a `.git` directory).
//! - `uninstall` requires the `.git/hooks` directory to exist.
//! - Precondition failures are reported before any file is written.
//!
//! # Idempotence
//!
//! Re-running `init` or `install` on an already-initialized project is
//! safe: directory creation is a no-op and wrappers are overwritten with
//! byte-identical content. Re-running `uninstall` succeeds with a
//! removal count of zero.

use std::fs;

use thiserror::Error;

use crate::core::hooks::HookName;
use crate::core::paths::ProjectPaths;
use crate::core::store::{HookStore, StoreError};
use crate::core::wrapper::{self, WrapperError};
use crate::ui::output::{self, Verbosity};

/// Errors from lifecycle operations.
#[derive(Debug, Error)]
pub enum LifecycleError {
    /// `.git` is missing or not a directory; nothing to install into.
    #[error("not a git repository; run 'git init' first")]
    NotAGitRepo,

    /// `.git/hooks` is missing; nothing to uninstall from.
    #[error("git hooks directory not found")]
    HooksDirMissing,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Wrapper(#[from] WrapperError),
}

/// Lifecycle operations for one project.
pub struct Lifecycle {
    paths: ProjectPaths,
    verbosity: Verbosity,
}

impl Lifecycle {
    pub fn new(paths: ProjectPaths, verbosity: Verbosity) -> Self {
        Self { paths, verbosity }
    }

    /// The project paths this lifecycle operates on.
    pub fn paths(&self) -> &ProjectPaths {
        &self.paths
    }

    /// A definition store bound to this project.
    pub fn store(&self) -> HookStore<'_> {
        HookStore::new(&self.paths, self.verbosity)
    }

    /// Whether the project root is a git repository.
    pub fn is_git_repository(&self) -> bool {
        self.paths.is_git_repository()
    }

    /// Initialize Hookshot: create the config directory and install
    /// wrappers for every supported hook.
    pub fn init(&self) -> Result<(), LifecycleError> {
        if !self.is_git_repository() {
            return Err(LifecycleError::NotAGitRepo);
        }

        self.store().ensure_directory()?;
        output::debug("config directory ready", self.verbosity);

        wrapper::install_wrappers(&self.paths, self.verbosity)?;
        Ok(())
    }

    /// Store (or replace) the command list for `hook`.
    ///
    /// The store enforces the initialized-directory precondition.
    pub fn add_hook(&self, hook: HookName, commands: &[String]) -> Result<(), LifecycleError> {
        self.store().write_definition(hook, commands)?;
        Ok(())
    }

    /// Re-install wrappers, for first-time setup after a fresh checkout
    /// or to repair a modified hooks directory.
    pub fn install(&self) -> Result<(), LifecycleError> {
        if !self.is_git_repository() {
            return Err(LifecycleError::NotAGitRepo);
        }

        wrapper::install_wrappers(&self.paths, self.verbosity)?;
        Ok(())
    }

    /// Remove every wrapper Hookshot owns from `.git/hooks`.
    ///
    /// Ownership is decided by the generated-content marker; files
    /// without it are never touched. Returns the number of wrappers
    /// removed; zero is still success.
    pub fn uninstall(&self) -> Result<usize, LifecycleError> {
        if !self.paths.git_hooks_dir().is_dir() {
            return Err(LifecycleError::HooksDirMissing);
        }

        let mut removed = 0;
        for hook in HookName::ALL {
            let path = self.paths.wrapper_path(hook);
            if !path.exists() {
                continue;
            }

            // Unreadable files (e.g. binaries) cannot carry the marker;
            // skip them like any other foreign hook.
            let content = match fs::read_to_string(&path) {
                Ok(content) => content,
                Err(err) => {
                    output::warn(
                        format!("could not read {hook} hook, leaving it in place: {err}"),
                        self.verbosity,
                    );
                    continue;
                }
            };

            if !content.contains(wrapper::MARKER) {
                output::debug(
                    format!("{hook} hook is not managed by hookshot, skipping"),
                    self.verbosity,
                );
                continue;
            }

            match fs::remove_file(&path) {
                Ok(()) => {
                    output::debug(format!("removed wrapper: {hook}"), self.verbosity);
                    removed += 1;
                }
                Err(err) => {
                    output::warn(
                        format!("could not remove {hook} wrapper: {err}"),
                        self.verbosity,
                    );
                }
            }
        }

        Ok(removed)
    }
}
