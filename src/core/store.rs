//! core::store
//!
//! Per-hook command definitions stored under `.hookshot/`.
//!
//! # Definition Format
//!
//! A definition is a POSIX shell script: shebang, `set -e`, an error trap
//! that prints `<hook> checks failed!` and exits 1, then the user's
//! commands verbatim, one per line, in the order given. Commands are
//! opaque strings; Hookshot embeds them literally and never quotes,
//! escapes, or validates them.
//!
//! # Semantics
//!
//! - Writing a definition is a whole-file overwrite; repeated `add` calls
//!   replace, never append.
//! - A missing definition is not an error. Reads report absence as `None`
//!   so partial adoption (only some hooks configured) stays cheap.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::hooks::HookName;
use crate::core::paths::{ProjectPaths, CONFIG_DIR_NAME};
use crate::ui::output::{self, Verbosity};

/// Errors from the hook definition store.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The config directory has not been created yet.
    #[error("{} directory not found; run 'hookshot init' first", CONFIG_DIR_NAME)]
    NotInitialized,

    /// Creating the config directory failed.
    #[error("failed to create {} directory: {0}", CONFIG_DIR_NAME)]
    CreateDir(#[source] io::Error),

    /// Writing a definition failed.
    #[error("failed to write {hook} definition: {source}")]
    Write {
        hook: HookName,
        #[source]
        source: io::Error,
    },

    /// Reading a definition failed for a reason other than absence.
    #[error("failed to read {hook} definition: {source}")]
    Read {
        hook: HookName,
        #[source]
        source: io::Error,
    },
}

/// One row of `list-hooks` output: a supported hook and whether a
/// definition currently exists on disk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HookStatus {
    pub name: HookName,
    pub defined: bool,
}

/// Reads and writes hook definitions for one project.
pub struct HookStore<'a> {
    paths: &'a ProjectPaths,
    verbosity: Verbosity,
}

impl<'a> HookStore<'a> {
    pub fn new(paths: &'a ProjectPaths, verbosity: Verbosity) -> Self {
        Self { paths, verbosity }
    }

    /// The project paths this store operates on.
    pub fn paths(&self) -> &ProjectPaths {
        self.paths
    }

    /// Create the config directory if absent. Idempotent.
    pub fn ensure_directory(&self) -> Result<(), StoreError> {
        fs::create_dir_all(self.paths.config_dir()).map_err(StoreError::CreateDir)
    }

    /// Write (or fully replace) the definition for `hook`.
    ///
    /// Requires the config directory to exist; callers that have not
    /// initialized the project get [`StoreError::NotInitialized`] before
    /// anything is written. The file is marked executable so the installed
    /// wrapper can exec it directly.
    pub fn write_definition(&self, hook: HookName, commands: &[String]) -> Result<(), StoreError> {
        if !self.paths.config_dir().is_dir() {
            return Err(StoreError::NotInitialized);
        }

        let path = self.paths.definition_path(hook);
        let script = definition_script(hook, commands);
        fs::write(&path, script).map_err(|source| StoreError::Write { hook, source })?;
        set_executable(&path).map_err(|source| StoreError::Write { hook, source })?;

        output::debug(
            format!("wrote {} definition ({} commands)", hook, commands.len()),
            self.verbosity,
        );
        Ok(())
    }

    /// Read the stored definition for `hook`; `None` if absent.
    pub fn read_definition(&self, hook: HookName) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.paths.definition_path(hook)) {
            Ok(content) => Ok(Some(content)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StoreError::Read { hook, source }),
        }
    }

    /// Path of the stored definition for `hook`, if one exists on disk.
    pub fn existing_definition(&self, hook: HookName) -> Option<PathBuf> {
        let path = self.paths.definition_path(hook);
        path.is_file().then_some(path)
    }

    /// All supported hooks in fixed order, each annotated with whether a
    /// definition currently exists.
    pub fn statuses(&self) -> Vec<HookStatus> {
        HookName::ALL
            .iter()
            .map(|&name| HookStatus {
                name,
                defined: self.paths.definition_path(name).is_file(),
            })
            .collect()
    }
}

/// Render the definition script for `hook`.
///
/// `set -e` aborts on the first failing command; the ERR trap turns that
/// abort into a hook-specific message with exit code 1.
fn definition_script(hook: HookName, commands: &[String]) -> String {
    let mut script = format!(
        "#!/bin/sh\nset -e\n\ntrap 'echo \"{hook} checks failed!\"; exit 1' ERR\n\n"
    );
    for command in commands {
        script.push_str(command);
        script.push('\n');
    }
    script
}

#[cfg(unix)]
fn set_executable(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> io::Result<()> {
    Ok(())
}
