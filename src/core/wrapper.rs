//! core::wrapper
//!
//! Dispatcher scripts installed into `.git/hooks/`.
//!
//! # Dispatch
//!
//! The dispatch logic lives in the installed script itself rather than
//! always shelling out to the runner: a project can author
//! `.hookshot/<hook>` files that run without the hookshot binary on PATH,
//! while `hookshot run` remains the default path for hooks configured
//! through `hookshot add`. Each wrapper, given positional args from git:
//!
//! 1. execs an executable `.hookshot/<hook>` directly,
//! 2. runs a non-executable one through `sh`,
//! 3. otherwise delegates to `hookshot run <hook> "$@"`.
//!
//! The exit code of whichever branch ran is the wrapper's exit code.
//!
//! # Ownership Contract
//!
//! Every generated wrapper embeds [`MARKER`] in a comment line. Uninstall
//! removes a hooks-directory file only when its content contains the
//! marker as an exact substring; hand-written hooks never match and are
//! left alone. The marker is versioned so a future format change can
//! still recognize (or deliberately orphan) older wrappers.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::core::hooks::HookName;
use crate::core::paths::{ProjectPaths, CONFIG_DIR_NAME};
use crate::ui::output::{self, Verbosity};

/// Ownership marker embedded in every generated wrapper.
pub const MARKER: &str = "hookshot:managed:v1";

/// Errors from wrapper installation.
#[derive(Debug, Error)]
pub enum WrapperError {
    /// Creating the hooks directory failed.
    #[error("failed to create hooks directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or chmodding a wrapper failed.
    #[error("failed to install {hook} wrapper: {source}")]
    Install {
        hook: HookName,
        #[source]
        source: io::Error,
    },
}

/// Render the dispatcher script for `hook`.
///
/// The output is deterministic: installing twice produces byte-identical
/// files, which keeps `install` safe to re-run for repair.
pub fn wrapper_script(hook: HookName) -> String {
    format!(
        r#"#!/bin/sh
# {marker} (generated by hookshot; do not edit)

HOOK_NAME="{hook}"
HOOKSHOT_DIR="{config_dir}"
HOOK_SCRIPT="$HOOKSHOT_DIR/$HOOK_NAME"

if [ -f "$HOOK_SCRIPT" ]; then
    if [ -x "$HOOK_SCRIPT" ]; then
        "$HOOK_SCRIPT" "$@"
    else
        sh "$HOOK_SCRIPT" "$@"
    fi
else
    hookshot run "$HOOK_NAME" "$@"
fi
"#,
        marker = MARKER,
        hook = hook,
        config_dir = CONFIG_DIR_NAME,
    )
}

/// Install (or overwrite) the wrapper for every supported hook.
///
/// Existing files at the wrapper paths are replaced unconditionally; this
/// is how `install` repairs a hooks directory after a fresh clone.
pub fn install_wrappers(paths: &ProjectPaths, verbosity: Verbosity) -> Result<(), WrapperError> {
    let hooks_dir = paths.git_hooks_dir();
    fs::create_dir_all(&hooks_dir).map_err(|source| WrapperError::CreateDir {
        path: hooks_dir.clone(),
        source,
    })?;

    for hook in HookName::ALL {
        let path = paths.wrapper_path(hook);
        fs::write(&path, wrapper_script(hook))
            .map_err(|source| WrapperError::Install { hook, source })?;
        set_executable(&path).map_err(|source| WrapperError::Install { hook, source })?;
        output::debug(format!("installed wrapper: {hook}"), verbosity);
    }

    Ok(())
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn script_carries_marker_and_hook_name() {
        let script = wrapper_script(HookName::PreCommit);
        assert!(script.starts_with("#!/bin/sh\n"));
        assert!(script.contains(MARKER));
        assert!(script.contains("HOOK_NAME=\"pre-commit\""));
        assert!(script.contains(&format!("HOOKSHOT_DIR=\"{CONFIG_DIR_NAME}\"")));
    }

    #[test]
    fn script_dispatches_through_all_three_branches() {
        let script = wrapper_script(HookName::CommitMsg);
        // Executable definition: exec it with the wrapper's args.
        assert!(script.contains("\"$HOOK_SCRIPT\" \"$@\""));
        // Non-executable definition: run through sh.
        assert!(script.contains("sh \"$HOOK_SCRIPT\" \"$@\""));
        // No definition: delegate to the runner.
        assert!(script.contains("hookshot run \"$HOOK_NAME\" \"$@\""));
    }

    #[test]
    fn install_writes_every_hook() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let paths = ProjectPaths::new(dir.path().to_path_buf());

        install_wrappers(&paths, Verbosity::Quiet).unwrap();

        for hook in HookName::ALL {
            let wrapper = paths.wrapper_path(hook);
            assert!(wrapper.is_file(), "missing wrapper for {hook}");
            let content = fs::read_to_string(&wrapper).unwrap();
            assert!(content.contains(MARKER));
        }
    }

    #[test]
    fn reinstall_is_byte_identical() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let paths = ProjectPaths::new(dir.path().to_path_buf());

        install_wrappers(&paths, Verbosity::Quiet).unwrap();
        let before: Vec<_> = HookName::ALL
            .iter()
            .map(|&hook| fs::read(paths.wrapper_path(hook)).unwrap())
            .collect();

        install_wrappers(&paths, Verbosity::Quiet).unwrap();
        for (hook, old) in HookName::ALL.iter().zip(before) {
            let new = fs::read(paths.wrapper_path(*hook)).unwrap();
            assert_eq!(old, new, "wrapper for {hook} changed across installs");
        }
    }

    #[cfg(unix)]
    #[test]
    fn wrappers_are_executable() {
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        let paths = ProjectPaths::new(dir.path().to_path_buf());

        install_wrappers(&paths, Verbosity::Quiet).unwrap();

        for hook in HookName::ALL {
            let mode = fs::metadata(paths.wrapper_path(hook))
                .unwrap()
                .permissions()
                .mode();
            assert_ne!(mode & 0o111, 0, "wrapper for {hook} is not executable");
        }
    }
}
