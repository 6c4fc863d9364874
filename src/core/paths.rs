//! core::paths
//!
//! Centralized path routing for Hookshot storage locations.
//!
//! # Storage Layout
//!
//! Relative to the project root:
//! - `.hookshot/<hook>` - user-authored or CLI-written hook definitions
//! - `.git/hooks/<hook>` - generated dispatcher wrappers, one per hook
//!
//! No code outside this module should compute these paths by hand; all
//! storage locations go through [`ProjectPaths`].
//!
//! # Example
//!
//! ```
//! use hookshot::core::hooks::HookName;
//! use hookshot::core::paths::ProjectPaths;
//! use std::path::PathBuf;
//!
//! let paths = ProjectPaths::new(PathBuf::from("/project"));
//!
//! assert_eq!(paths.config_dir(), PathBuf::from("/project/.hookshot"));
//! assert_eq!(
//!     paths.wrapper_path(HookName::PreCommit),
//!     PathBuf::from("/project/.git/hooks/pre-commit")
//! );
//! ```

use std::io;
use std::path::{Path, PathBuf};

use crate::core::hooks::HookName;

/// Name of the project-local configuration directory.
pub const CONFIG_DIR_NAME: &str = ".hookshot";

/// Path routing for one project.
///
/// The root is resolved once per invocation and never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: PathBuf,
}

impl ProjectPaths {
    /// Create paths rooted at `root`.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Resolve the project root from an optional CLI override.
    ///
    /// With an override the path is canonicalized, so a missing directory
    /// fails here rather than producing confusing downstream errors.
    /// Without one the current working directory is used, matching how git
    /// itself invokes hooks (cwd is the repository toplevel).
    pub fn resolve(path: Option<&Path>) -> io::Result<Self> {
        let root = match path {
            Some(path) => path.canonicalize()?,
            None => std::env::current_dir()?,
        };
        Ok(Self::new(root))
    }

    /// The project root.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// The project-local configuration directory, `<root>/.hookshot`.
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR_NAME)
    }

    /// Where the definition for `hook` lives, `<root>/.hookshot/<hook>`.
    pub fn definition_path(&self, hook: HookName) -> PathBuf {
        self.config_dir().join(hook.as_str())
    }

    /// The git metadata directory, `<root>/.git`.
    pub fn git_dir(&self) -> PathBuf {
        self.root.join(".git")
    }

    /// The git hooks directory, `<root>/.git/hooks`.
    pub fn git_hooks_dir(&self) -> PathBuf {
        self.git_dir().join("hooks")
    }

    /// Where the wrapper for `hook` is installed, `<root>/.git/hooks/<hook>`.
    pub fn wrapper_path(&self, hook: HookName) -> PathBuf {
        self.git_hooks_dir().join(hook.as_str())
    }

    /// Whether the root looks like a git repository.
    ///
    /// A pure existence-and-directory check on `.git`; no side effects.
    pub fn is_git_repository(&self) -> bool {
        self.git_dir().is_dir()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths() -> ProjectPaths {
        ProjectPaths::new(PathBuf::from("/project"))
    }

    #[test]
    fn config_dir_under_root() {
        assert_eq!(paths().config_dir(), PathBuf::from("/project/.hookshot"));
    }

    #[test]
    fn definition_path_uses_hook_name() {
        assert_eq!(
            paths().definition_path(HookName::CommitMsg),
            PathBuf::from("/project/.hookshot/commit-msg")
        );
    }

    #[test]
    fn git_hooks_dir_under_git_dir() {
        assert_eq!(
            paths().git_hooks_dir(),
            PathBuf::from("/project/.git/hooks")
        );
    }

    #[test]
    fn wrapper_path_uses_hook_name() {
        assert_eq!(
            paths().wrapper_path(HookName::PrePush),
            PathBuf::from("/project/.git/hooks/pre-push")
        );
    }

    #[test]
    fn is_git_repository_requires_git_directory() {
        let dir = tempfile::tempdir().unwrap();
        let paths = ProjectPaths::new(dir.path().to_path_buf());
        assert!(!paths.is_git_repository());

        // A plain file named .git (as in submodules) does not count.
        std::fs::write(dir.path().join(".git"), "gitdir: elsewhere\n").unwrap();
        assert!(!paths.is_git_repository());

        std::fs::remove_file(dir.path().join(".git")).unwrap();
        std::fs::create_dir(dir.path().join(".git")).unwrap();
        assert!(paths.is_git_repository());
    }

    #[test]
    fn resolve_rejects_missing_override() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope");
        assert!(ProjectPaths::resolve(Some(&missing)).is_err());
    }

    #[test]
    fn resolve_canonicalizes_override() {
        let dir = tempfile::tempdir().unwrap();
        let resolved = ProjectPaths::resolve(Some(dir.path())).unwrap();
        assert_eq!(resolved.root(), dir.path().canonicalize().unwrap());
    }
}
