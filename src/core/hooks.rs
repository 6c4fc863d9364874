//! core::hooks
//!
//! The closed set of git hooks Hookshot manages.
//!
//! # Validation
//!
//! [`HookName`] is an enum, so a name outside the supported set cannot be
//! represented once parsing succeeds. Parsing happens at the CLI boundary,
//! before any file is touched.
//!
//! # Examples
//!
//! ```
//! use hookshot::core::hooks::HookName;
//!
//! let hook: HookName = "pre-commit".parse().unwrap();
//! assert_eq!(hook.as_str(), "pre-commit");
//!
//! assert!("post-whatever".parse::<HookName>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Errors from hook name validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HookError {
    #[error("unsupported hook '{0}' (supported: {})", HookName::supported_list())]
    Unsupported(String),
}

/// A git hook supported by Hookshot.
///
/// The set is fixed. Git recognizes many more hook names, but Hookshot
/// only installs wrappers for the lifecycle hooks below, so anything else
/// is rejected rather than silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HookName {
    PreCommit,
    PrePush,
    CommitMsg,
    PreRebase,
    PostCheckout,
    PostMerge,
    PrepareCommitMsg,
}

impl HookName {
    /// All supported hooks, in the fixed order used for installation and
    /// status reporting.
    pub const ALL: [HookName; 7] = [
        HookName::PreCommit,
        HookName::PrePush,
        HookName::CommitMsg,
        HookName::PreRebase,
        HookName::PostCheckout,
        HookName::PostMerge,
        HookName::PrepareCommitMsg,
    ];

    /// The hook's on-disk name, as git spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            HookName::PreCommit => "pre-commit",
            HookName::PrePush => "pre-push",
            HookName::CommitMsg => "commit-msg",
            HookName::PreRebase => "pre-rebase",
            HookName::PostCheckout => "post-checkout",
            HookName::PostMerge => "post-merge",
            HookName::PrepareCommitMsg => "prepare-commit-msg",
        }
    }

    /// Comma-separated list of all supported names, for error messages.
    pub fn supported_list() -> String {
        Self::ALL
            .iter()
            .map(|hook| hook.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for HookName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookName {
    type Err = HookError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|hook| hook.as_str() == s)
            .ok_or_else(|| HookError::Unsupported(s.to_string()))
    }
}
