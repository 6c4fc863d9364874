//! Hookshot - Git hooks made easy
//!
//! Hookshot is a single-binary tool that manages git lifecycle hooks for a
//! project: it installs dispatcher scripts into `.git/hooks/`, stores
//! per-hook command lists under `.hookshot/`, and runs those commands when
//! git fires the corresponding hook.
//!
//! # Architecture
//!
//! The codebase follows a layered architecture:
//!
//! - [`cli`] - Command-line interface layer (parses args, delegates to engine)
//! - [`engine`] - Hook execution and lifecycle orchestration
//! - [`core`] - Domain types, path routing, and generated-file content
//! - [`ui`] - User interaction utilities
//!
//! # Correctness Invariants
//!
//! Hookshot maintains the following invariants:
//!
//! 1. Hook names outside the supported set are rejected at the parse boundary
//! 2. Precondition failures are reported before any file is written
//! 3. Uninstall removes only files carrying the generated-content marker
//! 4. A hook's exit code propagates verbatim to the invoking git operation

pub mod cli;
pub mod core;
pub mod engine;
pub mod ui;
