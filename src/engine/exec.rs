//! engine::exec
//!
//! Runs a configured hook definition as a child process.
//!
//! # Contract
//!
//! - An absent definition is a successful no-op. Partial adoption (only
//!   some hooks configured) must never break a git operation.
//! - The child runs with the project root as working directory and
//!   inherits stdin/stdout/stderr, so interactive commands work
//!   unmodified. The call blocks until the child exits; there is no
//!   timeout and no cancellation.
//! - A non-zero child exit is not an error here. The code propagates
//!   verbatim so the invoking git operation aborts with it.
//! - A child that cannot be spawned at all is reported and mapped to
//!   exit code 1 rather than crashing the runner.
//!
//! # Lifecycle
//!
//! ```text
//! Resolve -> Absent           -> Success(0)
//!         -> Found -> Execute -> Completed(code)
//!                             -> SpawnFailed -> Failure(1)
//! ```

use std::path::Path;
use std::process::Command;

use crate::core::hooks::HookName;
use crate::core::store::HookStore;
use crate::ui::output::{self, Verbosity};

/// How a definition file is launched.
///
/// Resolved once per invocation: Windows has no executable bit, and a
/// definition that lost its executable bit still has to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Invocation {
    /// Invoke the file directly.
    Direct,
    /// Invoke through `sh`.
    Shell,
}

impl Invocation {
    #[cfg(unix)]
    fn resolve(path: &Path) -> Self {
        use std::os::unix::fs::PermissionsExt;

        let executable = std::fs::metadata(path)
            .map(|meta| meta.permissions().mode() & 0o111 != 0)
            .unwrap_or(false);
        if executable {
            Invocation::Direct
        } else {
            Invocation::Shell
        }
    }

    #[cfg(not(unix))]
    fn resolve(_path: &Path) -> Self {
        Invocation::Shell
    }
}

/// Executes stored hook definitions.
pub struct HookExecutor<'a> {
    store: &'a HookStore<'a>,
    verbosity: Verbosity,
}

impl<'a> HookExecutor<'a> {
    pub fn new(store: &'a HookStore<'a>, verbosity: Verbosity) -> Self {
        Self { store, verbosity }
    }

    /// Run the definition for `hook`, forwarding `args` as positional
    /// parameters. Returns the exit code to hand back to git.
    pub fn run(&self, hook: HookName, args: &[String]) -> i32 {
        let Some(definition) = self.store.existing_definition(hook) else {
            output::debug(format!("no definition for {hook}"), self.verbosity);
            return 0;
        };

        output::print(format!("Running {hook} hook..."), self.verbosity);

        let mut command = match Invocation::resolve(&definition) {
            Invocation::Direct => Command::new(&definition),
            Invocation::Shell => {
                let mut command = Command::new("sh");
                command.arg(&definition);
                command
            }
        };

        let status = command
            .args(args)
            .current_dir(self.store.paths().root())
            .status();

        match status {
            Ok(status) => {
                // A signal death carries no exit code; report it as a
                // plain failure.
                let code = status.code().unwrap_or(1);
                if code != 0 {
                    output::error(format!("{hook} hook failed with exit code {code}"));
                } else {
                    output::print(format!("{hook} hook completed successfully"), self.verbosity);
                }
                code
            }
            Err(err) => {
                output::error(format!("failed to execute {hook} hook: {err}"));
                1
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::paths::ProjectPaths;

    struct Fixture {
        _dir: tempfile::TempDir,
        paths: ProjectPaths,
    }

    impl Fixture {
        fn new() -> Self {
            let dir = tempfile::tempdir().unwrap();
            let paths = ProjectPaths::new(dir.path().to_path_buf());
            std::fs::create_dir(paths.config_dir()).unwrap();
            Self { _dir: dir, paths }
        }

        fn store(&self) -> HookStore<'_> {
            HookStore::new(&self.paths, Verbosity::Quiet)
        }

        fn add(&self, hook: HookName, commands: &[&str]) {
            let commands: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
            self.store().write_definition(hook, &commands).unwrap();
        }
    }

    fn run(fixture: &Fixture, hook: HookName, args: &[&str]) -> i32 {
        let store = fixture.store();
        let executor = HookExecutor::new(&store, Verbosity::Quiet);
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        executor.run(hook, &args)
    }

    #[test]
    fn absent_definition_is_success() {
        let fixture = Fixture::new();
        assert_eq!(run(&fixture, HookName::PreCommit, &[]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn successful_definition_returns_zero() {
        let fixture = Fixture::new();
        fixture.add(HookName::PreCommit, &["true"]);
        assert_eq!(run(&fixture, HookName::PreCommit, &[]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn child_exit_code_propagates_exactly() {
        let fixture = Fixture::new();
        fixture.add(HookName::PrePush, &["exit 3"]);
        assert_eq!(run(&fixture, HookName::PrePush, &[]), 3);
    }

    #[cfg(unix)]
    #[test]
    fn fail_fast_aborts_on_first_failing_command() {
        let fixture = Fixture::new();
        fixture.add(HookName::PreCommit, &["echo hi", "false", "exit 0"]);
        assert_ne!(run(&fixture, HookName::PreCommit, &[]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn args_are_forwarded_as_positional_parameters() {
        let fixture = Fixture::new();
        fixture.add(HookName::CommitMsg, &["test \"$1\" = expected"]);
        assert_eq!(run(&fixture, HookName::CommitMsg, &["expected"]), 0);
        assert_ne!(run(&fixture, HookName::CommitMsg, &["other"]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn child_runs_in_project_root() {
        let fixture = Fixture::new();
        fixture.add(HookName::PostMerge, &["test -d .hookshot"]);
        assert_eq!(run(&fixture, HookName::PostMerge, &[]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn non_executable_definition_runs_through_shell() {
        use std::os::unix::fs::PermissionsExt;

        let fixture = Fixture::new();
        fixture.add(HookName::PreRebase, &["true"]);

        let path = fixture.paths.definition_path(HookName::PreRebase);
        let mut perms = std::fs::metadata(&path).unwrap().permissions();
        perms.set_mode(0o644);
        std::fs::set_permissions(&path, perms).unwrap();

        assert_eq!(Invocation::resolve(&path), Invocation::Shell);
        assert_eq!(run(&fixture, HookName::PreRebase, &[]), 0);
    }

    #[cfg(unix)]
    #[test]
    fn spawn_failure_maps_to_one() {
        let fixture = Fixture::new();
        // An executable file pointing at a missing interpreter cannot be
        // spawned; the executor reports it instead of crashing.
        let path = fixture.paths.definition_path(HookName::PostCheckout);
        std::fs::write(&path, "#!/no/such/interpreter\n").unwrap();
        {
            use std::os::unix::fs::PermissionsExt;
            let mut perms = std::fs::metadata(&path).unwrap().permissions();
            perms.set_mode(0o755);
            std::fs::set_permissions(&path, perms).unwrap();
        }

        assert_eq!(run(&fixture, HookName::PostCheckout, &[]), 1);
    }
}
