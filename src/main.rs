//! Hookshot binary entry point.
//!
//! A thin shim over [`hookshot::cli::run`]. The exit code matters here:
//! git aborts an operation when its hook exits non-zero, so `run` results
//! must reach the process boundary untouched.

fn main() {
    match hookshot::cli::run() {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            hookshot::ui::output::error(format!("{err:#}"));
            std::process::exit(1);
        }
    }
}
