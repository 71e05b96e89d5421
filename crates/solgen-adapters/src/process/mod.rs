//! Process adapters: the build tool and version control, driven through
//! their command-line interfaces.
//!
//! Commands block until they exit. The exit status is the only success
//! signal; stderr is captured for the error message.

mod dotnet;
mod git;

use std::{
    ffi::{OsStr, OsString},
    path::Path,
    process::Command,
};

use solgen_core::{application::ApplicationError, error::SolgenResult};
use tracing::{debug, trace};

pub use dotnet::DotnetCli;
pub use git::GitCli;

/// Run `program args...` in `cwd`, failing on a non-zero exit.
pub(crate) fn run(program: &OsStr, args: &[String], cwd: &Path) -> SolgenResult<()> {
    let command = display_command(program, args);
    debug!(command = %command, cwd = %cwd.display(), "Running");

    let output = Command::new(program)
        .args(args)
        .current_dir(cwd)
        .output()
        .map_err(|e| ApplicationError::CommandFailed {
            command: command.clone(),
            status: None,
            stderr: e.to_string(),
        })?;

    trace!(stdout = %String::from_utf8_lossy(&output.stdout), "Command output");

    if output.status.success() {
        Ok(())
    } else {
        Err(ApplicationError::CommandFailed {
            command,
            status: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into())
    }
}

fn display_command(program: &OsStr, args: &[String]) -> String {
    std::iter::once(program.to_string_lossy().into_owned())
        .chain(args.iter().cloned())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Program name, defaulting to `default` when not overridden.
pub(crate) fn program_or(program: Option<OsString>, default: &str) -> OsString {
    program.unwrap_or_else(|| OsString::from(default))
}

#[cfg(all(test, unix))]
mod tests {
    use solgen_core::error::SolgenError;
    use tempfile::TempDir;

    use super::*;

    #[test]
    fn zero_exit_is_success() {
        let dir = TempDir::new().unwrap();
        assert!(run(OsStr::new("true"), &[], dir.path()).is_ok());
    }

    #[test]
    fn non_zero_exit_carries_status_and_stderr() {
        let dir = TempDir::new().unwrap();
        let args = ["-c".to_string(), "echo boom >&2; exit 7".to_string()];
        let err = run(OsStr::new("sh"), &args, dir.path()).unwrap_err();

        match err {
            SolgenError::Application(ApplicationError::CommandFailed {
                command,
                status,
                stderr,
            }) => {
                assert_eq!(command, "sh -c echo boom >&2; exit 7");
                assert_eq!(status, Some(7));
                assert_eq!(stderr, "boom");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn unstartable_program_has_no_status() {
        let dir = TempDir::new().unwrap();
        let err = run(OsStr::new("solgen-no-such-tool"), &[], dir.path()).unwrap_err();
        assert!(matches!(
            err,
            SolgenError::Application(ApplicationError::CommandFailed { status: None, .. })
        ));
    }

    #[test]
    fn display_joins_program_and_args() {
        let args = ["new".to_string(), "sln".to_string()];
        assert_eq!(display_command(OsStr::new("dotnet"), &args), "dotnet new sln");
    }
}
