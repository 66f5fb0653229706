//! Synchronous external command execution.

use crate::error::{ReleaseError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;

/// Runs external programs and captures their standard output as text.
///
/// A non-zero exit status is always an error; there are no retries.
#[derive(Debug, Clone, Default)]
pub struct CommandRunner {
    cwd: Option<PathBuf>,
}

impl CommandRunner {
    /// Create a runner that executes in the process working directory
    pub fn new() -> Self {
        CommandRunner { cwd: None }
    }

    /// Create a runner that executes every command inside `dir`
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        CommandRunner {
            cwd: Some(dir.as_ref().to_path_buf()),
        }
    }

    /// Execute `program` with `args`, waiting for it to finish
    ///
    /// # Returns
    /// * `Ok(String)` - Captured stdout, lossily decoded as UTF-8
    /// * `Err` - If the program can not be spawned or exits non-zero
    pub fn run<S: AsRef<str>>(&self, program: &str, args: &[S]) -> Result<String> {
        let rendered = render_command(program, args);
        debug!(command = %rendered, "running external command");

        let mut cmd = Command::new(program);
        cmd.args(args.iter().map(|a| a.as_ref()));
        if let Some(ref dir) = self.cwd {
            cmd.current_dir(dir);
        }

        let output = cmd.output()?;

        let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).into_owned();
            return Err(ReleaseError::ExternalCommand {
                command: rendered,
                code: output.status.code().unwrap_or(-1),
                stdout,
                stderr,
            });
        }

        Ok(stdout)
    }
}

fn render_command<S: AsRef<str>>(program: &str, args: &[S]) -> String {
    let mut parts = vec![program.to_string()];
    parts.extend(args.iter().map(|a| a.as_ref().to_string()));
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_captures_stdout() {
        let out = CommandRunner::new().run("echo", &["hello", "world"]).unwrap();
        assert_eq!(out, "hello world\n");
    }

    #[test]
    fn test_non_zero_exit_is_error() {
        let result = CommandRunner::new().run("sh", &["-c", "echo out; echo err >&2; exit 3"]);
        match result {
            Err(ReleaseError::ExternalCommand {
                code,
                stdout,
                stderr,
                ..
            }) => {
                assert_eq!(code, 3);
                assert_eq!(stdout, "out\n");
                assert_eq!(stderr, "err\n");
            }
            other => panic!("expected ExternalCommand error, got {:?}", other),
        }
    }

    #[test]
    fn test_missing_program_is_io_error() {
        let result = CommandRunner::new().run::<&str>("/nonexistent/program/xyz", &[]);
        assert!(matches!(result, Err(ReleaseError::Io(_))));
    }

    #[test]
    fn test_runs_in_directory() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "x").unwrap();

        let out = CommandRunner::in_dir(dir.path()).run("ls", &["."]).unwrap();
        assert!(out.contains("marker.txt"));
    }
}
