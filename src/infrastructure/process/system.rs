//! System process runner
//!
//! Implements the CommandRunner port with `std::process::Command`.

use std::io::ErrorKind as IoErrorKind;
use std::process::{Command, Stdio};

use crate::domain::ports::command_runner::{CommandOutput, CommandRunner, CommandSpec};
use crate::error::{ManageError, ManageResult};

/// Runs commands on the local host, capturing stdout and stderr.
///
/// Stdin is closed: nothing this tool starts is meant to prompt.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec) -> ManageResult<CommandOutput> {
        tracing::debug!(command = %spec.display(), cwd = ?spec.cwd, "running");

        let mut command = Command::new(&spec.program);
        command
            .args(&spec.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = &spec.cwd {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|e| spawn_error(spec, e))?;
        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };

        tracing::debug!(
            program = %spec.program,
            code = ?result.code,
            stdout_bytes = output.stdout.len(),
            stderr_bytes = output.stderr.len(),
            "finished"
        );
        Ok(result)
    }
}

/// Map a failure to start into the same error a shell would report
fn spawn_error(spec: &CommandSpec, err: std::io::Error) -> ManageError {
    let program = &spec.program;
    let (code, message) = match err.kind() {
        IoErrorKind::NotFound => (Some(127), format!("{program}: command not found")),
        IoErrorKind::PermissionDenied => (Some(126), format!("{program}: permission denied")),
        _ => (None, format!("failed to start {program}: {err}")),
    };
    tracing::debug!(program = %spec.program, error = %err, "spawn failed");

    ManageError::ExternalCommand {
        program: spec.program.clone(),
        command: spec.display(),
        code,
        message,
    }
}
