//! CommandRunner port - abstraction over external process execution
//!
//! Actions describe what to run as a [`CommandSpec`]; a runner decides how.
//! Implementations:
//! - `SystemRunner` - spawns real processes (infrastructure layer)
//! - `MockRunner` - scripted responses for tests

use std::path::{Path, PathBuf};

use crate::error::{ManageError, ManageResult};

/// A single external command: program, argv and working directory.
///
/// No shell is involved; arguments are passed to the program verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    pub program: String,
    pub args: Vec<String>,
    pub cwd: Option<PathBuf>,
}

impl CommandSpec {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    pub fn current_dir(mut self, dir: &Path) -> Self {
        self.cwd = Some(dir.to_path_buf());
        self
    }

    /// Render as a copy-pasteable shell line (for logs and error messages)
    pub fn display(&self) -> String {
        std::iter::once(self.program.as_str())
            .chain(self.args.iter().map(String::as_str))
            .map(shell_quote)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

fn shell_quote(word: &str) -> String {
    let plain = !word.is_empty()
        && word
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_./:=@,+%".contains(c));
    if plain {
        word.to_string()
    } else {
        format!("'{}'", word.replace('\'', "'\\''"))
    }
}

/// Captured result of a finished command
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code; `None` when terminated by a signal
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    pub fn success(stdout: impl Into<String>) -> Self {
        Self {
            code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    pub fn failure(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == Some(0)
    }

    /// Turn a non-zero exit into `ManageError::ExternalCommand`.
    ///
    /// The tool's stderr is carried verbatim (stdout when stderr is empty).
    pub fn check(self, spec: &CommandSpec) -> ManageResult<Self> {
        if self.is_success() {
            return Ok(self);
        }

        let stderr = self.stderr.trim();
        let message = if !stderr.is_empty() {
            stderr.to_string()
        } else if !self.stdout.trim().is_empty() {
            self.stdout.trim().to_string()
        } else if self.code.is_none() {
            "terminated by signal".to_string()
        } else {
            "no output".to_string()
        };

        Err(ManageError::ExternalCommand {
            program: spec.program.clone(),
            command: spec.display(),
            code: self.code,
            message,
        })
    }
}

/// Executes external commands
pub trait CommandRunner {
    /// Run to completion and capture output.
    ///
    /// A non-zero exit is *not* an error here; callers decide via
    /// [`CommandOutput::check`]. Errors are reserved for commands that
    /// could not be started at all.
    fn run(&self, spec: &CommandSpec) -> ManageResult<CommandOutput>;

    /// Run and fail on non-zero exit
    fn run_checked(&self, spec: &CommandSpec) -> ManageResult<CommandOutput> {
        self.run(spec)?.check(spec)
    }
}

impl<R: CommandRunner + ?Sized> CommandRunner for &R {
    fn run(&self, spec: &CommandSpec) -> ManageResult<CommandOutput> {
        (**self).run(spec)
    }
}

/// Scripted runner for tests
///
/// Responses are matched by substring against [`CommandSpec::display`];
/// the first matching rule wins (one-shot rules are consumed) and unmatched
/// commands succeed with empty output. Every call is recorded, together
/// with the content of an optional watched file at the moment of the call.
#[cfg(test)]
#[derive(Default)]
pub struct MockRunner {
    rules: std::cell::RefCell<Vec<MockRule>>,
    watched: Option<PathBuf>,
    pub calls: std::cell::RefCell<Vec<MockCall>>,
}

#[cfg(test)]
struct MockRule {
    needle: String,
    output: CommandOutput,
    once: bool,
}

#[cfg(test)]
#[derive(Debug, Clone)]
pub struct MockCall {
    pub spec: CommandSpec,
    pub watched_content: Option<String>,
}

#[cfg(test)]
impl MockRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(self, needle: &str, output: CommandOutput) -> Self {
        self.rule(needle, output, false)
    }

    /// Like [`respond`](Self::respond), but only for the first match
    pub fn respond_once(self, needle: &str, output: CommandOutput) -> Self {
        self.rule(needle, output, true)
    }

    fn rule(self, needle: &str, output: CommandOutput, once: bool) -> Self {
        self.rules.borrow_mut().push(MockRule {
            needle: needle.to_string(),
            output,
            once,
        });
        self
    }

    pub fn watch_file(mut self, path: &Path) -> Self {
        self.watched = Some(path.to_path_buf());
        self
    }

    pub fn commands(&self) -> Vec<String> {
        self.calls
            .borrow()
            .iter()
            .map(|c| c.spec.display())
            .collect()
    }

    pub fn call_containing(&self, needle: &str) -> Option<MockCall> {
        self.calls
            .borrow()
            .iter()
            .find(|c| c.spec.display().contains(needle))
            .cloned()
    }

    pub fn position(&self, needle: &str) -> Option<usize> {
        self.commands().iter().position(|c| c.contains(needle))
    }
}

#[cfg(test)]
impl CommandRunner for MockRunner {
    fn run(&self, spec: &CommandSpec) -> ManageResult<CommandOutput> {
        let rendered = spec.display();
        let watched_content = self
            .watched
            .as_ref()
            .and_then(|p| std::fs::read_to_string(p).ok());
        self.calls.borrow_mut().push(MockCall {
            spec: spec.clone(),
            watched_content,
        });

        let mut rules = self.rules.borrow_mut();
        let matched = rules
            .iter()
            .position(|r| rendered.contains(r.needle.as_str()));
        let output = match matched {
            Some(i) if rules[i].once => rules.remove(i).output,
            Some(i) => rules[i].output.clone(),
            None => CommandOutput::success(""),
        };
        Ok(output)
    }
}
