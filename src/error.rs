//! Error types for deploy-manager
//!
//! Uses `thiserror` for library errors; the binary wraps them in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for deploy-manager operations
pub type ManageResult<T> = Result<T, ManageError>;

/// Coarse classification used for reporting and exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Missing or malformed configuration, unknown project key
    Config,
    /// Action incompatible with the project on disk
    Mismatch,
    /// An external tool exited non-zero
    ExternalCommand,
    /// Insufficient privileges
    Permission,
    /// Local I/O failure
    Io,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Config => "config",
            ErrorKind::Mismatch => "mismatch",
            ErrorKind::ExternalCommand => "external-command",
            ErrorKind::Permission => "permission",
            ErrorKind::Io => "io",
        }
    }
}

/// Main error type for deploy-manager operations
#[derive(Error, Debug)]
pub enum ManageError {
    /// Configuration file does not exist
    #[error("configuration file '{path}' not found")]
    ConfigNotFound { path: PathBuf },

    /// Configuration file is not valid JSON (or has wrongly typed fields)
    #[error("configuration file '{path}' is not valid: {message}")]
    ConfigInvalid { path: PathBuf, message: String },

    /// Top-level `projects` mapping is absent
    #[error("no projects defined in configuration '{path}'")]
    NoProjects { path: PathBuf },

    /// A field failed validation
    #[error("invalid value for '{field}' in project '{project}': {message}")]
    InvalidField {
        project: String,
        field: &'static str,
        message: String,
    },

    /// Project key not present in configuration
    #[error("no project found for key '{key}' (available: {available})")]
    UnknownProject { key: String, available: String },

    /// Action needs a field the project entry does not set
    #[error("project '{project}' has no '{field}' configured, required for {action}")]
    MissingField {
        project: String,
        field: &'static str,
        action: &'static str,
    },

    /// Project directory is missing
    #[error("project directory '{path}' does not exist")]
    ProjectDirMissing { path: PathBuf },

    /// Expected manifest (composer.json, package.json, artisan) is absent
    #[error("no '{manifest}' found in {path}; not a {kind} project")]
    ManifestMissing {
        manifest: &'static str,
        kind: &'static str,
        path: PathBuf,
    },

    /// npm updates disabled for this project
    #[error("npm updates are blocked for project '{project}'")]
    NpmUpdatesBlocked { project: String },

    /// Action restricted to another project
    #[error("{action} is only allowed for project '{allowed}', not '{project}'")]
    ActionRestricted {
        action: &'static str,
        project: String,
        allowed: String,
    },

    /// Action requires a top-level setting that is not configured
    #[error("{action} is disabled: no '{setting}' configured")]
    ActionDisabled {
        action: &'static str,
        setting: &'static str,
    },

    /// Locked branch is not on the remote
    #[error("branch '{branch}' does not exist on the remote")]
    RemoteBranchMissing { branch: String },

    /// Working tree has uncommitted changes
    #[error("unstaged changes detected in {path}; commit or stash them, or pass --force")]
    DirtyWorkingTree { path: PathBuf },

    /// Revert marker absent or empty
    #[error("no usable revert marker at {path}: {reason}")]
    RevisionMarker { path: PathBuf, reason: String },

    /// Revert marker names a commit git does not know
    #[error("commit {hash} does not exist in the repository")]
    UnknownCommit { hash: String },

    /// External tool exited non-zero (or could not be started)
    #[error("`{command}` failed{}: {message}", exit_suffix(.code))]
    ExternalCommand {
        program: String,
        command: String,
        code: Option<i32>,
        message: String,
    },

    /// Refusing to run without root privileges
    #[error("must be run as root (set \"require_root\": false in the configuration to override)")]
    NotRoot,

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ManageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ManageError::ConfigNotFound { .. }
            | ManageError::ConfigInvalid { .. }
            | ManageError::NoProjects { .. }
            | ManageError::InvalidField { .. }
            | ManageError::UnknownProject { .. }
            | ManageError::MissingField { .. }
            | ManageError::ActionDisabled { .. }
            | ManageError::RevisionMarker { .. } => ErrorKind::Config,
            ManageError::ProjectDirMissing { .. }
            | ManageError::ManifestMissing { .. }
            | ManageError::NpmUpdatesBlocked { .. }
            | ManageError::ActionRestricted { .. }
            | ManageError::RemoteBranchMissing { .. }
            | ManageError::DirtyWorkingTree { .. }
            | ManageError::UnknownCommit { .. } => ErrorKind::Mismatch,
            ManageError::ExternalCommand { .. } => ErrorKind::ExternalCommand,
            ManageError::NotRoot => ErrorKind::Permission,
            ManageError::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this error.
    ///
    /// External command failures mirror the tool's own status; a tool killed
    /// by a signal (no code) and every other error exit with 1.
    pub fn exit_code(&self) -> i32 {
        match self {
            ManageError::ExternalCommand {
                code: Some(code), ..
            } if *code != 0 => *code,
            _ => 1,
        }
    }
}

fn exit_suffix(code: &Option<i32>) -> String {
    code.map(|c| format!(" with exit code {c}"))
        .unwrap_or_default()
}
