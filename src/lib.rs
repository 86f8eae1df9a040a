//! deploy-manager - in-place deploy and maintenance actions for PHP and Node.js projects
//!
//! Each invocation resolves one project from a JSON configuration, checks that
//! the requested action fits the project on disk, and runs the matching
//! external tools (git, composer, npm, supervisorctl, systemctl, docker exec).

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod presentation;

// Re-exports for convenience
pub use application::{dispatch, ActionOptions, ActionReport, ActionRequest, ActionUseCase};
pub use config::{ConfigWarning, DeployConfig, Project, ProjectEntry};
pub use domain::ports::{CommandOutput, CommandRunner, CommandSpec};
pub use domain::value_objects::{Action, CommitHash, ProjectKind};
pub use error::{ErrorKind, ManageError, ManageResult};
pub use infrastructure::{RevisionMarker, SystemRunner};
