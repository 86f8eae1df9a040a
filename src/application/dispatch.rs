//! Dispatch: from a parsed invocation to a finished action
//!
//! Order is fixed: privilege check, project lookup, sanity check, run.
//! Nothing external is started before the project passes the checker.

use crate::config::DeployConfig;
use crate::domain::policies::{self, CheckContext};
use crate::domain::ports::CommandRunner;
use crate::domain::value_objects::Action;
use crate::error::{ManageError, ManageResult};

use super::actions::{ActionOptions, ActionReport, ActionUseCase};

/// One requested action against one project
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActionRequest {
    pub project_key: String,
    pub action: Action,
    pub options: ActionOptions,
}

impl ActionRequest {
    pub fn new(project_key: impl Into<String>, action: Action) -> Self {
        Self {
            project_key: project_key.into(),
            action,
            options: ActionOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ActionOptions) -> Self {
        self.options = options;
        self
    }
}

/// Validate and run `request` against a loaded configuration
pub fn dispatch<R: CommandRunner>(
    config: &DeployConfig,
    request: &ActionRequest,
    runner: R,
) -> ManageResult<ActionReport> {
    ensure_privileges(config.require_root, effective_uid_is_root())?;

    let project = config.project(&request.project_key)?;
    let ctx = CheckContext {
        tracker_project: config.tracker_project.as_deref(),
        process_name: request.options.process_name.as_deref(),
    };
    let kind = policies::check(&project, request.action, ctx)?;
    tracing::debug!(project = %project.key, kind = kind.describe(), "sanity check passed");

    ActionUseCase::new(runner).execute(&project, request.action, &request.options)
}

/// Refuse to continue unless running as root (when required)
pub fn ensure_privileges(require_root: bool, is_root: bool) -> ManageResult<()> {
    if require_root && !is_root {
        return Err(ManageError::NotRoot);
    }
    Ok(())
}

#[cfg(unix)]
pub fn effective_uid_is_root() -> bool {
    nix::unistd::Uid::effective().is_root()
}

#[cfg(not(unix))]
pub fn effective_uid_is_root() -> bool {
    false
}
