//! Sanity Policy
//!
//! Decides whether an action may run against a project before any external
//! command is started. The only side effect is a read-only look at the
//! project directory.
//!
//! Missing configuration fields are config errors; a directory that does not
//! match the action (no manifest, blocked, restricted) is a mismatch.

use std::path::Path;

use crate::config::Project;
use crate::domain::value_objects::{
    Action, ProjectKind, ARTISAN, COMPOSER_MANIFEST, NODE_MANIFEST,
};
use crate::error::{ManageError, ManageResult};

/// Invocation-level inputs the rules depend on besides the project entry
#[derive(Debug, Clone, Copy, Default)]
pub struct CheckContext<'a> {
    /// Top-level `tracker_project` setting
    pub tracker_project: Option<&'a str>,
    /// `--process-name` from the command line
    pub process_name: Option<&'a str>,
}

/// Validate `action` against `project`, returning what the directory holds.
pub fn check(
    project: &Project,
    action: Action,
    ctx: CheckContext<'_>,
) -> ManageResult<ProjectKind> {
    match action {
        Action::Deploy => {
            let path = project.require_path(action)?;
            project.require_branch(action)?;
            project.require_user(action)?;
            project_dir(path)
        }
        Action::RevertDeployment => {
            let path = project.require_path(action)?;
            project.require_user(action)?;
            project_dir(path)
        }
        Action::UpdatePhp => {
            let path = project.require_path(action)?;
            project.require_user(action)?;
            let kind = project_dir(path)?;
            require_manifest(kind.php, COMPOSER_MANIFEST, "PHP", path)?;
            Ok(kind)
        }
        Action::UpdateNode => {
            if project.entry.block_npm_updates {
                return Err(ManageError::NpmUpdatesBlocked {
                    project: project.key.clone(),
                });
            }
            let path = project.require_path(action)?;
            project.require_user(action)?;
            let kind = project_dir(path)?;
            require_manifest(kind.node, NODE_MANIFEST, "Node.js", path)?;
            Ok(kind)
        }
        Action::RestartSupervisor => {
            project.require_supervisor_process(ctx.process_name, action)?;
            Ok(detect_if_present(project))
        }
        Action::RestartService => {
            project.require_systemd_service(action)?;
            Ok(detect_if_present(project))
        }
        Action::ToggleMaintenance => {
            let path = project.require_path(action)?;
            project.require_user(action)?;
            let kind = project_dir(path)?;
            require_manifest(kind.laravel, ARTISAN, "Laravel", path)?;
            Ok(kind)
        }
        Action::TrackerSync => {
            let allowed = ctx.tracker_project.ok_or(ManageError::ActionDisabled {
                action: action.as_str(),
                setting: "tracker_project",
            })?;
            if project.key != allowed {
                return Err(ManageError::ActionRestricted {
                    action: action.as_str(),
                    project: project.key.clone(),
                    allowed: allowed.to_string(),
                });
            }
            project.require_container(action)?;
            let path = project.require_path(action)?;
            project.cron_user(action)?;
            let kind = project_dir(path)?;
            require_manifest(kind.laravel, ARTISAN, "Laravel", path)?;
            Ok(kind)
        }
    }
}

fn project_dir(path: &Path) -> ManageResult<ProjectKind> {
    if !path.is_dir() {
        return Err(ManageError::ProjectDirMissing {
            path: path.to_path_buf(),
        });
    }
    Ok(ProjectKind::detect(path))
}

fn require_manifest(
    present: bool,
    manifest: &'static str,
    kind: &'static str,
    path: &Path,
) -> ManageResult<()> {
    if present {
        Ok(())
    } else {
        Err(ManageError::ManifestMissing {
            manifest,
            kind,
            path: path.to_path_buf(),
        })
    }
}

fn detect_if_present(project: &Project) -> ProjectKind {
    project
        .entry
        .path
        .as_deref()
        .filter(|p| p.is_dir())
        .map(ProjectKind::detect)
        .unwrap_or_default()
}
