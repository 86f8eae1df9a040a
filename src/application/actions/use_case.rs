//! Action Use Case
//!
//! Runs one maintenance action against one already validated project.
//! Each action is a short, fixed sequence of external commands; the first
//! failing command aborts the action with the tool's own error output.
//! Follow-up steps of a deploy (migrations, database ownership) only warn.

use std::path::Path;

use crate::application::commands::{self, path_arg};
use crate::config::Project;
use crate::domain::ports::{CommandRunner, CommandSpec};
use crate::domain::value_objects::{Action, CommitHash, ARTISAN};
use crate::error::{ManageError, ManageResult};
use crate::infrastructure::repositories::{RevisionMarker, MARKER_FILE};

use super::options::ActionOptions;
use super::result::ActionReport;

/// SQLite database whose ownership is restored after a deploy
pub const SQLITE_DATABASE: &str = "storage/database.sqlite";

/// Present while a Laravel application is in maintenance mode
pub const MAINTENANCE_FLAG: &str = "storage/framework/down";

const SUBMODULE_UPDATE: [&str; 4] = ["submodule", "update", "--init", "--recursive"];

const FORCED_WARNING: &str = "local changes in the working tree were discarded (--force)";

/// Action use case, parameterized by the process runner
pub struct ActionUseCase<R: CommandRunner> {
    runner: R,
}

impl<R: CommandRunner> ActionUseCase<R> {
    pub fn new(runner: R) -> Self {
        Self { runner }
    }

    /// Execute `action` for `project`
    pub fn execute(
        &self,
        project: &Project,
        action: Action,
        options: &ActionOptions,
    ) -> ManageResult<ActionReport> {
        tracing::info!(project = %project.key, %action, "starting");

        let report = match action {
            Action::Deploy => self.deploy(project, options)?,
            Action::UpdatePhp => self.update_php(project)?,
            Action::UpdateNode => self.update_node(project)?,
            Action::RestartSupervisor => self.restart_supervisor(project, options)?,
            Action::RestartService => self.restart_service(project)?,
            Action::RevertDeployment => self.revert_deployment(project)?,
            Action::ToggleMaintenance => self.toggle_maintenance(project)?,
            Action::TrackerSync => self.tracker_sync(project)?,
        };

        for warning in &report.warnings {
            tracing::info!(project = %project.key, %action, "warning: {warning}");
        }
        tracing::info!(project = %project.key, %action, "{}", report.summary);
        Ok(report)
    }

    fn run(&self, spec: CommandSpec) -> ManageResult<String> {
        Ok(self.runner.run_checked(&spec)?.stdout)
    }

    fn git(&self, user: &str, path: &Path, args: &[&str]) -> ManageResult<String> {
        self.run(commands::git(user, path).args(args.iter().copied()))
    }

    fn head(&self, user: &str, path: &Path) -> ManageResult<CommitHash> {
        let spec = commands::git(user, path).args(["rev-parse", "--short", "HEAD"]);
        let out = self.runner.run_checked(&spec)?;
        CommitHash::parse(&out.stdout).ok_or_else(|| ManageError::ExternalCommand {
            program: spec.program.clone(),
            command: spec.display(),
            code: None,
            message: format!("unexpected output '{}'", out.stdout.trim()),
        })
    }

    fn deploy(&self, project: &Project, options: &ActionOptions) -> ManageResult<ActionReport> {
        let action = Action::Deploy;
        let path = project.require_path(action)?;
        let branch = project.require_branch(action)?;
        let user = project.require_user(action)?;
        let mut report = ActionReport::new(&project.key, action, "");

        tracing::info!(%branch, path = %path.display(), "deploying");
        self.git(user, path, &["fetch", "--all"])?;

        let previous = self.head(user, path)?;
        RevisionMarker::for_project(path).write(&previous)?;
        report
            .details
            .push(format!("Commit {previous} stored as last revision"));
        report.previous_revision = Some(previous.to_string());

        let remote_ref = format!("origin/{branch}");
        let remotes = self.git(user, path, &["branch", "-r"])?;
        if !lists_remote_branch(&remotes, &remote_ref) {
            return Err(ManageError::RemoteBranchMissing {
                branch: branch.to_string(),
            });
        }

        let status = self.git(user, path, &["status", "--porcelain"])?;
        if has_local_changes(&status) {
            if !options.force {
                return Err(ManageError::DirtyWorkingTree {
                    path: path.to_path_buf(),
                });
            }
            report.warnings.push(FORCED_WARNING.to_string());
        }

        self.git(user, path, &["checkout", branch])?;
        self.git(user, path, &["reset", "--hard", remote_ref.as_str()])?;
        self.git(user, path, &SUBMODULE_UPDATE)?;

        if let Some(container) = project.entry.container.as_deref() {
            if path.join(ARTISAN).is_file() {
                let spec = commands::artisan(
                    Some(container),
                    user,
                    path,
                    project.entry.php_binary(),
                    ["migrate", "--force"],
                );
                match self.runner.run_checked(&spec) {
                    Ok(_) => report
                        .details
                        .push("Database migrations completed successfully".to_string()),
                    Err(e) => report
                        .warnings
                        .push(format!("database migrations failed: {e}")),
                }
            }
        }

        let database = path.join(SQLITE_DATABASE);
        if database.exists() {
            let owner = project.entry.database_owner();
            let target = path_arg(&database);
            let spec = CommandSpec::new("chown").args([owner, target.as_str()]);
            match self.runner.run_checked(&spec) {
                Ok(_) => report
                    .details
                    .push(format!("Ownership of {SQLITE_DATABASE} set to {owner}")),
                Err(e) => {
                    let msg = format!("failed to change ownership of {SQLITE_DATABASE}: {e}");
                    report.warnings.push(msg)
                }
            }
        }

        let deployed = self.head(user, path)?;
        report.summary = format!(
            "Branch {branch} at {deployed} deployed to {}",
            path.display()
        );
        report.revision = Some(deployed.to_string());
        Ok(report)
    }

    fn update_php(&self, project: &Project) -> ManageResult<ActionReport> {
        let action = Action::UpdatePhp;
        let path = project.require_path(action)?;
        let user = project.require_user(action)?;

        let base = match project.entry.container.as_deref() {
            Some(container) => {
                commands::in_container(container, Some(user), Some(path), "composer")
            }
            None => commands::as_user(user, path, "composer"),
        };
        self.run(base.args(["update", "--no-interaction", "--no-dev"]))?;

        Ok(ActionReport::new(
            &project.key,
            action,
            "PHP package update successful",
        ))
    }

    fn update_node(&self, project: &Project) -> ManageResult<ActionReport> {
        let action = Action::UpdateNode;
        if project.entry.block_npm_updates {
            return Err(ManageError::NpmUpdatesBlocked {
                project: project.key.clone(),
            });
        }
        let path = project.require_path(action)?;
        let user = project.require_user(action)?;

        self.run(commands::as_user(user, path, "npm").arg("update"))?;

        Ok(ActionReport::new(
            &project.key,
            action,
            "Node.js package update successful",
        ))
    }

    fn restart_supervisor(
        &self,
        project: &Project,
        options: &ActionOptions,
    ) -> ManageResult<ActionReport> {
        let action = Action::RestartSupervisor;
        let name = project.require_supervisor_process(options.process_name.as_deref(), action)?;

        let (spec, summary) = match project.entry.container.as_deref() {
            Some(container) => (
                commands::in_container(container, None, None, "supervisorctl"),
                format!("Successfully restarted '{name}' in '{container}'"),
            ),
            None => (
                CommandSpec::new("supervisorctl"),
                format!("Successfully restarted '{name}'"),
            ),
        };
        self.run(spec.args(["restart", name]))?;

        Ok(ActionReport::new(&project.key, action, summary))
    }

    fn restart_service(&self, project: &Project) -> ManageResult<ActionReport> {
        let action = Action::RestartService;
        let service = project.require_systemd_service(action)?;

        self.run(CommandSpec::new("systemctl").args(["restart", service]))?;

        Ok(ActionReport::new(
            &project.key,
            action,
            format!("Successfully restarted '{service}'"),
        ))
    }

    fn revert_deployment(&self, project: &Project) -> ManageResult<ActionReport> {
        let action = Action::RevertDeployment;
        let path = project.require_path(action)?;
        let user = project.require_user(action)?;

        let target = RevisionMarker::for_project(path).read()?;

        let lookup = commands::git(user, path).args(["cat-file", "-t", target.as_str()]);
        if !self.runner.run(&lookup)?.is_success() {
            return Err(ManageError::UnknownCommit {
                hash: target.to_string(),
            });
        }

        self.git(user, path, &["reset", "--hard", target.as_str()])?;

        let mut report = ActionReport::new(
            &project.key,
            action,
            format!("Successfully reverted to commit {target}"),
        );
        report.revision = Some(target.to_string());
        Ok(report)
    }

    fn toggle_maintenance(&self, project: &Project) -> ManageResult<ActionReport> {
        let action = Action::ToggleMaintenance;
        let path = project.require_path(action)?;
        let user = project.require_user(action)?;

        let currently_down = path.join(MAINTENANCE_FLAG).exists();
        let args: &[&str] = if currently_down {
            &["up"]
        } else {
            &["down", "--with-secret"]
        };
        let summary = if currently_down {
            "Maintenance mode disabled"
        } else {
            "Maintenance mode enabled"
        };

        let spec = commands::artisan(
            project.entry.container.as_deref(),
            user,
            path,
            project.entry.php_binary(),
            args.iter().copied(),
        );
        let stdout = self.run(spec)?;

        let mut report = ActionReport::new(&project.key, action, summary);
        report.output = non_empty(stdout);
        Ok(report)
    }

    fn tracker_sync(&self, project: &Project) -> ManageResult<ActionReport> {
        let action = Action::TrackerSync;
        let container = project.require_container(action)?;
        let path = project.require_path(action)?;
        let user = project.cron_user(action)?;

        let spec = commands::artisan(
            Some(container),
            user,
            path,
            project.entry.php_binary(),
            [project.entry.tracker_command()],
        );
        let stdout = self.run(spec)?;

        let mut report = ActionReport::new(&project.key, action, "Tracker sync completed");
        report.output = non_empty(stdout);
        Ok(report)
    }
}

/// Whether `git branch -r` output lists `remote_ref` (symbolic refs included)
fn lists_remote_branch(output: &str, remote_ref: &str) -> bool {
    output
        .lines()
        .map(|line| line.trim().trim_start_matches("* "))
        .filter_map(|line| line.split(" -> ").next())
        .any(|name| name == remote_ref)
}

/// Whether `git status --porcelain` reports anything besides the revert marker
fn has_local_changes(porcelain: &str) -> bool {
    porcelain
        .lines()
        .filter(|line| !line.trim().is_empty())
        .any(|line| line.get(3..).map(str::trim) != Some(MARKER_FILE))
}

fn non_empty(stdout: String) -> Option<String> {
    let trimmed = stdout.trim_end();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
