//! Configuration type definitions

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Action, ConfigWarning};
use crate::error::{ManageError, ManageResult};

use super::loader;

pub const DEFAULT_PHP_BINARY: &str = "php";
pub const DEFAULT_DATABASE_OWNER: &str = "nginx:nginx-data";
pub const DEFAULT_TRACKER_COMMAND: &str = "do:membersync";

/// One entry of the `projects` mapping, as written in the file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectEntry {
    /// Absolute path of the git working tree
    #[serde(default)]
    pub path: Option<PathBuf>,

    /// Branch the project is locked to
    #[serde(default)]
    pub branch: Option<String>,

    /// Account that owns the checkout and runs host commands
    #[serde(default)]
    pub deploying_user: Option<String>,

    /// Docker container the application runs in
    #[serde(default)]
    pub container: Option<String>,

    #[serde(default)]
    pub supervisor_process: Option<String>,

    #[serde(default)]
    pub systemd_service: Option<String>,

    #[serde(default)]
    pub block_npm_updates: bool,

    /// Account for scheduled framework commands (defaults to `deploying_user`)
    #[serde(default)]
    pub cron_user: Option<String>,

    #[serde(default)]
    pub php_binary: Option<String>,

    /// `user:group` for `storage/database.sqlite`
    #[serde(default)]
    pub database_owner: Option<String>,

    #[serde(default)]
    pub tracker_command: Option<String>,
}

impl ProjectEntry {
    pub fn php_binary(&self) -> &str {
        self.php_binary.as_deref().unwrap_or(DEFAULT_PHP_BINARY)
    }

    pub fn database_owner(&self) -> &str {
        self.database_owner
            .as_deref()
            .unwrap_or(DEFAULT_DATABASE_OWNER)
    }

    pub fn tracker_command(&self) -> &str {
        self.tracker_command
            .as_deref()
            .unwrap_or(DEFAULT_TRACKER_COMMAND)
    }

    /// Optional string fields paired with their names, for validation
    pub(crate) fn optional_strings(&self) -> [(&'static str, Option<&str>); 9] {
        [
            ("branch", self.branch.as_deref()),
            ("deploying_user", self.deploying_user.as_deref()),
            ("container", self.container.as_deref()),
            ("supervisor_process", self.supervisor_process.as_deref()),
            ("systemd_service", self.systemd_service.as_deref()),
            ("cron_user", self.cron_user.as_deref()),
            ("php_binary", self.php_binary.as_deref()),
            ("database_owner", self.database_owner.as_deref()),
            ("tracker_command", self.tracker_command.as_deref()),
        ]
    }
}

/// Top-level configuration document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub projects: Option<BTreeMap<String, ProjectEntry>>,

    /// Refuse to run unless the effective uid is 0
    #[serde(default = "default_true")]
    pub require_root: bool,

    /// The only project allowed to run `tracker-sync`
    #[serde(default)]
    pub tracker_project: Option<String>,
}

impl Default for DeployConfig {
    fn default() -> Self {
        Self {
            projects: None,
            require_root: true,
            tracker_project: None,
        }
    }
}

fn default_true() -> bool {
    true
}

impl DeployConfig {
    /// Load and validate a configuration file
    pub fn load(path: &Path) -> ManageResult<Self> {
        let (config, _warnings) = loader::load_with_warnings(path)?;
        Ok(config)
    }

    /// Load, validate, and collect non-fatal warnings (e.g. unknown keys).
    pub fn load_with_warnings(path: &Path) -> ManageResult<(Self, Vec<ConfigWarning>)> {
        loader::load_with_warnings(path)
    }

    /// Parse a JSON document without touching the filesystem.
    ///
    /// `origin` is only used in error messages and warnings.
    pub fn from_json(content: &str, origin: &Path) -> ManageResult<(Self, Vec<ConfigWarning>)> {
        loader::parse_with_warnings(content, origin)
    }

    /// Configured project keys, sorted
    pub fn project_keys(&self) -> Vec<&str> {
        self.projects
            .iter()
            .flat_map(|projects| projects.keys())
            .map(String::as_str)
            .collect()
    }

    /// Resolve a project by key
    pub fn project(&self, key: &str) -> ManageResult<Project> {
        self.projects
            .as_ref()
            .and_then(|projects| projects.get(key))
            .map(|entry| Project {
                key: key.to_string(),
                entry: entry.clone(),
            })
            .ok_or_else(|| ManageError::UnknownProject {
                key: key.to_string(),
                available: self.project_keys().join(", "),
            })
    }
}

/// A resolved project: its key plus its configuration entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub key: String,
    pub entry: ProjectEntry,
}

impl Project {
    pub fn new(key: impl Into<String>, entry: ProjectEntry) -> Self {
        Self {
            key: key.into(),
            entry,
        }
    }

    fn missing(&self, field: &'static str, action: Action) -> ManageError {
        ManageError::MissingField {
            project: self.key.clone(),
            field,
            action: action.as_str(),
        }
    }

    pub fn require_path(&self, action: Action) -> ManageResult<&Path> {
        self.entry
            .path
            .as_deref()
            .ok_or_else(|| self.missing("path", action))
    }

    pub fn require_branch(&self, action: Action) -> ManageResult<&str> {
        self.entry
            .branch
            .as_deref()
            .ok_or_else(|| self.missing("branch", action))
    }

    pub fn require_user(&self, action: Action) -> ManageResult<&str> {
        self.entry
            .deploying_user
            .as_deref()
            .ok_or_else(|| self.missing("deploying_user", action))
    }

    pub fn require_container(&self, action: Action) -> ManageResult<&str> {
        self.entry
            .container
            .as_deref()
            .ok_or_else(|| self.missing("container", action))
    }

    pub fn require_systemd_service(&self, action: Action) -> ManageResult<&str> {
        self.entry
            .systemd_service
            .as_deref()
            .ok_or_else(|| self.missing("systemd_service", action))
    }

    /// Supervisor program name: the CLI override wins over the entry
    pub fn require_supervisor_process<'a>(
        &'a self,
        override_name: Option<&'a str>,
        action: Action,
    ) -> ManageResult<&'a str> {
        override_name
            .or(self.entry.supervisor_process.as_deref())
            .ok_or_else(|| self.missing("supervisor_process", action))
    }

    /// Account used for `tracker-sync`
    pub fn cron_user(&self, action: Action) -> ManageResult<&str> {
        match self.entry.cron_user.as_deref() {
            Some(user) => Ok(user),
            None => self.require_user(action),
        }
    }
}
