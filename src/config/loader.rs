//! Configuration loading and validation

use std::fs;
use std::io::ErrorKind as IoErrorKind;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::ConfigWarning;
use crate::error::{ManageError, ManageResult};

use super::types::DeployConfig;

/// File name looked up in the working directory and the user config dir
pub const CONFIG_FILE_NAME: &str = "deploy.config.json";

/// Environment variable naming the configuration file
pub const CONFIG_ENV_VAR: &str = "MANAGE_CONFIG";

/// Load configuration and collect non-fatal warnings (e.g. unknown keys).
pub fn load_with_warnings(path: &Path) -> ManageResult<(DeployConfig, Vec<ConfigWarning>)> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        IoErrorKind::NotFound => ManageError::ConfigNotFound {
            path: path.to_path_buf(),
        },
        _ => ManageError::Io(e),
    })?;

    parse_with_warnings(&content, path)
}

/// Parse and validate a JSON document; `origin` names it in diagnostics.
pub fn parse_with_warnings(
    content: &str,
    origin: &Path,
) -> ManageResult<(DeployConfig, Vec<ConfigWarning>)> {
    let invalid = |e: serde_json::Error| ManageError::ConfigInvalid {
        path: origin.to_path_buf(),
        message: e.to_string(),
    };

    let mut unknown_paths: Vec<String> = Vec::new();
    let mut deserializer = serde_json::Deserializer::from_str(content);

    let config: DeployConfig = serde_ignored::deserialize(&mut deserializer, |p| {
        unknown_paths.push(dotted_key(&p.to_string()));
    })
    .map_err(invalid)?;
    deserializer.end().map_err(invalid)?;

    validate(&config, origin)?;

    let warnings = unknown_paths
        .into_iter()
        .map(|key| {
            let leaf = key.split('.').next_back().unwrap_or(key.as_str());
            ConfigWarning {
                line: find_line_number(content, leaf),
                suggestion: suggest_key(leaf),
                file: origin.to_path_buf(),
                key,
            }
        })
        .collect();

    Ok((config, warnings))
}

/// Structural checks the type system cannot express
pub fn validate(config: &DeployConfig, origin: &Path) -> ManageResult<()> {
    let projects = config
        .projects
        .as_ref()
        .ok_or_else(|| ManageError::NoProjects {
            path: origin.to_path_buf(),
        })?;

    for (key, entry) in projects {
        if key.trim().is_empty() {
            return Err(ManageError::ConfigInvalid {
                path: origin.to_path_buf(),
                message: "project keys must not be empty".to_string(),
            });
        }

        if let Some(path) = &entry.path {
            if path.as_os_str().is_empty() {
                return Err(invalid_field(key, "path", "must not be empty"));
            }
            if !path.is_absolute() {
                return Err(invalid_field(
                    key,
                    "path",
                    &format!("'{}' is not an absolute path", path.display()),
                ));
            }
        }

        for (field, value) in entry.optional_strings() {
            if value.is_some_and(|v| v.trim().is_empty()) {
                return Err(invalid_field(key, field, "must not be empty"));
            }
        }
    }

    if let Some(tracker) = &config.tracker_project {
        if !projects.contains_key(tracker) {
            return Err(ManageError::ConfigInvalid {
                path: origin.to_path_buf(),
                message: format!("tracker_project '{tracker}' is not a configured project"),
            });
        }
    }

    Ok(())
}

fn invalid_field(project: &str, field: &'static str, message: &str) -> ManageError {
    ManageError::InvalidField {
        project: project.to_string(),
        field,
        message: message.to_string(),
    }
}

/// Pick the configuration file for this invocation.
///
/// Order: explicit `--config`, `MANAGE_CONFIG`, `./deploy.config.json`,
/// then the per-user config directory. An explicit path is returned even if
/// it does not exist so that loading reports it by name.
pub fn resolve_config_path(explicit: Option<&Path>) -> PathBuf {
    let from_env = std::env::var_os(CONFIG_ENV_VAR)
        .filter(|v| !v.is_empty())
        .map(PathBuf::from);
    let user_config = dirs::config_dir().map(|d| d.join("deploy-manager").join(CONFIG_FILE_NAME));

    resolve_config_path_from(explicit, from_env, user_config)
}

pub(crate) fn resolve_config_path_from(
    explicit: Option<&Path>,
    from_env: Option<PathBuf>,
    user_config: Option<PathBuf>,
) -> PathBuf {
    if let Some(path) = explicit {
        return path.to_path_buf();
    }
    if let Some(path) = from_env {
        return path;
    }

    let local = PathBuf::from(CONFIG_FILE_NAME);
    if local.is_file() {
        return local;
    }

    match user_config {
        Some(path) if path.is_file() => path,
        _ => local,
    }
}

/// `serde_ignored` renders `Option` layers as `?` segments (`projects.?.blog`)
fn dotted_key(path: &str) -> String {
    path.split('.')
        .filter(|segment| *segment != "?")
        .collect::<Vec<_>>()
        .join(".")
}

fn find_line_number(content: &str, key: &str) -> Option<usize> {
    let quoted = format!("\"{key}\"");
    content
        .lines()
        .position(|line| line.contains(&quoted))
        .map(|i| i + 1)
}

fn suggest_key(unknown: &str) -> Option<String> {
    const CANDIDATES: &[&str] = &[
        "projects",
        "require_root",
        "tracker_project",
        "path",
        "branch",
        "deploying_user",
        "container",
        "supervisor_process",
        "systemd_service",
        "block_npm_updates",
        "cron_user",
        "php_binary",
        "database_owner",
        "tracker_command",
    ];

    let mut best: Option<(&str, usize)> = None;
    for candidate in CANDIDATES {
        let dist = levenshtein(unknown, candidate);
        best = match best {
            None => Some((candidate, dist)),
            Some((_, best_dist)) if dist < best_dist => Some((candidate, dist)),
            Some(current) => Some(current),
        };
    }

    match best {
        Some((candidate, dist)) if dist <= 2 => Some(candidate.to_string()),
        _ => None,
    }
}

fn levenshtein(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_bytes = a.as_bytes();
    let b_bytes = b.as_bytes();

    let mut prev: Vec<usize> = (0..=b_bytes.len()).collect();
    let mut curr = vec![0usize; b_bytes.len() + 1];

    for (i, &ac) in a_bytes.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &bc) in b_bytes.iter().enumerate() {
            let cost = if ac == bc { 0 } else { 1 };
            curr[j + 1] =
                std::cmp::min(std::cmp::min(prev[j + 1] + 1, curr[j] + 1), prev[j] + cost);
        }
        prev.clone_from_slice(&curr);
    }

    prev[b_bytes.len()]
}
