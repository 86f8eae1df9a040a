//! Test environment builder for isolated `manage` runs.
//!
//! `TestEnv` owns a temp directory holding:
//! - `projects/<key>/` - one directory per configured project
//! - `bin/` - fake `sudo`, `git`, `docker`, ... placed first on `PATH`
//! - `state/` - files steering the fake tools (see below)
//! - `calls.log` - one line per fake tool invocation
//! - `deploy.config.json`
//!
//! Fake tools:
//! - `sudo -u USER CMD...` logs itself and execs `CMD...`
//! - `git` answers `rev-parse` from `state/head`, `branch -r` from
//!   `state/branches`, `status` from `state/status`; `reset --hard` moves
//!   `state/head`; `fetch` fails when `state/fetch_fail` exists; `cat-file`
//!   fails when `state/unknown_commit` exists
//! - everything else logs, prints `state/stdout_<tool>`, writes
//!   `state/stderr_<tool>` to stderr and exits with `state/exit_<tool>` (or 0)

use std::fs;
use std::os::unix::fs::PermissionsExt;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde_json::{json, Map, Value};
use tempfile::TempDir;

const GENERIC_TOOLS: &[&str] = &[
    "docker",
    "npm",
    "composer",
    "systemctl",
    "supervisorctl",
    "chown",
    "php",
];

const SUDO_SCRIPT: &str = r#"#!/bin/sh
echo "sudo $*" >> "$FAKE_LOG"
if [ "$1" = "-u" ]; then shift 2; fi
exec "$@"
"#;

const GIT_SCRIPT: &str = r#"#!/bin/sh
echo "git $*" >> "$FAKE_LOG"
if [ "$1" = "-C" ]; then shift 2; fi
case "$1" in
  fetch)
    if [ -f "$FAKE_STATE/fetch_fail" ]; then
      echo "fatal: unable to access 'https://git.example.invalid/repo.git/'" >&2
      exit 128
    fi
    ;;
  rev-parse) cat "$FAKE_STATE/head" ;;
  branch) cat "$FAKE_STATE/branches" ;;
  status) if [ -f "$FAKE_STATE/status" ]; then cat "$FAKE_STATE/status"; fi ;;
  cat-file)
    if [ -f "$FAKE_STATE/unknown_commit" ]; then
      echo "fatal: Not a valid object name $3" >&2
      exit 128
    fi
    echo commit
    ;;
  reset)
    case "$3" in
      origin/*) cat "$FAKE_STATE/remote_head" > "$FAKE_STATE/head" ;;
      *) echo "$3" > "$FAKE_STATE/head" ;;
    esac
    ;;
esac
exit 0
"#;

fn generic_script(name: &str) -> String {
    format!(
        r#"#!/bin/sh
echo "{name} $*" >> "$FAKE_LOG"
if [ -f "$FAKE_STATE/stdout_{name}" ]; then cat "$FAKE_STATE/stdout_{name}"; fi
if [ -f "$FAKE_STATE/stderr_{name}" ]; then cat "$FAKE_STATE/stderr_{name}" >&2; fi
if [ -f "$FAKE_STATE/exit_{name}" ]; then exit "$(cat "$FAKE_STATE/exit_{name}")"; fi
exit 0
"#
    )
}

/// Result of running the `manage` binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

/// Isolated environment for one test
pub struct TestEnv {
    pub root: TempDir,
    manage_bin: PathBuf,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::new()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.root.path().join(relative)
    }

    pub fn config_path(&self) -> PathBuf {
        self.path("deploy.config.json")
    }

    pub fn project_dir(&self, key: &str) -> PathBuf {
        self.path("projects").join(key)
    }

    pub fn write_project_file(&self, key: &str, relative: &str, content: &str) {
        let full = self.project_dir(key).join(relative);
        if let Some(parent) = full.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(full, content).expect("Failed to write project file");
    }

    pub fn read_project_file(&self, key: &str, relative: &str) -> String {
        fs::read_to_string(self.project_dir(key).join(relative))
            .unwrap_or_else(|e| panic!("Failed to read {relative} in {key}: {e}"))
    }

    /// Steer the fake tools (see module docs)
    pub fn set_state(&self, name: &str, content: &str) {
        fs::write(self.path("state").join(name), content).expect("Failed to write state");
    }

    pub fn state(&self, name: &str) -> String {
        fs::read_to_string(self.path("state").join(name)).unwrap_or_default()
    }

    /// Lines logged by the fake tools, in call order
    pub fn calls(&self) -> Vec<String> {
        fs::read_to_string(self.path("calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Tool calls excluding the `sudo` wrapper lines
    pub fn tool_calls(&self) -> Vec<String> {
        self.calls()
            .into_iter()
            .filter(|c| !c.starts_with("sudo "))
            .collect()
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let path_var = format!("{}:/usr/bin:/bin", self.path("bin").display());

        let mut cmd = Command::new(&self.manage_bin);
        cmd.current_dir(self.root.path())
            .args(args)
            .env_clear()
            .env("PATH", path_var)
            .env("HOME", self.path("home"))
            .env("XDG_CONFIG_HOME", self.path("home/.config"))
            .env("MANAGE_CONFIG", self.config_path())
            .env("FAKE_LOG", self.path("calls.log"))
            .env("FAKE_STATE", self.path("state"))
            .env("NO_COLOR", "1")
            .env("LANG", "C");

        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        let output = cmd.output().expect("Failed to execute manage");
        TestResult {
            success: output.status.success(),
            exit_code: output.status.code().unwrap_or(-1),
            stdout: String::from_utf8_lossy(&output.stdout).to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        }
    }
}

/// Builder for TestEnv with fluent API
pub struct TestEnvBuilder {
    projects: Vec<(String, Value)>,
    top_level: Map<String, Value>,
    raw_config: Option<String>,
}

impl TestEnvBuilder {
    pub fn new() -> Self {
        let mut top_level = Map::new();
        top_level.insert("require_root".to_string(), json!(false));
        Self {
            projects: Vec::new(),
            top_level,
            raw_config: None,
        }
    }

    /// Add a project; `path` defaults to `projects/<key>` inside the env
    pub fn project(mut self, key: &str, fields: Value) -> Self {
        self.projects.push((key.to_string(), fields));
        self
    }

    /// Set a top-level configuration key
    pub fn setting(mut self, key: &str, value: Value) -> Self {
        self.top_level.insert(key.to_string(), value);
        self
    }

    /// Write this exact text as the configuration file
    pub fn raw_config(mut self, content: &str) -> Self {
        self.raw_config = Some(content.to_string());
        self
    }

    pub fn build(self) -> TestEnv {
        let root = TempDir::new().expect("Failed to create temp dir");
        for dir in ["bin", "state", "projects", "home/.config"] {
            fs::create_dir_all(root.path().join(dir)).expect("Failed to create dir");
        }

        install_script(root.path(), "sudo", SUDO_SCRIPT);
        install_script(root.path(), "git", GIT_SCRIPT);
        for tool in GENERIC_TOOLS {
            install_script(root.path(), tool, &generic_script(tool));
        }

        let state = root.path().join("state");
        fs::write(state.join("head"), "abc1234\n").expect("state");
        fs::write(state.join("remote_head"), "def5678\n").expect("state");
        fs::write(
            state.join("branches"),
            "  origin/HEAD -> origin/main\n  origin/main\n  origin/production\n",
        )
        .expect("state");

        let config = match self.raw_config {
            Some(raw) => raw,
            None => {
                let mut projects = Map::new();
                for (key, fields) in self.projects {
                    let dir = root.path().join("projects").join(&key);
                    fs::create_dir_all(&dir).expect("Failed to create project dir");

                    let mut entry = fields.as_object().cloned().unwrap_or_default();
                    entry
                        .entry("path".to_string())
                        .or_insert_with(|| json!(dir.display().to_string()));
                    projects.insert(key, Value::Object(entry));
                }
                let mut doc = self.top_level;
                doc.insert("projects".to_string(), Value::Object(projects));
                serde_json::to_string_pretty(&Value::Object(doc)).expect("config json")
            }
        };
        fs::write(root.path().join("deploy.config.json"), config).expect("Failed to write config");

        TestEnv {
            root,
            manage_bin: PathBuf::from(env!("CARGO_BIN_EXE_manage")),
        }
    }
}

fn install_script(root: &Path, name: &str, body: &str) {
    let path = root.join("bin").join(name);
    fs::write(&path, body).expect("Failed to write fake tool");
    let mut perms = fs::metadata(&path).expect("metadata").permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).expect("Failed to chmod fake tool");
}

/// Standard PHP + Node project used across tests
pub fn blog_project() -> Value {
    json!({
        "branch": "main",
        "deploying_user": "blog",
        "supervisor_process": "blog-worker",
        "systemd_service": "php-fpm"
    })
}
