//! CLI Argument Parsing
//!
//! This module defines the CLI interface using clap.
//!
//! ## Design Notes
//!
//! - One invocation is one action against one project: `manage <PROJECT_KEY> <ACTION>`
//! - Output flags (--json, --color, --verbose) mirror the rest of the tooling

use std::path::PathBuf;

use clap::Parser;

use crate::application::{ActionOptions, ActionRequest};
use crate::domain::value_objects::Action;

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorWhen {
    Auto,
    Always,
    Never,
}

/// Manage project deployments and updates
#[derive(Parser, Debug)]
#[command(name = "manage")]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "Configuration is read from --config, $MANAGE_CONFIG, ./deploy.config.json \
                  or <config dir>/deploy-manager/deploy.config.json, in that order."
)]
pub struct Cli {
    /// Project configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Output format for CI (one JSON object per line)
    #[arg(long)]
    pub json: bool,

    /// Color output mode
    #[arg(long, value_enum)]
    pub color: Option<ColorWhen>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Deploy even when the working tree has local changes
    #[arg(short, long)]
    pub force: bool,

    /// Supervisor program to restart (overrides supervisor_process)
    #[arg(long = "process-name", alias = "process_name", value_name = "NAME")]
    pub process_name: Option<String>,

    /// Key of the project in the configuration
    pub project_key: String,

    /// Action to perform
    #[arg(value_enum)]
    pub action: Action,
}

impl Cli {
    pub fn request(&self) -> ActionRequest {
        ActionRequest::new(self.project_key.clone(), self.action).with_options(
            ActionOptions::new()
                .with_force(self.force)
                .with_process_name(self.process_name.clone()),
        )
    }
}
