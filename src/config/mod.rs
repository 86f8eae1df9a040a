//! Configuration module
//!
//! Lookup order for the configuration file:
//! 1. `--config PATH` (highest priority)
//! 2. `MANAGE_CONFIG` environment variable
//! 3. `./deploy.config.json`
//! 4. `<user config dir>/deploy-manager/deploy.config.json`

mod loader;
mod types;

pub use crate::domain::value_objects::ConfigWarning;

pub use loader::{resolve_config_path, CONFIG_ENV_VAR, CONFIG_FILE_NAME};
pub use types::{
    DeployConfig, Project, ProjectEntry, DEFAULT_DATABASE_OWNER, DEFAULT_PHP_BINARY,
    DEFAULT_TRACKER_COMMAND,
};
