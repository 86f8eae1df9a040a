//! Action command handler
//!
//! Loads the configuration, reports unknown keys, then dispatches the
//! requested action and renders its report.

use anyhow::Result;

use deploy_manager::config::{resolve_config_path, DeployConfig};
use deploy_manager::presentation::{run_request, Cli};

use crate::ui::context::UiContext;
use crate::ui::output::{print_config_warnings, print_report};

pub fn cmd_action(cli: &Cli, ui: &UiContext) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref());
    tracing::debug!(path = %config_path.display(), "loading configuration");

    let (config, warnings) = DeployConfig::load_with_warnings(&config_path)?;
    for w in &warnings {
        tracing::info!(key = %w.key, file = %w.file.display(), "unknown configuration key");
    }
    print_config_warnings(ui, &warnings);

    let report = run_request(&config, &cli.request())?;
    print_report(ui, &report);
    Ok(())
}
