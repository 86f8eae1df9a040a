//! manage - deploy and maintenance actions for PHP and Node.js projects
//!
//! Usage: manage [OPTIONS] <PROJECT_KEY> <ACTION>
//!
//! Actions:
//!   deploy              Pull the locked branch into the working tree
//!   update-php          composer update --no-interaction --no-dev
//!   update-node         npm update
//!   restart-supervisor  supervisorctl restart <program>
//!   restart-service     systemctl restart <unit>
//!   revert-deployment   Reset to the revision recorded before the last deploy
//!   toggle-maintenance  Laravel maintenance mode on/off
//!   tracker-sync        Forum membership sync

use clap::Parser;
use tracing_subscriber::EnvFilter;

use deploy_manager::presentation::Cli;

mod commands;
mod ui;

use ui::context::UiContext;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ui = UiContext::new(cli.json, cli.verbose, cli.color);

    if let Err(err) = commands::action::cmd_action(&cli, &ui) {
        tracing::debug!(error = ?err, "action failed");
        ui::error::print_error(&err, &ui);
        std::process::exit(ui::error::exit_code(&err));
    }
}

/// Log to stderr; `RUST_LOG` overrides the `-v` count.
fn init_tracing(verbose: u8) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_log_level(verbose)));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}
