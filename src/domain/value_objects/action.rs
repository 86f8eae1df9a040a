//! Action value object - the maintenance operation requested for a project

use serde::{Deserialize, Serialize};

/// Maintenance action performed against a single project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Action {
    /// Pull the locked branch into the working tree
    Deploy,
    /// Update composer packages (without dev dependencies)
    UpdatePhp,
    /// Update npm packages
    UpdateNode,
    /// Restart a supervisord program
    RestartSupervisor,
    /// Restart a systemd unit
    RestartService,
    /// Reset the working tree to the revision recorded before the last deploy
    RevertDeployment,
    /// Flip Laravel maintenance mode
    ToggleMaintenance,
    /// Run the forum membership sync
    TrackerSync,
}

impl Action {
    pub const ALL: [Action; 8] = [
        Action::Deploy,
        Action::UpdatePhp,
        Action::UpdateNode,
        Action::RestartSupervisor,
        Action::RestartService,
        Action::RevertDeployment,
        Action::ToggleMaintenance,
        Action::TrackerSync,
    ];

    /// Name as typed on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Action::Deploy => "deploy",
            Action::UpdatePhp => "update-php",
            Action::UpdateNode => "update-node",
            Action::RestartSupervisor => "restart-supervisor",
            Action::RestartService => "restart-service",
            Action::RevertDeployment => "revert-deployment",
            Action::ToggleMaintenance => "toggle-maintenance",
            Action::TrackerSync => "tracker-sync",
        }
    }
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Action {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Action::ALL
            .into_iter()
            .find(|a| a.as_str() == s)
            .ok_or_else(|| format!("invalid action '{}'", s))
    }
}
