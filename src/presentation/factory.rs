//! Use Case Factory
//!
//! Wires the application layer to real infrastructure.

use crate::application::{dispatch, ActionReport, ActionRequest};
use crate::config::DeployConfig;
use crate::error::ManageResult;
use crate::infrastructure::SystemRunner;

/// Dispatch `request` using real external processes
pub fn run_request(config: &DeployConfig, request: &ActionRequest) -> ManageResult<ActionReport> {
    dispatch(config, request, SystemRunner::new())
}
