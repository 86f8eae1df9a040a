//! Application Layer
//!
//! Use cases that orchestrate the business flow.
//! This layer:
//! - Depends on Domain layer (value objects, policies, ports)
//! - Does NOT contain business rules (those are in Domain)
//! - Coordinates between Infrastructure and Domain
//!
//! ## Use Cases
//!
//! - `ActionUseCase` - Runs one maintenance action against one project
//! - `dispatch` - Privilege check, project lookup and sanity check before the action

pub mod actions;
pub mod commands;
pub mod dispatch;

pub use actions::{ActionOptions, ActionReport, ActionUseCase};
pub use dispatch::{dispatch, ensure_privileges, ActionRequest};
