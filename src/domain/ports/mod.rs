//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;

pub use command_runner::{CommandOutput, CommandRunner, CommandSpec};

#[cfg(test)]
pub use command_runner::MockRunner;
