//! Presentation Layer
//!
//! This layer handles:
//! - CLI argument parsing (via clap)
//! - Wiring use cases to infrastructure
//!
//! ## Structure
//!
//! - `cli` - Argument definitions
//! - `factory` - Creates use cases with proper dependencies

pub mod cli;
pub mod factory;

pub use cli::{Cli, ColorWhen};
pub use factory::run_request;
