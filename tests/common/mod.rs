//! Common test utilities for CLI tests.
//!
//! This module provides:
//! - `TestEnv`: isolated projects, config file and fake external tools
//! - Assertion macros: `assert_output_contains!`, `assert_exit_code!`, etc.

#![allow(dead_code)]

pub mod assertions;
#[cfg(unix)]
pub mod env;

#[cfg(unix)]
pub use env::*;
