//! Domain Policies
//!
//! Rules deciding whether an action may run against a project.

pub mod sanity;

pub use sanity::{check, CheckContext};
