//! Domain Layer
//!
//! Actions, project kinds and the rules that tie them together.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (Action, CommitHash, ProjectKind)
//! - `policies/` - Pre-flight rules (sanity checks per action)
//! - `ports/` - Interface definitions for infrastructure (CommandRunner)
//!
//! External processes are only reached through the `CommandRunner` port; the
//! sanity policy reads the filesystem but never writes to it.

pub mod policies;
pub mod ports;
pub mod value_objects;
