//! Infrastructure Layer
//!
//! Concrete implementations of domain ports.
//! This layer handles all I/O operations.
//!
//! ## Structure
//!
//! - `process/` - External command execution (SystemRunner)
//! - `repositories/` - On-disk per-project state (revert marker)

pub mod process;
pub mod repositories;

// Re-export for convenience
pub use process::SystemRunner;
pub use repositories::{RevisionMarker, MARKER_FILE};
