//! Persistence for per-project state

mod revision;

pub use revision::{RevisionMarker, MARKER_FILE};
