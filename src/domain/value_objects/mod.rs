//! Value objects: small, immutable types with no identity

mod action;
mod commit_hash;
mod config_warning;
mod project_kind;

pub use action::Action;
pub use commit_hash::CommitHash;
pub use config_warning::ConfigWarning;
pub use project_kind::{ProjectKind, ARTISAN, COMPOSER_MANIFEST, NODE_MANIFEST};
