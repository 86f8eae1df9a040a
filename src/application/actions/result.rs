//! Action report

use serde::Serialize;

use crate::domain::value_objects::Action;

/// What an action did, for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActionReport {
    pub project: String,
    pub action: Action,
    /// One-line outcome
    pub summary: String,
    /// Intermediate steps worth showing (marker written, migrations ran)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub details: Vec<String>,
    /// Non-fatal problems (failed migration, chown)
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
    /// Revision recorded in the revert marker before a deploy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub previous_revision: Option<String>,
    /// Revision checked out when the action finished
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,
    /// Tool output the user needs to see verbatim
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<String>,
}

impl ActionReport {
    pub fn new(project: &str, action: Action, summary: impl Into<String>) -> Self {
        Self {
            project: project.to_string(),
            action,
            summary: summary.into(),
            details: Vec::new(),
            warnings: Vec::new(),
            previous_revision: None,
            revision: None,
            output: None,
        }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }
}
