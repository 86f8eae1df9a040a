//! Per-invocation options for actions

/// Flags from the command line that alter how an action runs
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOptions {
    /// Deploy over a dirty working tree
    pub force: bool,
    /// Supervisor program name, overriding `supervisor_process`
    pub process_name: Option<String>,
}

impl ActionOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_force(mut self, force: bool) -> Self {
        self.force = force;
        self
    }

    pub fn with_process_name(mut self, name: Option<String>) -> Self {
        self.process_name = name;
        self
    }
}
