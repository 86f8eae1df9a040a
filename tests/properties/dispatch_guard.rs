//! Property tests for dispatch ordering: nothing runs for a bad request.

use std::cell::Cell;
use std::path::Path;

use proptest::prelude::*;
use serde_json::json;

use deploy_manager::{
    dispatch, Action, ActionRequest, CommandOutput, CommandRunner, CommandSpec, DeployConfig,
    ErrorKind, ManageResult,
};

/// Counts calls and reports success for all of them
#[derive(Default)]
struct CountingRunner {
    calls: Cell<usize>,
}

impl CommandRunner for CountingRunner {
    fn run(&self, _spec: &CommandSpec) -> ManageResult<CommandOutput> {
        self.calls.set(self.calls.get() + 1);
        Ok(CommandOutput::success(""))
    }
}

fn key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z]{1,10}").unwrap()
}

fn config() -> DeployConfig {
    let doc = json!({
        "require_root": false,
        "projects": {
            "blog": {"path": "/srv/blog", "branch": "main", "deploying_user": "blog"},
            "forum": {"path": "/srv/forum", "systemd_service": "php-fpm"}
        }
    });
    DeployConfig::from_json(&doc.to_string(), Path::new("deploy.config.json"))
        .unwrap()
        .0
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: An unknown project key fails as a config error before any command runs.
    #[test]
    fn property_unknown_key_runs_nothing(
        key in key().prop_filter("must be unknown", |k| k != "blog" && k != "forum"),
        action_index in 0usize..Action::ALL.len(),
    ) {
        let runner = CountingRunner::default();
        let request = ActionRequest::new(key, Action::ALL[action_index]);

        let err = dispatch(&config(), &request, &runner).unwrap_err();

        prop_assert_eq!(err.kind(), ErrorKind::Config);
        prop_assert_eq!(runner.calls.get(), 0);
    }
}
