//! Property tests for configuration parsing and validation.

use std::path::Path;

use proptest::prelude::*;
use serde_json::json;

use deploy_manager::{DeployConfig, ManageError};

const RELATIVE_PATH: &str = "[A-Za-z0-9._-]{1,12}(/[A-Za-z0-9._-]{1,12}){0,3}";

fn relative_path() -> impl Strategy<Value = String> {
    proptest::string::string_regex(RELATIVE_PATH).unwrap()
}

fn project_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-z][a-z0-9_-]{0,15}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: A project path that is not absolute never validates.
    #[test]
    fn property_relative_paths_rejected(key in project_key(), path in relative_path()) {
        let doc = json!({"projects": {key: {"path": path}}}).to_string();

        let err = DeployConfig::from_json(&doc, Path::new("deploy.config.json")).unwrap_err();
        let is_invalid_field = matches!(err, ManageError::InvalidField { field: "path", .. });
        prop_assert!(is_invalid_field);
    }

    /// PROPERTY: Absolute paths validate and the project resolves by key.
    #[test]
    fn property_absolute_paths_resolve(key in project_key(), path in relative_path()) {
        let absolute = format!("/{path}");
        let doc = json!({"projects": {key.clone(): {"path": absolute}}}).to_string();

        let file = Path::new("deploy.config.json");
        let (config, warnings) = DeployConfig::from_json(&doc, file).unwrap();
        prop_assert!(warnings.is_empty());
        let project = config.project(&key).unwrap();
        let expected = Path::new(&absolute).to_path_buf();
        prop_assert_eq!(project.entry.path.unwrap(), expected);
    }

    /// PROPERTY: Parsing arbitrary text never panics.
    #[test]
    fn property_parse_never_panics(s in "(?s).{0,256}") {
        let _ = DeployConfig::from_json(&s, Path::new("deploy.config.json"));
    }
}
