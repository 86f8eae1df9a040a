//! Property tests for the per-action sanity rules.

use proptest::prelude::*;
use tempfile::tempdir;

use deploy_manager::domain::policies::{check, CheckContext};
use deploy_manager::{Action, ErrorKind, Project, ProjectEntry};

const MANIFESTS: [&str; 3] = ["composer.json", "package.json", "artisan"];

fn manifests() -> impl Strategy<Value = (bool, bool, bool)> {
    (any::<bool>(), any::<bool>(), any::<bool>())
}

fn user() -> impl Strategy<Value = Option<String>> {
    proptest::option::of(proptest::string::string_regex("[a-z]{1,8}").unwrap())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: update-node on a blocked project fails whatever else is configured.
    #[test]
    fn property_blocked_npm_always_refused(
        (composer, package, artisan) in manifests(),
        deploying_user in user(),
        with_path in any::<bool>(),
    ) {
        let dir = tempdir().unwrap();
        for (present, name) in [composer, package, artisan].into_iter().zip(MANIFESTS) {
            if present {
                std::fs::write(dir.path().join(name), "{}").unwrap();
            }
        }

        let entry = ProjectEntry {
            path: with_path.then(|| dir.path().to_path_buf()),
            deploying_user,
            block_npm_updates: true,
            ..ProjectEntry::default()
        };
        let project = Project::new("shop", entry);

        let err = check(&project, Action::UpdateNode, CheckContext::default()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Mismatch);
    }

    /// PROPERTY: A manifest-based action fails as a mismatch when its manifest is absent.
    #[test]
    fn property_missing_manifest_is_mismatch(
        action_index in 0usize..3,
        (composer, package, artisan) in manifests(),
    ) {
        let (action, required) = [
            (Action::UpdatePhp, "composer.json"),
            (Action::UpdateNode, "package.json"),
            (Action::ToggleMaintenance, "artisan"),
        ][action_index];

        let dir = tempdir().unwrap();
        for (present, name) in [composer, package, artisan].into_iter().zip(MANIFESTS) {
            if present && name != required {
                std::fs::write(dir.path().join(name), "{}").unwrap();
            }
        }

        let entry = ProjectEntry {
            path: Some(dir.path().to_path_buf()),
            deploying_user: Some("www".to_string()),
            ..ProjectEntry::default()
        };
        let project = Project::new("blog", entry);

        let err = check(&project, action, CheckContext::default()).unwrap_err();
        prop_assert_eq!(err.kind(), ErrorKind::Mismatch);
        prop_assert!(err.to_string().contains(required));
    }
}
