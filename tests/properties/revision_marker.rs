//! Property tests for the revert marker file.

use proptest::prelude::*;
use tempfile::tempdir;

use deploy_manager::{CommitHash, RevisionMarker};

fn hex_hash() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[0-9a-fA-F]{4,64}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Any valid hash written to the marker reads back unchanged.
    #[test]
    fn property_marker_round_trip(raw in hex_hash()) {
        let dir = tempdir().unwrap();
        let marker = RevisionMarker::for_project(dir.path());
        let hash = CommitHash::parse(&raw).unwrap();

        marker.write(&hash).unwrap();

        prop_assert_eq!(marker.read().unwrap(), hash);
    }

    /// PROPERTY: Hash parsing never panics and only accepts hex.
    #[test]
    fn property_hash_parse_is_strict(s in "(?s).{0,80}") {
        if let Some(hash) = CommitHash::parse(&s) {
            prop_assert!(hash.as_str().chars().all(|c| c.is_ascii_hexdigit()));
            prop_assert!((4..=64).contains(&hash.as_str().len()));
        }
    }
}
