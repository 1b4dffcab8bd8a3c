//! Property-based tests for pathname values.
//!
//! Note: The normalize module already has property tests for the normalizer
//! stages. This module focuses on segments and component extraction.

use super::components::extension_of;
use super::normalize::collapse_separators;
use super::segment::Segments;
use crate::Pathname;
use proptest::prelude::*;

fn segment_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        2 => "[a-z0-9_-]{1,8}",
        1 => "[a-z]{0,4}\\.[a-z]{0,3}",
        1 => Just(".".to_string()),
        1 => Just("..".to_string()),
        1 => Just(String::new()),
    ]
}

fn raw_path_strategy() -> impl Strategy<Value = String> {
    (
        any::<bool>(),
        prop::collection::vec(segment_strategy(), 1..8),
        any::<bool>(),
    )
        .prop_map(|(absolute, parts, trailing)| {
            let mut path = parts.join("/");
            if absolute {
                path.insert(0, '/');
            }
            if trailing {
                path.push('/');
            }
            path
        })
        .prop_filter("non-empty", |s| !s.is_empty())
}

fn normalized_strategy() -> impl Strategy<Value = Pathname<'static>> {
    raw_path_strategy()
        .prop_filter_map("normalizable", |s| Pathname::normalized(s.as_bytes()).ok())
}

fn collapse(bytes: &[u8]) -> Vec<u8> {
    let mut out = vec![0; bytes.len()];
    let len = collapse_separators(&mut out, bytes);
    out.truncate(len);
    out
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Rejoining the segments reconstructs the separator-collapsed path
    #[test]
    fn segments_round_trip(path in raw_path_strategy()) {
        let bytes = path.as_bytes();
        let collapsed = collapse(bytes);
        let all_separators = bytes.iter().all(|&b| b == b'/');

        let mut rebuilt = Vec::new();
        if bytes[0] == b'/' {
            rebuilt.push(b'/');
        }
        let parts: Vec<&[u8]> = Segments::new(bytes).map(|s| s.as_bytes()).collect();
        rebuilt.extend_from_slice(&parts.join(&b'/'));
        if !all_separators && bytes.len() > 1 && bytes.ends_with(b"/") {
            rebuilt.push(b'/');
        }

        prop_assert_eq!(rebuilt, collapsed);
    }

    // Normalization through the value type is idempotent
    #[test]
    fn pathname_normalize_idempotent(path in normalized_strategy()) {
        let again = path.normalize().unwrap();
        prop_assert_eq!(&again, &path);
        prop_assert!(again.is_normalised());
    }

    // dirname joined with tailname gives back the path
    #[test]
    fn dirname_tailname_reconstruct(path in normalized_strategy()) {
        if path.as_bytes() != b"." {
            if let (Ok(dir), Ok(tail)) = (path.dirname(), path.tailname()) {
                let joined = dir.join(&tail).unwrap();
                prop_assert_eq!(collapse(joined.as_bytes()), path.as_bytes().to_vec());
            }
        }
    }

    // Without an extension, rootname fails exactly for "/", "." and ".."
    #[test]
    fn rootname_failure_characterized(path in normalized_strategy()) {
        if extension_of(path.as_bytes()).is_empty() {
            let special = matches!(path.as_bytes(), b"/" | b"." | b"..");
            prop_assert_eq!(path.rootname().is_err(), special);
        }
    }

    // A non-empty extension is a suffix of the rootname-stripped path
    #[test]
    fn rootname_plus_extension(path in normalized_strategy()) {
        let ext = path.extension().unwrap();
        if !ext.is_empty() {
            let root = path.rootname().unwrap();
            let mut rebuilt = root.as_bytes().to_vec();
            rebuilt.extend_from_slice(ext.as_bytes());
            prop_assert!(path.as_bytes().starts_with(&rebuilt));
            prop_assert!(path.as_bytes().len() - rebuilt.len() <= 1);
        }
    }

    // filename, when it exists, equals tailname
    #[test]
    fn filename_matches_tailname(path in normalized_strategy()) {
        if let Ok(file) = path.filename() {
            prop_assert_eq!(file, path.tailname().unwrap());
        }
    }
}
