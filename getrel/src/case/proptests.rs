//! Property-based tests for case-sensitivity guessing.

use super::fallback::os_default;
use super::guess::guess_with;
use super::variant::differently_cased;
use super::CaseSensitivity;
use crate::relative::{relative_path, RelativeOptions};
use proptest::prelude::*;
use std::io;

fn path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-Z0-9_-]{1,10}", 1..=5)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn mixed_script_path_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-zA-ZäÄöÖßÉé0-9]{1,8}", 1..=4)
        .prop_map(|parts| format!("/{}", parts.join("/")))
}

fn os_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("macos".to_string()),
        Just("windows".to_string()),
        Just("linux".to_string()),
        "[a-z]{1,8}",
    ]
}

proptest! {
    /// The variant differs from the path only in case.
    #[test]
    fn variant_differs_only_in_case(s in path_strategy()) {
        if let Some(variant) = differently_cased(&s) {
            prop_assert_ne!(&variant, &s);
            prop_assert_eq!(variant.to_lowercase(), s.to_lowercase());
        }
    }

    /// A variant exists exactly when the path has a cased letter.
    #[test]
    fn variant_exists_iff_letters(s in path_strategy()) {
        let has_letters = s.chars().any(|c| c.is_ascii_alphabetic());
        prop_assert_eq!(differently_cased(&s).is_some(), has_letters);
    }

    /// A filesystem where every spelling is one object is insensitive
    /// whenever some path has letters.
    #[test]
    fn same_object_everywhere_is_insensitive(
        os in os_strategy(),
        paths in prop::collection::vec(path_strategy(), 1..4),
    ) {
        let probe = |_: &str| -> io::Result<u8> { Ok(0) };
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        let expected = if refs.iter().any(|p| differently_cased(p).is_some()) {
            false
        } else {
            os_default(&os)
        };
        prop_assert_eq!(guess_with(&os, &probe, &refs), expected);
    }

    /// A filesystem where nothing resolves always gives the OS default.
    #[test]
    fn nothing_resolves_is_os_default(
        os in os_strategy(),
        paths in prop::collection::vec(path_strategy(), 0..4),
    ) {
        let probe = |_: &str| -> io::Result<u8> {
            Err(io::Error::new(io::ErrorKind::NotFound, "missing"))
        };
        let refs: Vec<&str> = paths.iter().map(String::as_str).collect();
        prop_assert_eq!(guess_with(&os, &probe, &refs), os_default(&os));
    }

    /// Under a case-insensitive policy, lower-casing the inputs first does
    /// not change the result.
    #[test]
    fn insensitive_result_ignores_input_case(
        target in prop_oneof![path_strategy(), mixed_script_path_strategy()],
        base in prop_oneof![path_strategy(), mixed_script_path_strategy()],
    ) {
        let insensitive = |target: &str, base: &str| {
            let options = RelativeOptions::new(target)
                .with_relative_to(Some(base.into()))
                .with_case_sensitivity(CaseSensitivity::False);
            relative_path(&options, |_| true).ok()
        };
        prop_assert_eq!(
            insensitive(&target, &base),
            insensitive(&target.to_lowercase(), &base.to_lowercase())
        );
    }
}
