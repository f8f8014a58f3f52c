//! Property-based specs.

use crate::prelude::*;
use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
use proptest::strategy::Strategy as _;

/// Lowercase keys over a small alphabet so that collisions are common.
fn key_strategy() -> impl proptest::strategy::Strategy<Value = String> {
    "[abc]{1,3}"
}

fn map_strategy() -> impl proptest::strategy::Strategy<Value = ReplacementMap> {
    proptest::collection::vec((key_strategy(), "[A-Z]{1,3}"), 0..8)
        .prop_map(|pairs| pairs.into_iter().collect::<ReplacementMap>())
}

proptest! {
    /// > Strings containing no key are returned unchanged.
    #[test]
    fn no_key_present_is_identity(map in map_strategy(), haystack in "[x-z ]{0,40}") {
        for strategy in [Strategy::Simultaneous, Strategy::Staged { ceiling: 2 }] {
            prop_assert_eq!(replacer(&map, strategy).replace(&haystack), haystack.clone());
        }
    }

    /// > With values that never contain keys, groupings agree.
    #[test]
    fn grouping_agrees_without_chaining(
        map in map_strategy(),
        haystack in "[abcx]{0,40}",
        ceiling in 1usize..5,
    ) {
        let simultaneous = replacer(&map, Strategy::Simultaneous).replace(&haystack);
        let one_group = replacer(&map, Strategy::staged()).replace(&haystack);
        prop_assert_eq!(&simultaneous, &one_group);

        // Staged groups may pick different keys at overlapping positions, but
        // every key is gone once all groups have run.
        let staged = replacer(&map, Strategy::Staged { ceiling }).replace(&haystack);
        for key in map.keys() {
            prop_assert!(!staged.contains(key), "{:?} left in {:?}", key, staged);
        }
    }

    /// > The key template reproduces the input.
    #[test]
    fn key_template_is_identity(map in map_strategy(), haystack in "[abcx]{0,40}") {
        let out = substitute(&map, &haystack, "{key}").unwrap();
        prop_assert_eq!(out, haystack);
    }

    /// > A single simultaneous pass never leaves a key in place.
    #[test]
    fn simultaneous_removes_every_key(map in map_strategy(), haystack in "[abcx]{0,40}") {
        let out = replacer(&map, Strategy::Simultaneous).replace(&haystack);
        for key in map.keys() {
            prop_assert!(!out.contains(key), "{:?} left in {:?}", key, out);
        }
    }
}
