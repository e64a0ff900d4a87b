//! Property-based tests for Component Extraction
//!
//! Tests invariants:
//! - Normalization is idempotent
//! - Every extracted name is a member of the active allowlist
//! - No output ever contains duplicate names
//! - Extraction never panics, whatever the input

use proptest::prelude::*;

use crate::extract::{extract_components, normalizer, ExtractOptions};
use crate::profile::GameProfile;

proptest! {
    #[test]
    fn normalization_is_idempotent(s in "\\PC*") {
        let once = normalizer::normalize(&s);
        let twice = normalizer::normalize(&once);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn names_are_always_on_the_allowlist(s in "\\PC{0,500}") {
        let profile = GameProfile::default();
        let components = extract_components(&s, &ExtractOptions::default());
        for component in &components {
            prop_assert!(
                profile.allowlist.iter().any(|entry| entry == &component.name),
                "off-list name {:?} extracted from fuzz input",
                component.name
            );
        }
    }

    #[test]
    fn output_never_contains_duplicate_names(s in "\\PC{0,500}") {
        let components = extract_components(&s, &ExtractOptions::default());
        let mut names: Vec<&str> = components.iter().map(|c| c.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        prop_assert_eq!(names.len(), components.len());
    }

    // Inventory-shaped fuzz: lines that look like listings with arbitrary
    // labels must still never escape the allowlist.
    #[test]
    fn inventory_shaped_lines_stay_on_the_allowlist(
        count in 0u32..1000,
        label in "[A-Za-z][A-Za-z ]{0,30}",
    ) {
        let profile = GameProfile::default();
        let text = format!("Components\n{} {}\n{}: {}", count, label, label, count);
        let components = extract_components(&text, &ExtractOptions::default());
        for component in &components {
            prop_assert!(profile.allowlist.iter().any(|entry| entry == &component.name));
        }
    }

    #[test]
    fn counts_survive_the_round_trip_for_known_components(count in 1u32..1000) {
        let text = format!("Components\n{} Lord cards\n1 Game board\n10 Key tokens", count);
        let components = extract_components(&text, &ExtractOptions::default());
        let lords = components.iter().find(|c| c.name == "Lord cards");
        prop_assert_eq!(lords.and_then(|c| c.count), Some(count));
    }
}
