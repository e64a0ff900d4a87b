//! Canonicalizer
//!
//! Maps raw candidate labels onto the profile allowlist and folds duplicate
//! candidates down to one component per canonical name. Labels that resolve
//! to nothing are silently dropped; this is the net that catches narrative
//! false positives surviving the line classifier.

use indexmap::IndexMap;

use super::classifier::{Candidate, MatchKind};
use super::patterns;
use super::Component;
use crate::profile::GameProfile;

/// Canonicalize candidates in first-match order.
///
/// When two candidates resolve to the same canonical name, the stronger
/// match kind wins; equal kinds keep the first occurrence. The surviving
/// component stays at the position of the first occurrence.
pub fn canonicalize(candidates: Vec<Candidate>, profile: &GameProfile) -> Vec<Component> {
    let mut by_name: IndexMap<String, (Component, MatchKind)> = IndexMap::new();

    for candidate in candidates {
        let Some(canonical) = profile.resolve(&candidate.raw_name) else {
            continue;
        };
        let component = to_component(canonical, &candidate);

        match by_name.get_mut(canonical) {
            Some((existing, existing_kind)) => {
                if candidate.kind < *existing_kind {
                    *existing = component;
                    *existing_kind = candidate.kind;
                }
            }
            None => {
                by_name.insert(canonical.to_string(), (component, candidate.kind));
            }
        }
    }

    by_name
        .into_iter()
        .map(|(_, (component, _))| component)
        .collect()
}

fn to_component(canonical: &str, candidate: &Candidate) -> Component {
    let is_supply = candidate
        .note
        .as_deref()
        .map(note_marks_supply)
        .unwrap_or(false);

    Component {
        name: canonical.to_string(),
        count: if is_supply { None } else { candidate.count },
        note: candidate.note.clone(),
    }
}

/// Whether a note marks an uncounted supply quantity ("supply", "bank",
/// "used for the Treasury", ...). Only notes reach this point, so the same
/// words in free prose are never consulted.
fn note_marks_supply(note: &str) -> bool {
    let lower = note.to_lowercase();
    patterns::SUPPLY_MARKERS
        .iter()
        .any(|marker| lower.contains(marker))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn candidate(raw_name: &str, count: Option<u32>, note: Option<&str>, kind: MatchKind) -> Candidate {
        Candidate {
            raw_name: raw_name.to_string(),
            count,
            note: note.map(str::to_string),
            kind,
        }
    }

    #[test]
    fn test_allowlist_and_synonym_mapping() {
        let profile = GameProfile::default();
        let components = canonicalize(
            vec![
                candidate("game board", Some(1), None, MatchKind::CountName),
                candidate("Lords", Some(35), None, MatchKind::CountName),
            ],
            &profile,
        );
        assert_eq!(components.len(), 2);
        assert_eq!(components[0].name, "Game board");
        assert_eq!(components[1].name, "Lord cards");
    }

    #[test]
    fn test_off_list_labels_silently_dropped() {
        let profile = GameProfile::default();
        let components = canonicalize(
            vec![
                candidate("Threat token", Some(1), None, MatchKind::CountName),
                candidate("Pearls", None, Some("supply"), MatchKind::NameParenthetical),
            ],
            &profile,
        );
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].name, "Pearls");
    }

    #[test]
    fn test_supply_marker_clears_count() {
        let profile = GameProfile::default();
        let components = canonicalize(
            vec![candidate(
                "Plastic cups",
                Some(4),
                Some("used for the Treasury"),
                MatchKind::CountName,
            )],
            &profile,
        );
        assert_eq!(components[0].count, None);
        assert_eq!(components[0].note.as_deref(), Some("used for the Treasury"));
    }

    #[test]
    fn test_duplicate_stronger_kind_wins() {
        let profile = GameProfile::default();
        let components = canonicalize(
            vec![
                candidate("Game board", Some(2), None, MatchKind::Lenient),
                candidate("Game Board", Some(1), None, MatchKind::CountName),
            ],
            &profile,
        );
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].count, Some(1));
    }

    #[test]
    fn test_duplicate_equal_kind_keeps_first() {
        let profile = GameProfile::default();
        let components = canonicalize(
            vec![
                candidate("Key tokens", Some(10), None, MatchKind::CountName),
                candidate("Key token", Some(99), None, MatchKind::CountName),
            ],
            &profile,
        );
        assert_eq!(components.len(), 1);
        assert_eq!(components[0].count, Some(10));
    }

    #[test]
    fn test_output_preserves_first_match_order() {
        let profile = GameProfile::default();
        let components = canonicalize(
            vec![
                candidate("Pearls", None, Some("supply"), MatchKind::NameParenthetical),
                candidate("Game board", Some(1), None, MatchKind::Lenient),
                // Stronger duplicate arrives later; position must not move.
                candidate("Pearls", None, Some("supply"), MatchKind::CountName),
            ],
            &profile,
        );
        assert_eq!(components[0].name, "Pearls");
        assert_eq!(components[1].name, "Game board");
    }
}
