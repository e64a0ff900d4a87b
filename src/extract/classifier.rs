//! Line Classifier
//!
//! Two-pass classification of scoped lines into candidate components.
//! The strict pass favors precision; the lenient pass trades precision for
//! recall and only runs when the strict pass comes up short. Exclusion
//! patterns are checked before either pass and always win.

use serde::{Deserialize, Serialize};

use super::patterns;
use crate::profile::GameProfile;

// ============================================================================
// Types
// ============================================================================

/// How a candidate line matched. Declared strongest-first: the derived
/// ordering is the confidence rank used for duplicate resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MatchKind {
    /// Strict pattern 1: leading count followed by a label.
    CountName,
    /// Strict pattern 2: label with a parenthetical detail.
    NameParenthetical,
    /// Strict pattern 3: label, separator, count.
    NameSeparatorCount,
    /// Any lenient-pass match.
    Lenient,
}

impl MatchKind {
    pub fn is_strict(&self) -> bool {
        !matches!(self, Self::Lenient)
    }
}

/// A classified inventory line, not yet canonicalized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The label as it appeared in the text.
    pub raw_name: String,
    /// Parsed quantity, if the pattern carried one.
    pub count: Option<u32>,
    /// Parenthetical detail or supply marker text.
    pub note: Option<String>,
    /// Which pattern matched.
    pub kind: MatchKind,
}

// ============================================================================
// Strict pass
// ============================================================================

/// Classify lines with the high-precision patterns, first match per line.
pub fn classify_strict(lines: &[&str], profile: &GameProfile) -> Vec<Candidate> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !is_excluded(line))
        .filter_map(|line| match_strict(line, profile))
        .collect()
}

fn match_strict(line: &str, profile: &GameProfile) -> Option<Candidate> {
    if let Some(caps) = patterns::COUNT_NAME_PATTERN.captures(line) {
        let count: u32 = caps.name("count")?.as_str().parse().ok()?;
        let raw_name = caps
            .name("name")?
            .as_str()
            .trim_matches(|c: char| c == '-' || c.is_whitespace())
            .to_string();
        if raw_name.is_empty() {
            return None;
        }
        return Some(Candidate {
            raw_name,
            count: Some(count),
            note: capture_note(&caps),
            kind: MatchKind::CountName,
        });
    }

    if let Some(caps) = patterns::NAME_PAREN_PATTERN.captures(line) {
        let raw_name = caps.name("name")?.as_str().trim();
        // A bare "Label (detail)" is only inventory when the label ends in
        // a component noun the profile knows about.
        if ends_in_recognized_noun(raw_name, profile) {
            return Some(Candidate {
                raw_name: raw_name.to_string(),
                count: None,
                note: capture_note(&caps),
                kind: MatchKind::NameParenthetical,
            });
        }
    }

    if let Some(caps) = patterns::NAME_SEP_COUNT_PATTERN.captures(line) {
        let count: u32 = caps.name("count")?.as_str().parse().ok()?;
        let raw_name = caps.name("name")?.as_str().trim().to_string();
        return Some(Candidate {
            raw_name,
            count: Some(count),
            note: None,
            kind: MatchKind::NameSeparatorCount,
        });
    }

    None
}

// ============================================================================
// Lenient pass
// ============================================================================

/// Classify lines with the looser fallback patterns. Gated by the pipeline
/// on the strict pass yielding too few candidates; each line still matches
/// exactly one pattern, never a mid-line mix.
pub fn classify_lenient(lines: &[&str]) -> Vec<Candidate> {
    lines
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !is_excluded(line))
        .filter_map(match_lenient)
        .collect()
}

fn match_lenient(line: &str) -> Option<Candidate> {
    if let Some(caps) = patterns::MULTIPLIER_PATTERN.captures(line) {
        return Some(Candidate {
            raw_name: caps.name("name")?.as_str().trim().to_string(),
            count: caps.name("count").and_then(|m| m.as_str().parse().ok()),
            note: None,
            kind: MatchKind::Lenient,
        });
    }

    if let Some(caps) = patterns::BULLET_ITEM_PATTERN.captures(line) {
        return Some(Candidate {
            raw_name: caps.name("name")?.as_str().trim().to_string(),
            count: caps.name("count").and_then(|m| m.as_str().parse().ok()),
            note: None,
            kind: MatchKind::Lenient,
        });
    }

    // Simple colon/dash split: "Pearls: supply", "Meeples - 12".
    if let Some((name, value)) = split_separator(line) {
        let name = name.trim();
        let value = value.trim();
        if name.is_empty() || value.is_empty() {
            return None;
        }
        if let Ok(count) = value.parse::<u32>() {
            return Some(Candidate {
                raw_name: name.to_string(),
                count: Some(count),
                note: None,
                kind: MatchKind::Lenient,
            });
        }
        if patterns::SUPPLY_MARKERS
            .iter()
            .any(|marker| value.eq_ignore_ascii_case(marker))
        {
            return Some(Candidate {
                raw_name: name.to_string(),
                count: None,
                note: Some(value.to_string()),
                kind: MatchKind::Lenient,
            });
        }
    }

    None
}

fn split_separator(line: &str) -> Option<(&str, &str)> {
    line.split_once(':').or_else(|| line.split_once(" - "))
}

fn capture_note(caps: &regex::Captures<'_>) -> Option<String> {
    caps.name("note")
        .map(|m| m.as_str().trim().to_string())
        .filter(|note| !note.is_empty())
}

// ============================================================================
// Exclusions
// ============================================================================

/// Exclusion wins over any inventory pattern.
pub fn is_excluded(line: &str) -> bool {
    let lower = line.to_lowercase();

    if patterns::CAPTION_PHRASES
        .iter()
        .any(|phrase| lower.contains(phrase))
    {
        return true;
    }

    if patterns::ORDINAL_SPACE_PATTERN.is_match(line) {
        return true;
    }

    patterns::INSTRUCTION_VERB_PATTERN.is_match(line) && reads_as_sentence(line)
}

/// A bare inventory line is short and unpunctuated; gameplay prose is not.
fn reads_as_sentence(line: &str) -> bool {
    line.trim_end().ends_with('.') || line.split_whitespace().count() > 5
}

fn ends_in_recognized_noun(name: &str, profile: &GameProfile) -> bool {
    name.split_whitespace()
        .last()
        .map(|word| profile.is_recognized_noun(word))
        .unwrap_or(false)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn strict(line: &str) -> Option<Candidate> {
        match_strict(line, &GameProfile::default())
    }

    // ========================================================================
    // Strict pattern tests
    // ========================================================================

    #[test]
    fn test_strict_count_name() {
        let c = strict("1 Game board").unwrap();
        assert_eq!(c.raw_name, "Game board");
        assert_eq!(c.count, Some(1));
        assert_eq!(c.note, None);
        assert_eq!(c.kind, MatchKind::CountName);
    }

    #[test]
    fn test_strict_count_name_with_breakdown() {
        let c = strict("71 Exploration cards (65 Allies & 6 Monsters)").unwrap();
        assert_eq!(c.raw_name, "Exploration cards");
        assert_eq!(c.count, Some(71));
        assert_eq!(c.note.as_deref(), Some("65 Allies & 6 Monsters"));
    }

    #[test]
    fn test_strict_name_paren_requires_recognized_noun() {
        let c = strict("Pearls (supply)").unwrap();
        assert_eq!(c.raw_name, "Pearls");
        assert_eq!(c.count, None);
        assert_eq!(c.note.as_deref(), Some("supply"));
        assert_eq!(c.kind, MatchKind::NameParenthetical);

        // "Setup" is not a component noun, so this stays prose.
        assert!(strict("Setup (see page 4)").is_none());
    }

    #[test]
    fn test_strict_name_separator_count() {
        let c = strict("Game Board: 1").unwrap();
        assert_eq!(c.raw_name, "Game Board");
        assert_eq!(c.count, Some(1));
        assert_eq!(c.kind, MatchKind::NameSeparatorCount);

        let c = strict("Cards - 50").unwrap();
        assert_eq!(c.raw_name, "Cards");
        assert_eq!(c.count, Some(50));
    }

    #[test]
    fn test_strict_plain_prose_does_not_match() {
        assert!(strict("Each player takes a cup").is_none());
        assert!(strict("The Treasury sits beside the board").is_none());
    }

    // ========================================================================
    // Exclusion tests
    // ========================================================================

    #[test]
    fn test_exclusion_captions() {
        assert!(is_excluded("Front of a Lord card"));
        assert!(is_excluded("Back of the board"));
        assert!(is_excluded("Example: 3 Pearls"));
        assert!(is_excluded("The key icon"));
        assert!(is_excluded("Illustration of the Treasury"));
    }

    #[test]
    fn test_exclusion_ordinal_space_rewards() {
        assert!(is_excluded("On the 6th space, they win 2 Pearls."));
    }

    #[test]
    fn test_exclusion_instruction_verbs_in_sentences() {
        assert!(is_excluded("Each player draws 6 Exploration cards."));
        assert!(is_excluded("Shuffle the Lord cards and place them face down."));
    }

    #[test]
    fn test_bare_inventory_line_with_verb_word_is_kept() {
        // Short, unpunctuated lines are inventory even when a word collides
        // with the verb list.
        assert!(!is_excluded("10 Draw cards"));
        let c = strict("10 Draw cards").unwrap();
        assert_eq!(c.count, Some(10));
    }

    #[test]
    fn test_excluded_line_never_classified() {
        let profile = GameProfile::default();
        let lines = ["On the 6th space, they win 2 Pearls."];
        assert!(classify_strict(&lines, &profile).is_empty());
        assert!(classify_lenient(&lines).is_empty());
    }

    // ========================================================================
    // Lenient pattern tests
    // ========================================================================

    #[test]
    fn test_lenient_multiplier() {
        let c = match_lenient("3x Meeple").unwrap();
        assert_eq!(c.raw_name, "Meeple");
        assert_eq!(c.count, Some(3));
        assert_eq!(c.kind, MatchKind::Lenient);
    }

    #[test]
    fn test_lenient_bullet_item() {
        let c = match_lenient("- 20 Tokens").unwrap();
        assert_eq!(c.raw_name, "Tokens");
        assert_eq!(c.count, Some(20));

        let c = match_lenient("- Pearls").unwrap();
        assert_eq!(c.raw_name, "Pearls");
        assert_eq!(c.count, None);
    }

    #[test]
    fn test_lenient_colon_split_supply() {
        let c = match_lenient("Pearls: supply").unwrap();
        assert_eq!(c.raw_name, "Pearls");
        assert_eq!(c.count, None);
        assert_eq!(c.note.as_deref(), Some("supply"));
    }

    #[test]
    fn test_lenient_colon_split_non_quantity_value_dropped() {
        assert!(match_lenient("Setup: place the board").is_none());
    }
}
