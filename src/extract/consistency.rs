//! Consistency Checker
//!
//! Cross-checks parenthetical breakdowns against the stated component
//! count. A mismatch is a diagnostic for rulebook-authoring quality, not a
//! correctness gate: the component is returned unchanged either way.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::patterns;
use super::Component;

/// A breakdown whose parts do not sum to the stated count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakdownMismatch {
    /// Canonical component name.
    pub name: String,
    /// The count stated on the inventory line.
    pub stated: u32,
    /// What the breakdown parts actually sum to.
    pub parts_sum: u32,
    /// The breakdown text.
    pub note: String,
}

impl fmt::Display for BreakdownMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Breakdown for {:?} sums to {} but the stated count is {} ({})",
            self.name, self.parts_sum, self.stated, self.note
        )
    }
}

/// Check one component's breakdown, if it carries one.
///
/// Returns `None` when there is nothing to check: no count, no note, or a
/// note with no parsable breakdown.
pub fn check_breakdown(component: &Component) -> Option<BreakdownMismatch> {
    let stated = component.count?;
    let note = component.note.as_deref()?;

    let parts = breakdown_parts(note);
    if parts.is_empty() {
        return None;
    }

    let parts_sum: u32 = parts.iter().sum();
    if parts_sum == stated {
        return None;
    }

    Some(BreakdownMismatch {
        name: component.name.clone(),
        stated,
        parts_sum,
        note: note.to_string(),
    })
}

/// Parse the piece counts out of a breakdown note.
///
/// "N of value V" entries count N pieces of face value V, so only the
/// leading figures are summed. Plain lists ("65 Allies & 6 Monsters") sum
/// every standalone integer. A single stray number is not a breakdown.
pub fn breakdown_parts(note: &str) -> Vec<u32> {
    let valued: Vec<u32> = patterns::VALUED_PART_PATTERN
        .captures_iter(note)
        .filter_map(|caps| caps.name("count").and_then(|m| m.as_str().parse().ok()))
        .collect();
    if !valued.is_empty() {
        return valued;
    }

    let plain: Vec<u32> = patterns::PART_COUNT_PATTERN
        .find_iter(note)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if plain.len() >= 2 {
        plain
    } else {
        Vec::new()
    }
}
