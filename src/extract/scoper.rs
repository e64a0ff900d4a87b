//! Section Scoper
//!
//! Locates the contents/components listing inside the full rulebook text.
//! When no start anchor is present the whole text is scanned, trading
//! precision for recall; a start anchor without an end anchor scopes to the
//! end of the text.

use crate::profile::GameProfile;

/// Narrow the text to the contents section bounded by the profile's anchors.
pub fn scope<'a>(text: &'a str, profile: &GameProfile) -> &'a str {
    // ASCII lowering keeps byte offsets aligned with the original text.
    let lower = text.to_ascii_lowercase();

    let start = match earliest_anchor(&lower, &profile.start_anchors) {
        Some((pos, len)) => pos + len,
        None => return text,
    };

    let end = earliest_anchor(&lower[start..], &profile.end_anchors)
        .map(|(pos, _)| start + pos)
        .unwrap_or(text.len());

    &text[start..end]
}

/// Earliest case-insensitive occurrence of any anchor. Ties on position go
/// to the longer anchor, so "Contents & Setup" beats its "Contents" prefix.
fn earliest_anchor(haystack_lower: &str, anchors: &[String]) -> Option<(usize, usize)> {
    let mut best: Option<(usize, usize)> = None;
    for anchor in anchors {
        let needle = anchor.to_ascii_lowercase();
        if needle.is_empty() {
            continue;
        }
        if let Some(pos) = haystack_lower.find(&needle) {
            let better = match best {
                Some((best_pos, best_len)) => {
                    pos < best_pos || (pos == best_pos && needle.len() > best_len)
                }
                None => true,
            };
            if better {
                best = Some((pos, needle.len()));
            }
        }
    }
    best
}
