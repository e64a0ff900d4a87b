//! Component Extraction Pipeline
//!
//! Turns normalized rulebook text into a canonical component list:
//!
//! ```text
//! raw text -> normalizer -> scoper -> classifier (strict)
//!          -> [lenient fallback when strict underperforms]
//!          -> canonicalizer -> consistency check -> Vec<Component>
//! ```
//!
//! The pipeline never fails on malformed input. Empty or matchless text
//! produces an empty list and the caller decides what that means; breakdown
//! mismatches are logged, not raised.

pub mod canonicalizer;
pub mod classifier;
pub mod consistency;
pub mod normalizer;
pub mod patterns;
pub mod scoper;

use std::borrow::Cow;

use serde::{Deserialize, Serialize};

use crate::profile::GameProfile;

pub use classifier::{Candidate, MatchKind};
pub use consistency::BreakdownMismatch;

// ============================================================================
// Types
// ============================================================================

/// A physical game component extracted from a rulebook contents listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    /// Canonical label, always a member of the active profile's allowlist.
    pub name: String,
    /// Parsed quantity. `None` when unspecified or drawn from a supply.
    pub count: Option<u32>,
    /// Free-text annotation: a parenthetical breakdown, a supply marker, etc.
    pub note: Option<String>,
}

/// Options for a single extraction call.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Log pipeline stages at debug level.
    pub verbose: bool,
    /// Permit the lenient fallback pass when strict mode underperforms.
    pub lenient: bool,
    /// Strict-pass candidate count below which the lenient pass runs.
    pub min_components: usize,
    /// Game profile to extract against. `None` uses the built-in default.
    pub profile: Option<GameProfile>,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            verbose: false,
            lenient: true,
            min_components: 3,
            profile: None,
        }
    }
}

// ============================================================================
// Pipeline
// ============================================================================

/// Extract the component list from raw rulebook text.
///
/// Breakdown mismatches are logged as warnings and otherwise discarded; the
/// affected components are still returned unchanged.
pub fn extract_components(text: &str, options: &ExtractOptions) -> Vec<Component> {
    let (components, mismatches) = extract_components_with_warnings(text, options);
    for mismatch in &mismatches {
        log::warn!("{}", mismatch);
    }
    components
}

/// Extract the component list along with any breakdown mismatches, for
/// callers that surface diagnostics themselves.
pub fn extract_components_with_warnings(
    text: &str,
    options: &ExtractOptions,
) -> (Vec<Component>, Vec<BreakdownMismatch>) {
    let profile = active_profile(options);

    let normalized = normalizer::normalize(text);
    if normalized.trim().is_empty() {
        if options.verbose {
            log::debug!("No text content after normalization");
        }
        return (Vec::new(), Vec::new());
    }

    let scoped = scoper::scope(&normalized, &profile);
    let lines: Vec<&str> = scoped.lines().collect();

    let mut candidates = classifier::classify_strict(&lines, &profile);
    if options.verbose {
        log::debug!(
            "Strict pass matched {} of {} scoped lines",
            candidates.len(),
            lines.len()
        );
    }

    if options.lenient && candidates.len() < options.min_components {
        let lenient = classifier::classify_lenient(&lines);
        if options.verbose {
            log::debug!("Lenient fallback matched {} lines", lenient.len());
        }
        candidates.extend(lenient);
    }

    let components = canonicalizer::canonicalize(candidates, &profile);
    let mismatches: Vec<BreakdownMismatch> = components
        .iter()
        .filter_map(consistency::check_breakdown)
        .collect();

    (components, mismatches)
}

/// The profile to extract against. A missing or empty-allowlist profile
/// falls back to the built-in default rather than failing.
fn active_profile(options: &ExtractOptions) -> Cow<'_, GameProfile> {
    match options.profile.as_ref() {
        Some(profile) if !profile.allowlist.is_empty() => Cow::Borrowed(profile),
        Some(profile) => {
            log::warn!(
                "Game profile {:?} has an empty allowlist. Using the built-in default.",
                profile.name
            );
            Cow::Owned(GameProfile::default())
        }
        None => Cow::Owned(GameProfile::default()),
    }
}
