//! Game Profile Configuration
//!
//! Per-game rule tables for the extraction engine: the canonical component
//! allowlist, raw-label synonyms, and the section anchors that bound the
//! contents listing. All tables are data, loadable from TOML, so new games
//! and languages are added without touching classifier logic.

use std::path::Path;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

// ============================================================================
// Errors
// ============================================================================

/// Profile loading errors
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("Failed to read profile file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Profile {0:?} has an empty allowlist")]
    EmptyAllowlist(String),
}

/// Result type alias for profile operations
pub type Result<T> = std::result::Result<T, ProfileError>;

// ============================================================================
// Profile
// ============================================================================

/// Rule tables describing one game's component vocabulary.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameProfile {
    /// Display name of the game this profile describes.
    pub name: String,
    /// Canonical component labels. Extraction output only ever contains these.
    pub allowlist: Vec<String>,
    /// Raw-label synonyms mapping to canonical allowlist entries.
    pub synonyms: IndexMap<String, String>,
    /// Case-insensitive headers that open the contents section.
    pub start_anchors: Vec<String>,
    /// Case-insensitive headers that close the contents section.
    pub end_anchors: Vec<String>,
}

impl Default for GameProfile {
    fn default() -> Self {
        Self {
            name: "default".to_string(),
            allowlist: [
                "Game board",
                "Exploration cards",
                "Lord cards",
                "Location tiles",
                "Monster tokens",
                "Key tokens",
                "Pearls",
                "Plastic cups",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            synonyms: [
                ("Lords", "Lord cards"),
                ("Locations", "Location tiles"),
                ("Board", "Game board"),
                ("Cups", "Plastic cups"),
                ("Keys", "Key tokens"),
                ("Monsters", "Monster tokens"),
                ("Exploration deck", "Exploration cards"),
            ]
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect(),
            start_anchors: [
                "Contents & Setup",
                "Contents and Setup",
                "Box Contents",
                "Game Components",
                "Components",
                "Contents",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
            end_anchors: [
                "Object of the Game",
                "Game Overview",
                "Setup ends",
                "Game Play",
                "Overview",
            ]
            .iter()
            .map(|s| s.to_string())
            .collect(),
        }
    }
}

impl GameProfile {
    /// Parse a profile from a TOML string.
    /// Fields left out of the file inherit the built-in defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let profile: GameProfile = toml::from_str(contents)?;
        if profile.allowlist.is_empty() {
            return Err(ProfileError::EmptyAllowlist(profile.name));
        }
        Ok(profile)
    }

    /// Read and parse a profile file.
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Load a profile from disk, falling back to the built-in default when
    /// the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        match Self::from_path(path) {
            Ok(profile) => {
                log::info!(
                    "Loaded game profile {:?} from {}",
                    profile.name,
                    path.display()
                );
                profile
            }
            Err(e) => {
                log::warn!(
                    "Failed to load game profile from {}: {}. Using the built-in default.",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Map a raw label to its canonical allowlist entry, if any.
    ///
    /// Matching is case-insensitive and tolerant of a trailing plural "s",
    /// first against the allowlist itself and then through the synonym
    /// table. Labels that resolve to nothing are the caller's cue to drop
    /// the candidate.
    pub fn resolve(&self, raw: &str) -> Option<&str> {
        let key = normalize_label(raw);
        if key.is_empty() {
            return None;
        }

        if let Some(entry) = self
            .allowlist
            .iter()
            .find(|entry| normalize_label(entry) == key)
        {
            return Some(entry.as_str());
        }

        for (synonym, target) in &self.synonyms {
            if normalize_label(synonym) == key {
                let target_key = normalize_label(target);
                // A synonym may only point at a canonical entry.
                return self
                    .allowlist
                    .iter()
                    .find(|entry| normalize_label(entry) == target_key)
                    .map(|entry| entry.as_str());
            }
        }

        None
    }

    /// Whether a word is the head noun of any allowlisted label or synonym
    /// (e.g. "cups" for "Plastic cups"). Used to qualify bare
    /// `Name (detail)` lines as inventory rather than prose.
    pub fn is_recognized_noun(&self, word: &str) -> bool {
        let key = normalize_label(word);
        if key.is_empty() {
            return false;
        }
        let head_matches = |entry: &str| {
            entry
                .split_whitespace()
                .last()
                .map(|head| normalize_label(head) == key)
                .unwrap_or(false)
        };
        self.allowlist
            .iter()
            .map(String::as_str)
            .chain(self.synonyms.keys().map(String::as_str))
            .any(head_matches)
    }
}

// ============================================================================
// Label normalization
// ============================================================================

/// Lowercase a label, strip edge punctuation, collapse whitespace, and
/// singularize the final word.
fn normalize_label(label: &str) -> String {
    let lower = label.to_lowercase();
    let trimmed = lower.trim_matches(|c: char| !c.is_alphanumeric());
    let mut words: Vec<&str> = trimmed.split_whitespace().collect();
    if let Some(last) = words.pop() {
        words.push(singularize(last));
    }
    words.join(" ")
}

/// Strip one trailing plural "s". Short words and "-ss" endings are kept
/// as-is ("dice", "glass" are not plurals of "dic", "glas").
fn singularize(word: &str) -> &str {
    if word.len() > 3 && word.ends_with('s') && !word.ends_with("ss") {
        &word[..word.len() - 1]
    } else {
        word
    }
}

// ============================================================================
// Tests
// ============================================================================
