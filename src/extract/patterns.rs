//! Pattern Tables
//!
//! Regular expressions and phrase lists for classifying rulebook lines.
//! Rule tables are data: the classifier iterates them, it does not branch
//! on game specifics. Per-game vocabulary (allowlist, synonyms, anchors)
//! lives in `GameProfile`; the structural patterns here are game-agnostic.

use once_cell::sync::Lazy;
use regex::Regex;

// ============================================================================
// STRICT INVENTORY PATTERNS
// ============================================================================

/// Pattern 1: leading count, label, optional parenthetical breakdown.
/// "71 Exploration cards (65 Allies & 6 Monsters)"
pub static COUNT_NAME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^ (?P<count>\d{1,4})            # quantity
        \s+ (?P<name>[^(:]+?)           # label, up to any parenthetical
        \s* (?: \( (?P<note>[^)]*) \) )?
        \s* $
        ",
    )
    .expect("Invalid count-name pattern regex")
});

/// Pattern 2: bare label with a parenthetical detail.
/// "Pearls (supply)" — only accepted when the label ends in a recognized
/// component noun, which the classifier checks against the profile.
pub static NAME_PAREN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^ (?P<name>[A-Za-z][A-Za-z'\ ]{1,40}?)
        \s* \( (?P<note>[^)]*) \)
        \s* $
        ",
    )
    .expect("Invalid name-parenthetical pattern regex")
});

/// Pattern 3: label, separator, quantity.
/// "Game Board: 1" or "Cards - 50"
pub static NAME_SEP_COUNT_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^ (?P<name>[A-Za-z][A-Za-z'\ ]{1,40}?)
        \s* [:\-] \s*
        (?P<count>\d{1,4})
        \s* $
        ",
    )
    .expect("Invalid name-separator-count pattern regex")
});

// ============================================================================
// LENIENT PATTERNS
// ============================================================================

/// "Nx Label" multiplier syntax: "3x Meeple", "10 x Coins".
pub static MULTIPLIER_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^ (?P<count>\d{1,4})
        \s* [xX×] \s*
        (?P<name>[A-Za-z][A-Za-z'\ ]{0,40})
        $
        ",
    )
    .expect("Invalid multiplier pattern regex")
});

/// Bullet-prefixed item with optional count: "- 20 Tokens", "- Pearls".
/// The normalizer has already collapsed bullet glyphs to "-".
pub static BULLET_ITEM_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?x)
        ^ - \s*
        (?: (?P<count>\d{1,4}) \s+ )?
        (?P<name>[A-Za-z][A-Za-z'\ ]{0,40})
        $
        ",
    )
    .expect("Invalid bullet item pattern regex")
});

// ============================================================================
// EXCLUSION PATTERNS
// ============================================================================

/// Caption and diagram phrases that disqualify a line outright.
pub static CAPTION_PHRASES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "front of",
        "back of",
        "example",
        "icon",
        "illustration",
        "illustrated",
        "pictured",
        "shown above",
        "shown below",
    ]
});

/// Track-reward references: "on the 6th space".
pub static ORDINAL_SPACE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bon the \d+(?:st|nd|rd|th) space\b")
        .expect("Invalid ordinal space pattern regex")
});

/// Instructional verbs that mark gameplay prose rather than inventory.
/// Only excluding when the line reads as a sentence, so a component label
/// like "10 Draw cards" is not caught.
pub static INSTRUCTION_VERB_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(?i)\b(?:wins?|receives?|gains?|draws?|places?|moves?|advances?|pays?|discards?|shuffles?)\b",
    )
    .expect("Invalid instruction verb pattern regex")
});

// ============================================================================
// QUANTITY MARKERS AND BREAKDOWNS
// ============================================================================

/// Words marking an uncounted supply quantity. Only honored once a line has
/// already matched a structural inventory pattern; the same words in free
/// prose never reach the canonicalizer.
pub static SUPPLY_MARKERS: Lazy<Vec<&'static str>> =
    Lazy::new(|| vec!["supply", "unlimited", "bank", "reserve", "treasury"]);

/// "N of value V" breakdown entries; the leading figure is the piece count,
/// the trailing figure is a face value and must not be summed.
pub static VALUED_PART_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\b(?P<count>\d{1,4})\s+of\s+value\s+\d{1,4}\b")
        .expect("Invalid valued part pattern regex")
});

/// Standalone integers in a plain breakdown list: "65 Allies & 6 Monsters".
pub static PART_COUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b\d{1,4}\b").expect("Invalid part count pattern regex"));
