//! Text Normalizer
//!
//! Best-effort cleanup of OCR artifacts and typography ahead of pattern
//! matching. Every step is idempotent, so running the normalizer twice is
//! the same as running it once. Failures to clean are absorbed silently;
//! downstream stages simply see the text as-is.

use once_cell::sync::Lazy;
use regex::Regex;

/// OCR digit/letter confusions seen in component vocabulary. A fixed,
/// explicit table, not general-purpose OCR correction.
static OCR_SUBSTITUTIONS: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    [
        (r"(?i)\bb0ard(s?)\b", "board${1}"),
        (r"(?i)\bt0ken(s?)\b", "token${1}"),
        (r"(?i)\bti1e(s?)\b", "tile${1}"),
        (r"(?i)\bcard5\b", "cards"),
        (r"(?i)\bcup5\b", "cups"),
        (r"(?i)\bpear1(s?)\b", "pearl${1}"),
        (r"(?i)\bl0rd(s?)\b", "lord${1}"),
    ]
    .iter()
    .map(|(pattern, replacement)| {
        (
            Regex::new(pattern).expect("Invalid OCR substitution regex"),
            *replacement,
        )
    })
    .collect()
});

/// Normalize raw rulebook text for pattern matching.
///
/// - Smart quotes become plain quotes.
/// - Bullet glyphs and dash variants collapse to a single hyphen.
/// - Known OCR digit/letter confusions are corrected.
/// - Whitespace runs collapse to single spaces, per line.
/// - Immediately repeated words are de-duplicated ("Plastic Plastic Cups").
///
/// An empty or whitespace-only input comes back (effectively) empty, which
/// signals "no text content" to the caller.
pub fn normalize(text: &str) -> String {
    let mut cleaned: String = text
        .chars()
        .map(|c| match c {
            '\u{2018}' | '\u{2019}' => '\'',
            '\u{201C}' | '\u{201D}' => '"',
            '\u{2022}' | '\u{00B7}' | '\u{2023}' | '\u{25AA}' | '\u{2013}' | '\u{2014}'
            | '\u{2212}' => '-',
            other => other,
        })
        .collect();

    for (regex, replacement) in OCR_SUBSTITUTIONS.iter() {
        cleaned = regex.replace_all(&cleaned, *replacement).into_owned();
    }

    cleaned
        .lines()
        .map(dedupe_repeated_words)
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collapse whitespace and drop immediately repeated words on one line.
/// Repetition is compared case-insensitively; the first occurrence wins.
fn dedupe_repeated_words(line: &str) -> String {
    let mut words: Vec<&str> = Vec::new();
    for word in line.split_whitespace() {
        let repeated = words
            .last()
            .map(|prev| prev.to_lowercase() == word.to_lowercase())
            .unwrap_or(false);
        if !repeated {
            words.push(word);
        }
    }
    words.join(" ")
}
