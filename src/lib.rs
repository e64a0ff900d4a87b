//! Rulebook Components - Component-List Extraction Engine
//!
//! Core library that turns raw (possibly OCR-degraded) rulebook text into a
//! canonical list of game components for the tutorial generation pipeline.
//! Pure and synchronous: no I/O on the extraction path, fully re-entrant.

pub mod extract;
pub mod profile;

#[cfg(test)]
mod tests;

pub use extract::{
    extract_components, extract_components_with_warnings, BreakdownMismatch, Component,
    ExtractOptions,
};
pub use profile::{GameProfile, ProfileError};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
