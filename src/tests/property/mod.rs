//! Property-based tests for the extraction engine.

mod extraction_props;
