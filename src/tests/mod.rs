//! Internal test suites.

mod property;
