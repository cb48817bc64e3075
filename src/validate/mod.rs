//! Format guardians.
//!
//! One validator per artifact kind. Each walks its input to the end,
//! accumulating issues into a [`crate::report::ValidationReport`] - a bad
//! record never aborts the run.

pub mod audio;
pub mod profile;
pub mod scores;
pub mod text;
