//! Password strength scoring.
//!
//! # Responsibility
//! - Map a password to a three-rule score and a display category.
//!
//! # Invariants
//! - Scoring is total: every input, including the empty string, yields a report.
//! - Only length, digits and letters contribute; symbols never do.

pub mod scorer;
