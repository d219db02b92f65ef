//! Domain model for the book collection.
//!
//! # Responsibility
//! - Define the record shape shared by storage and presentation.
//! - Keep collection operations free of I/O so they stay testable.
//!
//! # Invariants
//! - Records are matched by title, case-insensitively, first match wins.
//! - Collection order is insertion order.

pub mod book;
pub mod collection;
