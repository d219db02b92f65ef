//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define the whole-collection load/save contract.
//! - Isolate file format details from service orchestration.
//!
//! # Invariants
//! - Loading never fails on absent or malformed storage.
//! - Saving always rewrites the full collection.

pub mod book_repo;
