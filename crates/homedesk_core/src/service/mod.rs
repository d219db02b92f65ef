//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate collection mutations and repository flushes.
//! - Keep front-ends decoupled from storage details.

pub mod library_service;
