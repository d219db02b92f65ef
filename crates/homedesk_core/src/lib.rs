//! Core domain logic for homedesk.
//! This crate is the single source of truth for scoring and library invariants.

pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod strength;

pub use logging::{default_log_level, init_logging, logging_status, LogConfig, LoggingError};
pub use model::book::{BookRecord, BookUpdate, BookValidationError};
pub use model::collection::{BookCollection, ReadingProgress, SearchField};
pub use repo::book_repo::{
    BookRepository, InMemoryBookRepository, JsonFileBookRepository, RepoError, RepoResult,
    DEFAULT_STORAGE_FILE,
};
pub use service::library_service::{LibraryError, LibraryResult, LibraryService, NewBookRequest};
pub use strength::scorer::{
    evaluate as evaluate_password, score as score_password, RequirementChecks, StrengthCategory,
    StrengthReport,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
