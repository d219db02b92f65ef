//! Book repository contracts and flat-file implementations.
//!
//! # Responsibility
//! - Load and store the whole book list as one JSON document.
//! - Keep file format details inside the persistence boundary.
//!
//! # Invariants
//! - Missing storage, or content that is not a JSON array of objects, loads
//!   as an empty list, never an error.
//! - Records with odd field types or missing keys are kept, not dropped.
//! - Every save is a full rewrite with 4-space pretty-printed JSON.
//! - Record order on disk is collection order.

use crate::model::book::BookRecord;
use log::{error, info, warn};
use serde::Serialize;
use std::cell::{Cell, RefCell};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::io::ErrorKind;
use std::path::PathBuf;

/// File name used when callers do not choose a storage path.
pub const DEFAULT_STORAGE_FILE: &str = "books_data.json";

const JSON_INDENT: &[u8] = b"    ";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for book persistence.
#[derive(Debug)]
pub enum RepoError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Serialize(serde_json::Error),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "book storage I/O failed at `{}`: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode book list: {err}"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for RepoError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Repository interface for whole-collection persistence.
pub trait BookRepository {
    fn load_books(&self) -> RepoResult<Vec<BookRecord>>;
    fn save_books(&self, books: &[BookRecord]) -> RepoResult<()>;
}

impl<R: BookRepository + ?Sized> BookRepository for &R {
    fn load_books(&self) -> RepoResult<Vec<BookRecord>> {
        (**self).load_books()
    }

    fn save_books(&self, books: &[BookRecord]) -> RepoResult<()> {
        (**self).save_books(books)
    }
}

/// JSON-file-backed book repository.
#[derive(Debug, Clone)]
pub struct JsonFileBookRepository {
    path: PathBuf,
}

impl JsonFileBookRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for JsonFileBookRepository {
    fn default() -> Self {
        Self::new(DEFAULT_STORAGE_FILE)
    }
}

impl BookRepository for JsonFileBookRepository {
    fn load_books(&self) -> RepoResult<Vec<BookRecord>> {
        let bytes = match std::fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=books_load module=repo status=ok source=missing path={}",
                    self.path.display()
                );
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=books_load module=repo status=error error_code=read_failed path={} error={}",
                    self.path.display(),
                    err
                );
                return Err(RepoError::Io {
                    path: self.path.clone(),
                    source: err,
                });
            }
        };

        match serde_json::from_slice::<Vec<BookRecord>>(&bytes) {
            Ok(books) => {
                info!(
                    "event=books_load module=repo status=ok source=file count={} path={}",
                    books.len(),
                    self.path.display()
                );
                Ok(books)
            }
            Err(err) => {
                warn!(
                    "event=books_load module=repo status=fallback error_code=malformed_storage path={} error={}",
                    self.path.display(),
                    err
                );
                Ok(Vec::new())
            }
        }
    }

    fn save_books(&self, books: &[BookRecord]) -> RepoResult<()> {
        let encoded = encode_books(books)?;
        std::fs::write(&self.path, encoded).map_err(|err| {
            error!(
                "event=books_save module=repo status=error error_code=write_failed path={} error={}",
                self.path.display(),
                err
            );
            RepoError::Io {
                path: self.path.clone(),
                source: err,
            }
        })?;

        info!(
            "event=books_save module=repo status=ok count={} path={}",
            books.len(),
            self.path.display()
        );
        Ok(())
    }
}

/// Encodes records as a pretty-printed JSON array with 4-space indentation.
pub fn encode_books(books: &[BookRecord]) -> RepoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(JSON_INDENT);
    let mut serializer = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    books.serialize(&mut serializer)?;
    Ok(buffer)
}

/// Process-local repository, mainly for tests and dry runs.
#[derive(Debug, Default)]
pub struct InMemoryBookRepository {
    books: RefCell<Vec<BookRecord>>,
    saves: Cell<usize>,
}

impl InMemoryBookRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_books(books: Vec<BookRecord>) -> Self {
        Self {
            books: RefCell::new(books),
            saves: Cell::new(0),
        }
    }

    /// Returns a copy of the last saved state.
    pub fn snapshot(&self) -> Vec<BookRecord> {
        self.books.borrow().clone()
    }

    /// Number of completed saves.
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }
}

impl BookRepository for InMemoryBookRepository {
    fn load_books(&self) -> RepoResult<Vec<BookRecord>> {
        Ok(self.snapshot())
    }

    fn save_books(&self, books: &[BookRecord]) -> RepoResult<()> {
        *self.books.borrow_mut() = books.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
