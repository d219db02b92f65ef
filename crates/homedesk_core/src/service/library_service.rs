//! Book library use-case service.
//!
//! # Responsibility
//! - Own the session's `BookCollection` and its repository.
//! - Flush the full collection after every successful mutation.
//!
//! # Invariants
//! - Reads never touch storage after `open`.
//! - A failed flush leaves the in-memory mutation applied and returns the error.
//! - Not-found is a semantic error, never a panic.

use crate::model::book::{BookRecord, BookUpdate, BookValidationError};
use crate::model::collection::{BookCollection, ReadingProgress, SearchField};
use crate::repo::book_repo::{BookRepository, RepoError};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type LibraryResult<T> = Result<T, LibraryError>;

/// Service error for library use-cases.
#[derive(Debug)]
pub enum LibraryError {
    Validation(BookValidationError),
    /// No record has the requested title.
    NotFound(String),
    Repo(RepoError),
}

impl Display for LibraryError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::NotFound(title) => write!(f, "book not found: `{title}`"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for LibraryError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::NotFound(_) => None,
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<BookValidationError> for LibraryError {
    fn from(value: BookValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<RepoError> for LibraryError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Request model for adding a book.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewBookRequest {
    pub title: String,
    pub author: String,
    pub year: String,
    pub genre: String,
    pub read: bool,
}

/// Use-case service over one loaded collection.
pub struct LibraryService<R: BookRepository> {
    repo: R,
    books: BookCollection,
}

impl<R: BookRepository> LibraryService<R> {
    /// Loads the collection from `repo`.
    ///
    /// Absent or malformed storage yields an empty collection.
    pub fn open(repo: R) -> LibraryResult<Self> {
        let books = BookCollection::from_records(repo.load_books()?);
        info!(
            "event=library_open module=service status=ok count={}",
            books.len()
        );
        Ok(Self { repo, books })
    }

    /// Appends a new record and persists. Duplicate titles are allowed.
    pub fn create(&mut self, request: NewBookRequest) -> LibraryResult<&BookRecord> {
        let book = BookRecord::new(
            request.title,
            request.author,
            request.year,
            request.genre,
            request.read,
        )?;
        let duplicate = self.books.get(&book.title).is_some();
        self.books.create(book);
        self.flush("create")?;

        if duplicate {
            info!("event=book_create module=service status=ok duplicate_title=true");
        }
        let index = self.books.len() - 1;
        Ok(&self.books.list_all()[index])
    }

    pub fn find(&self, query: &str, by: SearchField) -> Vec<&BookRecord> {
        self.books.find(query, by)
    }

    pub fn get(&self, title: &str) -> Option<&BookRecord> {
        self.books.get(title)
    }

    /// Patches the first record titled `title` and persists.
    pub fn update(&mut self, title: &str, update: &BookUpdate) -> LibraryResult<BookRecord> {
        if update.is_noop() {
            info!("event=book_update module=service status=noop");
        }
        let updated = self
            .books
            .update(title, update)
            .cloned()
            .ok_or_else(|| not_found("update", title))?;
        self.flush("update")?;
        Ok(updated)
    }

    /// Removes the first record titled `title`, persists and returns it.
    pub fn delete(&mut self, title: &str) -> LibraryResult<BookRecord> {
        let removed = self
            .books
            .delete(title)
            .ok_or_else(|| not_found("delete", title))?;
        self.flush("delete")?;
        Ok(removed)
    }

    pub fn list_all(&self) -> &[BookRecord] {
        self.books.list_all()
    }

    pub fn progress(&self) -> ReadingProgress {
        self.books.progress()
    }

    pub fn into_collection(self) -> BookCollection {
        self.books
    }

    fn flush(&self, operation: &str) -> LibraryResult<()> {
        self.repo.save_books(self.books.list_all())?;
        info!(
            "event=book_{operation} module=service status=ok count={}",
            self.books.len()
        );
        Ok(())
    }
}

fn not_found(operation: &str, title: &str) -> LibraryError {
    warn!("event=book_{operation} module=service status=error error_code=not_found");
    LibraryError::NotFound(title.to_string())
}
