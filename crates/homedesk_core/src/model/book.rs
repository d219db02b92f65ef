//! Book record domain model.
//!
//! # Responsibility
//! - Define the canonical record persisted in the book store file.
//! - Provide blank-means-keep patch semantics for edits.
//!
//! # Invariants
//! - `title` is the case-insensitive lookup key; new records must not leave it blank.
//! - `year` is free text and is never parsed.
//! - Serialized keys are exactly `title, author, year, genre, read`.
//! - Decoding is lenient per field so one odd record never rejects a file.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Validation error for book records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookValidationError {
    /// Title is empty or whitespace-only.
    BlankTitle,
}

impl Display for BookValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BlankTitle => write!(f, "book title cannot be blank"),
        }
    }
}

impl Error for BookValidationError {}

/// One book entry in a collection.
///
/// Missing keys decode as `""`/`false`; scalar values of the wrong type are
/// converted instead of rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    #[serde(default, deserialize_with = "lenient_text")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub author: String,
    /// Publication year as typed by the user.
    #[serde(default, deserialize_with = "lenient_text")]
    pub year: String,
    #[serde(default, deserialize_with = "lenient_text")]
    pub genre: String,
    #[serde(default, deserialize_with = "lenient_flag")]
    pub read: bool,
}

impl BookRecord {
    /// Creates a record after checking the title invariant.
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        year: impl Into<String>,
        genre: impl Into<String>,
        read: bool,
    ) -> Result<Self, BookValidationError> {
        let record = Self {
            title: title.into(),
            author: author.into(),
            year: year.into(),
            genre: genre.into(),
            read,
        };
        record.validate()?;
        Ok(record)
    }

    /// Validates record-level invariants.
    pub fn validate(&self) -> Result<(), BookValidationError> {
        if is_blank(&self.title) {
            return Err(BookValidationError::BlankTitle);
        }
        Ok(())
    }

    /// Returns whether `title` equals this record's title, ignoring case.
    pub fn title_matches(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.to_lowercase()
    }

    /// Human-readable reading status.
    pub fn status_label(&self) -> &'static str {
        if self.read {
            "Read"
        } else {
            "Unread"
        }
    }

    /// Applies a patch, keeping existing values for blank fields.
    pub fn apply(&mut self, update: &BookUpdate) {
        keep_unless_blank(&mut self.title, update.title.as_deref());
        keep_unless_blank(&mut self.author, update.author.as_deref());
        keep_unless_blank(&mut self.year, update.year.as_deref());
        keep_unless_blank(&mut self.genre, update.genre.as_deref());
        if let Some(read) = update.read {
            self.read = read;
        }
    }
}

impl Display for BookRecord {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} by {} ({}) - {} - {}",
            self.title,
            self.author,
            self.year,
            self.genre,
            self.status_label()
        )
    }
}

/// Partial edit of a book record.
///
/// `None`, empty and whitespace-only strings all keep the current value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookUpdate {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    /// `None` keeps the current reading status.
    pub read: Option<bool>,
}

impl BookUpdate {
    /// Returns whether applying this patch would change nothing.
    pub fn is_noop(&self) -> bool {
        [&self.title, &self.author, &self.year, &self.genre]
            .iter()
            .all(|value| value.as_deref().map_or(true, is_blank))
            && self.read.is_none()
    }
}

fn lenient_text<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => text,
        Value::Null => String::new(),
        other => other.to_string(),
    })
}

fn lenient_flag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<bool, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Bool(flag) => flag,
        Value::Number(number) => number.as_f64().is_some_and(|value| value != 0.0),
        Value::String(text) => matches!(
            text.trim().to_ascii_lowercase().as_str(),
            "true" | "yes" | "y" | "1"
        ),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}

fn keep_unless_blank(slot: &mut String, replacement: Option<&str>) {
    if let Some(value) = replacement {
        if !is_blank(value) {
            *slot = value.to_string();
        }
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::{BookRecord, BookUpdate, BookValidationError};

    fn dune() -> BookRecord {
        BookRecord::new("Dune", "Frank Herbert", "1965", "Sci-Fi", false).unwrap()
    }

    #[test]
    fn new_rejects_blank_title() {
        let err = BookRecord::new("  ", "Someone", "", "", false).unwrap_err();
        assert_eq!(err, BookValidationError::BlankTitle);
    }

    #[test]
    fn title_matching_ignores_case() {
        let book = dune();
        assert!(book.title_matches("dUNE"));
        assert!(!book.title_matches("Dune Messiah"));
    }

    #[test]
    fn apply_keeps_blank_fields() {
        let mut book = dune();
        book.apply(&BookUpdate {
            author: Some(String::new()),
            year: Some("   ".to_string()),
            genre: Some("Science Fiction".to_string()),
            ..BookUpdate::default()
        });

        assert_eq!(book.author, "Frank Herbert");
        assert_eq!(book.year, "1965");
        assert_eq!(book.genre, "Science Fiction");
        assert!(!book.read);
    }

    #[test]
    fn apply_sets_read_flag_only_when_present() {
        let mut book = dune();
        book.apply(&BookUpdate {
            read: Some(true),
            ..BookUpdate::default()
        });
        assert!(book.read);

        book.apply(&BookUpdate::default());
        assert!(book.read);
    }

    #[test]
    fn noop_detection_treats_blank_strings_as_absent() {
        let blank = BookUpdate {
            title: Some(" ".to_string()),
            ..BookUpdate::default()
        };
        assert!(blank.is_noop());

        let read_only = BookUpdate {
            read: Some(false),
            ..BookUpdate::default()
        };
        assert!(!read_only.is_noop());
    }

    #[test]
    fn decoding_tolerates_numeric_year_and_missing_keys() {
        let book: BookRecord = serde_json::from_value(serde_json::json!({
            "title": "Dune",
            "year": 1965,
            "read": null
        }))
        .unwrap();

        assert_eq!(book.title, "Dune");
        assert_eq!(book.year, "1965");
        assert_eq!(book.author, "");
        assert_eq!(book.genre, "");
        assert!(!book.read);
    }

    #[test]
    fn decoding_reads_string_and_numeric_flags() {
        let yes: BookRecord =
            serde_json::from_value(serde_json::json!({ "title": "A", "read": "Yes" })).unwrap();
        let one: BookRecord =
            serde_json::from_value(serde_json::json!({ "title": "B", "read": 1 })).unwrap();
        let no: BookRecord =
            serde_json::from_value(serde_json::json!({ "title": "C", "read": "no" })).unwrap();

        assert!(yes.read);
        assert!(one.read);
        assert!(!no.read);
    }

    #[test]
    fn display_matches_listing_line() {
        assert_eq!(
            dune().to_string(),
            "Dune by Frank Herbert (1965) - Sci-Fi - Unread"
        );
    }
}
