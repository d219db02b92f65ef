//! Ordered in-memory book collection.
//!
//! # Responsibility
//! - Own the ordered list of records for one session.
//! - Provide linear-scan create/find/update/delete and progress stats.
//!
//! # Invariants
//! - Insertion order is preserved by every operation.
//! - Titles are not unique; title-keyed operations act on the first match.
//! - This type performs no I/O; persistence lives in the service layer.

use super::book::{BookRecord, BookUpdate};
use std::fmt::{Display, Formatter};

/// Field(s) a search term is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchField {
    Title,
    Author,
    /// Title or author.
    #[default]
    Any,
}

/// Reading statistics for a collection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingProgress {
    pub total: usize,
    pub read: usize,
    /// `read / total * 100`, or `0.0` for an empty collection.
    pub percentage: f64,
}

impl ReadingProgress {
    fn from_counts(total: usize, read: usize) -> Self {
        let percentage = if total == 0 {
            0.0
        } else {
            read as f64 / total as f64 * 100.0
        };
        Self {
            total,
            read,
            percentage,
        }
    }

    /// Completion as a `0.0..=1.0` fraction.
    pub fn fraction(&self) -> f64 {
        self.percentage / 100.0
    }
}

impl Display for ReadingProgress {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.percentage)
    }
}

/// Ordered, owned sequence of book records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BookCollection {
    books: Vec<BookRecord>,
}

impl BookCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(books: Vec<BookRecord>) -> Self {
        Self { books }
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Returns every record in insertion order.
    pub fn list_all(&self) -> &[BookRecord] {
        &self.books
    }

    /// Appends a record. Duplicate titles are accepted.
    pub fn create(&mut self, book: BookRecord) {
        self.books.push(book);
    }

    /// Returns the first record whose title equals `title`, ignoring case.
    pub fn get(&self, title: &str) -> Option<&BookRecord> {
        self.books.iter().find(|book| book.title_matches(title))
    }

    /// Case-insensitive substring search, in collection order.
    ///
    /// An empty query matches every record.
    pub fn find(&self, query: &str, by: SearchField) -> Vec<&BookRecord> {
        let needle = query.to_lowercase();
        self.books
            .iter()
            .filter(|book| {
                let in_title = || book.title.to_lowercase().contains(&needle);
                let in_author = || book.author.to_lowercase().contains(&needle);
                match by {
                    SearchField::Title => in_title(),
                    SearchField::Author => in_author(),
                    SearchField::Any => in_title() || in_author(),
                }
            })
            .collect()
    }

    /// Patches the first title match and returns the updated record.
    ///
    /// Returns `None` when no title matches.
    pub fn update(&mut self, title: &str, update: &BookUpdate) -> Option<&BookRecord> {
        let book = self
            .books
            .iter_mut()
            .find(|book| book.title_matches(title))?;
        book.apply(update);
        Some(&*book)
    }

    /// Removes and returns the first title match.
    pub fn delete(&mut self, title: &str) -> Option<BookRecord> {
        let index = self
            .books
            .iter()
            .position(|book| book.title_matches(title))?;
        Some(self.books.remove(index))
    }

    pub fn progress(&self) -> ReadingProgress {
        let read = self.books.iter().filter(|book| book.read).count();
        ReadingProgress::from_counts(self.books.len(), read)
    }
}

#[cfg(test)]
mod tests {
    use super::{BookCollection, SearchField};
    use crate::model::book::{BookRecord, BookUpdate};

    fn book(title: &str, author: &str, read: bool) -> BookRecord {
        BookRecord::new(title, author, "2000", "Fiction", read).unwrap()
    }

    fn sample() -> BookCollection {
        BookCollection::from_records(vec![
            book("The Hobbit", "J. R. R. Tolkien", true),
            book("Hyperion", "Dan Simmons", false),
            book("Tolkien: A Biography", "Humphrey Carpenter", false),
        ])
    }

    #[test]
    fn find_by_title_author_and_any() {
        let books = sample();

        let by_title = books.find("TOLKIEN", SearchField::Title);
        assert_eq!(by_title.len(), 1);
        assert_eq!(by_title[0].title, "Tolkien: A Biography");

        let by_author = books.find("tolkien", SearchField::Author);
        assert_eq!(by_author.len(), 1);
        assert_eq!(by_author[0].title, "The Hobbit");

        let any: Vec<_> = books
            .find("tolkien", SearchField::Any)
            .into_iter()
            .map(|book| book.title.as_str())
            .collect();
        assert_eq!(any, vec!["The Hobbit", "Tolkien: A Biography"]);
    }

    #[test]
    fn find_without_match_is_empty() {
        assert!(sample().find("dickens", SearchField::Any).is_empty());
    }

    #[test]
    fn empty_query_matches_everything() {
        assert_eq!(sample().find("", SearchField::Title).len(), 3);
    }

    #[test]
    fn duplicate_titles_are_kept_and_first_match_wins() {
        let mut books = BookCollection::new();
        books.create(book("Emma", "Jane Austen", false));
        books.create(book("emma", "Someone Else", false));
        assert_eq!(books.len(), 2);

        let updated = books
            .update(
                "EMMA",
                &BookUpdate {
                    read: Some(true),
                    ..BookUpdate::default()
                },
            )
            .unwrap();
        assert_eq!(updated.author, "Jane Austen");
        assert!(!books.list_all()[1].read);

        let removed = books.delete("Emma").unwrap();
        assert_eq!(removed.author, "Jane Austen");
        assert_eq!(books.list_all()[0].author, "Someone Else");
    }

    #[test]
    fn update_and_delete_report_missing_titles() {
        let mut books = sample();
        assert!(books.update("Missing", &BookUpdate::default()).is_none());
        assert!(books.delete("Missing").is_none());
        assert_eq!(books.len(), 3);
    }

    #[test]
    fn delete_preserves_order_of_remaining_records() {
        let mut books = sample();
        books.delete("hyperion").unwrap();
        let titles: Vec<_> = books
            .list_all()
            .iter()
            .map(|book| book.title.as_str())
            .collect();
        assert_eq!(titles, vec!["The Hobbit", "Tolkien: A Biography"]);
    }

    #[test]
    fn progress_counts_read_books() {
        let progress = sample().progress();
        assert_eq!(progress.total, 3);
        assert_eq!(progress.read, 1);
        assert!((progress.percentage - 100.0 / 3.0).abs() < 1e-9);
        assert_eq!(progress.to_string(), "33.33%");
    }

    #[test]
    fn progress_on_empty_collection_is_zero() {
        let progress = BookCollection::new().progress();
        assert_eq!(progress.total, 0);
        assert_eq!(progress.read, 0);
        assert_eq!(progress.percentage, 0.0);
        assert_eq!(progress.fraction(), 0.0);
    }
}
