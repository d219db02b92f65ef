//! Plain-text views for terminal output.

use homedesk_core::{BookRecord, ReadingProgress, StrengthReport};

const BAR_WIDTH: usize = 10;

pub const EMPTY_COLLECTION: &str = "Your collection is empty.";
pub const NO_MATCHES: &str = "No matching books found.";
pub const NOT_FOUND: &str = "Book not found!";
pub const PASSWORD_TIP: &str =
    "Tip: Try adding more characters, numbers, or letters to make your password stronger!";

/// "View All Books" screen.
pub fn book_list(books: &[BookRecord]) -> String {
    if books.is_empty() {
        return EMPTY_COLLECTION.to_string();
    }
    let mut out = String::from("Your Book Collection:\n");
    for (index, book) in books.iter().enumerate() {
        out.push_str(&format!("{}. {book}\n", index + 1));
    }
    out
}

pub fn search_results(books: &[&BookRecord]) -> String {
    if books.is_empty() {
        return NO_MATCHES.to_string();
    }
    let mut out = String::from("Matching Books:\n");
    for book in books {
        out.push_str(&format!("{book}\n"));
    }
    out
}

pub fn reading_progress(progress: &ReadingProgress) -> String {
    format!(
        "Total Books: {}\nBooks Read: {}\n{}\nCompletion Rate: {progress}",
        progress.total,
        progress.read,
        bar(progress.fraction())
    )
}

pub fn strength(report: &StrengthReport) -> String {
    let mut out = format!(
        "Password Strength: {} ({})\n{}\nRequirements:\n",
        report.category,
        report.category.color(),
        bar(report.progress())
    );
    for (label, passed) in report.checks.items() {
        let mark = if passed { "✅" } else { "❌" };
        out.push_str(&format!("- {mark} {label}\n"));
    }
    if report.needs_tip() {
        out.push_str(PASSWORD_TIP);
        out.push('\n');
    }
    out
}

/// Text progress bar for a `0.0..=1.0` fraction.
fn bar(fraction: f64) -> String {
    let filled = (fraction.clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), ".".repeat(BAR_WIDTH - filled))
}

#[cfg(test)]
mod tests {
    use super::{bar, book_list, reading_progress, search_results, strength};
    use homedesk_core::{evaluate_password, BookCollection, BookRecord};

    fn hobbit() -> BookRecord {
        BookRecord::new("The Hobbit", "J. R. R. Tolkien", "1937", "Fantasy", true).unwrap()
    }

    #[test]
    fn empty_collection_has_its_own_message() {
        assert_eq!(book_list(&[]), "Your collection is empty.");
    }

    #[test]
    fn book_list_is_numbered() {
        let text = book_list(&[hobbit()]);
        assert!(text.contains("1. The Hobbit by J. R. R. Tolkien (1937) - Fantasy - Read"));
    }

    #[test]
    fn search_without_hits_says_so() {
        assert_eq!(search_results(&[]), "No matching books found.");
        let book = hobbit();
        assert!(search_results(&[&book]).starts_with("Matching Books:\n"));
    }

    #[test]
    fn progress_view_guards_empty_collection() {
        let text = reading_progress(&BookCollection::new().progress());
        assert!(text.contains("Total Books: 0"));
        assert!(text.contains("[..........]"));
        assert!(text.ends_with("Completion Rate: 0.00%"));
    }

    #[test]
    fn strength_view_lists_requirements_and_tip() {
        let text = strength(&evaluate_password("12345"));
        assert!(text.starts_with("Password Strength: Weak (orange)"));
        assert!(text.contains("- ❌ At least 6 characters"));
        assert!(text.contains("- ✅ Contains a number"));
        assert!(text.contains("Tip:"));

        let strong = strength(&evaluate_password("abc123"));
        assert!(strong.contains("[##########]"));
        assert!(!strong.contains("Tip:"));
    }

    #[test]
    fn bar_rounds_to_cells() {
        assert_eq!(bar(0.5), "[#####.....]");
        assert_eq!(bar(2.0 / 3.0), "[#######...]");
    }
}
