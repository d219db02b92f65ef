use homedesk_core::{BookRecord, BookValidationError};

#[test]
fn serialization_uses_expected_wire_fields() {
    let book = BookRecord::new("Beloved", "Toni Morrison", "1987", "Novel", true).unwrap();

    let json = serde_json::to_value(&book).unwrap();
    assert_eq!(json["title"], "Beloved");
    assert_eq!(json["author"], "Toni Morrison");
    assert_eq!(json["year"], "1987");
    assert_eq!(json["genre"], "Novel");
    assert_eq!(json["read"], true);

    let decoded: BookRecord = serde_json::from_value(json).unwrap();
    assert_eq!(decoded, book);
}

#[test]
fn year_is_free_text() {
    let book = BookRecord::new("Beowulf", "Unknown", "c. 1000", "", false).unwrap();
    assert_eq!(book.year, "c. 1000");
}

#[test]
fn blank_title_is_rejected() {
    let err = BookRecord::new("", "Toni Morrison", "1987", "Novel", false).unwrap_err();
    assert_eq!(err, BookValidationError::BlankTitle);
}

#[test]
fn listing_line_shows_reading_status() {
    let unread = BookRecord::new("Beloved", "Toni Morrison", "1987", "Novel", false).unwrap();
    assert_eq!(
        unread.to_string(),
        "Beloved by Toni Morrison (1987) - Novel - Unread"
    );
}
