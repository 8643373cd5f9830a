//! Line classification: form chrome vs. item data.

use super::rules::{FieldExtractor, NsnExtractor};
use super::vocab::HEADER_KEYWORDS;

/// Whether a line is printed form chrome (titles, column headers, signature
/// blocks) rather than item data. Header lines are filtered out before
/// grouping and item parsing.
pub fn is_header_line(line: &str) -> bool {
    let upper = line.to_uppercase();
    HEADER_KEYWORDS.iter().any(|keyword| upper.contains(keyword))
}

/// Whether a line starts a new item record.
///
/// The only signals that survive OCR are a leading line-item number or an
/// NSN somewhere on the line; column positions do not.
pub fn starts_new_item(line: &str) -> bool {
    if line
        .trim_start()
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_digit())
    {
        return true;
    }

    NsnExtractor::new().extract(line).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_lines() {
        assert!(is_header_line("HAND RECEIPT"));
        assert!(is_header_line("Stock Number | Item Description | Qty"));
        assert!(is_header_line("SERIAL NUMBER"));
        assert!(is_header_line("Page 1 of 2"));
        assert!(is_header_line("SIGNATURE OF RECEIVING OFFICER"));
    }

    #[test]
    fn test_item_lines_are_not_headers() {
        assert!(!is_header_line("1 1005-01-584-1079 RIFLE M4 CARBINE EA 2"));
        assert!(!is_header_line("S/N: M4123456"));
    }

    #[test]
    fn test_starts_new_item_leading_digit() {
        assert!(starts_new_item("1 4710-00-000-1234 WIDGET"));
        assert!(starts_new_item("  2 WRENCH SET"));
        assert!(!starts_new_item("S/N: ABC123XYZ"));
        assert!(!starts_new_item("CONTINUATION NOTES"));
    }

    #[test]
    fn test_starts_new_item_nsn_anywhere() {
        assert!(starts_new_item("WIDGET 4710-00-000-1234"));
        assert!(starts_new_item("NSN 5180004482362 TOOL KIT"));
    }
}
